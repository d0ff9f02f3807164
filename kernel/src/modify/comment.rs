use crate::database::{Connection, DatabaseConnection, DependOnDatabaseConnection};
use crate::entity::{BookId, Comment, CommentId, CommentText};
use crate::KernelError;

#[async_trait::async_trait]
pub trait CommentModifier: 'static + Sync + Send {
    type Connection: Connection;
    async fn create(
        &self,
        con: &mut Self::Connection,
        text: &CommentText,
        book_id: &BookId,
    ) -> error_stack::Result<CommentId, KernelError>;
    async fn update(
        &self,
        con: &mut Self::Connection,
        comment: &Comment,
    ) -> error_stack::Result<bool, KernelError>;
    async fn delete(
        &self,
        con: &mut Self::Connection,
        comment_id: &CommentId,
    ) -> error_stack::Result<(), KernelError>;
    /// Returns how many comments were removed.
    async fn delete_by_book_id(
        &self,
        con: &mut Self::Connection,
        book_id: &BookId,
    ) -> error_stack::Result<u64, KernelError>;
}

pub trait DependOnCommentModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type CommentModifier: CommentModifier<
        Connection = <Self::DatabaseConnection as DatabaseConnection>::Connection,
    >;
    fn comment_modifier(&self) -> &Self::CommentModifier;
}
