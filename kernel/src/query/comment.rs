use crate::database::{Connection, DatabaseConnection, DependOnDatabaseConnection};
use crate::entity::{BookId, Comment, CommentId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait CommentQuery: 'static + Sync + Send {
    type Connection: Connection;
    async fn find_by_id(
        &self,
        con: &mut Self::Connection,
        id: &CommentId,
    ) -> error_stack::Result<Option<Comment>, KernelError>;
    async fn find_all(
        &self,
        con: &mut Self::Connection,
    ) -> error_stack::Result<Vec<Comment>, KernelError>;
    /// Comments of one book in insertion order.
    async fn find_by_book_id(
        &self,
        con: &mut Self::Connection,
        book_id: &BookId,
    ) -> error_stack::Result<Vec<Comment>, KernelError>;
    async fn exists(
        &self,
        con: &mut Self::Connection,
        id: &CommentId,
    ) -> error_stack::Result<bool, KernelError>;
}

pub trait DependOnCommentQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type CommentQuery: CommentQuery<
        Connection = <Self::DatabaseConnection as DatabaseConnection>::Connection,
    >;
    fn comment_query(&self) -> &Self::CommentQuery;
}
