use crate::database::{Connection, DatabaseConnection, DependOnDatabaseConnection};
use crate::entity::{Author, AuthorId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait AuthorQuery: 'static + Sync + Send {
    type Connection: Connection;
    async fn find_by_id(
        &self,
        con: &mut Self::Connection,
        id: &AuthorId,
    ) -> error_stack::Result<Option<Author>, KernelError>;
    async fn find_all(&self, con: &mut Self::Connection)
        -> error_stack::Result<Vec<Author>, KernelError>;
    /// Ids without a matching record are skipped, so the result may be shorter than `ids`.
    async fn find_by_ids(
        &self,
        con: &mut Self::Connection,
        ids: &[AuthorId],
    ) -> error_stack::Result<Vec<Author>, KernelError>;
    async fn exists(
        &self,
        con: &mut Self::Connection,
        id: &AuthorId,
    ) -> error_stack::Result<bool, KernelError>;
}

pub trait DependOnAuthorQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type AuthorQuery: AuthorQuery<
        Connection = <Self::DatabaseConnection as DatabaseConnection>::Connection,
    >;
    fn author_query(&self) -> &Self::AuthorQuery;
}
