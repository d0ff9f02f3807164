use crate::database::{Connection, DatabaseConnection, DependOnDatabaseConnection};
use crate::entity::{Author, AuthorId, AuthorName};
use crate::KernelError;

#[async_trait::async_trait]
pub trait AuthorModifier: 'static + Sync + Send {
    type Connection: Connection;
    async fn create(
        &self,
        con: &mut Self::Connection,
        name: &AuthorName,
    ) -> error_stack::Result<AuthorId, KernelError>;
    async fn update(
        &self,
        con: &mut Self::Connection,
        author: &Author,
    ) -> error_stack::Result<bool, KernelError>;
    async fn delete(
        &self,
        con: &mut Self::Connection,
        author_id: &AuthorId,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnAuthorModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type AuthorModifier: AuthorModifier<
        Connection = <Self::DatabaseConnection as DatabaseConnection>::Connection,
    >;
    fn author_modifier(&self) -> &Self::AuthorModifier;
}
