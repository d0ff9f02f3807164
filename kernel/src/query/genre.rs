use crate::database::{Connection, DatabaseConnection, DependOnDatabaseConnection};
use crate::entity::{Genre, GenreId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait GenreQuery: 'static + Sync + Send {
    type Connection: Connection;
    async fn find_by_id(
        &self,
        con: &mut Self::Connection,
        id: &GenreId,
    ) -> error_stack::Result<Option<Genre>, KernelError>;
    async fn find_all(&self, con: &mut Self::Connection)
        -> error_stack::Result<Vec<Genre>, KernelError>;
    /// Ids without a matching record are skipped, so the result may be shorter than `ids`.
    async fn find_by_ids(
        &self,
        con: &mut Self::Connection,
        ids: &[GenreId],
    ) -> error_stack::Result<Vec<Genre>, KernelError>;
    async fn exists(
        &self,
        con: &mut Self::Connection,
        id: &GenreId,
    ) -> error_stack::Result<bool, KernelError>;
}

pub trait DependOnGenreQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type GenreQuery: GenreQuery<
        Connection = <Self::DatabaseConnection as DatabaseConnection>::Connection,
    >;
    fn genre_query(&self) -> &Self::GenreQuery;
}
