use crate::database::{Connection, DatabaseConnection, DependOnDatabaseConnection};
use crate::entity::{Genre, GenreId, GenreName};
use crate::KernelError;

#[async_trait::async_trait]
pub trait GenreModifier: 'static + Sync + Send {
    type Connection: Connection;
    async fn create(
        &self,
        con: &mut Self::Connection,
        name: &GenreName,
    ) -> error_stack::Result<GenreId, KernelError>;
    async fn update(
        &self,
        con: &mut Self::Connection,
        genre: &Genre,
    ) -> error_stack::Result<bool, KernelError>;
    async fn delete(
        &self,
        con: &mut Self::Connection,
        genre_id: &GenreId,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnGenreModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type GenreModifier: GenreModifier<
        Connection = <Self::DatabaseConnection as DatabaseConnection>::Connection,
    >;
    fn genre_modifier(&self) -> &Self::GenreModifier;
}
