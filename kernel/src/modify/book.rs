use crate::database::{Connection, DatabaseConnection, DependOnDatabaseConnection};
use crate::entity::{Author, Book, BookId, BookTitle, Genre};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookModifier: 'static + Sync + Send {
    type Connection: Connection;
    /// Stores a new book document and returns the id assigned by the store.
    async fn create(
        &self,
        con: &mut Self::Connection,
        title: &BookTitle,
        author: &Author,
        genres: &[Genre],
    ) -> error_stack::Result<BookId, KernelError>;
    /// `false` when no stored book has the id; nothing is written then.
    async fn update(
        &self,
        con: &mut Self::Connection,
        book: &Book,
    ) -> error_stack::Result<bool, KernelError>;
    async fn delete(
        &self,
        con: &mut Self::Connection,
        book_id: &BookId,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnBookModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type BookModifier: BookModifier<
        Connection = <Self::DatabaseConnection as DatabaseConnection>::Connection,
    >;
    fn book_modifier(&self) -> &Self::BookModifier;
}
