use uuid::Uuid;

use kernel::interface::query::BookQuery;
use kernel::interface::update::BookModifier;
use kernel::prelude::entity::{Author, Book, BookId, BookTitle, Genre};
use kernel::KernelError;

use crate::database::memory::MemoryConnection;

pub struct InMemoryBookRepository;

#[async_trait::async_trait]
impl BookQuery for InMemoryBookRepository {
    type Connection = MemoryConnection;
    async fn find_by_id(
        &self,
        con: &mut MemoryConnection,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        let books = con.store.books.read().await;
        Ok(books.iter().find(|book| book.id() == id).cloned())
    }

    async fn find_all(
        &self,
        con: &mut MemoryConnection,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        Ok(con.store.books.read().await.clone())
    }

    async fn exists(
        &self,
        con: &mut MemoryConnection,
        id: &BookId,
    ) -> error_stack::Result<bool, KernelError> {
        let books = con.store.books.read().await;
        Ok(books.iter().any(|book| book.id() == id))
    }
}

#[async_trait::async_trait]
impl BookModifier for InMemoryBookRepository {
    type Connection = MemoryConnection;
    async fn create(
        &self,
        con: &mut MemoryConnection,
        title: &BookTitle,
        author: &Author,
        genres: &[Genre],
    ) -> error_stack::Result<BookId, KernelError> {
        let id = BookId::new(Uuid::new_v4());
        let book = Book::new(id.clone(), title.clone(), author.clone(), genres.to_vec());
        con.store.books.write().await.push(book);
        Ok(id)
    }

    async fn update(
        &self,
        con: &mut MemoryConnection,
        book: &Book,
    ) -> error_stack::Result<bool, KernelError> {
        let mut books = con.store.books.write().await;
        let Some(stored) = books.iter_mut().find(|stored| stored.id() == book.id()) else {
            return Ok(false);
        };
        *stored = book.clone();
        Ok(true)
    }

    async fn delete(
        &self,
        con: &mut MemoryConnection,
        book_id: &BookId,
    ) -> error_stack::Result<(), KernelError> {
        con.store
            .books
            .write()
            .await
            .retain(|book| book.id() != book_id);
        Ok(())
    }
}
