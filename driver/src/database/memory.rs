use std::sync::Arc;

use tokio::sync::RwLock;

use kernel::interface::database::{Connection, DatabaseConnection};
use kernel::interface::query::{
    DependOnAuthorQuery, DependOnBookQuery, DependOnCommentQuery, DependOnGenreQuery,
};
use kernel::interface::update::{
    DependOnAuthorModifier, DependOnBookModifier, DependOnCommentModifier, DependOnGenreModifier,
};
use kernel::prelude::entity::{Author, Book, Comment, Genre};
use kernel::KernelError;

pub use self::{author::*, book::*, comment::*, genre::*};

mod author;
mod book;
mod comment;
mod genre;

/// Collections kept in insertion order. Data is lost when the process exits.
#[derive(Default)]
pub(in crate::database) struct MemoryStore {
    authors: RwLock<Vec<Author>>,
    genres: RwLock<Vec<Genre>>,
    books: RwLock<Vec<Book>>,
    comments: RwLock<Vec<Comment>>,
}

#[derive(Clone, Default)]
pub struct InMemoryDatabase {
    store: Arc<MemoryStore>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

pub struct MemoryConnection {
    store: Arc<MemoryStore>,
}

impl Connection for MemoryConnection {}

#[async_trait::async_trait]
impl DatabaseConnection for InMemoryDatabase {
    type Connection = MemoryConnection;
    async fn acquire(&self) -> error_stack::Result<MemoryConnection, KernelError> {
        Ok(MemoryConnection {
            store: Arc::clone(&self.store),
        })
    }
}

impl DependOnAuthorQuery for InMemoryDatabase {
    type AuthorQuery = InMemoryAuthorRepository;
    fn author_query(&self) -> &Self::AuthorQuery {
        &InMemoryAuthorRepository
    }
}

impl DependOnAuthorModifier for InMemoryDatabase {
    type AuthorModifier = InMemoryAuthorRepository;
    fn author_modifier(&self) -> &Self::AuthorModifier {
        &InMemoryAuthorRepository
    }
}

impl DependOnGenreQuery for InMemoryDatabase {
    type GenreQuery = InMemoryGenreRepository;
    fn genre_query(&self) -> &Self::GenreQuery {
        &InMemoryGenreRepository
    }
}

impl DependOnGenreModifier for InMemoryDatabase {
    type GenreModifier = InMemoryGenreRepository;
    fn genre_modifier(&self) -> &Self::GenreModifier {
        &InMemoryGenreRepository
    }
}

impl DependOnBookQuery for InMemoryDatabase {
    type BookQuery = InMemoryBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &InMemoryBookRepository
    }
}

impl DependOnBookModifier for InMemoryDatabase {
    type BookModifier = InMemoryBookRepository;
    fn book_modifier(&self) -> &Self::BookModifier {
        &InMemoryBookRepository
    }
}

impl DependOnCommentQuery for InMemoryDatabase {
    type CommentQuery = InMemoryCommentRepository;
    fn comment_query(&self) -> &Self::CommentQuery {
        &InMemoryCommentRepository
    }
}

impl DependOnCommentModifier for InMemoryDatabase {
    type CommentModifier = InMemoryCommentRepository;
    fn comment_modifier(&self) -> &Self::CommentModifier {
        &InMemoryCommentRepository
    }
}
