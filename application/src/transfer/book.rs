use error_stack::Report;

use kernel::prelude::entity::{AuthorId, Book, BookId, GenreId};
use kernel::KernelError;

pub struct GetBookDto {
    pub id: BookId,
}

pub struct CreateBookDto {
    pub title: String,
    pub author_id: AuthorId,
    pub genre_ids: Vec<GenreId>,
}

pub struct UpdateBookDto {
    pub id: BookId,
    pub title: String,
    pub author_id: AuthorId,
    pub genre_ids: Vec<GenreId>,
}

pub struct DeleteBookDto {
    pub id: BookId,
}

/// Outcome of removing a book together with its comments.
///
/// The two removals are separate store operations, so the book can be gone
/// while removing its comments failed.
#[derive(Debug)]
pub enum BookDeletion {
    Deleted {
        book: Book,
        comments: u64,
    },
    CommentsOrphaned {
        book: Book,
        error: Report<KernelError>,
    },
}

impl BookDeletion {
    pub fn book(&self) -> &Book {
        match self {
            BookDeletion::Deleted { book, .. } => book,
            BookDeletion::CommentsOrphaned { book, .. } => book,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, BookDeletion::Deleted { .. })
    }
}
