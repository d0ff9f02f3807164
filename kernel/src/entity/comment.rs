mod id;
mod text;

pub use self::{id::*, text::*};
use crate::entity::BookId;
use destructure::Destructure;
use serde::{Deserialize, Serialize};
use vodca::References;

/// A comment is stored on its own and points at its book by id only.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure)]
pub struct Comment {
    id: CommentId,
    text: CommentText,
    book_id: BookId,
}

impl Comment {
    pub fn new(id: CommentId, text: CommentText, book_id: BookId) -> Self {
        Self { id, text, book_id }
    }
}
