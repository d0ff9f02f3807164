use crate::controller::{Intake, TryIntake};
use crate::request::{require_id, require_text};
use application::transfer::{CreateCommentDto, DeleteCommentDto, GetCommentDto, UpdateCommentDto};
use error_stack::Report;
use kernel::prelude::entity::{BookId, CommentId};
use kernel::KernelError;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    text: String,
    book_id: Option<Uuid>,
}

/// `bookId` is accepted but ignored; comments stay on their book.
#[derive(Debug, Deserialize)]
pub struct UpdateCommentRequest {
    id: Option<Uuid>,
    text: String,
}

#[derive(Debug)]
pub struct GetCommentRequest {
    id: Uuid,
}

impl GetCommentRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct DeleteCommentRequest {
    id: Uuid,
}

impl DeleteCommentRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

pub struct CommentTransformer;

impl TryIntake<CreateCommentRequest> for CommentTransformer {
    type To = CreateCommentDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: CreateCommentRequest) -> Result<Self::To, Self::Error> {
        Ok(CreateCommentDto {
            text: require_text("text", input.text)?,
            book_id: BookId::new(require_id("bookId", input.book_id)?),
        })
    }
}

impl TryIntake<UpdateCommentRequest> for CommentTransformer {
    type To = UpdateCommentDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: UpdateCommentRequest) -> Result<Self::To, Self::Error> {
        Ok(UpdateCommentDto {
            id: CommentId::new(require_id("id", input.id)?),
            text: require_text("text", input.text)?,
        })
    }
}

impl Intake<GetCommentRequest> for CommentTransformer {
    type To = GetCommentDto;
    fn emit(&self, input: GetCommentRequest) -> Self::To {
        GetCommentDto {
            id: CommentId::new(input.id),
        }
    }
}

impl Intake<DeleteCommentRequest> for CommentTransformer {
    type To = DeleteCommentDto;
    fn emit(&self, input: DeleteCommentRequest) -> Self::To {
        DeleteCommentDto {
            id: CommentId::new(input.id),
        }
    }
}
