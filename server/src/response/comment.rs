use crate::controller::Exhaust;
use axum::response::{IntoResponse, Response};
use axum::Json;
use kernel::prelude::entity::{BookId, Comment, CommentId, CommentText, DestructComment};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    id: CommentId,
    text: CommentText,
    book_id: BookId,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        let DestructComment { id, text, book_id } = comment.into_destruct();
        Self { id, text, book_id }
    }
}

impl IntoResponse for CommentResponse {
    fn into_response(self) -> Response {
        (axum::http::StatusCode::OK, Json(self)).into_response()
    }
}

pub struct CommentDeletedResponse(Comment);

impl IntoResponse for CommentDeletedResponse {
    fn into_response(self) -> Response {
        format!("Comment: {} deleted!", self.0.text().as_ref()).into_response()
    }
}

pub struct CommentPresenter;

impl Exhaust<Comment> for CommentPresenter {
    type To = CommentResponse;
    fn emit(&self, input: Comment) -> Self::To {
        CommentResponse::from(input)
    }
}

impl Exhaust<Option<Comment>> for CommentPresenter {
    type To = Option<CommentResponse>;
    fn emit(&self, input: Option<Comment>) -> Self::To {
        input.map(CommentResponse::from)
    }
}

impl Exhaust<Vec<Comment>> for CommentPresenter {
    type To = Json<Vec<CommentResponse>>;
    fn emit(&self, input: Vec<Comment>) -> Self::To {
        Json(input.into_iter().map(CommentResponse::from).collect())
    }
}

impl Exhaust<Option<Vec<Comment>>> for CommentPresenter {
    type To = Option<Json<Vec<CommentResponse>>>;
    fn emit(&self, input: Option<Vec<Comment>>) -> Self::To {
        input.map(|comments| Json(comments.into_iter().map(CommentResponse::from).collect()))
    }
}

pub struct CommentDeletionPresenter;

impl Exhaust<Option<Comment>> for CommentDeletionPresenter {
    type To = Option<CommentDeletedResponse>;
    fn emit(&self, input: Option<Comment>) -> Self::To {
        input.map(CommentDeletedResponse)
    }
}
