use crate::controller::Exhaust;
use axum::response::{IntoResponse, Response};
use axum::Json;
use kernel::prelude::entity::{Author, AuthorId, AuthorName, DestructAuthor};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AuthorResponse {
    id: AuthorId,
    name: AuthorName,
}

impl From<Author> for AuthorResponse {
    fn from(author: Author) -> Self {
        let DestructAuthor { id, name } = author.into_destruct();
        Self { id, name }
    }
}

impl IntoResponse for AuthorResponse {
    fn into_response(self) -> Response {
        (axum::http::StatusCode::OK, Json(self)).into_response()
    }
}

pub struct AuthorDeletedResponse(Author);

impl IntoResponse for AuthorDeletedResponse {
    fn into_response(self) -> Response {
        format!("Author: {} deleted!", self.0.name().as_ref()).into_response()
    }
}

pub struct AuthorPresenter;

impl Exhaust<Author> for AuthorPresenter {
    type To = AuthorResponse;
    fn emit(&self, input: Author) -> Self::To {
        AuthorResponse::from(input)
    }
}

impl Exhaust<Option<Author>> for AuthorPresenter {
    type To = Option<AuthorResponse>;
    fn emit(&self, input: Option<Author>) -> Self::To {
        input.map(AuthorResponse::from)
    }
}

impl Exhaust<Vec<Author>> for AuthorPresenter {
    type To = Json<Vec<AuthorResponse>>;
    fn emit(&self, input: Vec<Author>) -> Self::To {
        Json(input.into_iter().map(AuthorResponse::from).collect())
    }
}

pub struct AuthorDeletionPresenter;

impl Exhaust<Option<Author>> for AuthorDeletionPresenter {
    type To = Option<AuthorDeletedResponse>;
    fn emit(&self, input: Option<Author>) -> Self::To {
        input.map(AuthorDeletedResponse)
    }
}
