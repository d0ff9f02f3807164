mod author;
mod book;
mod comment;
mod genre;

pub use self::{author::*, book::*, comment::*, genre::*};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Plain text answer of a delete whose target does not exist.
pub fn not_found_text(kind: &str, id: impl std::fmt::Display) -> Response {
    (StatusCode::NOT_FOUND, format!("{kind}Id: {id} Not found")).into_response()
}
