use crate::controller::Exhaust;
use axum::response::{IntoResponse, Response};
use axum::Json;
use kernel::prelude::entity::{DestructGenre, Genre, GenreId, GenreName};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct GenreResponse {
    id: GenreId,
    name: GenreName,
}

impl From<Genre> for GenreResponse {
    fn from(genre: Genre) -> Self {
        let DestructGenre { id, name } = genre.into_destruct();
        Self { id, name }
    }
}

impl IntoResponse for GenreResponse {
    fn into_response(self) -> Response {
        (axum::http::StatusCode::OK, Json(self)).into_response()
    }
}

pub struct GenreDeletedResponse(Genre);

impl IntoResponse for GenreDeletedResponse {
    fn into_response(self) -> Response {
        format!("Genre: {} deleted!", self.0.name().as_ref()).into_response()
    }
}

pub struct GenrePresenter;

impl Exhaust<Genre> for GenrePresenter {
    type To = GenreResponse;
    fn emit(&self, input: Genre) -> Self::To {
        GenreResponse::from(input)
    }
}

impl Exhaust<Option<Genre>> for GenrePresenter {
    type To = Option<GenreResponse>;
    fn emit(&self, input: Option<Genre>) -> Self::To {
        input.map(GenreResponse::from)
    }
}

impl Exhaust<Vec<Genre>> for GenrePresenter {
    type To = Json<Vec<GenreResponse>>;
    fn emit(&self, input: Vec<Genre>) -> Self::To {
        Json(input.into_iter().map(GenreResponse::from).collect())
    }
}

pub struct GenreDeletionPresenter;

impl Exhaust<Option<Genre>> for GenreDeletionPresenter {
    type To = Option<GenreDeletedResponse>;
    fn emit(&self, input: Option<Genre>) -> Self::To {
        input.map(GenreDeletedResponse)
    }
}
