use crate::controller::Exhaust;
use crate::response::{AuthorResponse, GenreResponse};
use application::transfer::BookDeletion;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use kernel::prelude::entity::{AuthorName, Book, BookId, BookTitle, DestructBook, GenreName};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    id: BookId,
    title: BookTitle,
    author_dto: AuthorResponse,
    genre_dtos: Vec<GenreResponse>,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        let DestructBook {
            id,
            title,
            author,
            genres,
        } = book.into_destruct();
        Self {
            id,
            title,
            author_dto: AuthorResponse::from(author),
            genre_dtos: genres.into_iter().map(GenreResponse::from).collect(),
        }
    }
}

impl IntoResponse for BookResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// List entry: names only.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookInfoResponse {
    id: BookId,
    title: BookTitle,
    author_name: AuthorName,
    genre_names: Vec<GenreName>,
}

impl From<Book> for BookInfoResponse {
    fn from(book: Book) -> Self {
        let DestructBook {
            id,
            title,
            author,
            genres,
        } = book.into_destruct();
        Self {
            id,
            title,
            author_name: author.into_destruct().name,
            genre_names: genres
                .into_iter()
                .map(|genre| genre.into_destruct().name)
                .collect(),
        }
    }
}

#[derive(Debug)]
pub struct BookDeletedResponse(BookDeletion);

impl IntoResponse for BookDeletedResponse {
    fn into_response(self) -> Response {
        let title = self.0.book().title().as_ref();
        if self.0.is_complete() {
            return format!("Book: {} deleted!", title).into_response();
        }
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Book: {} deleted, but its comments could not be removed", title),
        )
            .into_response()
    }
}

pub struct BookPresenter;

impl Exhaust<Book> for BookPresenter {
    type To = BookResponse;
    fn emit(&self, input: Book) -> Self::To {
        BookResponse::from(input)
    }
}

impl Exhaust<Option<Book>> for BookPresenter {
    type To = Option<BookResponse>;
    fn emit(&self, input: Option<Book>) -> Self::To {
        input.map(BookResponse::from)
    }
}

impl Exhaust<Vec<Book>> for BookPresenter {
    type To = Json<Vec<BookInfoResponse>>;
    fn emit(&self, input: Vec<Book>) -> Self::To {
        Json(input.into_iter().map(BookInfoResponse::from).collect())
    }
}

impl Exhaust<Option<BookDeletion>> for BookPresenter {
    type To = Option<BookDeletedResponse>;
    fn emit(&self, input: Option<BookDeletion>) -> Self::To {
        input.map(BookDeletedResponse)
    }
}
