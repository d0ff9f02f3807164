mod author;
mod book;
mod comment;
mod genre;

pub use self::{author::*, book::*, comment::*, genre::*};

use crate::handler::AppModule;
use application::service::{
    CreateAuthorService, CreateBookService, CreateCommentService, CreateGenreService,
    DeleteAuthorService, DeleteBookService, DeleteCommentService, DeleteGenreService,
    GetAuthorService, GetBookService, GetCommentService, GetGenreService, UpdateAuthorService,
    UpdateBookService, UpdateCommentService, UpdateGenreService,
};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Every service the HTTP surface calls into.
pub trait CatalogServices:
    GetBookService
    + CreateBookService
    + UpdateBookService
    + DeleteBookService
    + GetGenreService
    + CreateGenreService
    + UpdateGenreService
    + DeleteGenreService
    + GetAuthorService
    + CreateAuthorService
    + UpdateAuthorService
    + DeleteAuthorService
    + GetCommentService
    + CreateCommentService
    + UpdateCommentService
    + DeleteCommentService
{
}

impl<T> CatalogServices for T where
    T: GetBookService
        + CreateBookService
        + UpdateBookService
        + DeleteBookService
        + GetGenreService
        + CreateGenreService
        + UpdateGenreService
        + DeleteGenreService
        + GetAuthorService
        + CreateAuthorService
        + UpdateAuthorService
        + DeleteAuthorService
        + GetCommentService
        + CreateCommentService
        + UpdateCommentService
        + DeleteCommentService
{
}

pub fn router<D: CatalogServices>(module: AppModule<D>) -> Router {
    Router::new()
        .route_book()
        .route_genre()
        .route_author()
        .route_comment()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new())
        .with_state(module)
}
