use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{
    BookTransformer, CreateBookRequest, DeleteBookRequest, GetBookCommentsRequest,
    GetBookRequest, UpdateBookRequest,
};
use crate::response::{not_found_text, BookPresenter, CommentPresenter};
use application::service::{
    CreateBookService, DeleteBookService, GetBookService, GetCommentService, UpdateBookService,
};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_extra::extract::WithRejection;
use uuid::Uuid;

pub trait BookRouter {
    fn route_book(self) -> Self;
}

impl<D> BookRouter for Router<AppModule<D>>
where
    D: GetBookService
        + CreateBookService
        + UpdateBookService
        + DeleteBookService
        + GetCommentService,
{
    fn route_book(self) -> Self {
        self.route(
            "/api/v1/book",
            get(|State(module): State<AppModule<D>>| async move {
                Controller::new((), BookPresenter)
                    .bypass(|| module.database().get_all_books())
                    .await
                    .map_err(ErrorStatus::from)
            })
            .post(
                |State(module): State<AppModule<D>>,
                 WithRejection(Json(req), _): WithRejection<
                    Json<CreateBookRequest>,
                    ErrorStatus,
                >| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .try_intake(req)?
                        .handle(|dto| module.database().create_book(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .put(
                |State(module): State<AppModule<D>>,
                 WithRejection(Json(req), _): WithRejection<
                    Json<UpdateBookRequest>,
                    ErrorStatus,
                >| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .try_intake(req)?
                        .handle(|dto| module.database().update_book(dto))
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|res| {
                            res.map(IntoResponse::into_response)
                                .unwrap_or_else(|| StatusCode::NOT_FOUND.into_response())
                        })
                },
            ),
        )
        .route(
            "/api/v1/book/:id",
            get(
                |State(module): State<AppModule<D>>, Path(id): Path<Uuid>| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .intake(GetBookRequest::new(id))
                        .handle(|dto| module.database().get_book(dto))
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|res| {
                            res.map(IntoResponse::into_response)
                                .unwrap_or_else(|| StatusCode::NOT_FOUND.into_response())
                        })
                },
            )
            .delete(
                |State(module): State<AppModule<D>>, Path(id): Path<Uuid>| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .intake(DeleteBookRequest::new(id))
                        .handle(|dto| module.database().delete_book(dto))
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|res| {
                            res.map(IntoResponse::into_response)
                                .unwrap_or_else(|| not_found_text("book", id))
                        })
                },
            ),
        )
        .route(
            "/api/v1/book/:id/comment",
            get(
                |State(module): State<AppModule<D>>, Path(id): Path<Uuid>| async move {
                    Controller::new(BookTransformer, CommentPresenter)
                        .intake(GetBookCommentsRequest::new(id))
                        .handle(|dto| module.database().get_book_comments(dto))
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|res| {
                            res.map(IntoResponse::into_response)
                                .unwrap_or_else(|| StatusCode::NOT_FOUND.into_response())
                        })
                },
            ),
        )
    }
}
