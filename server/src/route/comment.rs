use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{
    CommentTransformer, CreateCommentRequest, DeleteCommentRequest, GetCommentRequest,
    UpdateCommentRequest,
};
use crate::response::{not_found_text, CommentDeletionPresenter, CommentPresenter};
use application::service::{
    CreateCommentService, DeleteCommentService, GetCommentService, UpdateCommentService,
};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_extra::extract::WithRejection;
use uuid::Uuid;

pub trait CommentRouter {
    fn route_comment(self) -> Self;
}

impl<D> CommentRouter for Router<AppModule<D>>
where
    D: GetCommentService + CreateCommentService + UpdateCommentService + DeleteCommentService,
{
    fn route_comment(self) -> Self {
        self.route(
            "/api/v1/comment",
            get(|State(module): State<AppModule<D>>| async move {
                Controller::new((), CommentPresenter)
                    .bypass(|| module.database().get_all_comments())
                    .await
                    .map_err(ErrorStatus::from)
            })
            .post(
                |State(module): State<AppModule<D>>,
                 WithRejection(Json(req), _): WithRejection<
                    Json<CreateCommentRequest>,
                    ErrorStatus,
                >| async move {
                    Controller::new(CommentTransformer, CommentPresenter)
                        .try_intake(req)?
                        .handle(|dto| module.database().create_comment(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .put(
                |State(module): State<AppModule<D>>,
                 WithRejection(Json(req), _): WithRejection<
                    Json<UpdateCommentRequest>,
                    ErrorStatus,
                >| async move {
                    Controller::new(CommentTransformer, CommentPresenter)
                        .try_intake(req)?
                        .handle(|dto| module.database().update_comment(dto))
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
            "/api/v1/comment/:id",
            get(
                |State(module): State<AppModule<D>>, Path(id): Path<Uuid>| async move {
                    Controller::new(CommentTransformer, CommentPresenter)
                        .intake(GetCommentRequest::new(id))
                        .handle(|dto| module.database().get_comment(dto))
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
                    Controller::new(CommentTransformer, CommentDeletionPresenter)
                        .intake(DeleteCommentRequest::new(id))
                        .handle(|dto| module.database().delete_comment(dto))
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|res| {
                            res.map(IntoResponse::into_response)
                                .unwrap_or_else(|| not_found_text("comment", id))
                        })
                },
            ),
        )
    }
}
