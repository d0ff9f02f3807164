use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{
    CreateGenreRequest, DeleteGenreRequest, GenreTransformer, GetGenreRequest, UpdateGenreRequest,
};
use crate::response::{not_found_text, GenreDeletionPresenter, GenrePresenter};
use application::service::{
    CreateGenreService, DeleteGenreService, GetGenreService, UpdateGenreService,
};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_extra::extract::WithRejection;
use uuid::Uuid;

pub trait GenreRouter {
    fn route_genre(self) -> Self;
}

impl<D> GenreRouter for Router<AppModule<D>>
where
    D: GetGenreService + CreateGenreService + UpdateGenreService + DeleteGenreService,
{
    fn route_genre(self) -> Self {
        self.route(
            "/api/v1/genre",
            get(|State(module): State<AppModule<D>>| async move {
                Controller::new((), GenrePresenter)
                    .bypass(|| module.database().get_all_genres())
                    .await
                    .map_err(ErrorStatus::from)
            })
            .post(
                |State(module): State<AppModule<D>>,
                 WithRejection(Json(req), _): WithRejection<
                    Json<CreateGenreRequest>,
                    ErrorStatus,
                >| async move {
                    Controller::new(GenreTransformer, GenrePresenter)
                        .try_intake(req)?
                        .handle(|dto| module.database().create_genre(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .put(
                |State(module): State<AppModule<D>>,
                 WithRejection(Json(req), _): WithRejection<
                    Json<UpdateGenreRequest>,
                    ErrorStatus,
                >| async move {
                    Controller::new(GenreTransformer, GenrePresenter)
                        .try_intake(req)?
                        .handle(|dto| module.database().update_genre(dto))
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
            "/api/v1/genre/:id",
            get(
                |State(module): State<AppModule<D>>, Path(id): Path<Uuid>| async move {
                    Controller::new(GenreTransformer, GenrePresenter)
                        .intake(GetGenreRequest::new(id))
                        .handle(|dto| module.database().get_genre(dto))
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
                    Controller::new(GenreTransformer, GenreDeletionPresenter)
                        .intake(DeleteGenreRequest::new(id))
                        .handle(|dto| module.database().delete_genre(dto))
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|res| {
                            res.map(IntoResponse::into_response)
                                .unwrap_or_else(|| not_found_text("genre", id))
                        })
                },
            ),
        )
    }
}
