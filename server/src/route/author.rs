use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{
    AuthorTransformer, CreateAuthorRequest, DeleteAuthorRequest, GetAuthorRequest,
    UpdateAuthorRequest,
};
use crate::response::{not_found_text, AuthorDeletionPresenter, AuthorPresenter};
use application::service::{
    CreateAuthorService, DeleteAuthorService, GetAuthorService, UpdateAuthorService,
};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_extra::extract::WithRejection;
use uuid::Uuid;

pub trait AuthorRouter {
    fn route_author(self) -> Self;
}

impl<D> AuthorRouter for Router<AppModule<D>>
where
    D: GetAuthorService + CreateAuthorService + UpdateAuthorService + DeleteAuthorService,
{
    fn route_author(self) -> Self {
        self.route(
            "/api/v1/author",
            get(|State(module): State<AppModule<D>>| async move {
                Controller::new((), AuthorPresenter)
                    .bypass(|| module.database().get_all_authors())
                    .await
                    .map_err(ErrorStatus::from)
            })
            .post(
                |State(module): State<AppModule<D>>,
                 WithRejection(Json(req), _): WithRejection<
                    Json<CreateAuthorRequest>,
                    ErrorStatus,
                >| async move {
                    Controller::new(AuthorTransformer, AuthorPresenter)
                        .try_intake(req)?
                        .handle(|dto| module.database().create_author(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .put(
                |State(module): State<AppModule<D>>,
                 WithRejection(Json(req), _): WithRejection<
                    Json<UpdateAuthorRequest>,
                    ErrorStatus,
                >| async move {
                    Controller::new(AuthorTransformer, AuthorPresenter)
                        .try_intake(req)?
                        .handle(|dto| module.database().update_author(dto))
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
            "/api/v1/author/:id",
            get(
                |State(module): State<AppModule<D>>, Path(id): Path<Uuid>| async move {
                    Controller::new(AuthorTransformer, AuthorPresenter)
                        .intake(GetAuthorRequest::new(id))
                        .handle(|dto| module.database().get_author(dto))
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
                    Controller::new(AuthorTransformer, AuthorDeletionPresenter)
                        .intake(DeleteAuthorRequest::new(id))
                        .handle(|dto| module.database().delete_author(dto))
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|res| {
                            res.map(IntoResponse::into_response)
                                .unwrap_or_else(|| not_found_text("author", id))
                        })
                },
            ),
        )
    }
}

#[cfg(test)]
mod test {
    use crate::handler::AppModule;
    use crate::route::router;
    use crate::route::test_support::{json, send, text};
    use axum::http::StatusCode;
    use driver::database::InMemoryDatabase;
    use serde_json::json;

    #[tokio::test]
    async fn create_get_delete() {
        let router = router(AppModule::new(InMemoryDatabase::new()));

        let (status, body) = send(
            &router,
            "POST",
            "/api/v1/author",
            Some(json!({ "name": "Author_1" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let id = json(&body)["id"]
            .as_str()
            .map(str::to_string)
            .unwrap_or_default();

        let uri = format!("/api/v1/author/{id}");
        let (status, body) = send(&router, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json(&body), json!({ "id": id, "name": "Author_1" }));

        let (status, body) = send(&router, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(text(&body), "Author: Author_1 deleted!");

        let (status, body) = send(&router, "GET", "/api/v1/author", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json(&body), json!([]));
    }

    #[tokio::test]
    async fn put_without_id_is_rejected() {
        let router = router(AppModule::new(InMemoryDatabase::new()));

        let (status, _) = send(
            &router,
            "PUT",
            "/api/v1/author",
            Some(json!({ "name": "Author_1" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
