use axum::{routing::get, routing::patch, routing::post, Router};

use repository::session::SessionRepository;
use repository::Repository;
use storage::Storage;
use tokio::sync::mpsc::Sender;
use tower_http::cors::CorsLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;
use utoipauto::utoipauto;

mod auth;
pub mod category;
pub mod comment;
pub mod document;
pub mod gallery;
pub mod healthz;
pub mod member;
pub mod not_found;
pub mod post;
mod response;
mod util;

pub enum ApiError {
    LoginRequired(String),
    ClientError(String),
    NotFound(String),
    PermissionDenied(String),
    ServerError(String),
}

#[derive(Clone)]
pub struct ApiState {
    repo: Repository,
    session: SessionRepository,
    storage: Storage,
    convert_tx: Sender<i32>,
}

pub async fn serve(
    repository: Repository,
    session: SessionRepository,
    storage: Storage,
    convert_tx: Sender<i32>,
) -> anyhow::Result<Router> {
    #[utoipauto(paths = "./libs/api/src")]
    #[derive(OpenApi)]
    #[openapi(
        tags(
            (name = "church", description = "Church community API")
        )
    )]
    struct ApiDoc;

    info!(task = "start api serving");

    let state = ApiState {
        repo: repository,
        session,
        storage,
        convert_tx,
    };

    let origins = ["http://localhost:3000".parse().unwrap()];

    // roster
    let member_router = Router::new()
        .route("/", get(member::get_members).post(member::post_member))
        .fallback(not_found::get_404)
        .with_state(state.clone());

    // bulletins, pdfs, sheet music
    let document_router = Router::new()
        .route(
            "/",
            get(document::get_documents).post(document::post_document),
        )
        .route("/:id", get(document::get_document))
        .fallback(not_found::get_404)
        .with_state(state.clone());

    // gallery
    let gallery_router = Router::new()
        .route("/", get(gallery::get_entries).post(gallery::post_entry))
        .route("/:id", get(gallery::get_entry))
        .fallback(not_found::get_404)
        .with_state(state.clone());

    // review board
    let post_router = Router::new()
        .route("/", get(post::get_posts).post(post::post_post))
        .route("/search", get(post::search_posts))
        .route("/category/:slug", get(post::get_posts_by_category))
        .route(
            "/:id",
            get(post::get_post)
                .patch(post::patch_post)
                .delete(post::delete_post),
        )
        .route("/:id/comments", post(comment::post_comment))
        .fallback(not_found::get_404)
        .with_state(state.clone());

    let comment_router = Router::new()
        .route(
            "/:id",
            patch(comment::patch_comment).delete(comment::delete_comment),
        )
        .fallback(not_found::get_404)
        .with_state(state.clone());

    let category_router = Router::new()
        .route(
            "/",
            get(category::get_categories).post(category::post_category),
        )
        .fallback(not_found::get_404)
        .with_state(state.clone());

    let router = Router::new()
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .route("/healthz", get(healthz::get_health))
        .nest("/members", member_router)
        .nest("/documents", document_router)
        .nest("/gallery", gallery_router)
        .nest("/posts", post_router)
        .nest("/comments", comment_router)
        .nest("/categories", category_router)
        .layer(CorsLayer::new().allow_origin(origins))
        .fallback(not_found::get_404);

    Ok(router)
}
