//! API handlers for Bookshelf REST endpoints

pub mod auth;
pub mod books;
pub mod middleware;
pub mod openapi;
pub mod uploads;

use axum::{
    extract::{DefaultBodyLimit, FromRequest, FromRequestParts},
    http::{header, Method},
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, AppState};

/// JSON body extractor answering 400 with the parse error on malformed input
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Path extractor answering 400 when a segment does not parse
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::HEAD,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([
            header::ORIGIN,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
        ]);

    let protected = Router::new()
        .route("/book", get(books::list_books).post(books::create_book))
        .route(
            "/book/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        .route(
            "/upload",
            post(uploads::upload_image)
                .layer(DefaultBodyLimit::max(state.config.upload.max_bytes)),
        )
        .layer(
            ServiceBuilder::new()
                .layer(from_fn_with_state(state.clone(), middleware::require_token))
                .layer(from_fn(middleware::require_admin))
                .layer(from_fn(middleware::log_request)),
        );

    let mut app = Router::new()
        .route("/login", post(auth::login))
        .merge(protected)
        .with_state(state.clone());

    if state.config.server.enable_docs {
        app = app.merge(openapi::create_openapi_router());
    }

    app.layer(TraceLayer::new_for_http()).layer(cors)
}
