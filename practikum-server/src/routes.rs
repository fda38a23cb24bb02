//! API routes

use crate::handlers;
use crate::state::AppState;
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Origins allowed when no CORS configuration is given
const DEV_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://localhost:5173",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:5173",
];

/// Build the CORS layer from `PRACTIKUM_CORS_ORIGINS`
///
/// `*` allows any origin, otherwise a comma-separated list of origins.
/// Without configuration only local development origins are allowed.
pub fn cors_layer(origins: Option<&str>) -> CorsLayer {
    let allow_origin = match origins {
        Some("*") => AllowOrigin::any(),
        Some(origins) => AllowOrigin::list(
            origins
                .split(',')
                .filter_map(|s| s.trim().parse::<HeaderValue>().ok()),
        ),
        None => AllowOrigin::list(DEV_ORIGINS.map(HeaderValue::from_static)),
    };
    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Create the application router
pub fn create_router(state: AppState, cors: CorsLayer) -> Router {
    let author_routes = Router::new()
        .route(
            "/authors",
            post(handlers::create_author).get(handlers::list_authors),
        )
        .route(
            "/authors/:id",
            get(handlers::get_author).delete(handlers::delete_author),
        );

    // Libraries have no update or delete endpoint
    let library_routes = Router::new()
        .route(
            "/libraries",
            post(handlers::create_library).get(handlers::list_libraries),
        )
        .route("/libraries/:id", get(handlers::get_library));

    let book_routes = Router::new()
        .route("/books", post(handlers::create_book).get(handlers::list_books))
        .route(
            "/books/:id",
            get(handlers::get_book)
                .put(handlers::update_book)
                .delete(handlers::delete_book),
        );

    let contact_routes = Router::new()
        .route(
            "/v1/contact",
            post(handlers::create_contact)
                .get(handlers::list_contacts)
                .delete(handlers::delete_all_contacts),
        )
        .route(
            "/v1/contact/:id",
            get(handlers::get_contact)
                .put(handlers::update_contact)
                .delete(handlers::delete_contact),
        );

    Router::new()
        .merge(author_routes)
        .merge(library_routes)
        .merge(book_routes)
        .merge(contact_routes)
        .route("/health", get(handlers::health_check))
        .route("/openapi.json", get(handlers::openapi_json))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
