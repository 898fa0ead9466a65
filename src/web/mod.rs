pub mod middleware;
pub mod routes;

use axum::{
    middleware as axum_middleware,
    routing::{get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::services::board_service::BoardService;
use middleware::session;
use routes::{board, signup};

pub fn router(service: BoardService) -> Router {
    Router::new()
        .route("/", get(board::index_handler))
        .route("/signup", post(signup::signup_handler))
        .route("/participants/unregister", post(signup::unregister_handler))
        .route("/fragments/message", get(board::message_fragment_handler))
        .layer(axum_middleware::from_fn(session::attach_visitor))
        .nest_service("/assets", get_service(ServeDir::new("assets")))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CatchPanicLayer::new())
        .with_state(service)
}
