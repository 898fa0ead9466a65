use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Extension,
};
use tracing::error;

use crate::services::board_service::BoardService;
use crate::view::templates;
use crate::web::middleware::session::Visitor;

/// Page load: fetch everything, render everything.
pub async fn index_handler(
    Extension(visitor): Extension<Visitor>,
    State(service): State<BoardService>,
) -> Response {
    let session = service.session(&visitor.id);
    session.load().await;
    let page = session.snapshot();
    html_or_500(templates::render_page(&page.board, &page.banner))
}

/// Polled by `#message` so a hidden banner disappears without a reload.
pub async fn message_fragment_handler(
    Extension(visitor): Extension<Visitor>,
    State(service): State<BoardService>,
) -> Response {
    let banner = service.session(&visitor.id).banner();
    html_or_500(templates::render_message(&banner))
}

pub(crate) fn html_or_500(rendered: askama::Result<String>) -> Response {
    match rendered {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            error!("template render failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
