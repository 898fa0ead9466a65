use axum::{
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Redirect, Response},
    Extension, Form,
};

use crate::services::board_service::{BoardService, BoardSession};
use crate::view::{templates, CardView, RosterAction, SignupForm, UnregisterForm};
use crate::web::middleware::session::Visitor;
use crate::web::routes::board::html_or_500;

pub async fn signup_handler(
    Extension(visitor): Extension<Visitor>,
    State(service): State<BoardService>,
    headers: HeaderMap,
    Form(form): Form<SignupForm>,
) -> Response {
    let session = service.session(&visitor.id);
    let patched = session.submit_signup(&form).await;
    mutation_response(&session, &headers, patched)
}

pub async fn unregister_handler(
    Extension(visitor): Extension<Visitor>,
    State(service): State<BoardService>,
    headers: HeaderMap,
    Form(form): Form<UnregisterForm>,
) -> Response {
    let session = service.session(&visitor.id);
    let patched = session.dispatch(RosterAction::from(form)).await;
    mutation_response(&session, &headers, patched)
}

/// htmx gets the banner and the patched card as out-of-band swaps. A plain
/// form post (no JS) is sent back to the page, which shows the banner.
fn mutation_response(
    session: &BoardSession,
    headers: &HeaderMap,
    patched: Option<CardView>,
) -> Response {
    if !headers.contains_key("hx-request") {
        return Redirect::to("/").into_response();
    }
    html_or_500(templates::render_mutation(&session.banner(), patched.as_ref()))
}
