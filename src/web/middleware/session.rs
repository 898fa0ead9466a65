use axum::{
    extract::Request,
    http::{header, HeaderValue},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "board_session";

/// Which visitor a request belongs to; each visitor gets its own board.
#[derive(Clone, Debug)]
pub struct Visitor {
    pub id: String,
}

/// Reads the `board_session` cookie, minting a new id (and setting the cookie
/// on the way out) when it is missing or not one of ours.
pub async fn attach_visitor(mut request: Request, next: Next) -> Response {
    let existing = request
        .headers()
        .get(header::COOKIE)
        .and_then(|hv| hv.to_str().ok())
        .and_then(|cookies| {
            cookies.split(';').find_map(|c| {
                c.trim()
                    .strip_prefix(SESSION_COOKIE)
                    .and_then(|rest| rest.strip_prefix('='))
            })
        })
        .and_then(|v| Uuid::parse_str(v).ok());

    let (id, fresh) = match existing {
        Some(id) => (id, false),
        None => (Uuid::new_v4(), true),
    };

    request.extensions_mut().insert(Visitor { id: id.to_string() });
    let mut response = next.run(request).await;

    if fresh {
        let cookie = format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, id);
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().append(header::SET_COOKIE, value);
        }
    }
    response
}
