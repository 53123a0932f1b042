//! Response for requests that match no registered route.

use actix_web::HttpResponse;
use actix_web::http::header::ContentType;

/// Plain-text body for unmatched routes.
pub const PAGE_NOT_FOUND: &str = "404 page not found";

/// Default service: plain-text 404 for any unmatched path.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use backend::inbound::http::fallback::not_found;
///
/// let app = App::new().default_service(web::to(not_found));
/// ```
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type(ContentType::plaintext())
        .body(PAGE_NOT_FOUND)
}
