//! User lookup handler.
//!
//! ```text
//! GET /users/1  -> 200 {"id":"1","email":"raul@example.com","name":"Raul Oguns"}
//! GET /users/5  -> 404 User not found
//! ```

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get, web};
use tracing::debug;

use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Plain-text body returned when no record matches.
pub const USER_NOT_FOUND: &str = "User not found";

/// Resolve a user by identifier.
///
/// The identifier is everything after `/users/`, including the empty string
/// and any further slashes. Matching is exact.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use backend::inbound::http::users::get_user;
///
/// let app = App::new().service(get_user);
/// ```
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User identifier, matched exactly")),
    responses(
        (status = 200, description = "User found", body = crate::inbound::http::schemas::UserSchema),
        (status = 404, description = "No user has this identifier", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id:.*}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let user = state.users.find_user(&id).await?;
    debug!(user_id = %id, found = user.is_some(), "user lookup");

    Ok(match user {
        Some(user) => HttpResponse::Ok().json(user),
        None => HttpResponse::NotFound()
            .content_type(ContentType::plaintext())
            .body(USER_NOT_FOUND),
    })
}
