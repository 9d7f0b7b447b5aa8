//! Root banner confirming the process is up.

use actix_web::{HttpResponse, get};

pub const BANNER: &str = "Smart Icon & Sticker Generator Backend is running!";

/// Plain-text banner.
#[utoipa::path(
    get,
    path = "/",
    tags = ["health"],
    responses((status = 200, description = "Service banner", body = String, content_type = "text/plain"))
)]
#[get("/")]
pub async fn banner() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(BANNER)
}
