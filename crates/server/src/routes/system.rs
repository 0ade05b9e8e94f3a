use actix_web::{get, http::header::ContentType, HttpResponse};

use crate::types::HealthResponse;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Clip generator page
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_HTML)
}

/// Liveness probe
#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
    })
}
