use actix_web::{get, web, HttpResponse};
use std::sync::Arc;

use crate::state::AppState;

#[get("/history")]
pub async fn get_history(state: web::Data<Arc<AppState>>) -> HttpResponse {
    let history = state.history.read().await;
    HttpResponse::Ok().json(history.records())
}
