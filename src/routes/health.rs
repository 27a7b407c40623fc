use axum::Json;
use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct Health {
    status: &'static str,
}

pub async fn get_health() -> Json<Health> {
    Json(Health { status: "ok" })
}
