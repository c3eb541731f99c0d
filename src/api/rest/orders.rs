use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::Json;
use axum::Router;
use serde::{Deserialize, Serialize};

use crate::api::rest::CountResponse;
use crate::error::AppError;
use crate::models::order::Order;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/orders", get(list_orders).post(create_order))
        .route("/orders/unassigned/count", get(count_unassigned_orders))
        .route("/orders/:id", get(get_order).delete(delete_order))
}

#[derive(Deserialize)]
pub struct CreateOrderRequest {
    pub id: String,
    pub delivery_time: Option<String>,
}

#[derive(Serialize)]
pub struct DeleteOrderResponse {
    pub deleted: bool,
}

async fn create_order(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateOrderRequest>,
) -> Result<Json<Order>, AppError> {
    if payload.id.trim().is_empty() {
        return Err(AppError::BadRequest("id cannot be empty".to_string()));
    }

    let order = Order::new(payload.id, payload.delivery_time.as_deref())?;
    state.write("add_order", |store| store.add_order(order.clone()));

    Ok(Json(order))
}

async fn list_orders(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.read("get_all_orders", |store| store.get_all_orders()))
}

async fn get_order(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Order>, AppError> {
    state
        .read("get_order_by_id", |store| store.get_order_by_id(&id).cloned())
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("order {id} not found")))
}

async fn delete_order(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Json<DeleteOrderResponse> {
    let removed = state.write("delete_order", |store| store.delete_order(&id));

    Json(DeleteOrderResponse {
        deleted: removed.is_some(),
    })
}

async fn count_unassigned_orders(State(state): State<Arc<AppState>>) -> Json<CountResponse> {
    let count = state.read("get_count_of_unassigned_orders", |store| {
        store.get_count_of_unassigned_orders()
    });

    Json(CountResponse { count })
}
