use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::{get, post, put};
use axum::Json;
use axum::Router;
use serde::{Deserialize, Serialize};

use crate::api::rest::CountResponse;
use crate::clock::format_time;
use crate::error::AppError;
use crate::models::partner::Partner;
use crate::state::AppState;
use crate::store::AssignOutcome;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/partners/:id",
            post(create_partner).get(get_partner).delete(delete_partner),
        )
        .route("/partners/:id/orders", get(list_partner_orders))
        .route("/partners/:id/orders/count", get(count_partner_orders))
        .route("/partners/:id/orders/left-after", get(count_orders_left_after))
        .route("/partners/:id/assignments/:order_id", put(assign_order))
        .route("/partners/:id/last-delivery-time", get(last_delivery_time))
}

#[derive(Deserialize)]
pub struct LeftAfterQuery {
    pub time: String,
}

#[derive(Serialize)]
pub struct AssignResponse {
    pub order_id: String,
    pub partner_id: String,
    pub previous_partner_id: Option<String>,
    pub changed: bool,
}

#[derive(Serialize)]
pub struct DeletePartnerResponse {
    pub deleted: bool,
    pub unassigned_orders: Vec<String>,
}

#[derive(Serialize)]
pub struct LastDeliveryTimeResponse {
    pub partner_id: String,
    pub last_delivery_time: String,
}

async fn create_partner(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Partner>, AppError> {
    if id.trim().is_empty() {
        return Err(AppError::BadRequest("id cannot be empty".to_string()));
    }

    let partner = state.write("add_partner", |store| {
        store.add_partner(&id);
        store.get_partner_by_id(&id).cloned()
    });

    partner
        .map(Json)
        .ok_or_else(|| AppError::Internal(format!("partner {id} missing after insert")))
}

async fn get_partner(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Partner>, AppError> {
    state
        .read("get_partner_by_id", |store| store.get_partner_by_id(&id).cloned())
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("partner {id} not found")))
}

async fn delete_partner(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Json<DeletePartnerResponse> {
    let (deleted, unassigned_orders) = state.write("delete_partner", |store| {
        let known = store.get_partner_by_id(&id).is_some();
        (known, store.delete_partner(&id))
    });

    Json(DeletePartnerResponse {
        deleted,
        unassigned_orders,
    })
}

async fn assign_order(
    State(state): State<Arc<AppState>>,
    Path((partner_id, order_id)): Path<(String, String)>,
) -> Result<Json<AssignResponse>, AppError> {
    let outcome = state.write("assign_order_to_partner", |store| {
        store.assign_order_to_partner(&order_id, &partner_id)
    });

    let (previous_partner_id, changed) = match outcome {
        AssignOutcome::UnknownOrder => {
            return Err(AppError::NotFound(format!("order {order_id} not found")));
        }
        AssignOutcome::UnknownPartner => {
            return Err(AppError::NotFound(format!("partner {partner_id} not found")));
        }
        AssignOutcome::Assigned => (None, true),
        AssignOutcome::Reassigned { from } => (Some(from), true),
        AssignOutcome::Unchanged => (Some(partner_id.clone()), false),
    };

    Ok(Json(AssignResponse {
        order_id,
        partner_id,
        previous_partner_id,
        changed,
    }))
}

async fn list_partner_orders(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Json<Vec<String>> {
    Json(state.read("get_orders_by_partner_id", |store| {
        store.get_orders_by_partner_id(&id)
    }))
}

async fn count_partner_orders(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Json<CountResponse> {
    let count = state.read("get_order_count_by_partner_id", |store| {
        store.get_order_count_by_partner_id(&id)
    });

    Json(CountResponse { count })
}

async fn count_orders_left_after(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<LeftAfterQuery>,
) -> Result<Json<CountResponse>, AppError> {
    let count = state.read("get_orders_left_after_given_time", |store| {
        store.get_orders_left_after_given_time(&query.time, &id)
    })?;

    Ok(Json(CountResponse { count }))
}

/// Partners without orders report midnight.
async fn last_delivery_time(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Json<LastDeliveryTimeResponse> {
    let last = state.read("get_last_delivery_time_by_partner_id", |store| {
        store.get_last_delivery_time_by_partner_id(&id)
    });

    Json(LastDeliveryTimeResponse {
        last_delivery_time: last.unwrap_or_else(|| format_time(0)),
        partner_id: id,
    })
}
