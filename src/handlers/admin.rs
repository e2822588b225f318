use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::db::queries;
use crate::errors::AppError;
use crate::models::BookingStatus;
use crate::state::AppState;

const DEFAULT_LIMIT: i64 = 50;

fn check_auth(headers: &HeaderMap, expected_token: &str) -> Result<(), AppError> {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let token = auth.strip_prefix("Bearer ").unwrap_or("");
    if token.is_empty() || token != expected_token {
        return Err(AppError::Unauthorized);
    }
    Ok(())
}

// GET /api/bookings
#[derive(Deserialize)]
pub struct BookingsQuery {
    pub status: Option<String>,
    pub limit: Option<i64>,
}

#[derive(Serialize)]
pub struct BookingResponse {
    id: String,
    dj_name: String,
    client_name: String,
    client_phone: String,
    client_email: String,
    location: String,
    event_date: String,
    duration: String,
    total_price: u32,
    status: String,
    created_at: String,
}

pub async fn get_bookings(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<BookingsQuery>,
) -> Result<Json<Vec<BookingResponse>>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let status_filter = match query.status.as_deref() {
        None | Some("") => None,
        Some(s @ ("confirmed" | "cancelled")) => Some(s),
        Some(other) => return Err(AppError::BadRequest(format!("unknown status: {other}"))),
    };
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, 500);

    let bookings = {
        let db = state.db()?;
        queries::get_all_bookings(&db, status_filter, limit)?
    };

    let response: Vec<BookingResponse> = bookings
        .into_iter()
        .map(|b| BookingResponse {
            id: b.id,
            dj_name: b.dj_name,
            client_name: b.client_name,
            client_phone: b.client_phone,
            client_email: b.client_email,
            location: b.location,
            event_date: b.event_date,
            duration: b.duration,
            total_price: b.total_price,
            status: b.status.as_str().to_string(),
            created_at: b.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        })
        .collect();

    Ok(Json(response))
}

// POST /api/bookings/:id/cancel
pub async fn cancel_booking(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let db = state.db()?;
    let Some(booking) = queries::get_booking_by_id(&db, &id)? else {
        return Err(AppError::NotFound("booking not found".to_string()));
    };
    queries::update_booking_status(&db, &id, &BookingStatus::Cancelled)?;

    tracing::info!(
        booking_id = %id,
        dj = %booking.dj_name,
        date = %booking.event_date,
        "booking cancelled"
    );
    Ok(Json(serde_json::json!({"ok": true})))
}
