//! Checkout route handler.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use orchard_core::Receipt;

use crate::error::Result;
use crate::extract::ApiJson;
use crate::routes::cart;
use crate::state::AppState;

/// Checkout request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub user_id: Option<String>,
}

/// Checkout response body: `{ "receipt": ... }`.
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub receipt: Receipt,
}

/// Check out the user's cart: price it into a receipt, then clear it.
#[instrument(skip(state))]
pub async fn checkout(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CheckoutRequest>,
) -> Result<Json<CheckoutResponse>> {
    let user = cart::validate_user_id(body.user_id)?;
    let receipt = state.checkout_service().checkout(&user).await?;
    Ok(Json(CheckoutResponse { receipt }))
}
