//! Cart route handlers.
//!
//! Request bodies arrive as loose DTOs (every field optional) and are
//! validated into typed commands before anything touches the store, so a
//! bad request gets a field-specific 400 and never causes a partial write.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use tracing::instrument;

use orchard_core::{Cart, ProductId, UserKey};

use crate::error::{AppError, Result};
use crate::extract::ApiJson;
use crate::state::AppState;

/// Cart fetch query string.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartQuery {
    /// Defaults to the demo key when omitted.
    pub user_id: Option<String>,
}

/// Add-to-cart request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub user_id: Option<String>,
    pub product_id: Option<i64>,
    pub qty: Option<i64>,
}

/// Remove-from-cart request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFromCartRequest {
    pub user_id: Option<String>,
    pub product_id: Option<i64>,
}

/// Validated add-item command.
#[derive(Debug)]
pub struct AddItemCommand {
    pub user: UserKey,
    pub product_id: ProductId,
    pub qty: u32,
}

/// Validated remove-item command.
#[derive(Debug)]
pub struct RemoveItemCommand {
    pub user: UserKey,
    pub product_id: ProductId,
}

/// Resolve an optional user id, falling back to the demo key.
///
/// Blank and whitespace-only values count as absent, matching the mutating
/// endpoints' trim check.
fn resolve_user_key(user_id: Option<String>) -> UserKey {
    match user_id {
        Some(id) if !id.trim().is_empty() => UserKey::new(id),
        _ => UserKey::demo(),
    }
}

/// Validate a user id field into a key. Shared with the checkout handler.
pub(crate) fn validate_user_id(user_id: Option<String>) -> Result<UserKey> {
    match user_id {
        Some(id) if !id.trim().is_empty() => Ok(UserKey::new(id)),
        _ => Err(AppError::Validation("Valid userId is required".to_string())),
    }
}

/// Validate a product id field.
fn validate_product_id(product_id: Option<i64>) -> Result<ProductId> {
    product_id.map(ProductId::new).ok_or_else(|| {
        AppError::Validation("Valid productId is required".to_string())
    })
}

impl AddToCartRequest {
    /// Validate into a typed command.
    ///
    /// # Errors
    ///
    /// Returns a field-specific [`AppError::Validation`] for the first
    /// missing or malformed field.
    pub fn validate(self) -> Result<AddItemCommand> {
        let user = validate_user_id(self.user_id)?;
        let product_id = validate_product_id(self.product_id)?;
        let qty = match self.qty {
            Some(qty) if (1..=i64::from(u32::MAX)).contains(&qty) => {
                u32::try_from(qty).map_err(|_| {
                    AppError::Validation("qty must be a positive integer".to_string())
                })?
            }
            _ => {
                return Err(AppError::Validation(
                    "qty must be a positive integer".to_string(),
                ));
            }
        };

        Ok(AddItemCommand {
            user,
            product_id,
            qty,
        })
    }
}

impl RemoveFromCartRequest {
    /// Validate into a typed command.
    ///
    /// # Errors
    ///
    /// Returns a field-specific [`AppError::Validation`] for the first
    /// missing field.
    pub fn validate(self) -> Result<RemoveItemCommand> {
        Ok(RemoveItemCommand {
            user: validate_user_id(self.user_id)?,
            product_id: validate_product_id(self.product_id)?,
        })
    }
}

/// Fetch (or lazily create) the user's cart.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Query(query): Query<CartQuery>,
) -> Result<Json<Cart>> {
    let user = resolve_user_key(query.user_id);
    let cart = state.cart_service().get_cart(&user).await?;
    Ok(Json(cart))
}

/// Add an item to the cart, merging quantities for an existing product.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<AddToCartRequest>,
) -> Result<Json<Cart>> {
    let command = body.validate()?;
    let cart = state
        .cart_service()
        .add_item(&command.user, command.product_id, command.qty)
        .await?;
    Ok(Json(cart))
}

/// Remove an item from the cart.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<RemoveFromCartRequest>,
) -> Result<Json<Cart>> {
    let command = body.validate()?;
    let cart = state
        .cart_service()
        .remove_item(&command.user, command.product_id)
        .await?;
    Ok(Json(cart))
}
