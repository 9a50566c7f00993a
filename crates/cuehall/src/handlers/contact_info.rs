//! The hall's contact details (a singleton).

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use cuehall_core::booking::ContactInfo;

use crate::{handlers::AppError, state::AppState};

/// GET /api/contact-info
///
/// Returns empty fields until the contact info has been saved once.
pub async fn get_contact_info(
    State(state): State<AppState>,
) -> Result<Json<ContactInfo>, AppError> {
    let info = state.contact_repo.get_contact_info().await?;
    Ok(Json(info.unwrap_or_default()))
}

/// PUT /api/contact-info
pub async fn put_contact_info(
    State(state): State<AppState>,
    payload: Result<Json<ContactInfo>, JsonRejection>,
) -> Result<Json<ContactInfo>, AppError> {
    let Json(info) = payload?;
    state.contact_repo.put_contact_info(&info).await?;

    tracing::info!("Updated contact info");
    Ok(Json(info))
}
