//! Generic handlers shared by every back-office collection.
//!
//! Mounted once per resource type, e.g. `get(list_resources::<Notice>)`.
//! Validation happens inside the repository so collection-wide rules are
//! checked atomically.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use cuehall_core::booking::{Calendar, ListExceptionsQuery, OpeningException};
use cuehall_core::resource::{Editable, Resource, Upsertable};
use cuehall_core::storage::RepositoryError;

use crate::{handlers::AppError, state::AppState, state::RepositoryFor};

fn not_found<R: Resource>(id: R::Id) -> RepositoryError {
    RepositoryError::NotFound {
        entity_type: R::ENTITY,
        id: id.to_string(),
    }
}

/// GET /api/{endpoint}
pub async fn list_resources<R: Resource>(
    State(state): State<AppState>,
) -> Result<Json<Vec<R>>, AppError>
where
    AppState: RepositoryFor<R>,
{
    Ok(Json(RepositoryFor::<R>::repository(&state).list().await?))
}

/// GET /api/{endpoint}/{id}
pub async fn get_resource<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<R::Id>,
) -> Result<Json<R>, AppError>
where
    AppState: RepositoryFor<R>,
{
    match RepositoryFor::<R>::repository(&state).get(id).await? {
        Some(item) => Ok(Json(item)),
        None => Err(not_found::<R>(id).into()),
    }
}

/// POST /api/{endpoint}
pub async fn create_resource<R: Editable>(
    State(state): State<AppState>,
    payload: Result<Json<R::Create>, JsonRejection>,
) -> Result<(StatusCode, Json<R>), AppError>
where
    AppState: RepositoryFor<R>,
{
    let Json(payload) = payload?;
    tracing::debug!(entity = R::ENTITY, payload = ?payload, "Received create request");

    let item = R::from_create(payload);
    RepositoryFor::<R>::repository(&state).create(&item).await?;

    tracing::info!(entity = R::ENTITY, id = %item.id(), "Created");
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /api/{endpoint}/{id}
pub async fn update_resource<R: Editable>(
    State(state): State<AppState>,
    Path(id): Path<R::Id>,
    payload: Result<Json<R::Update>, JsonRejection>,
) -> Result<Json<R>, AppError>
where
    AppState: RepositoryFor<R>,
{
    let Json(payload) = payload?;
    let item = RepositoryFor::<R>::repository(&state)
        .update(id, Box::new(move |item: &mut R| item.apply_update(payload)))
        .await?;

    tracing::info!(entity = R::ENTITY, %id, "Updated");
    Ok(Json(item))
}

/// PUT /api/{endpoint}/{key} for resources keyed by a natural key.
pub async fn upsert_resource<R: Upsertable>(
    State(state): State<AppState>,
    Path(key): Path<R::Id>,
    payload: Result<Json<R::Upsert>, JsonRejection>,
) -> Result<StatusCode, AppError>
where
    AppState: RepositoryFor<R>,
{
    let Json(payload) = payload?;
    let item = R::from_upsert(key, payload);
    RepositoryFor::<R>::repository(&state).upsert(&item).await?;

    tracing::info!(entity = R::ENTITY, %key, "Upserted");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/{endpoint}/{id}
pub async fn delete_resource<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<R::Id>,
) -> Result<StatusCode, AppError>
where
    AppState: RepositoryFor<R>,
{
    RepositoryFor::<R>::repository(&state).delete(id).await?;

    tracing::info!(entity = R::ENTITY, %id, "Deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/calendars/{id}
///
/// Also deletes every booking of the calendar.
pub async fn delete_calendar(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    RepositoryFor::<Calendar>::repository(&state).delete(id).await?;
    let removed = state.booking_repo.delete_bookings_for_calendar(id).await?;

    tracing::info!(calendar_id = %id, bookings = removed, "Deleted calendar and its bookings");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/opening-hours/exceptions?from=&to=
pub async fn list_exceptions(
    State(state): State<AppState>,
    Query(query): Query<ListExceptionsQuery>,
) -> Result<Json<Vec<OpeningException>>, AppError> {
    let exceptions = RepositoryFor::<OpeningException>::repository(&state)
        .list()
        .await?
        .into_iter()
        .filter(|exception| query.matches(exception.date))
        .collect();
    Ok(Json(exceptions))
}
