//! Handlers for the `/brinquedos` resource.
//!
//! Every body returned here is a [`Representation`] of a [`Toy`]: the record's
//! fields plus `self` (and, for reads, `collection`) links. Writes follow a
//! check-then-act shape: one existence check or read, then one store write.

use axum::extract::{Path, State};
use axum::http::header::LOCATION;
use axum::http::{HeaderName, StatusCode};
use axum::Json;
use brinquedos_core::error::CoreError;
use brinquedos_core::links::Representation;
use brinquedos_core::types::DbId;
use brinquedos_db::models::toy::{Toy, ToyFields};

use crate::error::AppResult;
use crate::state::AppState;

/// Path of the list endpoint; item endpoints live under it.
pub const COLLECTION_PATH: &str = "/brinquedos";

type ToyRepresentation = Representation<Toy>;

/// GET /brinquedos
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ToyRepresentation>>> {
    let toys = state.store.find_all().await?;
    let body = toys
        .into_iter()
        .map(|toy| state.links.build(toy, true))
        .collect();
    Ok(Json(body))
}

/// GET /brinquedos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ToyRepresentation>> {
    let toy = state
        .store
        .find_by_id(id)
        .await?
        .ok_or(CoreError::toy_not_found(id))?;
    Ok(Json(state.links.build(toy, true)))
}

/// POST /brinquedos
///
/// Any `id` in the body is ignored; the store assigns one.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ToyFields>,
) -> AppResult<(StatusCode, [(HeaderName, String); 1], Json<ToyRepresentation>)> {
    let toy = state.store.save(None, &input).await?;
    tracing::info!(toy_id = toy.id, "Brinquedo created");

    let location = state.links.item_href(toy.id);
    let body = state.links.build(toy, false);
    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(body)))
}

/// PUT /brinquedos/{id}
///
/// Full overwrite: fields absent from the body are stored as null.
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ToyFields>,
) -> AppResult<Json<ToyRepresentation>> {
    ensure_exists(&state, id).await?;

    let toy = state.store.save(Some(id), &input).await?;
    tracing::info!(toy_id = id, "Brinquedo replaced");
    Ok(Json(state.links.build(toy, false)))
}

/// PATCH /brinquedos/{id}
///
/// Merge: only fields present (non-null) in the body are overwritten.
pub async fn partial_update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(patch): Json<ToyFields>,
) -> AppResult<Json<ToyRepresentation>> {
    let mut existing = state
        .store
        .find_by_id(id)
        .await?
        .ok_or(CoreError::toy_not_found(id))?;
    existing.fields.merge(patch);

    let toy = state.store.save(Some(id), &existing.fields).await?;
    tracing::info!(toy_id = id, "Brinquedo patched");
    Ok(Json(state.links.build(toy, false)))
}

/// DELETE /brinquedos/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    ensure_exists(&state, id).await?;

    if state.store.delete_by_id(id).await? {
        tracing::info!(toy_id = id, "Brinquedo deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::toy_not_found(id).into())
    }
}

async fn ensure_exists(state: &AppState, id: DbId) -> AppResult<()> {
    if state.store.exists_by_id(id).await? {
        Ok(())
    } else {
        Err(CoreError::toy_not_found(id).into())
    }
}
