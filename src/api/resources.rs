//! CRUD endpoints shared by every resource.
//!
//! The handlers are generic over the record kind; `resource_routes` mounts one
//! copy per resource.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};

use super::Outcome;
use crate::errors::AppError;
use crate::models::Resource;
use crate::services::ResourceService;

/// POST /api/v2/{resource}/crear - Create a record.
pub async fn create<R: Resource>(
    State(service): State<ResourceService<R>>,
    payload: Result<Json<R>, JsonRejection>,
) -> Result<Outcome<R>, AppError> {
    let Json(record) = payload?;

    let saved = service.create(record).await?;
    tracing::info!(resource = R::KEY, id = ?saved.id(), "Record created");
    Ok(Outcome::Created(saved))
}

/// GET /api/v2/{resource}/listar - List all records.
pub async fn list<R: Resource>(
    State(service): State<ResourceService<R>>,
) -> Result<Outcome<R>, AppError> {
    let records = service.list().await?;
    Ok(Outcome::Listed(records))
}

/// GET /api/v2/{resource}/{id} - Get a single record.
pub async fn get_by_id<R: Resource>(
    State(service): State<ResourceService<R>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Outcome<R>, AppError> {
    let Path(id) = path?;

    match service.get(id).await? {
        Some(record) => Ok(Outcome::Found(record)),
        None => {
            tracing::debug!(resource = R::KEY, id, "Record not found");
            Ok(Outcome::NotFound(id))
        }
    }
}

/// PUT /api/v2/{resource}/{id} - Replace a record's fields.
pub async fn update<R: Resource>(
    State(service): State<ResourceService<R>>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<R>, JsonRejection>,
) -> Result<Outcome<R>, AppError> {
    let Path(id) = path?;
    let Json(replacement) = payload?;

    match service.update(id, replacement).await? {
        Some(updated) => {
            tracing::info!(resource = R::KEY, id, "Record updated");
            Ok(Outcome::Updated(updated))
        }
        None => {
            tracing::debug!(resource = R::KEY, id, "Update target not found");
            Ok(Outcome::UpdateNotFound(id))
        }
    }
}

/// DELETE /api/v2/{resource}/{id} - Delete a record.
pub async fn delete<R: Resource>(
    State(service): State<ResourceService<R>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Outcome<R>, AppError> {
    let Path(id) = path?;

    if service.delete(id).await? {
        tracing::info!(resource = R::KEY, id, "Record deleted");
        Ok(Outcome::Deleted)
    } else {
        tracing::debug!(resource = R::KEY, id, "Delete target not found");
        Ok(Outcome::DeleteNotFound(id))
    }
}
