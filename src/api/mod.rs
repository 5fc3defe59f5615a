//! REST API module.
//!
//! Contains the `/api/v2` routes and handlers. Each resource gets the same
//! five endpoints; users additionally expose login.

mod envelope;
mod resources;
mod users;

pub use envelope::*;
pub use resources::*;
pub use users::*;

use axum::{
    extract::FromRef,
    routing::{get, post},
    Router,
};

use crate::models::Resource;
use crate::services::ResourceService;
use crate::AppState;

/// Routes for one resource, to be nested under its plural path segment.
pub fn resource_routes<R: Resource>() -> Router<AppState>
where
    ResourceService<R>: FromRef<AppState>,
{
    Router::new()
        .route("/crear", post(create::<R>))
        .route("/listar", get(list::<R>))
        .route(
            "/{id}",
            get(get_by_id::<R>).put(update::<R>).delete(delete::<R>),
        )
}
