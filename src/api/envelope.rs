//! Response envelopes.
//!
//! Every response is a JSON object with a Spanish `message` plus, depending on
//! the outcome, a single record under the resource key or `total` + `data`.
//! All message wording lives here.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{Map, Value};

use crate::errors::AppError;
use crate::models::{Gender, Labels, Resource, User};

pub const LOGIN_OK_MESSAGE: &str = "Usuario logueado correctamente";
pub const LOGIN_REJECTED_MESSAGE: &str = "Credenciales inválidas o usuario no encontrado";

/// Result of a CRUD operation on resource `R`, ready to be rendered.
#[derive(Debug)]
pub enum Outcome<R> {
    Created(R),
    Listed(Vec<R>),
    Found(R),
    NotFound(i64),
    Updated(R),
    UpdateNotFound(i64),
    Deleted,
    DeleteNotFound(i64),
}

/// Result of a login attempt.
#[derive(Debug)]
pub enum LoginOutcome {
    Authenticated(User),
    Rejected,
}

fn agree(gender: Gender, masculine: &'static str, feminine: &'static str) -> &'static str {
    match gender {
        Gender::Masculine => masculine,
        Gender::Feminine => feminine,
    }
}

fn not_found_message(labels: &Labels, id: i64) -> String {
    format!(
        "{} con ID {} no {}",
        labels.singular,
        id,
        agree(labels.gender, "encontrado", "encontrada")
    )
}

impl<R: Resource> Outcome<R> {
    pub fn status(&self) -> StatusCode {
        match self {
            Outcome::Created(_) => StatusCode::CREATED,
            Outcome::Listed(_) | Outcome::Found(_) | Outcome::Updated(_) | Outcome::Deleted => {
                StatusCode::OK
            }
            Outcome::NotFound(_) | Outcome::UpdateNotFound(_) | Outcome::DeleteNotFound(_) => {
                StatusCode::NOT_FOUND
            }
        }
    }

    pub fn message(&self) -> String {
        let labels = R::LABELS;
        let g = labels.gender;
        match self {
            Outcome::Created(_) => format!(
                "{} {} exitosamente",
                labels.singular,
                agree(g, "creado", "creada")
            ),
            Outcome::Listed(_) => format!(
                "{} {} correctamente",
                labels.plural,
                agree(g, "obtenidos", "obtenidas")
            ),
            Outcome::Found(_) => {
                format!("{} {}", labels.singular, agree(g, "encontrado", "encontrada"))
            }
            Outcome::Updated(_) => format!(
                "{} {} correctamente",
                labels.singular,
                agree(g, "actualizado", "actualizada")
            ),
            Outcome::UpdateNotFound(id) => format!(
                "No se pudo actualizar: {} con ID {} no {}",
                labels.singular_lower,
                id,
                agree(g, "encontrado", "encontrada")
            ),
            Outcome::Deleted => format!(
                "{} {} correctamente",
                labels.singular,
                agree(g, "eliminado", "eliminada")
            ),
            Outcome::NotFound(id) | Outcome::DeleteNotFound(id) => not_found_message(&labels, *id),
        }
    }

    fn into_body(self) -> Result<Map<String, Value>, serde_json::Error> {
        let mut body = Map::new();
        body.insert("message".to_string(), Value::String(self.message()));

        match self {
            Outcome::Created(record) | Outcome::Found(record) | Outcome::Updated(record) => {
                body.insert(R::KEY.to_string(), serde_json::to_value(record)?);
            }
            Outcome::Listed(records) => {
                body.insert("total".to_string(), Value::from(records.len()));
                body.insert("data".to_string(), serde_json::to_value(records)?);
            }
            Outcome::NotFound(_)
            | Outcome::UpdateNotFound(_)
            | Outcome::Deleted
            | Outcome::DeleteNotFound(_) => {}
        }

        Ok(body)
    }
}

impl<R: Resource> IntoResponse for Outcome<R> {
    fn into_response(self) -> Response {
        let status = self.status();
        match self.into_body() {
            Ok(body) => (status, Json(Value::Object(body))).into_response(),
            Err(err) => {
                tracing::error!("Failed to serialize {} envelope: {}", R::KEY, err);
                AppError::Internal(format!("Serialization error: {}", err)).into_response()
            }
        }
    }
}

impl LoginOutcome {
    pub fn status(&self) -> StatusCode {
        match self {
            LoginOutcome::Authenticated(_) => StatusCode::OK,
            LoginOutcome::Rejected => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for LoginOutcome {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            LoginOutcome::Authenticated(user) => serde_json::json!({
                "message": LOGIN_OK_MESSAGE,
                "user": user,
            }),
            LoginOutcome::Rejected => serde_json::json!({ "message": LOGIN_REJECTED_MESSAGE }),
        };
        (status, Json(body)).into_response()
    }
}
