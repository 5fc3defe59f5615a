//! Data models for the Aula course platform.
//!
//! Every record kind shares the same lifecycle: the identifier is assigned by
//! storage on insert and every other field is replaced wholesale on update.

mod contenido;
mod curso;
mod evaluacion;
mod user;

pub use contenido::*;
pub use curso::*;
pub use evaluacion::*;
pub use user::*;

use serde::{de::DeserializeOwned, Serialize};

/// Grammatical gender of a resource noun, used for adjective agreement in messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Masculine,
    Feminine,
}

/// Display names of a resource as they appear in response messages.
#[derive(Debug, Clone, Copy)]
pub struct Labels {
    /// Capitalized singular, e.g. "Evaluación"
    pub singular: &'static str,
    /// Lowercase singular used mid-sentence, e.g. "evaluación"
    pub singular_lower: &'static str,
    /// Capitalized plural, e.g. "Evaluaciones"
    pub plural: &'static str,
    pub gender: Gender,
}

/// A record kind exposed through the CRUD endpoints.
pub trait Resource:
    Serialize + DeserializeOwned + Clone + std::fmt::Debug + Send + Sync + 'static
{
    /// Envelope key holding a single record, e.g. `contenido`.
    const KEY: &'static str;
    const LABELS: Labels;

    fn id(&self) -> Option<i64>;

    fn set_id(&mut self, id: Option<i64>);

    /// Overwrite every non-identifier field with the values from `other`.
    /// Write-only fields absent from `other` keep their stored value.
    fn replace_fields(&mut self, other: Self);
}
