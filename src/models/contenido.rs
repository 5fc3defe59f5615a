//! Learning content model (videos, documents, links).

use serde::{Deserialize, Serialize};

use super::{Gender, Labels, Resource};

/// A piece of course material.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contenido {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub titulo: Option<String>,
    #[serde(default)]
    pub tipo: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub nivel: Option<String>,
}

impl Resource for Contenido {
    const KEY: &'static str = "contenido";
    const LABELS: Labels = Labels {
        singular: "Contenido",
        singular_lower: "contenido",
        plural: "Contenidos",
        gender: Gender::Masculine,
    };

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }

    fn replace_fields(&mut self, other: Self) {
        self.titulo = other.titulo;
        self.tipo = other.tipo;
        self.url = other.url;
        self.nivel = other.nivel;
    }
}
