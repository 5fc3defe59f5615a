//! Course model.

use serde::{Deserialize, Serialize};

use super::{Gender, Labels, Resource};

/// A course offering. Dates are free-form strings as sent by the client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Curso {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub categoria: Option<String>,
    #[serde(default)]
    pub fecha_inicio: Option<String>,
    #[serde(default)]
    pub fecha_fin: Option<String>,
    #[serde(default)]
    pub instructor: Option<String>,
}

impl Resource for Curso {
    const KEY: &'static str = "curso";
    const LABELS: Labels = Labels {
        singular: "Curso",
        singular_lower: "curso",
        plural: "Cursos",
        gender: Gender::Masculine,
    };

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }

    fn replace_fields(&mut self, other: Self) {
        self.nombre = other.nombre;
        self.descripcion = other.descripcion;
        self.categoria = other.categoria;
        self.fecha_inicio = other.fecha_inicio;
        self.fecha_fin = other.fecha_fin;
        self.instructor = other.instructor;
    }
}
