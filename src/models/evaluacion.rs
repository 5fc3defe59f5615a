//! Evaluation model.

use serde::{Deserialize, Serialize};

use super::{Gender, Labels, Resource};

/// An assessment attached to a course: quiz, assignment, oral exam.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluacion {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub tipo: Option<String>,
    #[serde(default)]
    pub puntaje_maximo: Option<i32>,
    #[serde(default)]
    pub ponderacion: Option<String>,
}

impl Resource for Evaluacion {
    const KEY: &'static str = "evaluacion";
    const LABELS: Labels = Labels {
        singular: "Evaluación",
        singular_lower: "evaluación",
        plural: "Evaluaciones",
        gender: Gender::Feminine,
    };

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }

    fn replace_fields(&mut self, other: Self) {
        self.nombre = other.nombre;
        self.tipo = other.tipo;
        self.puntaje_maximo = other.puntaje_maximo;
        self.ponderacion = other.ponderacion;
    }
}
