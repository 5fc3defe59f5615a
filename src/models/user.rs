//! Platform user model and login request.

use serde::{Deserialize, Serialize};

use super::{Gender, Labels, Resource};

/// A platform account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    /// Stored as given; accepted on input, never echoed back
    #[serde(default, skip_serializing)]
    pub password: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

impl Resource for User {
    const KEY: &'static str = "user";
    const LABELS: Labels = Labels {
        singular: "Usuario",
        singular_lower: "usuario",
        plural: "Usuarios",
        gender: Gender::Masculine,
    };

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }

    fn replace_fields(&mut self, other: Self) {
        self.full_name = other.full_name;
        self.username = other.username;
        // Write-only field: a body without it keeps the stored password
        if other.password.is_some() {
            self.password = other.password;
        }
        self.email = other.email;
        self.is_admin = other.is_admin;
    }
}

/// Request body for `POST /users/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}
