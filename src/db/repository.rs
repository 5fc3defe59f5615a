//! Database repository for CRUD operations.
//!
//! Uses prepared statements. Inserts let SQLite assign the id; updates only
//! touch an existing row and report a miss through `rows_affected`.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use super::{RecordStore, UserStore};
use crate::errors::AppError;
use crate::models::{Contenido, Curso, Evaluacion, User};

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Delete one row by id, reporting whether it existed.
    async fn delete_row(&self, table: &str, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query(&format!("DELETE FROM {} WHERE id = ?", table))
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// The record as written by an `UPDATE … WHERE id = ?`, or `None` if no row matched.
fn updated<R>(result: &sqlx::sqlite::SqliteQueryResult, record: R) -> Option<R> {
    (result.rows_affected() > 0).then_some(record)
}

// ==================== CONTENIDO OPERATIONS ====================

#[async_trait]
impl RecordStore<Contenido> for Repository {
    async fn insert(&self, mut record: Contenido) -> Result<Contenido, AppError> {
        let result =
            sqlx::query("INSERT INTO contenidos (titulo, tipo, url, nivel) VALUES (?, ?, ?, ?)")
                .bind(&record.titulo)
                .bind(&record.tipo)
                .bind(&record.url)
                .bind(&record.nivel)
                .execute(&self.pool)
                .await?;

        record.id = Some(result.last_insert_rowid());
        Ok(record)
    }

    async fn update(&self, id: i64, mut record: Contenido) -> Result<Option<Contenido>, AppError> {
        let result = sqlx::query(
            "UPDATE contenidos SET titulo = ?, tipo = ?, url = ?, nivel = ? WHERE id = ?",
        )
        .bind(&record.titulo)
        .bind(&record.tipo)
        .bind(&record.url)
        .bind(&record.nivel)
        .bind(id)
        .execute(&self.pool)
        .await?;

        record.id = Some(id);
        Ok(updated(&result, record))
    }

    async fn find_all(&self) -> Result<Vec<Contenido>, AppError> {
        let rows = sqlx::query("SELECT id, titulo, tipo, url, nivel FROM contenidos ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(contenido_from_row).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Contenido>, AppError> {
        let row = sqlx::query("SELECT id, titulo, tipo, url, nivel FROM contenidos WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(contenido_from_row))
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        self.delete_row("contenidos", id).await
    }
}

// ==================== CURSO OPERATIONS ====================

#[async_trait]
impl RecordStore<Curso> for Repository {
    async fn insert(&self, mut record: Curso) -> Result<Curso, AppError> {
        let result = sqlx::query(
            "INSERT INTO cursos \
             (nombre, descripcion, categoria, fecha_inicio, fecha_fin, instructor) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&record.nombre)
        .bind(&record.descripcion)
        .bind(&record.categoria)
        .bind(&record.fecha_inicio)
        .bind(&record.fecha_fin)
        .bind(&record.instructor)
        .execute(&self.pool)
        .await?;

        record.id = Some(result.last_insert_rowid());
        Ok(record)
    }

    async fn update(&self, id: i64, mut record: Curso) -> Result<Option<Curso>, AppError> {
        let result = sqlx::query(
            "UPDATE cursos SET nombre = ?, descripcion = ?, categoria = ?, fecha_inicio = ?, \
             fecha_fin = ?, instructor = ? WHERE id = ?",
        )
        .bind(&record.nombre)
        .bind(&record.descripcion)
        .bind(&record.categoria)
        .bind(&record.fecha_inicio)
        .bind(&record.fecha_fin)
        .bind(&record.instructor)
        .bind(id)
        .execute(&self.pool)
        .await?;

        record.id = Some(id);
        Ok(updated(&result, record))
    }

    async fn find_all(&self) -> Result<Vec<Curso>, AppError> {
        let rows = sqlx::query(
            "SELECT id, nombre, descripcion, categoria, fecha_inicio, fecha_fin, instructor \
             FROM cursos ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(curso_from_row).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Curso>, AppError> {
        let row = sqlx::query(
            "SELECT id, nombre, descripcion, categoria, fecha_inicio, fecha_fin, instructor \
             FROM cursos WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(curso_from_row))
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        self.delete_row("cursos", id).await
    }
}

// ==================== EVALUACION OPERATIONS ====================

#[async_trait]
impl RecordStore<Evaluacion> for Repository {
    async fn insert(&self, mut record: Evaluacion) -> Result<Evaluacion, AppError> {
        let result = sqlx::query(
            "INSERT INTO evaluaciones (nombre, tipo, puntaje_maximo, ponderacion) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(&record.nombre)
        .bind(&record.tipo)
        .bind(record.puntaje_maximo)
        .bind(&record.ponderacion)
        .execute(&self.pool)
        .await?;

        record.id = Some(result.last_insert_rowid());
        Ok(record)
    }

    async fn update(
        &self,
        id: i64,
        mut record: Evaluacion,
    ) -> Result<Option<Evaluacion>, AppError> {
        let result = sqlx::query(
            "UPDATE evaluaciones SET nombre = ?, tipo = ?, puntaje_maximo = ?, ponderacion = ? \
             WHERE id = ?",
        )
        .bind(&record.nombre)
        .bind(&record.tipo)
        .bind(record.puntaje_maximo)
        .bind(&record.ponderacion)
        .bind(id)
        .execute(&self.pool)
        .await?;

        record.id = Some(id);
        Ok(updated(&result, record))
    }

    async fn find_all(&self) -> Result<Vec<Evaluacion>, AppError> {
        let rows = sqlx::query(
            "SELECT id, nombre, tipo, puntaje_maximo, ponderacion FROM evaluaciones ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(evaluacion_from_row).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Evaluacion>, AppError> {
        let row = sqlx::query(
            "SELECT id, nombre, tipo, puntaje_maximo, ponderacion FROM evaluaciones WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(evaluacion_from_row))
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        self.delete_row("evaluaciones", id).await
    }
}

// ==================== USER OPERATIONS ====================

#[async_trait]
impl RecordStore<User> for Repository {
    async fn insert(&self, mut record: User) -> Result<User, AppError> {
        let result = sqlx::query(
            "INSERT INTO users (full_name, username, password, email, is_admin) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&record.full_name)
        .bind(&record.username)
        .bind(&record.password)
        .bind(&record.email)
        .bind(record.is_admin as i32)
        .execute(&self.pool)
        .await?;

        record.id = Some(result.last_insert_rowid());
        Ok(record)
    }

    async fn update(&self, id: i64, mut record: User) -> Result<Option<User>, AppError> {
        let result = sqlx::query(
            "UPDATE users SET full_name = ?, username = ?, password = ?, email = ?, is_admin = ? \
             WHERE id = ?",
        )
        .bind(&record.full_name)
        .bind(&record.username)
        .bind(&record.password)
        .bind(&record.email)
        .bind(record.is_admin as i32)
        .bind(id)
        .execute(&self.pool)
        .await?;

        record.id = Some(id);
        Ok(updated(&result, record))
    }

    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query(
            "SELECT id, full_name, username, password, email, is_admin FROM users ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(user_from_row).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let row = sqlx::query(
            "SELECT id, full_name, username, password, email, is_admin FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(user_from_row))
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        self.delete_row("users", id).await
    }
}

#[async_trait]
impl UserStore for Repository {
    async fn find_by_email(&self, email: &str) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query(
            "SELECT id, full_name, username, password, email, is_admin FROM users \
             WHERE email = ? ORDER BY id",
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(user_from_row).collect())
    }
}

// Helper functions for row conversion

fn contenido_from_row(row: &sqlx::sqlite::SqliteRow) -> Contenido {
    Contenido {
        id: Some(row.get("id")),
        titulo: row.get("titulo"),
        tipo: row.get("tipo"),
        url: row.get("url"),
        nivel: row.get("nivel"),
    }
}

fn curso_from_row(row: &sqlx::sqlite::SqliteRow) -> Curso {
    Curso {
        id: Some(row.get("id")),
        nombre: row.get("nombre"),
        descripcion: row.get("descripcion"),
        categoria: row.get("categoria"),
        fecha_inicio: row.get("fecha_inicio"),
        fecha_fin: row.get("fecha_fin"),
        instructor: row.get("instructor"),
    }
}

fn evaluacion_from_row(row: &sqlx::sqlite::SqliteRow) -> Evaluacion {
    Evaluacion {
        id: Some(row.get("id")),
        nombre: row.get("nombre"),
        tipo: row.get("tipo"),
        puntaje_maximo: row.get("puntaje_maximo"),
        ponderacion: row.get("ponderacion"),
    }
}

fn user_from_row(row: &sqlx::sqlite::SqliteRow) -> User {
    let is_admin: i32 = row.get("is_admin");
    User {
        id: Some(row.get("id")),
        full_name: row.get("full_name"),
        username: row.get("username"),
        password: row.get("password"),
        email: row.get("email"),
        is_admin: is_admin != 0,
    }
}
