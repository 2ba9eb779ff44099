//! Repositorio de Contenedores (servicio-operaciones)

use sqlx::{PgConnection, PgPool};

use crate::models::contenedor::Contenedor;
use crate::utils::errors::AppResult;

pub struct ContenedorRepository {
    pool: PgPool,
}

impl ContenedorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> AppResult<Vec<Contenedor>> {
        let contenedores = sqlx::query_as::<_, Contenedor>("SELECT * FROM contenedores ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(contenedores)
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Contenedor>> {
        let contenedor = sqlx::query_as::<_, Contenedor>("SELECT * FROM contenedores WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(contenedor)
    }

    pub async fn find_by_id_conn(
        conn: &mut PgConnection,
        id: i64,
    ) -> AppResult<Option<Contenedor>> {
        let contenedor = sqlx::query_as::<_, Contenedor>("SELECT * FROM contenedores WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;

        Ok(contenedor)
    }

    pub async fn crear(
        conn: &mut PgConnection,
        peso: f64,
        volumen: f64,
        estado: &str,
        cliente_id: i64,
    ) -> AppResult<Contenedor> {
        let contenedor = sqlx::query_as::<_, Contenedor>(
            r#"
            INSERT INTO contenedores (peso, volumen, estado, cliente_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(peso)
        .bind(volumen)
        .bind(estado)
        .bind(cliente_id)
        .fetch_one(&mut *conn)
        .await?;

        Ok(contenedor)
    }

    pub async fn actualizar_estado(
        conn: &mut PgConnection,
        id: i64,
        estado: &str,
    ) -> AppResult<Contenedor> {
        let contenedor = sqlx::query_as::<_, Contenedor>(
            r#"
            UPDATE contenedores
            SET estado = $2
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(estado)
        .fetch_one(&mut *conn)
        .await?;

        Ok(contenedor)
    }

    pub async fn eliminar(conn: &mut PgConnection, id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM contenedores WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        Ok(result.rows_affected())
    }
}
