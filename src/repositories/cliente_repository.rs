//! Repositorio de Clientes (servicio-operaciones)

use sqlx::{PgConnection, PgPool};

use crate::dto::solicitud_dto::ClienteCreateDTO;
use crate::models::cliente::Cliente;
use crate::utils::errors::AppResult;

pub struct ClienteRepository {
    pool: PgPool,
}

impl ClienteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> AppResult<Vec<Cliente>> {
        let clientes = sqlx::query_as::<_, Cliente>("SELECT * FROM clientes ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(clientes)
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Cliente>> {
        let cliente = sqlx::query_as::<_, Cliente>("SELECT * FROM clientes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(cliente)
    }

    pub async fn find_by_id_conn(
        conn: &mut PgConnection,
        id: i64,
    ) -> AppResult<Option<Cliente>> {
        let cliente = sqlx::query_as::<_, Cliente>("SELECT * FROM clientes WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;

        Ok(cliente)
    }

    pub async fn crear(conn: &mut PgConnection, dto: &ClienteCreateDTO) -> AppResult<Cliente> {
        let cliente = sqlx::query_as::<_, Cliente>(
            r#"
            INSERT INTO clientes (nombre, email, telefono, direccion)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&dto.nombre)
        .bind(&dto.email)
        .bind(&dto.telefono)
        .bind(&dto.direccion)
        .fetch_one(&mut *conn)
        .await?;

        Ok(cliente)
    }
}
