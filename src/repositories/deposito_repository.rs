//! Repositorio de Depósitos (servicio-flota)

use sqlx::PgPool;

use crate::models::deposito::Deposito;
use crate::utils::errors::AppResult;

pub struct DepositoRepository {
    pool: PgPool,
}

impl DepositoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> AppResult<Vec<Deposito>> {
        let depositos = sqlx::query_as::<_, Deposito>("SELECT * FROM depositos ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(depositos)
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Deposito>> {
        let deposito = sqlx::query_as::<_, Deposito>("SELECT * FROM depositos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(deposito)
    }

    pub async fn crear(
        &self,
        nombre: &str,
        direccion: Option<&str>,
        latitud: f64,
        longitud: f64,
        costo_estadia_dia: f64,
    ) -> AppResult<Deposito> {
        let deposito = sqlx::query_as::<_, Deposito>(
            r#"
            INSERT INTO depositos (nombre, direccion, latitud, longitud, costo_estadia_dia)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(nombre)
        .bind(direccion)
        .bind(latitud)
        .bind(longitud)
        .bind(costo_estadia_dia)
        .fetch_one(&self.pool)
        .await?;

        Ok(deposito)
    }

    pub async fn actualizar(&self, deposito: &Deposito) -> AppResult<Deposito> {
        let deposito = sqlx::query_as::<_, Deposito>(
            r#"
            UPDATE depositos
            SET nombre = $2, direccion = $3, latitud = $4, longitud = $5, costo_estadia_dia = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(deposito.id)
        .bind(&deposito.nombre)
        .bind(&deposito.direccion)
        .bind(deposito.latitud)
        .bind(deposito.longitud)
        .bind(deposito.costo_estadia_dia)
        .fetch_one(&self.pool)
        .await?;

        Ok(deposito)
    }

    pub async fn eliminar(&self, id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM depositos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
