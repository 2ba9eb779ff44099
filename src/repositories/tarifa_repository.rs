//! Repositorio de Tarifas
//!
//! Las mutaciones que afectan a la tarifa activa corren dentro de la
//! transacción del servicio; el índice único parcial sobre `activa`
//! respalda la invariante de tarifa única a nivel de base.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{PgConnection, PgPool};

use crate::models::tarifa::Tarifa;
use crate::utils::errors::AppResult;

pub struct TarifaRepository {
    pool: PgPool,
}

impl TarifaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> AppResult<Vec<Tarifa>> {
        let tarifas = sqlx::query_as::<_, Tarifa>(
            "SELECT * FROM tarifas ORDER BY vigencia_desde DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(tarifas)
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Tarifa>> {
        let tarifa = sqlx::query_as::<_, Tarifa>("SELECT * FROM tarifas WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(tarifa)
    }

    pub async fn find_activa(&self) -> AppResult<Option<Tarifa>> {
        let tarifa = sqlx::query_as::<_, Tarifa>("SELECT * FROM tarifas WHERE activa = TRUE")
            .fetch_optional(&self.pool)
            .await?;

        Ok(tarifa)
    }

    pub async fn existe_activa(&self) -> AppResult<bool> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM tarifas WHERE activa = TRUE)")
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    /// Tarifa bloqueada para la transacción de actualización en curso.
    pub async fn find_by_id_for_update(
        conn: &mut PgConnection,
        id: i64,
    ) -> AppResult<Option<Tarifa>> {
        let tarifa = sqlx::query_as::<_, Tarifa>("SELECT * FROM tarifas WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;

        Ok(tarifa)
    }

    /// Desactiva la tarifa activa (si existe) cerrando su vigencia.
    pub async fn desactivar_activa(
        conn: &mut PgConnection,
        ahora: DateTime<Utc>,
    ) -> AppResult<Option<Tarifa>> {
        let tarifa = sqlx::query_as::<_, Tarifa>(
            r#"
            UPDATE tarifas
            SET activa = FALSE, vigencia_hasta = $1
            WHERE activa = TRUE
            RETURNING *
            "#,
        )
        .bind(ahora)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(tarifa)
    }

    pub async fn crear(
        conn: &mut PgConnection,
        tipo: &str,
        valor: Decimal,
        descripcion: Option<&str>,
        vigencia_desde: DateTime<Utc>,
        activa: bool,
    ) -> AppResult<Tarifa> {
        let tarifa = sqlx::query_as::<_, Tarifa>(
            r#"
            INSERT INTO tarifas (tipo, valor, descripcion, vigencia_desde, activa)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(tipo)
        .bind(valor)
        .bind(descripcion)
        .bind(vigencia_desde)
        .bind(activa)
        .fetch_one(&mut *conn)
        .await?;

        Ok(tarifa)
    }

    pub async fn guardar(conn: &mut PgConnection, tarifa: &Tarifa) -> AppResult<Tarifa> {
        let tarifa = sqlx::query_as::<_, Tarifa>(
            r#"
            UPDATE tarifas
            SET tipo = $2, valor = $3, descripcion = $4,
                vigencia_desde = $5, vigencia_hasta = $6, activa = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(tarifa.id)
        .bind(&tarifa.tipo)
        .bind(tarifa.valor)
        .bind(&tarifa.descripcion)
        .bind(tarifa.vigencia_desde)
        .bind(tarifa.vigencia_hasta)
        .bind(tarifa.activa)
        .fetch_one(&mut *conn)
        .await?;

        Ok(tarifa)
    }

    pub async fn eliminar(&self, id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM tarifas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
