//! Repositorio de referencias locales de camiones (servicio-operaciones)
//!
//! La fila de referencia es el recurso más disputado del sistema: dos
//! asignaciones concurrentes sobre el mismo camión se serializan con el
//! lock de fila que toman el upsert y el SELECT ... FOR UPDATE.

use chrono::Utc;
use sqlx::{PgConnection, PgPool};

use crate::models::camion::Camion;
use crate::models::camion_reference::CamionReference;
use crate::utils::errors::AppResult;

pub struct CamionReferenceRepository {
    pool: PgPool,
}

impl CamionReferenceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<CamionReference>> {
        let referencia =
            sqlx::query_as::<_, CamionReference>("SELECT * FROM camion_references WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(referencia)
    }

    pub async fn find_by_id_for_update(
        conn: &mut PgConnection,
        id: i64,
    ) -> AppResult<Option<CamionReference>> {
        let referencia = sqlx::query_as::<_, CamionReference>(
            "SELECT * FROM camion_references WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(referencia)
    }

    /// Refresca identidad y capacidades desde los datos del servicio-flota.
    ///
    /// El bit `disponible` local NO se pisa en el conflicto: entre una
    /// asignación confirmada y su liberación, la referencia local es la
    /// autoridad sobre la disponibilidad. La fila queda bloqueada para la
    /// transacción en curso.
    pub async fn upsert_desde_flota(
        conn: &mut PgConnection,
        camion: &Camion,
    ) -> AppResult<CamionReference> {
        let referencia = sqlx::query_as::<_, CamionReference>(
            r#"
            INSERT INTO camion_references
                (id, dominio, capacidad_peso, capacidad_volumen, disponible, actualizado_en)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE
            SET dominio = EXCLUDED.dominio,
                capacidad_peso = EXCLUDED.capacidad_peso,
                capacidad_volumen = EXCLUDED.capacidad_volumen,
                actualizado_en = EXCLUDED.actualizado_en
            RETURNING *
            "#,
        )
        .bind(camion.id)
        .bind(&camion.dominio)
        .bind(camion.capacidad_peso)
        .bind(camion.capacidad_volumen)
        .bind(camion.disponible)
        .bind(Utc::now())
        .fetch_one(&mut *conn)
        .await?;

        Ok(referencia)
    }

    pub async fn actualizar_disponibilidad(
        conn: &mut PgConnection,
        id: i64,
        disponible: bool,
    ) -> AppResult<CamionReference> {
        let referencia = sqlx::query_as::<_, CamionReference>(
            r#"
            UPDATE camion_references
            SET disponible = $2, actualizado_en = $3
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(disponible)
        .bind(Utc::now())
        .fetch_one(&mut *conn)
        .await?;

        Ok(referencia)
    }
}
