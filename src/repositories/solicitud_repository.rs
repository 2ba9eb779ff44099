//! Repositorio de Solicitudes (servicio-operaciones)

use sqlx::{PgConnection, PgPool};

use crate::models::solicitud::Solicitud;
use crate::utils::errors::AppResult;

pub struct SolicitudRepository {
    pool: PgPool,
}

impl SolicitudRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> AppResult<Vec<Solicitud>> {
        let solicitudes = sqlx::query_as::<_, Solicitud>(
            "SELECT * FROM solicitudes ORDER BY fecha_solicitud DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(solicitudes)
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Solicitud>> {
        let solicitud = sqlx::query_as::<_, Solicitud>("SELECT * FROM solicitudes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(solicitud)
    }

    pub async fn find_by_id_conn(
        conn: &mut PgConnection,
        id: i64,
    ) -> AppResult<Option<Solicitud>> {
        let solicitud = sqlx::query_as::<_, Solicitud>("SELECT * FROM solicitudes WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;

        Ok(solicitud)
    }

    /// Solicitud dueña de una ruta, bloqueada para la transacción en curso.
    /// Los tramos cascadean estado hacia la solicitud a través de su ruta.
    pub async fn find_by_ruta_for_update(
        conn: &mut PgConnection,
        ruta_id: i64,
    ) -> AppResult<Option<Solicitud>> {
        let solicitud = sqlx::query_as::<_, Solicitud>(
            "SELECT * FROM solicitudes WHERE ruta_id = $1 FOR UPDATE",
        )
        .bind(ruta_id)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(solicitud)
    }

    pub async fn crear(
        conn: &mut PgConnection,
        cliente_id: i64,
        contenedor_id: i64,
        ruta_id: i64,
        estado: &str,
        observaciones: Option<&str>,
    ) -> AppResult<Solicitud> {
        let solicitud = sqlx::query_as::<_, Solicitud>(
            r#"
            INSERT INTO solicitudes
                (cliente_id, contenedor_id, ruta_id, estado, observaciones,
                 costo_estimado, tiempo_estimado, fecha_solicitud)
            VALUES ($1, $2, $3, $4, $5, 0, 0, NOW())
            RETURNING *
            "#,
        )
        .bind(cliente_id)
        .bind(contenedor_id)
        .bind(ruta_id)
        .bind(estado)
        .bind(observaciones)
        .fetch_one(&mut *conn)
        .await?;

        Ok(solicitud)
    }

    pub async fn actualizar_estado(
        conn: &mut PgConnection,
        id: i64,
        estado: &str,
    ) -> AppResult<Solicitud> {
        let solicitud = sqlx::query_as::<_, Solicitud>(
            r#"
            UPDATE solicitudes
            SET estado = $2
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(estado)
        .fetch_one(&mut *conn)
        .await?;

        Ok(solicitud)
    }

    /// Asocia la ruta definitiva, el nuevo estado y las estimaciones totales.
    pub async fn asignar_ruta(
        conn: &mut PgConnection,
        id: i64,
        ruta_id: i64,
        estado: &str,
        costo_estimado: f64,
        tiempo_estimado: f64,
    ) -> AppResult<Solicitud> {
        let solicitud = sqlx::query_as::<_, Solicitud>(
            r#"
            UPDATE solicitudes
            SET ruta_id = $2, estado = $3, costo_estimado = $4, tiempo_estimado = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(ruta_id)
        .bind(estado)
        .bind(costo_estimado)
        .bind(tiempo_estimado)
        .fetch_one(&mut *conn)
        .await?;

        Ok(solicitud)
    }

    /// Estampa costo y tiempo reales al entregar la solicitud.
    pub async fn completar(
        conn: &mut PgConnection,
        id: i64,
        estado: &str,
        costo_final: f64,
        tiempo_real: f64,
    ) -> AppResult<Solicitud> {
        let solicitud = sqlx::query_as::<_, Solicitud>(
            r#"
            UPDATE solicitudes
            SET estado = $2, costo_final = $3, tiempo_real = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(estado)
        .bind(costo_final)
        .bind(tiempo_real)
        .fetch_one(&mut *conn)
        .await?;

        Ok(solicitud)
    }

    pub async fn eliminar(conn: &mut PgConnection, id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM solicitudes WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        Ok(result.rows_affected())
    }
}
