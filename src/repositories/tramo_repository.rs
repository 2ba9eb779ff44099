//! Repositorio de Tramos (servicio-operaciones)

use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgPool};

use crate::models::tramo::Tramo;
use crate::utils::errors::AppResult;

pub struct TramoRepository {
    pool: PgPool,
}

impl TramoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> AppResult<Vec<Tramo>> {
        let tramos = sqlx::query_as::<_, Tramo>("SELECT * FROM tramos ORDER BY ruta_id, orden")
            .fetch_all(&self.pool)
            .await?;

        Ok(tramos)
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Tramo>> {
        let tramo = sqlx::query_as::<_, Tramo>("SELECT * FROM tramos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(tramo)
    }

    /// Tramo bloqueado para la transacción en curso: assign/start/finish
    /// sobre el mismo tramo se serializan acá.
    pub async fn find_by_id_for_update(
        conn: &mut PgConnection,
        id: i64,
    ) -> AppResult<Option<Tramo>> {
        let tramo = sqlx::query_as::<_, Tramo>("SELECT * FROM tramos WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;

        Ok(tramo)
    }

    pub async fn find_by_ruta_ordenados(&self, ruta_id: i64) -> AppResult<Vec<Tramo>> {
        let tramos =
            sqlx::query_as::<_, Tramo>("SELECT * FROM tramos WHERE ruta_id = $1 ORDER BY orden")
                .bind(ruta_id)
                .fetch_all(&self.pool)
                .await?;

        Ok(tramos)
    }

    /// Tramos asignados a un camión: la hoja de trabajo del transportista.
    pub async fn find_by_camion(&self, camion_id: i64) -> AppResult<Vec<Tramo>> {
        let tramos = sqlx::query_as::<_, Tramo>(
            "SELECT * FROM tramos WHERE camion_id = $1 ORDER BY ruta_id, orden",
        )
        .bind(camion_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(tramos)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn crear(
        conn: &mut PgConnection,
        ruta_id: i64,
        orden: i32,
        tipo: &str,
        estado: &str,
        latitud_inicio: f64,
        longitud_inicio: f64,
        latitud_fin: f64,
        longitud_fin: f64,
        distancia_km: f64,
        tiempo_estimado_horas: f64,
        costo_aproximado: f64,
        fecha_estimada_inicio: Option<DateTime<Utc>>,
        fecha_estimada_fin: Option<DateTime<Utc>>,
    ) -> AppResult<Tramo> {
        let tramo = sqlx::query_as::<_, Tramo>(
            r#"
            INSERT INTO tramos
                (ruta_id, orden, tipo, estado, latitud_inicio, longitud_inicio,
                 latitud_fin, longitud_fin, distancia_km, tiempo_estimado_horas,
                 costo_aproximado, fecha_estimada_inicio, fecha_estimada_fin)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *
            "#,
        )
        .bind(ruta_id)
        .bind(orden)
        .bind(tipo)
        .bind(estado)
        .bind(latitud_inicio)
        .bind(longitud_inicio)
        .bind(latitud_fin)
        .bind(longitud_fin)
        .bind(distancia_km)
        .bind(tiempo_estimado_horas)
        .bind(costo_aproximado)
        .bind(fecha_estimada_inicio)
        .bind(fecha_estimada_fin)
        .fetch_one(&mut *conn)
        .await?;

        Ok(tramo)
    }

    pub async fn marcar_asignado(
        conn: &mut PgConnection,
        id: i64,
        camion_id: i64,
        estado: &str,
    ) -> AppResult<Tramo> {
        let tramo = sqlx::query_as::<_, Tramo>(
            r#"
            UPDATE tramos
            SET camion_id = $2, estado = $3
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(camion_id)
        .bind(estado)
        .fetch_one(&mut *conn)
        .await?;

        Ok(tramo)
    }

    pub async fn marcar_iniciado(
        conn: &mut PgConnection,
        id: i64,
        estado: &str,
        fecha_real_inicio: DateTime<Utc>,
    ) -> AppResult<Tramo> {
        let tramo = sqlx::query_as::<_, Tramo>(
            r#"
            UPDATE tramos
            SET estado = $2, fecha_real_inicio = $3
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(estado)
        .bind(fecha_real_inicio)
        .fetch_one(&mut *conn)
        .await?;

        Ok(tramo)
    }

    pub async fn marcar_finalizado(
        conn: &mut PgConnection,
        id: i64,
        estado: &str,
        fecha_real_fin: DateTime<Utc>,
        costo_real: f64,
    ) -> AppResult<Tramo> {
        let tramo = sqlx::query_as::<_, Tramo>(
            r#"
            UPDATE tramos
            SET estado = $2, fecha_real_fin = $3, costo_real = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(estado)
        .bind(fecha_real_fin)
        .bind(costo_real)
        .fetch_one(&mut *conn)
        .await?;

        Ok(tramo)
    }

    /// Totales reales de una ruta completa: suma de costos reales y ventana
    /// entre el primer inicio y el último fin.
    pub async fn totales_reales_por_ruta(
        conn: &mut PgConnection,
        ruta_id: i64,
    ) -> AppResult<(f64, Option<DateTime<Utc>>, Option<DateTime<Utc>>)> {
        let fila: (Option<f64>, Option<DateTime<Utc>>, Option<DateTime<Utc>>) = sqlx::query_as(
            r#"
            SELECT SUM(costo_real), MIN(fecha_real_inicio), MAX(fecha_real_fin)
            FROM tramos
            WHERE ruta_id = $1
            "#,
        )
        .bind(ruta_id)
        .fetch_one(&mut *conn)
        .await?;

        Ok((fila.0.unwrap_or(0.0), fila.1, fila.2))
    }

    /// Cantidad de tramos de la ruta que aún no están en el estado dado.
    pub async fn contar_distintos_de(
        conn: &mut PgConnection,
        ruta_id: i64,
        estado: &str,
    ) -> AppResult<i64> {
        let fila: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM tramos WHERE ruta_id = $1 AND estado <> $2",
        )
        .bind(ruta_id)
        .bind(estado)
        .fetch_one(&mut *conn)
        .await?;

        Ok(fila.0)
    }

    pub async fn eliminar_por_ruta(conn: &mut PgConnection, ruta_id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM tramos WHERE ruta_id = $1")
            .bind(ruta_id)
            .execute(&mut *conn)
            .await?;

        Ok(result.rows_affected())
    }
}
