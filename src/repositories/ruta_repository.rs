//! Repositorio de Rutas (servicio-operaciones)

use sqlx::{PgConnection, PgPool};

use crate::models::ruta::Ruta;
use crate::utils::errors::AppResult;

pub struct RutaRepository {
    pool: PgPool,
}

impl RutaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Ruta>> {
        let ruta = sqlx::query_as::<_, Ruta>("SELECT * FROM rutas WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(ruta)
    }

    pub async fn find_by_id_conn(conn: &mut PgConnection, id: i64) -> AppResult<Option<Ruta>> {
        let ruta = sqlx::query_as::<_, Ruta>("SELECT * FROM rutas WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;

        Ok(ruta)
    }

    /// Ruta borrador creada junto con la solicitud: coordenadas cargadas,
    /// distancia y tiempo en cero hasta que el planificador las calcule.
    pub async fn crear_borrador(
        conn: &mut PgConnection,
        origen: Option<&str>,
        destino: Option<&str>,
        latitud_origen: f64,
        longitud_origen: f64,
        latitud_destino: f64,
        longitud_destino: f64,
    ) -> AppResult<Ruta> {
        let ruta = sqlx::query_as::<_, Ruta>(
            r#"
            INSERT INTO rutas
                (origen, destino, latitud_origen, longitud_origen,
                 latitud_destino, longitud_destino, distancia_km,
                 tiempo_estimado_horas, cantidad_tramos, tramos_restantes)
            VALUES ($1, $2, $3, $4, $5, $6, 0, 0, 0, 0)
            RETURNING *
            "#,
        )
        .bind(origen)
        .bind(destino)
        .bind(latitud_origen)
        .bind(longitud_origen)
        .bind(latitud_destino)
        .bind(longitud_destino)
        .fetch_one(&mut *conn)
        .await?;

        Ok(ruta)
    }

    /// Ruta definitiva con totales agregados y contador de tramos pendientes.
    #[allow(clippy::too_many_arguments)]
    pub async fn crear_definitiva(
        conn: &mut PgConnection,
        origen: Option<&str>,
        destino: Option<&str>,
        latitud_origen: f64,
        longitud_origen: f64,
        latitud_destino: f64,
        longitud_destino: f64,
        distancia_km: f64,
        tiempo_estimado_horas: f64,
        cantidad_tramos: i32,
    ) -> AppResult<Ruta> {
        let ruta = sqlx::query_as::<_, Ruta>(
            r#"
            INSERT INTO rutas
                (origen, destino, latitud_origen, longitud_origen,
                 latitud_destino, longitud_destino, distancia_km,
                 tiempo_estimado_horas, cantidad_tramos, tramos_restantes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
            RETURNING *
            "#,
        )
        .bind(origen)
        .bind(destino)
        .bind(latitud_origen)
        .bind(longitud_origen)
        .bind(latitud_destino)
        .bind(longitud_destino)
        .bind(distancia_km)
        .bind(tiempo_estimado_horas)
        .bind(cantidad_tramos)
        .fetch_one(&mut *conn)
        .await?;

        Ok(ruta)
    }

    /// Decrementa el contador de tramos sin finalizar y devuelve el valor
    /// resultante. La decisión "soy el último tramo" es atómica con el
    /// decremento dentro de la transacción de finalización.
    pub async fn decrementar_tramos_restantes(
        conn: &mut PgConnection,
        ruta_id: i64,
    ) -> AppResult<i32> {
        let restantes: (i32,) = sqlx::query_as(
            r#"
            UPDATE rutas
            SET tramos_restantes = tramos_restantes - 1
            WHERE id = $1
            RETURNING tramos_restantes
            "#,
        )
        .bind(ruta_id)
        .fetch_one(&mut *conn)
        .await?;

        Ok(restantes.0)
    }

    pub async fn eliminar(conn: &mut PgConnection, id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM rutas WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        Ok(result.rows_affected())
    }
}
