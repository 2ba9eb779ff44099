//! Repositorio de Camiones (servicio-flota)

use sqlx::PgPool;

use crate::models::camion::Camion;
use crate::utils::errors::AppResult;

pub struct CamionRepository {
    pool: PgPool,
}

impl CamionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> AppResult<Vec<Camion>> {
        let camiones = sqlx::query_as::<_, Camion>("SELECT * FROM camiones ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(camiones)
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Camion>> {
        let camion = sqlx::query_as::<_, Camion>("SELECT * FROM camiones WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(camion)
    }

    pub async fn dominio_exists(&self, dominio: &str) -> AppResult<bool> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM camiones WHERE dominio = $1)")
                .bind(dominio)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn crear(
        &self,
        dominio: &str,
        modelo: Option<&str>,
        capacidad_peso: f64,
        capacidad_volumen: f64,
        disponible: bool,
    ) -> AppResult<Camion> {
        let camion = sqlx::query_as::<_, Camion>(
            r#"
            INSERT INTO camiones (dominio, modelo, capacidad_peso, capacidad_volumen, disponible, created_at)
            VALUES ($1, $2, $3, $4, $5, NOW())
            RETURNING *
            "#,
        )
        .bind(dominio)
        .bind(modelo)
        .bind(capacidad_peso)
        .bind(capacidad_volumen)
        .bind(disponible)
        .fetch_one(&self.pool)
        .await?;

        Ok(camion)
    }

    pub async fn actualizar(&self, camion: &Camion) -> AppResult<Camion> {
        let camion = sqlx::query_as::<_, Camion>(
            r#"
            UPDATE camiones
            SET modelo = $2, capacidad_peso = $3, capacidad_volumen = $4, disponible = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(camion.id)
        .bind(&camion.modelo)
        .bind(camion.capacidad_peso)
        .bind(camion.capacidad_volumen)
        .bind(camion.disponible)
        .fetch_one(&self.pool)
        .await?;

        Ok(camion)
    }

    pub async fn eliminar(&self, id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM camiones WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Camiones disponibles con pisos opcionales de capacidad
    pub async fn find_disponibles(
        &self,
        peso_minimo: Option<f64>,
        volumen_minimo: Option<f64>,
    ) -> AppResult<Vec<Camion>> {
        let camiones = sqlx::query_as::<_, Camion>(
            r#"
            SELECT * FROM camiones
            WHERE disponible = TRUE
              AND ($1::DOUBLE PRECISION IS NULL OR capacidad_peso >= $1)
              AND ($2::DOUBLE PRECISION IS NULL OR capacidad_volumen >= $2)
            ORDER BY id
            "#,
        )
        .bind(peso_minimo)
        .bind(volumen_minimo)
        .fetch_all(&self.pool)
        .await?;

        Ok(camiones)
    }

    /// Reserva/liberación idempotente usada por servicio-operaciones
    pub async fn actualizar_disponibilidad(
        &self,
        id: i64,
        disponible: bool,
    ) -> AppResult<Option<Camion>> {
        let camion = sqlx::query_as::<_, Camion>(
            r#"
            UPDATE camiones
            SET disponible = $2
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(disponible)
        .fetch_optional(&self.pool)
        .await?;

        Ok(camion)
    }
}
