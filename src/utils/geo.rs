//! Cálculos geográficos
//!
//! Distancia de círculo máximo (Haversine) entre dos coordenadas y la
//! estimación de tiempo de viaje derivada a velocidad promedio fija.

/// Radio medio de la Tierra en kilómetros
const RADIO_TIERRA_KM: f64 = 6371.0;

/// Velocidad promedio asumida para estimar tiempos de viaje (km/h)
pub const VELOCIDAD_PROMEDIO_KMH: f64 = 80.0;

/// Calcula la distancia entre dos puntos geográficos usando la fórmula de Haversine.
///
/// Recibe latitud/longitud en grados decimales y devuelve la distancia en kilómetros.
pub fn calcular_distancia_haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    RADIO_TIERRA_KM * c
}

/// Estima el tiempo de viaje en horas para una distancia dada,
/// asumiendo la velocidad promedio del sistema.
pub fn estimar_tiempo_horas(distancia_km: f64) -> f64 {
    distancia_km / VELOCIDAD_PROMEDIO_KMH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distancia_cordoba_buenos_aires() {
        // Córdoba (-31.4, -64.2) a Buenos Aires (-34.6, -58.4): ~647 km
        let distancia = calcular_distancia_haversine(-31.4, -64.2, -34.6, -58.4);
        assert!((distancia - 647.24).abs() < 1.0, "distancia inesperada: {}", distancia);
    }

    #[test]
    fn test_distancia_mismo_punto_es_cero() {
        let distancia = calcular_distancia_haversine(-31.4167, -64.1833, -31.4167, -64.1833);
        assert_eq!(distancia, 0.0);
    }

    #[test]
    fn test_distancia_es_simetrica() {
        let ida = calcular_distancia_haversine(-31.4, -64.2, -34.6, -58.4);
        let vuelta = calcular_distancia_haversine(-34.6, -58.4, -31.4, -64.2);
        assert!((ida - vuelta).abs() < 1e-9);
    }

    #[test]
    fn test_estimar_tiempo() {
        // 647 km a 80 km/h ~ 8 horas
        let tiempo = estimar_tiempo_horas(647.24);
        assert!((tiempo - 8.09).abs() < 0.01);
    }
}
