//! Great-circle distance and radius ranking.
//!
//! Records are scanned linearly; there is no spatial index.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Mean Earth radius in kilometres (for Haversine formula)
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Null Island, used for records stored without coordinates
    pub const ORIGIN: GeoPoint = GeoPoint {
        latitude: 0.0,
        longitude: 0.0,
    };

    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Builds a point from optional columns, falling back to (0,0) per axis.
    pub fn or_origin(latitude: Option<f64>, longitude: Option<f64>) -> Self {
        Self {
            latitude: latitude.unwrap_or(Self::ORIGIN.latitude),
            longitude: longitude.unwrap_or(Self::ORIGIN.longitude),
        }
    }
}

/// Calculate Haversine distance between two points in kilometres
pub fn haversine_km(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let lat1_rad = from.latitude.to_radians();
    let lat2_rad = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lon = (to.longitude - from.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Anything with a position that can be ranked by distance.
pub trait Located {
    fn location(&self) -> GeoPoint;
}

/// A record paired with its distance from the query origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked<T> {
    pub item: T,
    pub distance_km: f64,
}

/// Keeps the items within `radius_km` of `origin`, nearest first.
///
/// The boundary is inclusive. Equal distances keep their input order.
pub fn within_radius<T, I>(origin: &GeoPoint, radius_km: f64, items: I) -> Vec<Ranked<T>>
where
    T: Located,
    I: IntoIterator<Item = T>,
{
    let mut ranked: Vec<Ranked<T>> = items
        .into_iter()
        .map(|item| {
            let distance_km = haversine_km(origin, &item.location());
            Ranked { item, distance_km }
        })
        .filter(|r| r.distance_km <= radius_km)
        .collect();

    ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Pin(&'static str, GeoPoint);

    impl Located for Pin {
        fn location(&self) -> GeoPoint {
            self.1
        }
    }

    const DOUALA: GeoPoint = GeoPoint {
        latitude: 4.05,
        longitude: 9.70,
    };

    #[test]
    fn test_haversine_same_point_is_zero() {
        assert_eq!(haversine_km(&DOUALA, &DOUALA), 0.0);
    }

    #[test]
    fn test_haversine_is_symmetric() {
        let yaounde = GeoPoint::new(3.848, 11.502);
        let there = haversine_km(&DOUALA, &yaounde);
        let back = haversine_km(&yaounde, &DOUALA);
        assert!((there - back).abs() < 1e-9);
    }

    #[test]
    fn test_haversine_known_distance() {
        // Douala to Yaounde is roughly 200km as the crow flies
        let yaounde = GeoPoint::new(3.848, 11.502);
        let distance = haversine_km(&DOUALA, &yaounde);
        assert!(distance > 190.0 && distance < 215.0, "got {}", distance);
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let distance = haversine_km(&GeoPoint::ORIGIN, &GeoPoint::new(1.0, 0.0));
        assert!((distance - 111.19).abs() < 0.1, "got {}", distance);
    }

    #[test]
    fn test_within_radius_filters_and_sorts() {
        let pins = vec![
            Pin("far", GeoPoint::new(4.20, 9.90)),
            Pin("mid", GeoPoint::new(4.06, 9.71)),
            Pin("near", GeoPoint::new(4.051, 9.701)),
        ];

        let ranked = within_radius(&DOUALA, 5.0, pins);

        let names: Vec<&str> = ranked.iter().map(|r| r.item.0).collect();
        assert_eq!(names, vec!["near", "mid"]);
        assert!(ranked[0].distance_km <= ranked[1].distance_km);
        assert!(ranked.iter().all(|r| r.distance_km <= 5.0));
    }

    #[test]
    fn test_within_radius_zero_keeps_exact_matches() {
        let pins = vec![Pin("here", DOUALA), Pin("next door", GeoPoint::new(4.0501, 9.70))];
        let ranked = within_radius(&DOUALA, 0.0, pins);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].item.0, "here");
    }

    #[test]
    fn test_or_origin_falls_back_per_axis() {
        assert_eq!(GeoPoint::or_origin(None, None), GeoPoint::ORIGIN);
        assert_eq!(GeoPoint::or_origin(Some(4.0), None), GeoPoint::new(4.0, 0.0));
    }
}
