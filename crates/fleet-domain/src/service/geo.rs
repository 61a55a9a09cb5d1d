//! Great-circle distance between two coordinates

use std::str::FromStr;

use fleet_types::ValidationError;
use geo::{Distance, Haversine, Point};
use serde::{Deserialize, Serialize};

/// WGS84 latitude/longitude in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Result<Self, ValidationError> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(ValidationError::InvalidCoordinate(format!("latitude {} out of range", lat)));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(ValidationError::InvalidCoordinate(format!("longitude {} out of range", lon)));
        }
        Ok(Self { lat, lon })
    }
}

impl FromStr for GeoPoint {
    type Err = ValidationError;

    /// Parse "lat,lon"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidCoordinate(format!("expected \"lat,lon\", got \"{}\"", s));
        let (lat, lon) = s.split_once(',').ok_or_else(invalid)?;
        let lat: f64 = lat.trim().parse().map_err(|_| invalid())?;
        let lon: f64 = lon.trim().parse().map_err(|_| invalid())?;
        GeoPoint::new(lat, lon)
    }
}

impl From<GeoPoint> for Point {
    fn from(p: GeoPoint) -> Self {
        Point::new(p.lon, p.lat)
    }
}

/// Haversine distance in km
pub fn haversine_km(from: GeoPoint, to: GeoPoint) -> f64 {
    Haversine.distance(Point::from(from), Point::from(to)) / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_point_is_zero() {
        let p = GeoPoint::new(5.3599, -4.0083).unwrap();
        assert_eq!(haversine_km(p, p), 0.0);
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let a = GeoPoint::new(0.0, 0.0).unwrap();
        let b = GeoPoint::new(1.0, 0.0).unwrap();
        assert!((haversine_km(a, b) - 111.195).abs() < 0.01);
    }

    #[test]
    fn test_abidjan_to_yamoussoukro() {
        let abidjan: GeoPoint = "5.3599,-4.0083".parse().unwrap();
        let yamoussoukro: GeoPoint = "6.8276, -5.2893".parse().unwrap();
        let d = haversine_km(abidjan, yamoussoukro);
        assert!(d > 210.0 && d < 230.0, "got {}", d);
    }

    #[test]
    fn test_symmetric() {
        let a = GeoPoint::new(48.8566, 2.3522).unwrap();
        let b = GeoPoint::new(51.5074, -0.1278).unwrap();
        assert!((haversine_km(a, b) - haversine_km(b, a)).abs() < 1e-9);
    }

    #[test]
    fn test_point_is_lon_lat() {
        let point = Point::from(GeoPoint::new(5.3599, -4.0083).unwrap());
        assert_eq!(point.x(), -4.0083);
        assert_eq!(point.y(), 5.3599);
    }

    #[test]
    fn test_invalid_coordinates() {
        assert!(GeoPoint::new(91.0, 0.0).is_err());
        assert!(GeoPoint::new(0.0, -181.0).is_err());
        assert!("12.5".parse::<GeoPoint>().is_err());
        assert!("north,east".parse::<GeoPoint>().is_err());
    }
}
