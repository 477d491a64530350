use crate::models::{BoundingBox, GeoPoint};

/// Earth's radius in meters
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Widening applied to the box so points at exactly the radius stay inside
const BOX_SLACK: f64 = 1.01;

/// Great-circle (Haversine) distance between two points in meters
#[inline]
pub fn haversine_distance(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let lat1_rad = from.latitude.to_radians();
    let lat2_rad = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lon = (to.longitude - from.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

/// Calculate a bounding box around a center point
///
/// Used as a cheap pre-filter before the exact Haversine check. The
/// longitude half-width is `asin(sin(d) / cos(lat))` for angular distance
/// `d`, which stays exact at high latitudes. When the radius reaches a pole
/// the box spans every longitude. Longitudes are not normalised here, so
/// `min_lon` may fall below -180 or `max_lon` above 180 near the
/// antimeridian; use [`BoundingBox::longitude_ranges`] to query it.
pub fn calculate_bounding_box(center: &GeoPoint, radius_m: f64) -> BoundingBox {
    let angular = radius_m / EARTH_RADIUS_M * BOX_SLACK;
    let lat_delta = angular.to_degrees();

    let min_lat = center.latitude - lat_delta;
    let max_lat = center.latitude + lat_delta;

    if min_lat <= -90.0 || max_lat >= 90.0 || angular >= std::f64::consts::FRAC_PI_2 {
        return BoundingBox {
            min_lat: min_lat.max(-90.0),
            max_lat: max_lat.min(90.0),
            min_lon: -180.0,
            max_lon: 180.0,
        };
    }

    let ratio = angular.sin() / center.latitude.to_radians().cos();
    let lon_delta = if ratio >= 1.0 { 180.0 } else { ratio.asin().to_degrees() };

    BoundingBox {
        min_lat,
        max_lat,
        min_lon: center.longitude - lon_delta,
        max_lon: center.longitude + lon_delta,
    }
}

/// Check if a point is within a bounding box, wrapping at the antimeridian
#[inline]
pub fn is_within_bounding_box(point: &GeoPoint, bbox: &BoundingBox) -> bool {
    point.latitude >= bbox.min_lat
        && point.latitude <= bbox.max_lat
        && bbox
            .longitude_ranges()
            .iter()
            .any(|(min, max)| point.longitude >= *min && point.longitude <= *max)
}

/// Point offset due north by `meters` along a meridian
///
/// Exact under the Haversine model, which makes it handy for building
/// candidates at a known distance.
pub fn offset_north(origin: &GeoPoint, meters: f64) -> GeoPoint {
    let delta_deg = (meters / EARTH_RADIUS_M).to_degrees();
    GeoPoint::new(origin.longitude, origin.latitude + delta_deg)
}
