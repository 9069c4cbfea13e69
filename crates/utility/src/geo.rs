//! Raw geometry on `(latitude, longitude)` pairs in degrees.
//!
//! Membership tests are planar: latitude is used as the x axis and longitude
//! as the y axis, without any spherical correction. That is only accurate for
//! small regions. Distances use the haversine formula.

pub const EARTH_RADIUS_KM: f64 = 6371.0;

fn to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Great-circle distance in kilometers between two points.
pub fn haversine_distance(
    latitude_1: f64,
    longitude_1: f64,
    latitude_2: f64,
    longitude_2: f64,
) -> f64 {
    let lat1_rad = to_radians(latitude_1);
    let lat2_rad = to_radians(latitude_2);

    let dlat = lat2_rad - lat1_rad;
    let dlon = to_radians(longitude_2) - to_radians(longitude_1);

    let a = (dlat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Even-odd crossing test of a single edge.
///
/// Returns `true` if the ray cast from `point` at fixed `y` towards increasing
/// `x` crosses the edge `(vi, vj)`. The `y` comparison is half-open, so a
/// vertex exactly on the ray is counted for one of its two edges only.
/// Horizontal edges (`yi == yj`) never cross.
pub fn ray_crosses_edge(point: (f64, f64), vi: (f64, f64), vj: (f64, f64)) -> bool {
    let (x, y) = point;
    let (xi, yi) = vi;
    let (xj, yj) = vj;

    if yi == yj {
        return false;
    }
    (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_edge_never_crosses() {
        assert!(!ray_crosses_edge((0.5, 0.0), (0.0, 0.0), (1.0, 0.0)));
        assert!(!ray_crosses_edge((-1.0, 0.0), (0.0, 0.0), (1.0, 0.0)));
    }

    #[test]
    fn vertical_edge_to_the_right_crosses() {
        assert!(ray_crosses_edge((0.5, 0.5), (1.0, 0.0), (1.0, 1.0)));
        assert!(!ray_crosses_edge((1.5, 0.5), (1.0, 0.0), (1.0, 1.0)));
    }

    #[test]
    fn haversine_of_identical_points_is_zero() {
        assert_eq!(haversine_distance(28.48, 77.10, 28.48, 77.10), 0.0);
    }

    #[test]
    fn haversine_one_degree_of_latitude() {
        let distance = haversine_distance(0.0, 0.0, 1.0, 0.0);
        assert!((distance - 111.19).abs() < 0.01, "got {distance}");
    }
}
