//! Point-in-polygon membership.
//!
//! Uses the even-odd rule with latitude as x and longitude as y. On the
//! boundary the test is half-open: points on the lower-latitude or
//! lower-longitude side of a ring count as inside, points on the opposite
//! sides as outside. For the unit square `(0,0) (0,1) (1,1) (1,0)` this
//! makes `(0, 0.5)` and `(0.5, 0)` inside while `(1, 0.5)` and `(0.5, 1)`
//! are outside.

use model::{Coordinate, Geofence, MembershipResult, Polygon};
use utility::{geo, id::Id};

pub fn is_inside(point: Coordinate, polygon: &Polygon) -> bool {
    let xy = (point.latitude, point.longitude);
    polygon
        .edges_xy()
        .filter(|&(vi, vj)| geo::ray_crosses_edge(xy, vi, vj))
        .count()
        % 2
        == 1
}

/// One result per geofence, in the order the geofences are given.
pub fn evaluate<'a, I>(point: Coordinate, geofences: I) -> Vec<MembershipResult>
where
    I: IntoIterator<Item = &'a Geofence>,
{
    geofences
        .into_iter()
        .map(|fence| {
            let inside = is_inside(point, &fence.polygon);
            log::debug!(
                "{} contains ({}, {}): {}",
                fence.id,
                point.latitude,
                point.longitude,
                inside
            );
            MembershipResult::new(fence.id.clone(), inside)
        })
        .collect()
}

/// Aggregated view over the results of one evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presence {
    pub matched: Vec<Id<Geofence>>,
    pub evaluated: usize,
}

impl Presence {
    pub fn from_results(results: &[MembershipResult]) -> Self {
        Self {
            matched: results
                .iter()
                .filter(|result| result.inside)
                .map(|result| result.geofence_id.clone())
                .collect(),
            evaluated: results.len(),
        }
    }

    pub fn any_inside(&self) -> bool {
        !self.matched.is_empty()
    }
}
