//! Geofences compiled into the application.

use model::{Coordinate, Geofence, Polygon};
use utility::id::Id;

const PREDEFINED: [(&str, [(f64, f64); 4]); 3] = [
    (
        // office
        "geofence1",
        [
            (28.48173831717597, 77.10746827788579),
            (28.48171120501472, 77.10715848275196),
            (28.481580948664778, 77.07993296606332),
            (28.481572697125902, 77.1071578121997),
        ],
    ),
    (
        "geofence2",
        [
            (28.480220935800702, 77.10208252020924),
            (28.480226608537322, 77.10193408374754),
            (28.47985788002279, 77.10194053750674),
            (28.479869225534735, 77.10183727735945),
        ],
    ),
    (
        "geofence3",
        [
            (28.481291286776568, 77.10194976533356),
            (28.481265942692694, 77.10219652855706),
            (28.48120523474612, 77.10215562487055),
            (28.48122350607351, 77.10193970705001),
        ],
    ),
];

/// The built-in geofences, in their fixed order.
///
/// # Panics
/// Panics if a compiled-in polygon has fewer than three vertices.
pub fn load_predefined() -> Vec<Geofence> {
    PREDEFINED
        .iter()
        .map(|(id, vertices)| {
            let vertices = vertices
                .iter()
                .map(|&(latitude, longitude)| Coordinate::new_unchecked(latitude, longitude))
                .collect();
            let polygon =
                Polygon::new(vertices).expect("predefined geofence must be a valid polygon");
            Geofence::predefined(Id::from(*id), polygon)
        })
        .collect()
}
