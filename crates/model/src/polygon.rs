use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::{Coordinate, GeometryError};

/// A closed ring of at least three vertices. The ring is implicitly closed:
/// the last vertex connects back to the first, so it must not be repeated.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct Polygon {
    vertices: Vec<Coordinate>,
}

impl Polygon {
    pub const MIN_VERTICES: usize = 3;

    pub fn new(vertices: Vec<Coordinate>) -> Result<Self, GeometryError> {
        if vertices.len() < Self::MIN_VERTICES {
            return Err(GeometryError::MalformedPolygon {
                vertices: vertices.len(),
            });
        }
        Ok(Self { vertices })
    }

    /// Axis-aligned square around `center`, listed clockwise starting at the
    /// north-west corner. Corners are clamped to the valid coordinate range,
    /// so squares next to a pole or the antimeridian are cut short.
    pub fn square(center: Coordinate, half_width: f64) -> Self {
        let corner = |d_latitude: f64, d_longitude: f64| {
            center.offset(d_latitude, d_longitude).clamped()
        };
        Self {
            vertices: vec![
                corner(half_width, -half_width),
                corner(half_width, half_width),
                corner(-half_width, half_width),
                corner(-half_width, -half_width),
            ],
        }
    }

    pub fn vertices(&self) -> &[Coordinate] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false`, polygons can not be constructed without vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Edges as `(vertex, predecessor)` pairs, including the closing edge
    /// from the first vertex back to the last.
    pub fn edges(&self) -> impl Iterator<Item = (Coordinate, Coordinate)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + n - 1) % n]))
    }

    pub fn edges_xy(&self) -> impl Iterator<Item = ((f64, f64), (f64, f64))> + '_ {
        self.edges().map(|(vi, vj)| (vi.as_xy(), vj.as_xy()))
    }

    pub fn bounding_box(&self) -> BoundingBox {
        let first = self.vertices[0];
        let init = BoundingBox {
            min_latitude: first.latitude,
            min_longitude: first.longitude,
            max_latitude: first.latitude,
            max_longitude: first.longitude,
        };
        self.vertices[1..].iter().fold(init, |bbox, vertex| BoundingBox {
            min_latitude: bbox.min_latitude.min(vertex.latitude),
            min_longitude: bbox.min_longitude.min(vertex.longitude),
            max_latitude: bbox.max_latitude.max(vertex.latitude),
            max_longitude: bbox.max_longitude.max(vertex.longitude),
        })
    }

    /// Mean of all vertices. Lies inside the ring for convex polygons.
    pub fn centroid(&self) -> Coordinate {
        let n = self.vertices.len() as f64;
        let (latitude, longitude) = self
            .vertices
            .iter()
            .fold((0.0, 0.0), |(lat, lon), vertex| {
                (lat + vertex.latitude, lon + vertex.longitude)
            });
        Coordinate::new_unchecked(latitude / n, longitude / n)
    }
}

impl<'de> Deserialize<'de> for Polygon {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let vertices = Vec::<Coordinate>::deserialize(deserializer)?;
        Polygon::new(vertices).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub min_latitude: f64,
    pub min_longitude: f64,
    pub max_latitude: f64,
    pub max_longitude: f64,
}

impl BoundingBox {
    pub fn contains(&self, point: &Coordinate) -> bool {
        (self.min_latitude..=self.max_latitude).contains(&point.latitude)
            && (self.min_longitude..=self.max_longitude).contains(&point.longitude)
    }
}
