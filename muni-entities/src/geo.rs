use std::fmt;

use thiserror::Error;

/// A point in the planar reference system shared by all municipalities.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TerritoryError {
    #[error("A territory requires at least {} coordinates", Territory::MIN_COORDINATES)]
    TooFewCoordinates,
}

/// The closed polygon bounding a municipality.
///
/// Vertex order defines the perimeter. Degenerate polygons (collinear
/// or self-intersecting) are accepted and behave according to the
/// parity rule of [`Territory::contains`].
#[derive(Debug, Clone, PartialEq)]
pub struct Territory(Vec<Coordinate>);

impl Territory {
    pub const MIN_COORDINATES: usize = 3;

    pub fn new(coordinates: Vec<Coordinate>) -> Result<Self, TerritoryError> {
        if coordinates.len() < Self::MIN_COORDINATES {
            return Err(TerritoryError::TooFewCoordinates);
        }
        Ok(Self(coordinates))
    }

    pub fn coordinates(&self) -> &[Coordinate] {
        &self.0
    }

    /// Ray-casting parity test.
    ///
    /// Toggles the inside flag for every polygon edge that spans the
    /// horizontal ray extending rightwards from `point`. Boundary
    /// points are not consistently classified; with counter-clockwise
    /// vertices the left and bottom edges count as outside.
    pub fn contains(&self, point: Coordinate) -> bool {
        let polygon = &self.0;
        let mut inside = false;
        let mut j = polygon.len() - 1;
        for i in 0..polygon.len() {
            let p1 = polygon[i];
            let p2 = polygon[j];
            if (p1.y > point.y) != (p2.y > point.y)
                && point.x < (p2.x - p1.x) * (point.y - p1.y) / (p2.y - p1.y) + p1.x
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }
}

impl TryFrom<Vec<Coordinate>> for Territory {
    type Error = TerritoryError;
    fn try_from(from: Vec<Coordinate>) -> Result<Self, Self::Error> {
        Self::new(from)
    }
}

impl AsRef<[Coordinate]> for Territory {
    fn as_ref(&self) -> &[Coordinate] {
        self.coordinates()
    }
}
