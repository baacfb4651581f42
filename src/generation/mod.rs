//! Vertex and ring generation, one algorithm per shape kind.
//!
//! Every generator is a pure function of a [`GeometryConfig`] and an optional
//! [`Variant`](crate::geometry::Variant). Offsetting always builds new points;
//! nothing generated here is mutated afterwards.

mod dome;
mod grid;
mod ring;
mod row;

pub use dome::{sample_dome, spheroid, tent, DomeSurface, DOME_OFFSET};
pub use grid::{pyramid, rectangular, rectangular_grid};
pub use ring::{
    hexagonal_rings, ring_sequence, trapezoid_rings, RingCoordinateSet, HEXAGONAL_AXIS,
    TRAPEZOID_AXIS,
};
pub use row::linear_row;

use crate::math::Point3;

/// Origin of rectangular, pyramid and linear row shapes, in LDraw units.
pub const ORIGIN: [f64; 3] = [20.0, 24.0, 20.0];

#[must_use]
pub fn origin() -> Point3 {
    Point3::from(ORIGIN)
}

/// Output of a shape generator.
#[derive(Debug, Clone, PartialEq)]
pub enum Generated {
    /// A flat ordered sequence of vertices.
    Points(Vec<Point3>),
    /// An ordered sequence of rings.
    Rings(Vec<RingCoordinateSet>),
}

impl Generated {
    /// Total number of generated points, counting every ring point.
    #[must_use]
    pub fn point_count(&self) -> usize {
        match self {
            Self::Points(points) => points.len(),
            Self::Rings(rings) => rings.iter().map(RingCoordinateSet::len).sum(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.point_count() == 0
    }
}
