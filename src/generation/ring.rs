use crate::geometry::{GeometryConfig, Variant};
use crate::math::{translated, Axis, Point3};

use super::Generated;

/// Rotation axis of trapezoid rings.
pub const TRAPEZOID_AXIS: Axis = Axis::Z;

/// Rotation axis of hexagonal rings.
pub const HEXAGONAL_AXIS: Axis = Axis::Y;

/// Base corners of a trapezoid ring, one per slope brick.
const TRAPEZOID_BASE: [[f64; 3]; 2] = [[50.0, -72.0, -20.0], [70.0, -72.0, -20.0]];

/// Base corners of a hexagonal ring, one per facet brick.
const HEXAGONAL_BASE: [[f64; 3]; 4] = [
    [-60.0, -24.0, -100.0],
    [-100.0, -24.0, -100.0],
    [-60.0, -24.0, -60.0],
    [-100.0, -24.0, -60.0],
];

/// The base points of one ring instance.
#[derive(Debug, Clone, PartialEq)]
pub struct RingCoordinateSet {
    points: Vec<Point3>,
}

impl RingCoordinateSet {
    #[must_use]
    pub fn new(points: Vec<Point3>) -> Self {
        Self { points }
    }

    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns a copy of this ring moved by `distance` along `axis`.
    #[must_use]
    pub fn translated(&self, axis: Axis, distance: f64) -> Self {
        Self {
            points: self
                .points
                .iter()
                .map(|p| translated(p, axis, distance))
                .collect(),
        }
    }
}

/// Replicates `base` `count` times, ring `i` offset by `pitch * i` along
/// the rotation `axis`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn ring_sequence(
    base: &RingCoordinateSet,
    axis: Axis,
    pitch: f64,
    count: usize,
) -> Vec<RingCoordinateSet> {
    (0..count)
        .map(|i| base.translated(axis, pitch * i as f64))
        .collect()
}

fn base_ring(corners: &[[f64; 3]]) -> RingCoordinateSet {
    RingCoordinateSet::new(corners.iter().copied().map(Point3::from).collect())
}

/// Trapezoid rings: two slope bricks per ring, rotating along z.
#[must_use]
pub fn trapezoid_rings(config: &GeometryConfig, _variant: Option<Variant>) -> Generated {
    Generated::Rings(ring_sequence(
        &base_ring(&TRAPEZOID_BASE),
        TRAPEZOID_AXIS,
        config.step().x(),
        config.count(),
    ))
}

/// Hexagonal rings: four facet bricks per ring, rotating along y.
#[must_use]
pub fn hexagonal_rings(config: &GeometryConfig, _variant: Option<Variant>) -> Generated {
    Generated::Rings(ring_sequence(
        &base_ring(&HEXAGONAL_BASE),
        HEXAGONAL_AXIS,
        config.step().x(),
        config.count(),
    ))
}
