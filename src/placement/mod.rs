//! Maps generated coordinates to oriented part placements.

mod orientation;

pub use orientation::{LayoutTemplate, Orientation};

use crate::catalog::{Part, ShapeEntry};
use crate::generation::{Generated, RingCoordinateSet, TRAPEZOID_AXIS};
use crate::geometry::{EndCap, ShapeKind, Variant};
use crate::math::{Matrix3, Point3};

/// Distance a beveled end ring is pulled towards the middle of the shape.
pub const OBLIQUE_SHIFT: f64 = 10.0;

/// Default LDraw color id.
pub const DEFAULT_COLOR: u32 = 27;

/// Color assignment for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    pub color: u32,
    /// Replaces `color` for the first and last element, if set.
    pub corner_color: Option<u32>,
}

impl ColorConfig {
    #[must_use]
    pub fn new(color: u32) -> Self {
        Self {
            color,
            corner_color: None,
        }
    }

    #[must_use]
    pub fn with_corner_color(mut self, corner_color: u32) -> Self {
        self.corner_color = Some(corner_color);
        self
    }

    /// Color of element `index` in a sequence whose last index is `last`.
    #[must_use]
    pub fn color_at(&self, index: usize, last: usize) -> u32 {
        match self.corner_color {
            Some(corner) if index == 0 || index == last => corner,
            _ => self.color,
        }
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_COLOR)
    }
}

/// One emitted part instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementRecord {
    pub color: u32,
    pub position: Point3,
    pub orientation: Orientation,
    pub part: Part,
}

impl PlacementRecord {
    #[must_use]
    pub fn rotation(&self) -> Matrix3 {
        self.orientation.matrix()
    }
}

/// Encoded placements, keeping the grouping the model writer needs.
#[derive(Debug, Clone, PartialEq)]
pub enum Placements {
    /// Point-cloud shapes: grouped by vertical layer when written.
    Layers(Vec<PlacementRecord>),
    /// Ring shapes: one group per ring.
    Rings(Vec<Vec<PlacementRecord>>),
}

impl Placements {
    pub fn records(&self) -> Box<dyn Iterator<Item = &PlacementRecord> + '_> {
        match self {
            Self::Layers(records) => Box::new(records.iter()),
            Self::Rings(rings) => Box::new(rings.iter().flatten()),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Layers(records) => records.len(),
            Self::Rings(rings) => rings.iter().map(Vec::len).sum(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Encodes generated coordinates of `entry.kind` into placement records.
#[must_use]
pub fn encode(
    generated: &Generated,
    entry: &ShapeEntry,
    variant: Option<Variant>,
    colors: ColorConfig,
) -> Placements {
    match generated {
        Generated::Points(points) => Placements::Layers(encode_points(points, entry.part, colors)),
        Generated::Rings(rings) => Placements::Rings(encode_rings(rings, entry, variant, colors)),
    }
}

fn encode_points(points: &[Point3], part: Part, colors: ColorConfig) -> Vec<PlacementRecord> {
    let last = points.len().saturating_sub(1);
    points
        .iter()
        .enumerate()
        .map(|(i, position)| PlacementRecord {
            color: colors.color_at(i, last),
            position: *position,
            orientation: Orientation::Identity,
            part,
        })
        .collect()
}

fn base_template(kind: ShapeKind) -> LayoutTemplate {
    match kind {
        ShapeKind::Trapezoid => LayoutTemplate::Mirror,
        _ => LayoutTemplate::Perpendicular,
    }
}

fn encode_rings(
    rings: &[RingCoordinateSet],
    entry: &ShapeEntry,
    variant: Option<Variant>,
    colors: ColorConfig,
) -> Vec<Vec<PlacementRecord>> {
    let last = rings.len().saturating_sub(1);
    let caps = match variant {
        Some(Variant::Trapezoid { left, right }) => Some((left, right)),
        _ => None,
    };
    let oblique_part = entry.oblique_part.unwrap_or(entry.part);

    rings
        .iter()
        .enumerate()
        .map(|(n, ring)| {
            let mut ring = ring.clone();
            let mut template = base_template(entry.kind);
            let mut part = entry.part;
            if let Some((left, right)) = caps {
                if n == 0 && left == EndCap::Oblique {
                    ring = ring.translated(TRAPEZOID_AXIS, OBLIQUE_SHIFT);
                    template = LayoutTemplate::ObliqueLeft;
                    part = oblique_part;
                }
                if n == last && right == EndCap::Oblique {
                    ring = ring.translated(TRAPEZOID_AXIS, -OBLIQUE_SHIFT);
                    template = LayoutTemplate::ObliqueRight;
                    part = oblique_part;
                }
            }

            let color = colors.color_at(n, last);
            ring.points()
                .iter()
                .zip(template.orientations())
                .map(|(position, orientation)| PlacementRecord {
                    color,
                    position: *position,
                    orientation: *orientation,
                    part,
                })
                .collect()
        })
        .collect()
}
