//! Part catalog and the shape registry.
//!
//! The registry maps every [`ShapeKind`] to its generator, step vector and
//! catalog part. It is passed around as configuration instead of being looked
//! up from global state.

use crate::generation::{self, Generated};
use crate::geometry::{GeometryConfig, ShapeKind, StepVector, Variant};

/// A physical part from the LDraw library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Part {
    /// File name of the part, e.g. `3003.dat`.
    pub id: &'static str,
    /// Human readable part description.
    pub name: &'static str,
}

pub const TECHNIC_BRICK_2X2: Part = Part {
    id: "3003.dat",
    name: "Technic, Brick  2 x  2",
};

pub const ROUND_4X4_WITH_HOLES: Part = Part {
    id: "6222.dat",
    name: "4 x  4 Round with Holes",
};

pub const PLATE_4X4_WITHOUT_CORNER: Part = Part {
    id: "30503.dat",
    name: "Plate  4 x  4 without Corner",
};

pub const BRICK_2X2_FACET: Part = Part {
    id: "87620.dat",
    name: "Brick  2 x  2 Facet",
};

pub const SLOPE_75_HOLLOW_STUDS: Part = Part {
    id: "3684.dat",
    name: "Slope Brick 75  2 x  2 x  3 with Hollow Studs",
};

pub const SLOPE_75_DOUBLE_CONVEX: Part = Part {
    id: "3685.dat",
    name: "Slope Brick 75  2 x  2 x  3 Double Convex",
};

pub const BRICK_1X1: Part = Part {
    id: "3005.dat",
    name: "Brick  1 x  1",
};

/// Generates the coordinates of one shape kind.
pub type GeneratorFn = fn(&GeometryConfig, Option<Variant>) -> Generated;

/// Everything the pipeline needs to know about one shape kind.
#[derive(Clone, Copy)]
pub struct ShapeEntry {
    pub kind: ShapeKind,
    pub generator: GeneratorFn,
    pub step: StepVector,
    pub part: Part,
    /// Part used for beveled end caps, if the shape has them.
    pub oblique_part: Option<Part>,
}

impl std::fmt::Debug for ShapeEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShapeEntry")
            .field("kind", &self.kind)
            .field("step", &self.step)
            .field("part", &self.part)
            .field("oblique_part", &self.oblique_part)
            .finish_non_exhaustive()
    }
}

impl ShapeEntry {
    #[must_use]
    pub fn new(kind: ShapeKind, generator: GeneratorFn, step: StepVector, part: Part) -> Self {
        Self {
            kind,
            generator,
            step,
            part,
            oblique_part: None,
        }
    }

    #[must_use]
    pub fn with_oblique_part(mut self, part: Part) -> Self {
        self.oblique_part = Some(part);
        self
    }
}

/// Registry of every supported shape, indexed by [`ShapeKind`].
#[derive(Debug, Clone)]
pub struct ShapeRegistry {
    entries: [ShapeEntry; ShapeKind::ALL.len()],
}

impl ShapeRegistry {
    /// The standard catalog.
    #[must_use]
    pub fn standard() -> Self {
        let brick = StepVector::new(40.0, 24.0, 40.0);
        let unit = StepVector::new(20.0, 24.0, 20.0);
        Self {
            entries: [
                ShapeEntry::new(
                    ShapeKind::Rectangular,
                    generation::rectangular,
                    brick,
                    TECHNIC_BRICK_2X2,
                ),
                ShapeEntry::new(
                    ShapeKind::Pyramid,
                    generation::pyramid,
                    brick,
                    TECHNIC_BRICK_2X2,
                ),
                ShapeEntry::new(
                    ShapeKind::Cylinder,
                    generation::linear_row,
                    StepVector::new(24.0, 0.0, 0.0),
                    ROUND_4X4_WITH_HOLES,
                ),
                ShapeEntry::new(
                    ShapeKind::Triangular,
                    generation::linear_row,
                    StepVector::new(8.0, 0.0, 0.0),
                    PLATE_4X4_WITHOUT_CORNER,
                ),
                ShapeEntry::new(
                    ShapeKind::Hexagonal,
                    generation::hexagonal_rings,
                    StepVector::new(24.0, 0.0, 0.0),
                    BRICK_2X2_FACET,
                ),
                ShapeEntry::new(
                    ShapeKind::Trapezoid,
                    generation::trapezoid_rings,
                    StepVector::new(40.0, 0.0, 0.0),
                    SLOPE_75_HOLLOW_STUDS,
                )
                .with_oblique_part(SLOPE_75_DOUBLE_CONVEX),
                ShapeEntry::new(ShapeKind::Spheroid, generation::spheroid, unit, BRICK_1X1),
                ShapeEntry::new(ShapeKind::Tent, generation::tent, unit, BRICK_1X1),
            ],
        }
    }

    /// Returns the entry for `kind`.
    #[must_use]
    pub fn entry(&self, kind: ShapeKind) -> &ShapeEntry {
        &self.entries[kind as usize]
    }

    /// Replaces the entry for `entry.kind`.
    #[must_use]
    pub fn with_entry(mut self, entry: ShapeEntry) -> Self {
        self.entries[entry.kind as usize] = entry;
        self
    }

    pub fn entries(&self) -> impl Iterator<Item = &ShapeEntry> {
        self.entries.iter()
    }
}

impl Default for ShapeRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
