use std::fmt;

use crate::error::{GeometryError, Result};

use super::ShapeKind;

/// End face of a trapezoid ring sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EndCap {
    /// Flat end, default part.
    #[default]
    Perpendicular,
    /// Beveled end, oblique part and a shifted ring.
    Oblique,
}

/// Which quarters of a dome half are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DomeHalf {
    #[default]
    Full,
    None,
    Left,
    Right,
}

impl DomeHalf {
    /// Whether the `+x` quarter is emitted.
    #[must_use]
    pub fn keeps_right(self) -> bool {
        matches!(self, Self::Full | Self::Right)
    }

    /// Whether the `-x` quarter is emitted.
    #[must_use]
    pub fn keeps_left(self) -> bool {
        matches!(self, Self::Full | Self::Left)
    }
}

/// Shape-specific pair of flags constraining generation and encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Trapezoid { left: EndCap, right: EndCap },
    Dome { top: DomeHalf, bottom: DomeHalf },
}

const END_CAP_NAMES: [&str; 2] = ["perpendicular", "oblique"];
const DOME_HALF_NAMES: [&str; 4] = ["full", "none", "left", "right"];

impl Variant {
    /// The "complete shape" variant of `kind`, if the shape has variants.
    #[must_use]
    pub fn default_for(kind: ShapeKind) -> Option<Self> {
        match kind {
            ShapeKind::Trapezoid => Some(Self::Trapezoid {
                left: EndCap::default(),
                right: EndCap::default(),
            }),
            ShapeKind::Spheroid | ShapeKind::Tent => Some(Self::Dome {
                top: DomeHalf::default(),
                bottom: DomeHalf::default(),
            }),
            _ => None,
        }
    }

    /// Variant words accepted for `kind`; empty if the shape has no variants.
    #[must_use]
    pub fn names_for(kind: ShapeKind) -> &'static [&'static str] {
        match kind {
            ShapeKind::Trapezoid => &END_CAP_NAMES,
            ShapeKind::Spheroid | ShapeKind::Tent => &DOME_HALF_NAMES,
            _ => &[],
        }
    }

    /// Parses a two-word variant for `kind`.
    ///
    /// Shapes without variants ignore the words and return `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::UnknownVariant`] if a word is not a variant
    /// of the shape.
    pub fn parse(kind: ShapeKind, first: &str, second: &str) -> Result<Option<Self>> {
        match kind {
            ShapeKind::Trapezoid => Ok(Some(Self::Trapezoid {
                left: parse_end_cap(kind, first)?,
                right: parse_end_cap(kind, second)?,
            })),
            ShapeKind::Spheroid | ShapeKind::Tent => Ok(Some(Self::Dome {
                top: parse_dome_half(kind, first)?,
                bottom: parse_dome_half(kind, second)?,
            })),
            _ => Ok(None),
        }
    }
}

fn parse_end_cap(kind: ShapeKind, word: &str) -> Result<EndCap> {
    match word.trim().to_lowercase().as_str() {
        "perpendicular" => Ok(EndCap::Perpendicular),
        "oblique" => Ok(EndCap::Oblique),
        _ => Err(unknown(kind, word)),
    }
}

fn parse_dome_half(kind: ShapeKind, word: &str) -> Result<DomeHalf> {
    match word.trim().to_lowercase().as_str() {
        "full" => Ok(DomeHalf::Full),
        "none" => Ok(DomeHalf::None),
        "left" => Ok(DomeHalf::Left),
        "right" => Ok(DomeHalf::Right),
        _ => Err(unknown(kind, word)),
    }
}

fn unknown(kind: ShapeKind, word: &str) -> crate::error::LdShapeError {
    GeometryError::UnknownVariant {
        shape: kind.name(),
        value: word.to_string(),
    }
    .into()
}

impl fmt::Display for EndCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Perpendicular => "perpendicular",
            Self::Oblique => "oblique",
        })
    }
}

impl fmt::Display for DomeHalf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Full => "full",
            Self::None => "none",
            Self::Left => "left",
            Self::Right => "right",
        })
    }
}
