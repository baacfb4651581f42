use crate::catalog::ShapeRegistry;
use crate::error::{GeometryError, Result};

use super::ShapeKind;

/// Separator between dimensions in a geometry string, e.g. `4x2x3`.
pub const DIMENSION_SEPARATOR: char = 'x';

/// Physical spacing between adjacent bricks along x, y and z, in LDraw units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepVector([f64; 3]);

impl StepVector {
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self([x, y, z])
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.0[0]
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.0[1]
    }

    #[must_use]
    pub fn z(&self) -> f64 {
        self.0[2]
    }
}

/// The ordered dimensions parsed from a geometry string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeometrySpec {
    values: Vec<usize>,
}

impl GeometrySpec {
    /// Parses a geometry string such as `4x2x3`.
    ///
    /// Each token keeps only its ASCII digits, so `4a` reads as `4`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NoDigits`] if a token has no digits and
    /// [`GeometryError::OutOfRange`] if a token does not fit in `usize`.
    pub fn parse(raw: &str) -> Result<Self> {
        let lowered = raw.to_lowercase();
        let values = lowered
            .split(DIMENSION_SEPARATOR)
            .map(parse_token)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { values })
    }

    #[must_use]
    pub fn values(&self) -> &[usize] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn parse_token(token: &str) -> Result<usize> {
    let digits: String = token.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Err(GeometryError::NoDigits {
            token: token.to_string(),
        }
        .into());
    }
    digits.parse().map_err(|_| {
        GeometryError::OutOfRange {
            token: token.to_string(),
        }
        .into()
    })
}

/// A shape kind resolved against its geometry string and step vector.
///
/// `size` is the canonical tuple for the shape:
/// - rectangular: `(width, height, length)`
/// - pyramid: `(n, n, 1)` with `n` rounded up to an even number
/// - cylinder, triangular, hexagonal, trapezoid: `(count, 1, 1)`
/// - spheroid, tent: `(height, depth, width)` half-axis sizes
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryConfig {
    kind: ShapeKind,
    spec: GeometrySpec,
    size: [usize; 3],
    step: StepVector,
}

impl GeometryConfig {
    /// Parses `raw` for `kind` and looks up the step vector in `registry`.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if the string does not parse or does not
    /// carry the dimensions the shape needs.
    pub fn resolve(kind: ShapeKind, raw: &str, registry: &ShapeRegistry) -> Result<Self> {
        let spec = GeometrySpec::parse(raw)?;
        if spec.len() > 3 {
            return Err(GeometryError::TooManyDimensions {
                shape: kind.name(),
                found: spec.len(),
            }
            .into());
        }
        let size = canonical_size(kind, spec.values())?;
        Ok(Self {
            kind,
            spec,
            size,
            step: registry.entry(kind).step,
        })
    }

    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    #[must_use]
    pub fn spec(&self) -> &GeometrySpec {
        &self.spec
    }

    #[must_use]
    pub fn size(&self) -> [usize; 3] {
        self.size
    }

    /// Number of repeated elements for row and ring shapes.
    #[must_use]
    pub fn count(&self) -> usize {
        self.size[0]
    }

    #[must_use]
    pub fn step(&self) -> &StepVector {
        &self.step
    }
}

fn canonical_size(kind: ShapeKind, values: &[usize]) -> Result<[usize; 3]> {
    match kind {
        ShapeKind::Rectangular => match *values {
            [w, h, l] => Ok([w, h, l]),
            _ => Err(GeometryError::MissingDimension {
                shape: kind.name(),
                expected: 3,
                found: values.len(),
            }
            .into()),
        },
        ShapeKind::Pyramid => {
            let n = values[0];
            // each layer shrinks by 2, so the base must be even
            let n = if n % 2 == 1 {
                n.checked_add(1).ok_or_else(|| GeometryError::OutOfRange {
                    token: n.to_string(),
                })?
            } else {
                n
            };
            Ok([n, n, 1])
        }
        ShapeKind::Spheroid | ShapeKind::Tent => {
            let height = values[0];
            let depth = values.get(1).copied().unwrap_or(height);
            let width = values.get(2).copied().unwrap_or(depth);
            Ok([height, depth, width])
        }
        ShapeKind::Cylinder
        | ShapeKind::Triangular
        | ShapeKind::Hexagonal
        | ShapeKind::Trapezoid => Ok([values[0], 1, 1]),
    }
}
