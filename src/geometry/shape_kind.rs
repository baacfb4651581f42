use std::fmt;
use std::str::FromStr;

use crate::error::LdShapeError;

/// The fixed catalog of shapes that can be generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeKind {
    Rectangular,
    Pyramid,
    Cylinder,
    Triangular,
    Hexagonal,
    Trapezoid,
    Spheroid,
    Tent,
}

/// How a shape's generated coordinates are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeFamily {
    /// A flat ordered sequence of vertices, one part per vertex.
    PointCloud,
    /// A sequence of ring coordinate sets, one oriented part per base point.
    Ring,
}

impl ShapeKind {
    /// Every supported shape, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Rectangular,
        Self::Pyramid,
        Self::Cylinder,
        Self::Triangular,
        Self::Hexagonal,
        Self::Trapezoid,
        Self::Spheroid,
        Self::Tent,
    ];

    /// Lowercase identifier accepted on input.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Rectangular => "rectangular",
            Self::Pyramid => "pyramid",
            Self::Cylinder => "cylinder",
            Self::Triangular => "triangular",
            Self::Hexagonal => "hexagonal",
            Self::Trapezoid => "trapezoid",
            Self::Spheroid => "spheroid",
            Self::Tent => "tent",
        }
    }

    /// Capitalized label used in listings and model headers.
    #[must_use]
    pub fn label(self) -> String {
        let name = self.name();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    #[must_use]
    pub fn family(self) -> ShapeFamily {
        match self {
            Self::Hexagonal | Self::Trapezoid => ShapeFamily::Ring,
            _ => ShapeFamily::PointCloud,
        }
    }

    /// Whether the shape is sampled from an implicit dome surface.
    #[must_use]
    pub fn is_dome(self) -> bool {
        matches!(self, Self::Spheroid | Self::Tent)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = LdShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| LdShapeError::UnsupportedShape {
                name: s.trim().to_string(),
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Pyramid".parse::<ShapeKind>().unwrap(), ShapeKind::Pyramid);
        assert_eq!(" TENT ".parse::<ShapeKind>().unwrap(), ShapeKind::Tent);
    }

    #[test]
    fn unknown_shape_is_rejected() {
        let err = "torus".parse::<ShapeKind>().unwrap_err();
        assert!(matches!(err, LdShapeError::UnsupportedShape { name } if name == "torus"));
    }

    #[test]
    fn labels_are_capitalized() {
        assert_eq!(ShapeKind::Hexagonal.label(), "Hexagonal");
        assert_eq!(ShapeKind::Tent.to_string(), "tent");
    }

    #[test]
    fn ring_family() {
        assert_eq!(ShapeKind::Trapezoid.family(), ShapeFamily::Ring);
        assert_eq!(ShapeKind::Hexagonal.family(), ShapeFamily::Ring);
        assert_eq!(ShapeKind::Spheroid.family(), ShapeFamily::PointCloud);
        assert!(ShapeKind::Spheroid.is_dome());
        assert!(!ShapeKind::Cylinder.is_dome());
    }
}
