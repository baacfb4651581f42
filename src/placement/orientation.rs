use crate::math::Matrix3;

/// One of the fixed part orientations used by the encoder.
///
/// All of them are rotations about the vertical (y) axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Identity,
    /// `0 0 1 / 0 1 0 / -1 0 0`
    QuarterTurn,
    /// `0 0 -1 / 0 1 0 / 1 0 0`
    ReverseQuarterTurn,
    /// `-1 0 0 / 0 1 0 / 0 0 -1`
    HalfTurn,
}

impl Orientation {
    /// Row-major matrix entries as written to a model line.
    #[must_use]
    pub fn entries(self) -> [i8; 9] {
        match self {
            Self::Identity => [1, 0, 0, 0, 1, 0, 0, 0, 1],
            Self::QuarterTurn => [0, 0, 1, 0, 1, 0, -1, 0, 0],
            Self::ReverseQuarterTurn => [0, 0, -1, 0, 1, 0, 1, 0, 0],
            Self::HalfTurn => [-1, 0, 0, 0, 1, 0, 0, 0, -1],
        }
    }

    #[must_use]
    pub fn matrix(self) -> Matrix3 {
        Matrix3::from_row_slice(&self.entries().map(f64::from))
    }
}

/// Orientation templates applied to the base points of a ring, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutTemplate {
    /// Two opposing slopes.
    Mirror,
    /// Four cardinal orientations.
    Perpendicular,
    /// First ring of a trapezoid with a beveled end.
    ObliqueLeft,
    /// Last ring of a trapezoid with a beveled end.
    ObliqueRight,
}

impl LayoutTemplate {
    #[must_use]
    pub fn orientations(self) -> &'static [Orientation] {
        use Orientation::{HalfTurn, Identity, QuarterTurn, ReverseQuarterTurn};
        match self {
            Self::Mirror => &[QuarterTurn, ReverseQuarterTurn],
            Self::Perpendicular => &[Identity, QuarterTurn, ReverseQuarterTurn, HalfTurn],
            Self::ObliqueLeft => &[QuarterTurn, Identity],
            Self::ObliqueRight => &[HalfTurn, ReverseQuarterTurn],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Vector3, TOLERANCE};

    #[test]
    fn orientations_are_rotations() {
        for o in LayoutTemplate::Perpendicular.orientations() {
            let m = o.matrix();
            assert!((m * m.transpose() - Matrix3::identity()).norm() < TOLERANCE);
            assert!((m.determinant() - 1.0).abs() < TOLERANCE);
            // vertical axis is preserved
            assert!((m * Vector3::y() - Vector3::y()).norm() < TOLERANCE);
        }
    }

    #[test]
    fn quarter_turns_are_inverse() {
        let q = Orientation::QuarterTurn.matrix();
        let r = Orientation::ReverseQuarterTurn.matrix();
        assert!((q * r - Matrix3::identity()).norm() < TOLERANCE);
        let h = Orientation::HalfTurn.matrix();
        assert!((q * q - h).norm() < TOLERANCE);
    }

    #[test]
    fn row_major_layout() {
        let m = Orientation::QuarterTurn.matrix();
        assert!((m[(0, 2)] - 1.0).abs() < TOLERANCE);
        assert!((m[(2, 0)] + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn template_sizes() {
        assert_eq!(LayoutTemplate::Mirror.orientations().len(), 2);
        assert_eq!(LayoutTemplate::ObliqueLeft.orientations().len(), 2);
        assert_eq!(LayoutTemplate::ObliqueRight.orientations().len(), 2);
        assert_eq!(LayoutTemplate::Perpendicular.orientations().len(), 4);
    }
}
