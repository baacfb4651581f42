/// 3D point type. Generated vertices are plain `Point3` values and are never
/// mutated once created.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 3x3 rotation matrix.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// A coordinate axis of model space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Index of the axis in a point or vector.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// Vector of length `distance` along this axis.
    #[must_use]
    pub fn offset(self, distance: f64) -> Vector3 {
        let mut v = Vector3::zeros();
        v[self.index()] = distance;
        v
    }
}

/// Returns a copy of `point` moved by `distance` along `axis`.
#[must_use]
pub fn translated(point: &Point3, axis: Axis, distance: f64) -> Point3 {
    point + axis.offset(distance)
}
