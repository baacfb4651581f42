use crate::geometry::{GeometryConfig, StepVector, Variant};
use crate::math::{Axis, Point3, Vector3};

use super::{origin, Generated};

/// Builds a `width x height x length` block of brick positions.
///
/// One plane of `width * height` points is laid out first: `width` steps
/// along x, `height` steps along z. The plane is then repeated `length` times,
/// each copy lowered by `step.y` per layer. A zero in any dimension yields no
/// points.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn rectangular_grid(size: [usize; 3], origin: &Point3, step: &StepVector) -> Vec<Point3> {
    let [width, height, length] = size;
    if length == 0 {
        return Vec::new();
    }

    let plane: Vec<Point3> = (0..width)
        .flat_map(|i| {
            (0..height).map(move |j| {
                origin + Vector3::new(i as f64 * step.x(), 0.0, j as f64 * step.z())
            })
        })
        .collect();

    let mut points = Vec::with_capacity(plane.len() * length);
    for layer in 0..length {
        let lift = Axis::Y.offset(step.y() * layer as f64);
        points.extend(plane.iter().map(|p| p + lift));
    }
    points
}

/// Rectangular block generator.
#[must_use]
pub fn rectangular(config: &GeometryConfig, _variant: Option<Variant>) -> Generated {
    Generated::Points(rectangular_grid(config.size(), &origin(), config.step()))
}

/// Stepped pyramid generator.
///
/// Every layer moves the corner one step inwards on x and z and one step up,
/// and shrinks the footprint by two bricks per side. The base size is even, so
/// the footprint reaches zero exactly and generation stops there.
#[must_use]
pub fn pyramid(config: &GeometryConfig, _variant: Option<Variant>) -> Generated {
    let step = config.step();
    let [base, _, _] = config.size();
    let advance = Vector3::new(step.x(), -step.y(), step.z());

    let mut corner = origin();
    let mut side = base;
    let mut points = Vec::new();
    for _ in 0..base {
        if side <= 2 {
            break;
        }
        corner += advance;
        side -= 2;
        points.extend(rectangular_grid([side, side, 1], &corner, step));
    }
    Generated::Points(points)
}
