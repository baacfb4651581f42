use crate::geometry::{DomeHalf, GeometryConfig, StepVector, Variant};
use crate::math::Point3;

/// Vertical offset added to a layer index before the surface test, so the
/// top of each brick rather than its base is compared against the surface.
pub const DOME_OFFSET: f64 = 1.64;

/// Implicit surface bounding a dome shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomeSurface {
    /// Half ellipsoid.
    Spheroid,
    /// Cone with a concave flank.
    Tent,
}

impl DomeSurface {
    /// Tests whether grid cell `(x, y, z)` lies inside the quarter dome of
    /// half-axis sizes `(height, depth, width)`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn contains(self, x: usize, y: usize, z: usize, size: [usize; 3]) -> bool {
        let [height, depth, width] = size;
        let u = (x as f64 + 0.5) / width as f64;
        let v = (y as f64 + 0.5) / depth as f64;
        let w = (z as f64 + DOME_OFFSET) / height as f64;
        let footprint = u * u + v * v;
        match self {
            Self::Spheroid => footprint + w * w < 1.0,
            Self::Tent => {
                let radius = 1.0 - w.sqrt();
                footprint < radius * radius
            }
        }
    }
}

/// Samples the quarter dome layer by layer and mirrors every inside cell
/// according to `top` and `bottom`.
///
/// Within a layer the top pass (`+y` depth) is emitted before the bottom
/// pass (`-y` depth). Cell `(x, y, z)` lands at
/// `(±(x + 0.5) * step.x, -z * step.y, ±(y + 0.5) * step.z)`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn sample_dome(
    surface: DomeSurface,
    size: [usize; 3],
    step: &StepVector,
    top: DomeHalf,
    bottom: DomeHalf,
) -> Vec<Point3> {
    let [height, depth, width] = size;
    let mut points = Vec::new();
    for z in 0..height {
        let cells: Vec<(usize, usize)> = (0..depth)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .filter(|&(x, y)| surface.contains(x, y, z, size))
            .collect();
        let level = -(z as f64) * step.y();

        for (half, side) in [(top, 1.0), (bottom, -1.0)] {
            for &(x, y) in &cells {
                let across = (x as f64 + 0.5) * step.x();
                let deep = side * (y as f64 + 0.5) * step.z();
                if half.keeps_right() {
                    points.push(Point3::new(across, level, deep));
                }
                if half.keeps_left() {
                    points.push(Point3::new(-across, level, deep));
                }
            }
        }
    }
    points
}

fn halves(variant: Option<Variant>) -> (DomeHalf, DomeHalf) {
    match variant {
        Some(Variant::Dome { top, bottom }) => (top, bottom),
        _ => (DomeHalf::Full, DomeHalf::Full),
    }
}

/// Spheroid dome generator.
#[must_use]
pub fn spheroid(config: &GeometryConfig, variant: Option<Variant>) -> super::Generated {
    let (top, bottom) = halves(variant);
    super::Generated::Points(sample_dome(
        DomeSurface::Spheroid,
        config.size(),
        config.step(),
        top,
        bottom,
    ))
}

/// Tent (cone) dome generator.
#[must_use]
pub fn tent(config: &GeometryConfig, variant: Option<Variant>) -> super::Generated {
    let (top, bottom) = halves(variant);
    super::Generated::Points(sample_dome(
        DomeSurface::Tent,
        config.size(),
        config.step(),
        top,
        bottom,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIT: StepVector = StepVector::new(20.0, 24.0, 20.0);

    fn key(p: &Point3) -> (i64, i64, i64) {
        #[allow(clippy::cast_possible_truncation)]
        let round = |v: f64| (v * 10.0).round() as i64;
        (round(p.x), round(p.y), round(p.z))
    }

    #[test]
    fn tent_cells() {
        // layers of 4, 1 and 1 cells, mirrored four ways
        let pts = sample_dome(DomeSurface::Tent, [5, 5, 5], &UNIT, DomeHalf::Full, DomeHalf::Full);
        assert_eq!(pts.len(), 24);
        assert_eq!(pts.iter().filter(|p| p.y.abs() < f64::EPSILON).count(), 16);
    }

    #[test]
    fn tent_narrows_toward_apex() {
        assert!(!DomeSurface::Tent.contains(0, 0, 4, [5, 5, 5]));
        assert!(DomeSurface::Tent.contains(0, 0, 0, [5, 5, 5]));
    }

    #[test]
    fn wide_low_tent_keeps_cells_past_apex_height() {
        // (4 + 1.64) / 5 > 1, yet the squared radius still exceeds the footprint
        let size = [5, 20, 20];
        let w: f64 = (4.0 + DOME_OFFSET) / 5.0;
        let u: f64 = 0.5 / 20.0;
        assert!(w > 1.0);
        assert!(2.0 * u * u < (1.0 - w.sqrt()).powi(2));
        assert!(DomeSurface::Tent.contains(0, 0, 4, size));
        assert!(!DomeSurface::Tent.contains(1, 1, 4, size));

        let pts = sample_dome(DomeSurface::Tent, size, &UNIT, DomeHalf::Full, DomeHalf::Full);
        let top_layer = -4.0 * UNIT.y();
        assert_eq!(pts.iter().filter(|p| (p.y - top_layer).abs() < 1e-9).count(), 4);
    }

    #[test]
    fn spheroid_is_mirror_symmetric() {
        let pts = sample_dome(
            DomeSurface::Spheroid,
            [6, 5, 7],
            &UNIT,
            DomeHalf::Full,
            DomeHalf::Full,
        );
        assert!(!pts.is_empty());
        let mut keys: Vec<_> = pts.iter().map(key).collect();
        keys.sort_unstable();
        let mut mirrored: Vec<_> = pts.iter().map(|p| key(&Point3::new(-p.x, p.y, p.z))).collect();
        mirrored.sort_unstable();
        assert_eq!(keys, mirrored);

        let top = pts.iter().filter(|p| p.z > 0.0).count();
        let bottom = pts.iter().filter(|p| p.z < 0.0).count();
        assert_eq!(top, bottom);
        assert_eq!(top + bottom, pts.len());
    }

    #[test]
    fn halves_select_quarters() {
        let full = sample_dome(DomeSurface::Spheroid, [5, 5, 5], &UNIT, DomeHalf::Full, DomeHalf::Full);
        let right = sample_dome(DomeSurface::Spheroid, [5, 5, 5], &UNIT, DomeHalf::Right, DomeHalf::None);
        assert_eq!(right.len() * 4, full.len());
        assert!(right.iter().all(|p| p.x > 0.0 && p.z > 0.0));

        let left = sample_dome(DomeSurface::Spheroid, [5, 5, 5], &UNIT, DomeHalf::None, DomeHalf::Left);
        assert_eq!(left.len(), right.len());
        assert!(left.iter().all(|p| p.x < 0.0 && p.z < 0.0));

        let none = sample_dome(DomeSurface::Spheroid, [5, 5, 5], &UNIT, DomeHalf::None, DomeHalf::None);
        assert!(none.is_empty());
    }

    #[test]
    fn low_dome_is_empty() {
        let pts = sample_dome(DomeSurface::Spheroid, [1, 4, 4], &UNIT, DomeHalf::Full, DomeHalf::Full);
        assert!(pts.is_empty());
        let pts = sample_dome(DomeSurface::Tent, [0, 4, 4], &UNIT, DomeHalf::Full, DomeHalf::Full);
        assert!(pts.is_empty());
    }

    #[test]
    fn layers_go_up() {
        let pts = sample_dome(DomeSurface::Spheroid, [6, 6, 6], &UNIT, DomeHalf::Full, DomeHalf::Full);
        for pair in pts.windows(2) {
            assert!(pair[1].y <= pair[0].y);
        }
    }
}
