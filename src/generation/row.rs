use crate::geometry::{GeometryConfig, Variant};
use crate::math::{translated, Axis};

use super::{origin, Generated};

/// Straight column of identical parts, `step.x` apart along the vertical axis.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn linear_row(config: &GeometryConfig, _variant: Option<Variant>) -> Generated {
    let start = origin();
    let pitch = config.step().x();
    Generated::Points(
        (0..config.count())
            .map(|i| translated(&start, Axis::Y, pitch * i as f64))
            .collect(),
    )
}
