mod config;
mod shape_kind;
mod variant;

pub use config::{GeometryConfig, GeometrySpec, StepVector, DIMENSION_SEPARATOR};
pub use shape_kind::{ShapeFamily, ShapeKind};
pub use variant::{DomeHalf, EndCap, Variant};
