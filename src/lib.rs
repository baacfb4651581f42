//! Generates LDraw brick models from a small catalog of parametric shapes.
//!
//! A run flows through four stages:
//! [`GeometryConfig`](geometry::GeometryConfig) resolves the dimensions,
//! a [`generation`] function produces vertices or rings,
//! [`placement::encode`] turns them into oriented part records, and
//! [`Model`](model::Model) serializes them.

pub mod bill;
pub mod catalog;
pub mod error;
pub mod generation;
pub mod geometry;
pub mod math;
pub mod model;
pub mod pipeline;
pub mod placement;

pub use error::{GeometryError, LdShapeError, Result};
pub use pipeline::{build_model, generate_to_file, Outcome, ShapeRequest};
