//! End-to-end model generation: geometry, points, placements, model.

use std::path::Path;

use crate::catalog::ShapeRegistry;
use crate::error::Result;
use crate::geometry::{GeometryConfig, ShapeKind, Variant};
use crate::model::{Model, ModelHeader, SavedModel};
use crate::placement::{self, ColorConfig};

/// Inputs of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeRequest {
    pub kind: ShapeKind,
    /// Raw geometry string, e.g. `4x2x3`.
    pub geometry: String,
    /// Falls back to the shape's complete variant when `None`.
    pub variant: Option<Variant>,
    pub colors: ColorConfig,
    /// Name written into the model header; defaults to `<shape>.ldr`.
    pub model_name: Option<String>,
}

impl ShapeRequest {
    #[must_use]
    pub fn new(kind: ShapeKind, geometry: impl Into<String>) -> Self {
        Self {
            kind,
            geometry: geometry.into(),
            variant: None,
            colors: ColorConfig::default(),
            model_name: None,
        }
    }

    #[must_use]
    pub fn with_variant(mut self, variant: Option<Variant>) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: ColorConfig) -> Self {
        self.colors = colors;
        self
    }

    #[must_use]
    pub fn with_model_name(mut self, name: impl Into<String>) -> Self {
        self.model_name = Some(name.into());
        self
    }

    fn header(&self) -> ModelHeader {
        match &self.model_name {
            Some(name) => ModelHeader::new(self.kind, name.clone()),
            None => ModelHeader::for_kind(self.kind),
        }
    }
}

/// Result of a run that got as far as writing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Saved(SavedModel),
    /// No parts were generated, so no file was written.
    NothingToSave,
}

/// Resolves, generates and encodes `request` into an in-memory model.
///
/// A model with no parts is not an error; check [`Model::is_empty`].
///
/// # Errors
///
/// Returns an error if the geometry string is invalid for the shape.
pub fn build_model(request: &ShapeRequest, registry: &ShapeRegistry) -> Result<Model> {
    let entry = registry.entry(request.kind);
    let config = GeometryConfig::resolve(request.kind, &request.geometry, registry)?;
    let variant = request.variant.or_else(|| Variant::default_for(request.kind));
    tracing::debug!(
        shape = %request.kind,
        dimensions = ?config.spec().values(),
        size = ?config.size(),
        ?variant,
        "resolved geometry"
    );

    let generated = (entry.generator)(&config, variant);
    tracing::debug!(points = generated.point_count(), "generated points");
    let placements = placement::encode(&generated, entry, variant, request.colors);
    tracing::debug!(records = placements.len(), "encoded placements");
    Ok(Model::new(request.header(), &placements))
}

/// Builds the model for `request` and writes it to `path`.
///
/// Nothing is written when the model is empty.
///
/// # Errors
///
/// Returns an error if the geometry is invalid or the file cannot be written.
pub fn generate_to_file(
    request: &ShapeRequest,
    registry: &ShapeRegistry,
    path: &Path,
) -> Result<Outcome> {
    let model = build_model(request, registry)?;
    if model.is_empty() {
        return Ok(Outcome::NothingToSave);
    }
    model.save(path).map(Outcome::Saved)
}
