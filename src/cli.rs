use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use ldshape::bill::BillOfMaterials;
use ldshape::catalog::ShapeRegistry;
use ldshape::geometry::{ShapeKind, Variant};
use ldshape::model::{default_file_name, SavedModel};
use ldshape::placement::{ColorConfig, DEFAULT_COLOR};
use ldshape::{build_model, LdShapeError, Result, ShapeRequest};

/// Tool for generating geometric shapes and exporting them as LDraw models
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    /// The chosen shape from the supported list.
    #[arg(short, long, required_unless_present_any = ["shapelist", "kindlist"])]
    pub shape: Option<String>,

    /// Dimensions of the chosen shape, separated by `x` (e.g. `4x2x3`).
    #[arg(short, long, required_unless_present_any = ["shapelist", "kindlist"])]
    pub geometry: Option<String>,

    /// Color of the parts of the model.
    #[arg(short, long, default_value_t = DEFAULT_COLOR, value_name = "INTEGER")]
    pub color: u32,

    /// Color of the parts at both ends of the model.
    #[arg(long = "cornercolor", value_name = "INTEGER")]
    pub corner_color: Option<u32>,

    /// Variant of the chosen shape (e.g. `oblique perpendicular`, `full left`).
    #[arg(long, num_args = 2, value_names = ["FIRST", "SECOND"])]
    pub kind: Vec<String>,

    /// The plain text file to write the model to.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print fewer messages.
    #[arg(short, long)]
    pub quiet: bool,

    /// Display supported shapes and exit.
    #[arg(long)]
    pub shapelist: bool,

    /// Display the variants of every shape and exit.
    #[arg(long)]
    pub kindlist: bool,

    /// Print how many parts of each kind the model uses.
    #[arg(long)]
    pub calculation: bool,
}

/// Log filter for a run.
///
/// A non-empty `rust_log` replaces the default of WARN for everything and
/// INFO for ldshape (ERROR with `quiet`). An unparsable one falls back to it.
pub(crate) fn log_filter(quiet: bool, rust_log: Option<&str>) -> EnvFilter {
    let default = if quiet {
        "warn,ldshape=error"
    } else {
        "warn,ldshape=info"
    };
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default))
}

/// One-line `<Kind>: <message>` failure report.
pub(crate) fn error_report(err: &LdShapeError) -> String {
    format!("{}: {err}", err.kind())
}

/// Capitalized labels of every supported shape, sorted.
pub(crate) fn shape_list() -> Vec<String> {
    let mut labels: Vec<String> = ShapeKind::ALL.iter().map(|kind| kind.label()).collect();
    labels.sort();
    labels
}

/// Every shape with variants, followed by its variant words.
pub(crate) fn kind_list() -> String {
    let mut out = String::new();
    for kind in ShapeKind::ALL {
        let names = Variant::names_for(kind);
        if names.is_empty() {
            continue;
        }
        out.push('\n');
        out.push_str(&kind.name().to_uppercase());
        for name in names {
            out.push_str("\n\t");
            out.push_str(name);
        }
        out.push('\n');
    }
    out
}

/// Generates and saves the requested model.
///
/// Returns `None` when there was nothing to save.
pub(crate) fn exec(args: &Args) -> Result<Option<SavedModel>> {
    let (Some(shape), Some(geometry)) = (&args.shape, &args.geometry) else {
        return Ok(None);
    };

    let kind: ShapeKind = shape.parse()?;
    let variant = match args.kind.as_slice() {
        [first, second] => Variant::parse(kind, first, second)?,
        _ => None,
    };
    let colors = ColorConfig {
        color: args.color,
        corner_color: args.corner_color,
    };
    let path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(default_file_name(kind)));

    let mut request = ShapeRequest::new(kind, geometry.as_str())
        .with_variant(variant)
        .with_colors(colors);
    if let Some(name) = path.file_name() {
        request = request.with_model_name(name.to_string_lossy());
    }
    tracing::debug!(?request, "resolved request");

    let model = build_model(&request, &ShapeRegistry::default())?;
    tracing::debug!(parts = model.part_count(), "model built");

    if args.calculation {
        println!("{}", BillOfMaterials::from_records(model.records()));
    }

    if model.is_empty() {
        if !args.quiet {
            println!("Nothing to save.");
        }
        return Ok(None);
    }

    let saved = model.save(&path)?;
    tracing::debug!(path = %path.display(), parts = saved.parts, "model written");
    if !args.quiet {
        println!("{saved}");
    }
    Ok(Some(saved))
}
