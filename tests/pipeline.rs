#![allow(clippy::unwrap_used)]

use approx::assert_relative_eq;
use ldshape::catalog::ShapeRegistry;
use ldshape::geometry::{DomeHalf, EndCap, ShapeKind, Variant};
use ldshape::model::{Model, ModelEntry};
use ldshape::placement::ColorConfig;
use ldshape::{build_model, generate_to_file, Outcome, ShapeRequest};

fn build(kind: ShapeKind, geometry: &str) -> Model {
    build_model(&ShapeRequest::new(kind, geometry), &ShapeRegistry::default()).unwrap()
}

fn steps(model: &Model) -> usize {
    model
        .entries()
        .iter()
        .filter(|e| matches!(e, ModelEntry::Step))
        .count()
}

#[test]
fn rectangular_counts_and_layers() {
    let model = build(ShapeKind::Rectangular, "3x4x5");
    assert_eq!(model.part_count(), 60);
    assert_eq!(steps(&model), 5);
}

#[test]
fn rows_are_one_pitch_apart() {
    for (kind, pitch) in [(ShapeKind::Cylinder, 24.0), (ShapeKind::Triangular, 8.0)] {
        let model = build(kind, "6");
        let ys: Vec<f64> = model.records().map(|r| r.position.y).collect();
        assert_eq!(ys.len(), 6);
        for pair in ys.windows(2) {
            assert_relative_eq!(pair[1] - pair[0], pitch);
        }
    }
}

#[test]
fn hexagonal_rings_translate_along_y() {
    let model = build(ShapeKind::Hexagonal, "5");
    assert_eq!(model.part_count(), 4 * 5);
    assert_eq!(steps(&model), 5);
    let records: Vec<_> = model.records().collect();
    for ring in 1..5 {
        for corner in 0..4 {
            let a = records[corner];
            let b = records[ring * 4 + corner];
            assert_relative_eq!(b.position.y - a.position.y, 24.0 * ring as f64);
            assert_relative_eq!(b.position.x, a.position.x);
            assert_relative_eq!(b.position.z, a.position.z);
            assert_eq!(b.orientation, a.orientation);
        }
    }
}

#[test]
fn trapezoid_end_caps() {
    let registry = ShapeRegistry::default();
    let plain = build(ShapeKind::Trapezoid, "4");
    assert_eq!(plain.part_count(), 8);

    let request = ShapeRequest::new(ShapeKind::Trapezoid, "4").with_variant(Some(
        Variant::Trapezoid {
            left: EndCap::Oblique,
            right: EndCap::Oblique,
        },
    ));
    let capped = build_model(&request, &registry).unwrap();
    let plain: Vec<_> = plain.records().collect();
    let capped: Vec<_> = capped.records().collect();
    assert_eq!(capped.len(), 8);

    for i in [0, 1] {
        assert_eq!(capped[i].part.id, "3685.dat");
        assert_relative_eq!(capped[i].position.z - plain[i].position.z, 10.0);
    }
    for i in [6, 7] {
        assert_eq!(capped[i].part.id, "3685.dat");
        assert_relative_eq!(capped[i].position.z - plain[i].position.z, -10.0);
    }
    for i in 2..6 {
        assert_eq!(capped[i].part.id, "3684.dat");
        assert_eq!(capped[i], plain[i]);
    }
}

#[test]
fn full_domes_are_symmetric() {
    for kind in [ShapeKind::Spheroid, ShapeKind::Tent] {
        let request = ShapeRequest::new(kind, "7x5x6").with_variant(Some(Variant::Dome {
            top: DomeHalf::Full,
            bottom: DomeHalf::Full,
        }));
        let model = build_model(&request, &ShapeRegistry::default()).unwrap();
        assert!(!model.is_empty());
        let right = model.records().filter(|r| r.position.x > 0.0).count();
        let left = model.records().filter(|r| r.position.x < 0.0).count();
        let top = model.records().filter(|r| r.position.z > 0.0).count();
        let bottom = model.records().filter(|r| r.position.z < 0.0).count();
        assert_eq!(left, right);
        assert_eq!(top, bottom);
        assert_eq!(top + bottom, model.part_count());
    }
}

#[test]
fn corner_color_only_at_the_ends() {
    let request = ShapeRequest::new(ShapeKind::Rectangular, "2x2x2")
        .with_colors(ColorConfig::new(15).with_corner_color(4));
    let model = build_model(&request, &ShapeRegistry::default()).unwrap();
    let colors: Vec<u32> = model.records().map(|r| r.color).collect();
    assert_eq!(colors.first(), Some(&4));
    assert_eq!(colors.last(), Some(&4));
    assert!(colors[1..colors.len() - 1].iter().all(|&c| c == 15));
}

#[test]
fn embedded_letters_are_ignored() {
    assert_eq!(
        build(ShapeKind::Cylinder, "4a").to_string(),
        build(ShapeKind::Cylinder, "4").to_string()
    );
}

#[test]
fn zero_dimension_means_nothing_to_save() {
    let dir = tempfile::tempdir().unwrap();
    for (kind, geometry) in [
        (ShapeKind::Rectangular, "0x3x3"),
        (ShapeKind::Cylinder, "0"),
        (ShapeKind::Trapezoid, "0"),
        (ShapeKind::Spheroid, "0"),
    ] {
        let path = dir.path().join(format!("{kind}.ldr"));
        let outcome = generate_to_file(
            &ShapeRequest::new(kind, geometry),
            &ShapeRegistry::default(),
            &path,
        )
        .unwrap();
        assert_eq!(outcome, Outcome::NothingToSave);
        assert!(!path.exists());
    }
}

#[test]
fn repeated_runs_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("a.ldr");
    let second = dir.path().join("b.ldr");
    let request = ShapeRequest::new(ShapeKind::Pyramid, "7").with_model_name("pyramid.ldr");
    let registry = ShapeRegistry::default();

    let Outcome::Saved(saved) = generate_to_file(&request, &registry, &first).unwrap() else {
        panic!("pyramid should not be empty");
    };
    assert_eq!(saved.file_name, "a.ldr");
    generate_to_file(&request, &registry, &second).unwrap();
    assert_eq!(
        std::fs::read(&first).unwrap(),
        std::fs::read(&second).unwrap()
    );
    generate_to_file(&request, &registry, &first).unwrap();
    assert_eq!(
        std::fs::read(&first).unwrap(),
        std::fs::read(&second).unwrap()
    );
}

#[test]
fn unsupported_shape_and_bad_output() {
    let err = "dodecahedron".parse::<ShapeKind>().unwrap_err();
    assert_eq!(err.kind(), "UnsupportedShapeError");

    let dir = tempfile::tempdir().unwrap();
    let err = generate_to_file(
        &ShapeRequest::new(ShapeKind::Cylinder, "2"),
        &ShapeRegistry::default(),
        dir.path(),
    )
    .unwrap_err();
    assert_eq!(err.kind(), "OutputWriteError");
}
