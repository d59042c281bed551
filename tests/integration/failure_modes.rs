//! Fail-fast behavior: every error aborts the run

use super::test_utils::DocsFixture;
use wizard_autogen::config::LayoutConfig;
use wizard_autogen::render::JinjaRenderer;
use wizard_autogen::{GenerationError, Generator, StorageError};

#[test]
fn test_unknown_framework_aborts_without_output() {
    let fixture = DocsFixture::new();
    fixture.write_fragment("jax/raydata/image/imports.py", "import jax");

    let err = fixture.generator().run().unwrap_err();
    match err {
        GenerationError::UnknownFramework(name) => assert_eq!(name, "jax"),
        other => panic!("unexpected error: {other}"),
    }
    assert!(!fixture.autogenerated("jax_raydata_image.py").exists());
}

#[test]
fn test_unknown_framework_after_valid_example_keeps_earlier_output() {
    let fixture = DocsFixture::new();
    fixture.mkdir("tf/raydata/image");
    fixture.mkdir("zeta/raydata/image");

    let err = fixture.generator().run().unwrap_err();
    assert!(matches!(err, GenerationError::UnknownFramework(_)));

    // Not transactional: the earlier example stays, no index page was written
    assert!(fixture.autogenerated("tf_raydata_image.py").exists());
    assert!(!fixture.autogenerated("zeta_raydata_image.py").exists());
    assert!(!fixture.docs().join("tf_raydata_image.rst").exists());
}

#[test]
fn test_extra_separator_fails_index_emission() {
    let fixture = DocsFixture::new();
    fixture.mkdir("tf/ray_data/image");

    let err = fixture.generator().run().unwrap_err();
    match err {
        GenerationError::MalformedName { name, parts } => {
            assert_eq!(name, "tf_ray_data_image");
            assert_eq!(parts, 4);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(fixture.autogenerated("tf_ray_data_image.py").exists());
}

#[test]
fn test_two_level_example_fails_index_emission() {
    let fixture = DocsFixture::new();
    fixture.mkdir("torch/raydata");

    let err = fixture.generator().run().unwrap_err();
    assert!(matches!(err, GenerationError::MalformedName { parts: 2, .. }));
}

#[test]
fn test_single_segment_example_is_malformed() {
    let fixture = DocsFixture::new();
    fixture.write_fragment("tf/imports.py", "import tensorflow as tf");

    let err = fixture.generator().run().unwrap_err();
    assert!(matches!(err, GenerationError::MalformedName { parts: 1, .. }));
}

#[test]
fn test_missing_template_is_template_error() {
    let fixture = DocsFixture::new();
    fixture.mkdir("tf/raydata/image");

    let layout = LayoutConfig {
        template_name: "missing.txt".to_string(),
        ..Default::default()
    };
    let generator = Generator::new(
        fixture.docs(),
        layout.clone(),
        JinjaRenderer::from_dir(&layout.templates_path(&fixture.docs())),
    );

    let err = generator.run().unwrap_err();
    assert!(matches!(err, GenerationError::Template(_)));
}

#[test]
fn test_missing_modules_dir_is_walk_error() {
    let fixture = DocsFixture::new();
    let layout = LayoutConfig {
        modules_dir: "fragments".to_string(),
        ..Default::default()
    };
    let generator = Generator::with_default_renderer(fixture.docs(), layout);

    let err = generator.run().unwrap_err();
    assert!(matches!(err, GenerationError::Storage(StorageError::Walk(_))));
}
