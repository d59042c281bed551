//! Run context: config loading and command routing

use super::test_utils::DocsFixture;
use std::fs;
use wizard_autogen::cli::{Commands, RunContext};
use wizard_autogen::GenerationError;

#[test]
fn test_no_command_runs_generate() {
    let fixture = DocsFixture::new();
    fixture.write_fragment("tf/raydata/image/train_loop_body.py", "BODY");

    let context = RunContext::new(fixture.docs(), None).unwrap();
    let output = context.execute(None).unwrap();

    assert!(output.starts_with("Generated 1 example(s), 1 index document(s)"));
    assert!(fixture.autogenerated("tf_raydata_image.py").exists());
}

#[test]
fn test_list_json_writes_nothing() {
    let fixture = DocsFixture::new();
    fixture.write_fragment("tf/raydata/image/train_loop_body.py", "BODY");
    fixture.write_fragment("_common/raydata/imports.py", "import ray");
    fixture.mkdir("jax/native/text");

    let context = RunContext::new(fixture.docs(), None).unwrap();
    let output = context
        .execute(Some(&Commands::List {
            format: "json".to_string(),
        }))
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["total"], 2);
    assert_eq!(value["examples"][0]["path"], "jax/native/text");
    assert!(value["examples"][0]["trainer_cls"].is_null());
    assert_eq!(value["examples"][1]["path"], "tf/raydata/image");
    assert_eq!(value["examples"][1]["trainer_cls"], "TensorflowTrainer");
    assert_eq!(
        value["examples"][1]["blocks"],
        serde_json::json!(["imports", "train_loop_body"])
    );
    assert!(!fixture.autogenerated("").exists());
}

#[test]
fn test_list_rejects_unknown_format() {
    let fixture = DocsFixture::new();
    let context = RunContext::new(fixture.docs(), None).unwrap();
    let err = context
        .execute(Some(&Commands::List {
            format: "yaml".to_string(),
        }))
        .unwrap_err();
    assert!(matches!(err, GenerationError::ConfigError(_)));
}

#[test]
fn test_docs_config_file_changes_layout() {
    let fixture = DocsFixture::new();
    fs::write(
        fixture.docs().join("autogen.toml"),
        "[layout]\nautogenerated_dir = \"generated\"\n",
    )
    .unwrap();
    fixture.mkdir("xgboost/native/tabular");

    let context = RunContext::new(fixture.docs(), None).unwrap();
    assert_eq!(context.config().layout.autogenerated_dir, "generated");
    context.execute(Some(&Commands::Generate)).unwrap();

    let generated = context
        .docs_dir()
        .join("includes/generated/xgboost_native_tabular.py");
    assert!(generated.exists());
}

#[test]
fn test_explicit_config_file_is_validated() {
    let fixture = DocsFixture::new();
    let config_file = fixture.docs().join("bad.toml");
    fs::write(&config_file, "[layout]\ncommon_dir = \"shared\"\n").unwrap();

    let err = match RunContext::new(fixture.docs(), Some(config_file)) {
        Ok(_) => panic!("invalid layout should be rejected"),
        Err(e) => e,
    };
    assert!(err.to_string().contains("common_dir"));
}

#[test]
fn test_config_command_prints_toml() {
    let fixture = DocsFixture::new();
    let context = RunContext::new(fixture.docs(), None).unwrap();
    let output = context.execute(Some(&Commands::Config)).unwrap();

    let parsed: toml::Value = toml::from_str(&output).unwrap();
    assert_eq!(parsed["layout"]["modules_dir"].as_str(), Some("modules"));
    assert_eq!(parsed["logging"]["encoding"].as_str(), Some("TEXT"));
}

#[test]
fn test_missing_docs_dir_fails() {
    let fixture = DocsFixture::new();
    let result = RunContext::new(fixture.docs().join("nope"), None);
    assert!(matches!(result, Err(GenerationError::Storage(_))));
}
