//! Property-based tests for determinism guarantees

use proptest::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use tempfile::TempDir;
use wizard_autogen::config::LayoutConfig;
use wizard_autogen::render::JinjaRenderer;
use wizard_autogen::Generator;

const TEMPLATE: &str = "{{ trainer_cls }}|{{ custom_train_loop }}|{{ use_ray_data }}|{{ a }}|{{ b }}|{{ train_loop_body }}";

/// Test that the same tree and template always render the same bytes
#[test]
fn test_generation_determinism_property() {
    let mut runner = proptest::test_runner::TestRunner::new(ProptestConfig::with_cases(32));

    runner
        .run(
            &(
                prop::sample::select(vec!["tf", "torch", "xgboost"]),
                prop::sample::select(vec!["raydata", "native"]),
                prop::collection::btree_map(
                    prop::sample::select(vec!["a", "b", "train_loop_body"]),
                    "[ -~]{0,40}",
                    0..3,
                ),
            ),
            |(framework, loader, blocks)| {
                let temp_dir = TempDir::new().unwrap();
                let docs = temp_dir.path().to_path_buf();
                let leaf = docs
                    .join("includes/modules")
                    .join(framework)
                    .join(loader)
                    .join("image");
                fs::create_dir_all(&leaf).unwrap();
                fs::create_dir_all(docs.join("includes/templates")).unwrap();
                fs::write(docs.join("includes/templates/template.txt"), TEMPLATE).unwrap();
                write_blocks(&leaf, &blocks);

                let generator = || {
                    Generator::with_default_renderer(docs.clone(), LayoutConfig::default())
                };

                let first = generator().run().unwrap();
                let first_bytes = fs::read(&first.generated[0]).unwrap();
                let second = generator().run().unwrap();
                let second_bytes = fs::read(&second.generated[0]).unwrap();
                assert_eq!(first_bytes, second_bytes);

                // Flags follow the inputs, not run history; booleans print in
                // Jinja2 casing
                let rendered = String::from_utf8(first_bytes).unwrap();
                let expected_flags = format!(
                    "|{}|{}|",
                    jinja_bool(blocks.contains_key("train_loop_body")),
                    jinja_bool(loader == "raydata")
                );
                assert!(
                    rendered.contains(&expected_flags),
                    "{rendered:?} should contain {expected_flags:?}"
                );

                // A fresh renderer over the same inputs agrees too
                let fresh = Generator::new(
                    docs.clone(),
                    LayoutConfig::default(),
                    JinjaRenderer::from_source("template.txt", TEMPLATE).unwrap(),
                );
                let example = &fresh.discover().unwrap()[0];
                assert_eq!(fresh.render(example).unwrap().content, rendered);

                Ok(())
            },
        )
        .unwrap();
}

fn jinja_bool(flag: bool) -> &'static str {
    if flag {
        "True"
    } else {
        "False"
    }
}

fn write_blocks(dir: &std::path::Path, blocks: &BTreeMap<&str, String>) {
    for (name, contents) in blocks {
        fs::write(dir.join(format!("{name}.py")), contents).unwrap();
    }
}
