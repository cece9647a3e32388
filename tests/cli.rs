use std::fs;

use assert_cmd::Command;
use indoc::indoc;
use tempfile::tempdir;

const SHOP: &str = "tests/fixtures/shop.json";

const SHOP_TS: &str = indoc! {r#"
    interface Widget {
        /**
         * Stable identifier.
         */
        id: string
        tag?: string | null
        size?: "small" | "large"
        extra_data?: { [key: string]: string }
    }

    interface Address {
        city: string
        zip?: number
    }

    interface Order {
        items: Widget[]
        ship_to?: Address
        note?: string | Widget
    }

    type WidgetOrOrder = Widget | Order
"#};

fn schema_ts() -> Command {
    Command::cargo_bin("schema-ts").unwrap()
}

#[test]
fn generates_to_stdout() {
    let assert = schema_ts().args(["generate", "-i", SHOP]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout, SHOP_TS);

    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("order.properties.blob"));
}

#[test]
fn deny_warnings_changes_exit_status() {
    schema_ts()
        .args(["generate", "-i", SHOP, "--deny-warnings"])
        .assert()
        .code(2);
}

#[test]
fn writes_output_file_and_applies_flags() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("nested").join("types.ts");

    schema_ts()
        .args(["generate", "-i", SHOP, "--export", "--no-descriptions", "--skip", "order", "widget_or_order"])
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    let written = fs::read_to_string(&out).unwrap();
    assert_eq!(written, indoc! {r#"
        export interface Widget {
            id: string
            tag?: string | null
            size?: "small" | "large"
            extra_data?: { [key: string]: string }
        }
    "#});
}

#[test]
fn bare_mapping_with_empty_pointer_and_glob_inputs() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.json"), r#"{ "alpha": { "type": "object", "properties": { "x": { "type": "number" } } } }"#).unwrap();
    fs::write(dir.path().join("b.json"), r#"{ "beta": { "anyOf": [{ "type": "string" }, { "type": "boolean" }] } }"#).unwrap();
    let pattern = format!("{}/*.json", dir.path().display());

    let assert = schema_ts()
        .args(["generate", "--pointer", "", "-i", &pattern])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout, indoc! {"
        interface Alpha {
            x?: number
        }

        type Beta = string | boolean
    "});
}

#[test]
fn jq_expression_selects_the_mapping() {
    let assert = schema_ts()
        .args(["generate", "-i", SHOP, "--jq-expr", ".components.schemas | {widget_or_order: .widget_or_order}"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout, "type WidgetOrOrder = Widget | Order\n");
}

#[test]
fn missing_input_fails() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    schema_ts()
        .args(["generate", "-i"])
        .arg(&missing)
        .assert()
        .failure()
        .code(1);
}
