use anyhow::Result;
use serde_json::json;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_scan_prompts_for_missing_values() -> Result<()> {
    let test = CliTest::with_config(json!({}))?;
    test.write_file("src/App.tsx", r#"t("greeting"); t("known");"#)?;
    test.write_locale("en", "common", json!({"known": "Known"}))?;

    let output = test.run_with_input(&["scan"], "Hello\n")?;

    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stderr(&output).contains("greeting"));
    let out = stdout(&output);
    assert!(out.contains("Found 1 missing key"));
    assert!(out.contains("en:common (1 key)"));
    assert_eq!(
        test.read_locale("en", "common")?,
        json!({"known": "Known", "greeting": "Hello"})
    );

    Ok(())
}

#[test]
fn test_scan_skips_empty_answers() -> Result<()> {
    let test = CliTest::with_config(json!({}))?;
    test.write_file("src/App.tsx", r#"t("greeting")"#)?;
    test.write_locale("en", "common", json!({}))?;

    let output = test.run_with_input(&["scan"], "\n")?;

    assert!(output.status.success(), "{}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("skipped: 1 key without a value"));
    assert!(out.contains("Nothing was written."));
    assert_eq!(test.read_locale("en", "common")?, json!({}));

    Ok(())
}

#[test]
fn test_scan_without_translation_fills_default_locale_only() -> Result<()> {
    let test = CliTest::with_config(json!({
        "locales": ["en", "de"],
        "disableTranslationDuringScan": true
    }))?;
    test.write_file("src/App.tsx", r#"t("greeting")"#)?;
    test.write_locale("en", "common", json!({}))?;

    let output = test.run_with_input(&["scan"], "Hello\n")?;

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(test.read_locale("en", "common")?, json!({"greeting": "Hello"}));
    assert!(!test.root().join("locales/de/common.json").exists());

    Ok(())
}

#[test]
fn test_scan_with_closed_stdin_fails() -> Result<()> {
    let test = CliTest::with_config(json!({}))?;
    test.write_file("src/App.tsx", r#"t("greeting")"#)?;

    let output = test.run_with_input(&["scan"], "")?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("greeting"));

    Ok(())
}
