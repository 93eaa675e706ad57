use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use serde_json::json;

use crate::{CliTest, stderr, stdout};

fn setup() -> Result<CliTest> {
    let test = CliTest::with_config(json!({"locales": ["en", "de"]}))?;
    test.write_file("src/App.tsx", r#"t("used")"#)?;
    test.write_locale("en", "common", json!({"used": "Used", "stale": "Stale"}))?;
    test.write_locale("de", "common", json!({"used": "Benutzt", "stale": "Alt"}))?;
    Ok(test)
}

#[test]
fn test_clean_dry_run_keeps_files() -> Result<()> {
    let test = setup()?;

    let mut cmd = test.clean_command();
    cmd.arg("--dry-run");
    assert_cmd_snapshot!(cmd);
    assert_eq!(test.read_locale("en", "common")?["stale"], "Stale");

    Ok(())
}

#[test]
fn test_clean_removes_unused_keys() -> Result<()> {
    let test = setup()?;

    assert_cmd_snapshot!(test.clean_command());
    assert_eq!(test.read_locale("en", "common")?, json!({"used": "Used"}));
    assert_eq!(test.read_locale("de", "common")?, json!({"used": "Benutzt"}));

    Ok(())
}

#[test]
fn test_clean_nothing_to_do() -> Result<()> {
    let test = CliTest::with_config(json!({}))?;
    test.write_file("src/App.tsx", r#"t("used")"#)?;
    test.write_locale("en", "common", json!({"used": "Used"}))?;

    let output = test.command().arg("clean").output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("No unused keys found"));

    Ok(())
}

#[test]
fn test_clean_refuses_with_unparsable_source() -> Result<()> {
    let test = setup()?;
    test.write_file("src/Broken.tsx", r#"t("stale" <"#)?;

    let output = test.clean_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.contains("refusing to remove keys"));
    assert!(err.contains("src/Broken.tsx"));
    assert_eq!(test.read_locale("en", "common")?["stale"], "Stale");
    assert_eq!(test.read_locale("de", "common")?["stale"], "Alt");

    Ok(())
}
