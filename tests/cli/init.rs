use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("Created i18n-magic.json"));

    let content = test.read_file("i18n-magic.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["defaultLocale"], "en");
    assert_eq!(parsed["defaultNamespace"], "common");
    assert!(parsed["globPatterns"].is_array());
    assert!(
        parsed["loadPath"]
            .as_str()
            .is_some_and(|p| p.contains("{{lng}}") && p.contains("{{ns}}"))
    );

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n-magic.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("already exists"));
    assert_eq!(test.read_file("i18n-magic.json")?, "{}");

    Ok(())
}

#[test]
fn test_commands_require_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("check-missing").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("i18n-magic.json not found"));

    Ok(())
}
