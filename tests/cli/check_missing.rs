use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use serde_json::json;

use crate::{CliTest, stdout};

#[test]
fn test_reports_missing_keys() -> Result<()> {
    let test = CliTest::with_config(json!({}))?;
    test.write_file(
        "src/App.tsx",
        r#"export const App = () => <h1>{t("title")}{t("subtitle")}</h1>;"#,
    )?;
    test.write_locale("en", "common", json!({"title": "Title"}))?;

    assert_cmd_snapshot!(test.check_missing_command());

    Ok(())
}

#[test]
fn test_nothing_missing() -> Result<()> {
    let test = CliTest::with_config(json!({}))?;
    test.write_file("src/App.tsx", r#"t("title")"#)?;
    test.write_locale("en", "common", json!({"title": "Title"}))?;

    let output = test.command().arg("check-missing").output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("No missing keys found"));

    Ok(())
}

#[test]
fn test_scoped_globs_and_prefixed_keys() -> Result<()> {
    let test = CliTest::with_config(json!({
        "globPatterns": [
            "src/**/*.tsx",
            {"pattern": "src/admin/**/*.tsx", "namespaces": ["admin"]}
        ],
        "namespaces": ["common", "admin"]
    }))?;
    test.write_file("src/admin/Users.tsx", r#"t("users"); t("common:save");"#)?;
    test.write_locale("en", "common", json!({}))?;
    test.write_locale("en", "admin", json!({"users": "Users"}))?;

    let output = test.command().arg("check-missing").output()?;

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("save  common"));
    assert!(!out.contains("users"));

    Ok(())
}
