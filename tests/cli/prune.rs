use anyhow::Result;
use serde_json::json;

use crate::{CliTest, stderr, stdout};

fn setup() -> Result<CliTest> {
    let test = CliTest::with_config(json!({"locales": ["en", "de"]}))?;
    test.write_file("src/mobile/App.tsx", r#"t("title")"#)?;
    test.write_file("src/web/Page.tsx", r#"t("footer")"#)?;
    test.write_locale("en", "common", json!({"title": "Title", "footer": "Footer"}))?;
    test.write_locale("de", "common", json!({"title": "Titel", "footer": "Fußzeile"}))?;
    Ok(test)
}

#[test]
fn test_prune_namespace_creates_target_documents() -> Result<()> {
    let test = setup()?;

    let output = test
        .command()
        .args([
            "prune-namespace",
            "--source",
            "common",
            "--target",
            "mobile",
            "--pattern",
            "src/mobile/**/*.tsx",
        ])
        .output()?;

    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("Created namespace \"mobile\" from \"common\" with 1 key"));
    assert_eq!(test.read_locale("en", "mobile")?, json!({"title": "Title"}));
    assert_eq!(test.read_locale("de", "mobile")?, json!({"title": "Titel"}));
    assert_eq!(test.read_locale("en", "common")?["footer"], "Footer");

    Ok(())
}

#[test]
fn test_prune_namespace_rejects_existing_target() -> Result<()> {
    let test = setup()?;

    let output = test
        .command()
        .args(["prune-namespace", "--source", "common", "--target", "common"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("already exists"));

    Ok(())
}
