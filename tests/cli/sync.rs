use anyhow::Result;
use serde_json::json;

use crate::{CliTest, stderr, stdout};

/// Translator that returns the request's data unchanged.
fn echo_translator() -> serde_json::Value {
    json!({
        "command": "/bin/sh",
        "args": ["-c", r#"sed 's/.*"data":\({[^}]*}\).*/\1/'"#]
    })
}

#[cfg(unix)]
#[test]
fn test_sync_fills_other_locales() -> Result<()> {
    let test = CliTest::with_config(json!({
        "locales": ["en", "de"],
        "translator": echo_translator()
    }))?;
    test.write_locale("en", "common", json!({"title": "Title", "save": "Save"}))?;
    test.write_locale("de", "common", json!({"title": "Titel"}))?;

    let output = test
        .command()
        .env("PATH", std::env::var_os("PATH").unwrap_or_default())
        .arg("sync")
        .output()?;

    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("de: 1 missing key (0 reused, 1 translated)"));
    assert_eq!(
        test.read_locale("de", "common")?,
        json!({"title": "Titel", "save": "Save"})
    );

    Ok(())
}

#[test]
fn test_sync_creates_missing_documents() -> Result<()> {
    let test = CliTest::with_config(json!({"locales": ["en", "de"]}))?;
    test.write_locale("en", "common", json!({}))?;

    let output = test.command().arg("sync").output()?;

    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("Created de:common"));
    assert_eq!(test.read_locale("de", "common")?, json!({}));

    Ok(())
}

#[test]
fn test_sync_without_translator_fails() -> Result<()> {
    let test = CliTest::with_config(json!({"locales": ["en", "de"]}))?;
    test.write_locale("en", "common", json!({"title": "Title"}))?;

    let output = test.command().arg("sync").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("no translator configured"));
    assert_eq!(test.read_locale("de", "common")?, json!({}));

    Ok(())
}
