use anyhow::Result;
use serde_json::json;

use crate::{CliTest, stderr, stdout};

fn setup() -> Result<CliTest> {
    let test = CliTest::with_config(json!({}))?;
    test.write_locale("en", "common", json!({"title": "Title", "cta": "Go"}))?;
    Ok(test)
}

#[test]
fn test_replace_with_arguments() -> Result<()> {
    let test = setup()?;

    let output = test
        .command()
        .args(["replace", "title", "--value", "Welcome"])
        .output()?;

    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("Replaced \"title\" in 1 file"));
    assert_eq!(
        test.read_locale("en", "common")?,
        json!({"title": "Welcome", "cta": "Go"})
    );

    Ok(())
}

#[test]
fn test_replace_asks_again_for_unknown_key() -> Result<()> {
    let test = setup()?;

    let output = test.run_with_input(&["replace", "nope"], "title\nWelcome\n")?;

    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stderr(&output).contains("\"nope\" does not exist"));
    assert_eq!(test.read_locale("en", "common")?["title"], "Welcome");

    Ok(())
}

#[test]
fn test_replace_gives_up_after_three_attempts() -> Result<()> {
    let test = setup()?;

    let output = test.run_with_input(&["replace"], "a\nb\nc\n")?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("key \"c\" does not exist"));
    assert_eq!(test.read_locale("en", "common")?["title"], "Title");

    Ok(())
}
