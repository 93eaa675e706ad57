use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    process::{Command, Output, Stdio},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use serde_json::Value;
use tempfile::TempDir;

mod check_missing;
mod clean;
mod init;
mod prune;
mod replace;
mod scan;
mod sync;

const BIN_NAME: &str = "i18n-magic";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// A project with `i18n-magic.json` built from `config` over the defaults used here.
    pub fn with_config(config: Value) -> Result<Self> {
        let test = Self::new()?;
        let mut base = serde_json::json!({
            "globPatterns": ["src/**/*.tsx"],
            "loadPath": "locales/{{lng}}/{{ns}}.json",
            "savePath": "locales/{{lng}}/{{ns}}.json",
            "locales": ["en"],
            "defaultLocale": "en",
            "namespaces": ["common"],
            "defaultNamespace": "common",
            "translationDelayMs": 0
        });
        if let (Some(base), Value::Object(overrides)) = (base.as_object_mut(), config) {
            base.extend(overrides);
        }
        test.write_file("i18n-magic.json", &serde_json::to_string_pretty(&base)?)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn write_locale(&self, locale: &str, namespace: &str, content: Value) -> Result<()> {
        self.write_file(
            &format!("locales/{}/{}.json", locale, namespace),
            &serde_json::to_string_pretty(&content)?,
        )
    }

    pub fn read_locale(&self, locale: &str, namespace: &str) -> Result<Value> {
        let content = self.read_file(&format!("locales/{}/{}.json", locale, namespace))?;
        serde_json::from_str(&content).context("locale file should be valid JSON")
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn clean_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("clean");
        cmd
    }

    pub fn check_missing_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("check-missing");
        cmd
    }

    /// Run `args`, feeding `input` on stdin.
    pub fn run_with_input(&self, args: &[&str], input: &str) -> Result<Output> {
        let mut child = self
            .command()
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;
        child
            .stdin
            .take()
            .context("stdin should be piped")?
            .write_all(input.as_bytes())?;
        Ok(child.wait_with_output()?)
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
