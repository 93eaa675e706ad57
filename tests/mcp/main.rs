use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::{Value, json};
use tempfile::TempDir;

mod tools;

/// Test fixture for MCP integration tests
///
/// Manages a temporary project with an i18n-magic.json and locales/<lng>/<ns>.json documents
pub struct McpTestFixture {
    _temp_dir: TempDir,
    project_root: PathBuf,
}

impl McpTestFixture {
    /// Create a project with the default test config
    pub fn new() -> Result<Self> {
        Self::with_config(json!({}))
    }

    /// Create a project whose config is the default test config merged with `overrides`
    pub fn with_config(overrides: Value) -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_root = temp_dir.path().canonicalize()?;
        let fixture = Self {
            _temp_dir: temp_dir,
            project_root,
        };

        let mut config = json!({
            "globPatterns": [
                "src/**/*.tsx",
                {"pattern": "src/admin/**/*.tsx", "namespaces": ["admin"]}
            ],
            "loadPath": "locales/{{lng}}/{{ns}}.json",
            "savePath": "locales/{{lng}}/{{ns}}.json",
            "locales": ["en", "de"],
            "defaultLocale": "en",
            "namespaces": ["common", "admin"],
            "defaultNamespace": "common"
        });
        if let (Some(config), Value::Object(overrides)) = (config.as_object_mut(), overrides) {
            config.extend(overrides);
        }
        fixture.write_file(
            "i18n-magic.json",
            &serde_json::to_string_pretty(&config)?,
        )?;
        Ok(fixture)
    }

    pub fn write_file(&self, relative_path: &str, content: &str) -> Result<()> {
        let path = self.project_root.join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        Ok(())
    }

    /// Write locales/<locale>/<namespace>.json
    pub fn write_locale_file(&self, locale: &str, namespace: &str, content: &Value) -> Result<()> {
        self.write_file(
            &format!("locales/{}/{}.json", locale, namespace),
            &format!("{}\n", serde_json::to_string_pretty(content)?),
        )
    }

    /// Read locales/<locale>/<namespace>.json
    pub fn read_locale_file(&self, locale: &str, namespace: &str) -> Result<Value> {
        let path = self
            .project_root
            .join(format!("locales/{}/{}.json", locale, namespace));
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read locale file: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON from: {}", path.display()))
    }

    /// Get the project root path as a string (for MCP parameters)
    pub fn root(&self) -> String {
        self.project_root.to_string_lossy().to_string()
    }

    pub fn root_path(&self) -> &Path {
        &self.project_root
    }
}

/// Extract JSON value from a successful CallToolResult
///
/// Panics if the result indicates an error or cannot be parsed
pub fn extract_tool_result_json(result: &rmcp::model::CallToolResult) -> Value {
    if let Some(true) = result.is_error {
        panic!("Tool call returned an error: {:?}", result);
    }

    assert!(
        !result.content.is_empty(),
        "Tool result should have content"
    );

    let content_item = &result.content[0];
    let text_content = content_item
        .as_text()
        .expect("Tool result content should be text");

    serde_json::from_str(&text_content.text).expect("Tool result should be valid JSON")
}
