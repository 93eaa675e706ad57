use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use globset::GlobBuilder;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const CONFIG_FILE_NAME: &str = "i18n-magic.json";

pub const LOCALE_PLACEHOLDER: &str = "{{lng}}";
pub const NAMESPACE_PLACEHOLDER: &str = "{{ns}}";

/// A source glob, optionally scoped to a set of namespaces.
///
/// Bare patterns only widen the set of scanned files. Scoped patterns also
/// attribute every key found in a matching file to their namespaces.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum GlobPatternRule {
    Pattern(String),
    Scoped {
        pattern: String,
        namespaces: Vec<String>,
    },
}

impl GlobPatternRule {
    pub fn pattern(&self) -> &str {
        match self {
            Self::Pattern(pattern) => pattern,
            Self::Scoped { pattern, .. } => pattern,
        }
    }

    pub fn namespaces(&self) -> &[String] {
        match self {
            Self::Pattern(_) => &[],
            Self::Scoped { namespaces, .. } => namespaces,
        }
    }
}

/// Host transport for the batch-translation primitive.
///
/// The command receives the request JSON on stdin and must print a JSON
/// object with the same keys on stdout.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatorConfig {
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub glob_patterns: Vec<GlobPatternRule>,
    #[serde(default = "default_document_path")]
    pub load_path: String,
    #[serde(default = "default_document_path")]
    pub save_path: String,
    pub locales: Vec<String>,
    pub default_locale: String,
    pub namespaces: Vec<String>,
    pub default_namespace: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default)]
    pub disable_translation_during_scan: bool,
    #[serde(default)]
    pub auto_clear: bool,
    #[serde(default = "default_translation_functions")]
    pub translation_functions: Vec<String>,
    #[serde(default = "default_rich_methods")]
    pub rich_methods: Vec<String>,
    #[serde(default = "default_translation_delay_ms")]
    pub translation_delay_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translator: Option<TranslatorConfig>,
}

fn default_document_path() -> String {
    "locales/{{lng}}/{{ns}}.json".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_translation_functions() -> Vec<String> {
    vec!["t".to_string()]
}

fn default_rich_methods() -> Vec<String> {
    ["rich", "markup", "raw"].map(String::from).to_vec()
}

fn default_translation_delay_ms() -> u64 {
    1000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            glob_patterns: vec![GlobPatternRule::Pattern(
                "src/**/*.{ts,tsx,js,jsx}".to_string(),
            )],
            load_path: default_document_path(),
            save_path: default_document_path(),
            locales: vec!["en".to_string(), "de".to_string()],
            default_locale: "en".to_string(),
            namespaces: vec!["common".to_string()],
            default_namespace: "common".to_string(),
            context: None,
            model: default_model(),
            disable_translation_during_scan: false,
            auto_clear: false,
            translation_functions: default_translation_functions(),
            rich_methods: default_rich_methods(),
            translation_delay_ms: default_translation_delay_ms(),
            translator: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Every namespace or locale referenced anywhere must be declared, and
    /// every glob pattern must compile.
    pub fn validate(&self) -> Result<()> {
        if self.namespaces.is_empty() {
            return Err(Error::configuration("'namespaces' must not be empty"));
        }
        if self.locales.is_empty() {
            return Err(Error::configuration("'locales' must not be empty"));
        }
        if !self.has_namespace(&self.default_namespace) {
            return Err(Error::configuration(format!(
                "defaultNamespace \"{}\" is not listed in 'namespaces'",
                self.default_namespace
            )));
        }
        if !self.has_locale(&self.default_locale) {
            return Err(Error::configuration(format!(
                "defaultLocale \"{}\" is not listed in 'locales'",
                self.default_locale
            )));
        }

        for rule in &self.glob_patterns {
            GlobBuilder::new(rule.pattern()).build().map_err(|e| {
                Error::configuration(format!(
                    "Invalid glob pattern in 'globPatterns': \"{}\": {}",
                    rule.pattern(),
                    e
                ))
            })?;

            if let GlobPatternRule::Scoped {
                pattern,
                namespaces,
            } = rule
            {
                if namespaces.is_empty() {
                    return Err(Error::configuration(format!(
                        "pattern \"{}\" has an empty 'namespaces' list",
                        pattern
                    )));
                }
                if let Some(unknown) = namespaces.iter().find(|ns| !self.has_namespace(ns)) {
                    return Err(Error::configuration(format!(
                        "pattern \"{}\" references unknown namespace \"{}\"",
                        pattern, unknown
                    )));
                }
            }
        }

        for (field, template) in [("loadPath", &self.load_path), ("savePath", &self.save_path)] {
            if !template.contains(LOCALE_PLACEHOLDER) || !template.contains(NAMESPACE_PLACEHOLDER) {
                return Err(Error::configuration(format!(
                    "'{}' must contain both {} and {}: \"{}\"",
                    field, LOCALE_PLACEHOLDER, NAMESPACE_PLACEHOLDER, template
                )));
            }
        }

        Ok(())
    }

    pub fn has_namespace(&self, namespace: &str) -> bool {
        self.namespaces.iter().any(|ns| ns == namespace)
    }

    pub fn has_locale(&self, locale: &str) -> bool {
        self.locales.iter().any(|l| l == locale)
    }

    /// Fails with a configuration error when `namespace` is not declared.
    pub fn require_namespace(&self, namespace: &str) -> Result<()> {
        if self.has_namespace(namespace) {
            Ok(())
        } else {
            Err(Error::configuration(format!(
                "unknown namespace \"{}\" (available: {})",
                namespace,
                self.namespaces.join(", ")
            )))
        }
    }

    pub fn is_default_namespace(&self, namespace: &str) -> bool {
        self.default_namespace == namespace
    }

    /// All locales except the default one, in configured order.
    pub fn secondary_locales(&self) -> impl Iterator<Item = &str> {
        self.locales
            .iter()
            .map(String::as_str)
            .filter(|l| *l != self.default_locale)
    }
}

pub fn default_config_json() -> anyhow::Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

/// Search `start_dir` and its parents for the config file, stopping at a
/// repository root (`.git`).
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = std::path::absolute(start_dir).unwrap_or_else(|_| start_dir.to_path_buf());

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// The file the config was read from.
    pub path: PathBuf,
    /// Directory that globs and path templates are resolved against.
    pub root: PathBuf,
}

pub fn load_config_file(path: &Path) -> Result<ConfigLoadResult> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))
        .map_err(|source| Error::ConfigFile {
            path: path.to_path_buf(),
            source,
        })?;
    let config: Config = serde_json::from_str(&content).map_err(|e| Error::ConfigFile {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    config.validate()?;

    let root = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    Ok(ConfigLoadResult {
        config,
        path: path.to_path_buf(),
        root,
    })
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => load_config_file(&path),
        None => Err(Error::configuration(format!(
            "{} not found in {} or any parent directory (run `i18n-magic init`)",
            CONFIG_FILE_NAME,
            start_dir.display()
        ))),
    }
}
