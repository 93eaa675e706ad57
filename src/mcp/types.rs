use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::{Config, GlobPatternRule};
use crate::engines::{AddKeyReport, WrittenDocument};

// ============================================================
// Tool Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Directory to start searching for i18n-magic.json from
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListUntranslatedKeysParams {
    /// Directory to start searching for i18n-magic.json from
    pub project_root_path: String,
    /// Only list keys missing from this namespace
    #[serde(default)]
    pub namespace: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddTranslationKeyParams {
    /// Directory to start searching for i18n-magic.json from
    pub project_root_path: String,
    /// Key as used in source, optionally prefixed with `namespace:`
    pub key: String,
    /// Value in the default locale
    pub value: String,
    /// Namespace to use when the key is not used anywhere in source yet
    #[serde(default)]
    pub namespace: Option<String>,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// Path of the loaded i18n-magic.json
    pub config_path: String,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GlobPatternDto {
    pub pattern: String,
    /// Empty for patterns that are not scoped to namespaces
    pub namespaces: Vec<String>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub glob_patterns: Vec<GlobPatternDto>,
    pub load_path: String,
    pub save_path: String,
    pub locales: Vec<String>,
    pub default_locale: String,
    pub namespaces: Vec<String>,
    pub default_namespace: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    pub model: String,
    pub disable_translation_during_scan: bool,
    pub auto_clear: bool,
    pub translation_functions: Vec<String>,
    /// True when a translator command is configured
    pub has_translator: bool,
}

impl From<&GlobPatternRule> for GlobPatternDto {
    fn from(rule: &GlobPatternRule) -> Self {
        Self {
            pattern: rule.pattern().to_string(),
            namespaces: rule.namespaces().to_vec(),
        }
    }
}

impl From<Config> for ConfigValues {
    fn from(c: Config) -> Self {
        Self {
            glob_patterns: c.glob_patterns.iter().map(GlobPatternDto::from).collect(),
            load_path: c.load_path,
            save_path: c.save_path,
            locales: c.locales,
            default_locale: c.default_locale,
            namespaces: c.namespaces,
            default_namespace: c.default_namespace,
            context: c.context,
            model: c.model,
            disable_translation_during_scan: c.disable_translation_during_scan,
            auto_clear: c.auto_clear,
            translation_functions: c.translation_functions,
            has_translator: c.translator.is_some(),
        }
    }
}

// ============================================================
// Untranslated Keys Types (list_untranslated_keys)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UntranslatedKeysResult {
    pub total_count: usize,
    /// Sorted, without duplicates
    pub keys: Vec<String>,
}

// ============================================================
// Add Key Types (add_translation_key)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddTranslationKeyResult {
    pub success: bool,
    /// The key as stored, without a namespace prefix
    pub key: String,
    pub locale: String,
    pub namespaces: Vec<String>,
    /// True if the namespaces were derived from where the key is used in source
    pub from_usage: bool,
    pub files: Vec<WrittenFile>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WrittenFile {
    pub namespace: String,
    /// Where the document was written
    pub file_path: String,
}

impl AddTranslationKeyResult {
    pub fn new(report: AddKeyReport, describe: impl Fn(&WrittenDocument) -> String) -> Self {
        let files = report
            .written
            .iter()
            .map(|doc| WrittenFile {
                namespace: doc.namespace.clone(),
                file_path: describe(doc),
            })
            .collect();
        Self {
            success: true,
            key: report.key,
            locale: report.locale,
            namespaces: report.namespaces,
            from_usage: report.from_usage,
            files,
        }
    }
}
