//! Error types shared by the core engine.
//!
//! Every error that crosses an engine boundary carries enough structured
//! context (locale, namespace, path, cause) for the CLI and MCP layers to
//! render it without inspecting the source chain.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// Invalid or missing namespace/locale references, bad glob patterns,
    /// unusable path templates. Aborts the whole command.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The configuration file exists but could not be read or parsed.
    #[error("failed to load config file {path}: {source}")]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    /// A persisted locale document contains malformed JSON.
    #[error("failed to parse {locale}:{namespace} at {path}: {source}")]
    DocumentParse {
        locale: String,
        namespace: String,
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Reading or writing a locale document failed for a reason other than
    /// the document not existing.
    #[error("failed to access {locale}:{namespace} at {path}: {source}")]
    DocumentIo {
        locale: String,
        namespace: String,
        path: String,
        #[source]
        source: anyhow::Error,
    },

    /// The batch-translation primitive failed or returned unusable output.
    #[error("{}", translation_message(.locale, .namespace, .source))]
    Translation {
        locale: String,
        namespace: Option<String>,
        #[source]
        source: anyhow::Error,
    },

    /// A key that must already exist in a document was not found.
    #[error("key \"{key}\" does not exist in {locale}:{namespace}")]
    UnknownKey {
        key: String,
        locale: String,
        namespace: String,
    },

    /// A source file could not be parsed. Extraction logs and skips these.
    #[error("failed to parse source file {path}: {source}")]
    SourceParse {
        path: String,
        #[source]
        source: anyhow::Error,
    },

    /// Unused keys cannot be told apart while some sources are unreadable.
    #[error(
        "refusing to remove keys: {} source file(s) could not be parsed: {}",
        .files.len(),
        .files.join(", ")
    )]
    UnparsedSources { files: Vec<String> },

    /// A value could not be obtained from the user.
    #[error("failed to read a value for \"{key}\": {source}")]
    Prompt {
        key: String,
        #[source]
        source: anyhow::Error,
    },
}

fn translation_message(
    locale: &str,
    namespace: &Option<String>,
    source: &anyhow::Error,
) -> String {
    match namespace {
        Some(namespace) => format!(
            "failed to translate keys for locale \"{}\" (namespace: {}): {}",
            locale, namespace, source
        ),
        None => format!(
            "failed to translate keys for locale \"{}\": {}",
            locale, source
        ),
    }
}

impl Error {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Attach a namespace to a translation error that was raised without one.
    pub fn in_namespace(self, ns: &str) -> Self {
        match self {
            Self::Translation {
                locale,
                namespace: None,
                source,
            } => Self::Translation {
                locale,
                namespace: Some(ns.to_string()),
                source,
            },
            other => other,
        }
    }

    /// The locale this error is scoped to, if any.
    pub fn locale(&self) -> Option<&str> {
        match self {
            Self::DocumentParse { locale, .. }
            | Self::DocumentIo { locale, .. }
            | Self::Translation { locale, .. }
            | Self::UnknownKey { locale, .. } => Some(locale),
            _ => None,
        }
    }

    /// The namespace this error is scoped to, if any.
    pub fn namespace(&self) -> Option<&str> {
        match self {
            Self::DocumentParse { namespace, .. }
            | Self::DocumentIo { namespace, .. }
            | Self::UnknownKey { namespace, .. } => Some(namespace),
            Self::Translation { namespace, .. } => namespace.as_deref(),
            _ => None,
        }
    }
}
