use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use rayon::prelude::*;
use swc_common::SourceMap;
use swc_ecma_visit::VisitWith;
use tracing::{debug, warn};

use crate::config::{Config, GlobPatternRule};
use crate::core::extract::{KeyCallSite, TranslationCallVisitor};
use crate::core::file_scanner::scan_files;
use crate::core::matcher::NamespaceMatcher;
use crate::core::parsers::parse_source;
use crate::error::{Error, Result};

/// One discovered call site with the namespaces of the file it was found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyNamespaceAssociation {
    pub raw_key: String,
    /// Path relative to the project root, `/`-separated.
    pub file_path: String,
    pub line: usize,
    pub namespaces: Vec<String>,
}

#[derive(Debug, Default)]
pub struct Extraction {
    /// Associations in sorted file order, then source order within a file.
    pub associations: Vec<KeyNamespaceAssociation>,
    pub files_scanned: usize,
    /// Files that failed to read or parse. They contribute no keys.
    pub failures: Vec<Error>,
}

/// Scans the configured source globs for translation keys.
#[derive(Debug, Clone)]
pub struct KeyExtractor {
    root: PathBuf,
    patterns: Vec<String>,
    matcher: NamespaceMatcher,
    functions: Vec<String>,
    rich_methods: Vec<String>,
}

impl KeyExtractor {
    pub fn new(root: &Path, config: &Config) -> Result<Self> {
        Self::with_rules(root, config, &config.glob_patterns)
    }

    /// Extractor over a custom rule set, keeping the call-site settings of `config`.
    pub fn with_rules(root: &Path, config: &Config, rules: &[GlobPatternRule]) -> Result<Self> {
        Ok(Self {
            root: root.to_path_buf(),
            patterns: rules.iter().map(|r| r.pattern().to_string()).collect(),
            matcher: NamespaceMatcher::new(rules, &config.default_namespace)?,
            functions: config.translation_functions.clone(),
            rich_methods: config.rich_methods.clone(),
        })
    }

    /// Extract every key from a single source text.
    pub fn extract_source(&self, code: String, file_path: &str) -> Result<Vec<KeyCallSite>> {
        let source_map = Arc::new(SourceMap::default());
        let parsed =
            parse_source(code, file_path, source_map).map_err(|source| Error::SourceParse {
                path: file_path.to_string(),
                source,
            })?;

        let mut visitor =
            TranslationCallVisitor::new(&parsed.source_map, &self.functions, &self.rich_methods);
        parsed.module.visit_with(&mut visitor);
        Ok(visitor.calls)
    }

    fn extract_file(&self, relative: &str) -> Result<Vec<KeyNamespaceAssociation>> {
        let full_path = self.root.join(relative);
        let code = fs::read_to_string(&full_path).map_err(|e| Error::SourceParse {
            path: relative.to_string(),
            source: e.into(),
        })?;

        let calls = self.extract_source(code, relative)?;
        if calls.is_empty() {
            return Ok(Vec::new());
        }

        let namespaces = self.matcher.namespaces_for_file(relative);
        Ok(calls
            .into_iter()
            .map(|call| KeyNamespaceAssociation {
                raw_key: call.raw_key,
                file_path: relative.to_string(),
                line: call.line,
                namespaces: namespaces.clone(),
            })
            .collect())
    }

    /// Extract associations from every file the configured globs match.
    ///
    /// Read-only: nothing on disk is modified.
    pub fn extract(&self) -> Result<Extraction> {
        let files: Vec<String> = scan_files(&self.root, &self.patterns)?.into_iter().collect();

        let per_file: Vec<Result<Vec<KeyNamespaceAssociation>>> =
            files.par_iter().map(|file| self.extract_file(file)).collect();

        let mut extraction = Extraction {
            files_scanned: files.len(),
            ..Default::default()
        };
        for result in per_file {
            match result {
                Ok(associations) => extraction.associations.extend(associations),
                Err(e) => {
                    warn!(error = %e, "skipping source file");
                    extraction.failures.push(e);
                }
            }
        }

        debug!(
            files = extraction.files_scanned,
            keys = extraction.associations.len(),
            "extraction finished"
        );
        Ok(extraction)
    }

    /// Run [`KeyExtractor::extract`] on the blocking pool.
    pub async fn extract_async(&self) -> Result<Extraction> {
        let extractor = self.clone();
        tokio::task::spawn_blocking(move || extractor.extract())
            .await
            .map_err(|e| Error::configuration(format!("extraction task failed: {}", e)))?
    }
}

/// Extract all key/namespace associations for a project.
pub fn extract_keys(root: &Path, config: &Config) -> Result<Vec<KeyNamespaceAssociation>> {
    Ok(KeyExtractor::new(root, config)?.extract()?.associations)
}
