//! File path to namespace attribution.
//!
//! Scoped glob rules attribute every key found in a matching file to the
//! rule's namespaces. Bare patterns never attribute anything; files that
//! no scoped rule matches fall back to the default namespace.

use globset::{GlobBuilder, GlobMatcher};

use crate::config::GlobPatternRule;
use crate::error::{Error, Result};

/// Strip one optional leading `./` and normalize separators to `/`.
pub fn normalize_path(path: &str) -> String {
    let unified = path.replace('\\', "/");
    match unified.strip_prefix("./") {
        Some(stripped) => stripped.to_string(),
        None => unified,
    }
}

/// Compile a glob pattern with the semantics used for every source pattern:
/// `*` stays within a path segment, `**` crosses segments, `{a,b}` and
/// `[..]` classes are supported.
pub fn compile_glob(pattern: &str) -> Result<GlobMatcher> {
    let normalized = normalize_path(pattern);
    GlobBuilder::new(&normalized)
        .literal_separator(true)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|e| {
            Error::configuration(format!("Invalid glob pattern \"{}\": {}", pattern, e))
        })
}

#[derive(Debug, Clone)]
struct ScopedMatcher {
    matcher: GlobMatcher,
    namespaces: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct NamespaceMatcher {
    scoped: Vec<ScopedMatcher>,
    default_namespace: String,
}

impl NamespaceMatcher {
    pub fn new(rules: &[GlobPatternRule], default_namespace: &str) -> Result<Self> {
        let scoped = rules
            .iter()
            .filter_map(|rule| match rule {
                GlobPatternRule::Pattern(_) => None,
                GlobPatternRule::Scoped {
                    pattern,
                    namespaces,
                } => Some((pattern, namespaces)),
            })
            .map(|(pattern, namespaces)| {
                Ok(ScopedMatcher {
                    matcher: compile_glob(pattern)?,
                    namespaces: namespaces.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            scoped,
            default_namespace: default_namespace.to_string(),
        })
    }

    /// Namespaces a file contributes to, in rule order without duplicates.
    ///
    /// The union of every matching scoped rule, or the default namespace
    /// when none matches.
    pub fn namespaces_for_file(&self, path: &str) -> Vec<String> {
        let normalized = normalize_path(path);
        let mut namespaces: Vec<String> = Vec::new();

        for rule in &self.scoped {
            if rule.matcher.is_match(&normalized) || rule.matcher.is_match(path) {
                for ns in &rule.namespaces {
                    if !namespaces.contains(ns) {
                        namespaces.push(ns.clone());
                    }
                }
            }
        }

        if namespaces.is_empty() {
            namespaces.push(self.default_namespace.clone());
        }
        namespaces
    }
}

/// One-shot form of [`NamespaceMatcher::namespaces_for_file`].
pub fn namespaces_for_file(
    path: &str,
    rules: &[GlobPatternRule],
    default_namespace: &str,
) -> Result<Vec<String>> {
    Ok(NamespaceMatcher::new(rules, default_namespace)?.namespaces_for_file(path))
}
