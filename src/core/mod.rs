//! Core engine: key extraction, reconciliation, storage and translation.
//!
//! ## Module Structure
//!
//! - `keys`: raw key to pure key resolution
//! - `matcher`: file path to namespace matching
//! - `file_scanner`: glob-driven source file discovery
//! - `parsers`: JS/TS source parsing (swc)
//! - `extract`: translation call extraction
//! - `store`: locale document load/save backends
//! - `reconcile`: missing/unused key computation
//! - `translate`: batching over the translation primitive
//! - `fan_out`: concurrent per-document execution
//! - `context`: per-invocation project context

pub mod context;
pub mod extract;
pub mod fan_out;
pub mod file_scanner;
pub mod keys;
pub mod matcher;
pub mod parsers;
pub mod reconcile;
pub mod store;
pub mod translate;

pub use context::ProjectContext;
pub use extract::{KeyExtractor, KeyNamespaceAssociation, extract_keys};
pub use fan_out::{FanOut, fan_out};
pub use keys::{pure_key, split_namespace};
pub use matcher::{NamespaceMatcher, namespaces_for_file};
pub use reconcile::{KeyIndex, MissingKeyRecord, Reconciler, missing_keys};
pub use store::{CallbackStore, LocaleStore, PathTemplateStore, Translations};
pub use translate::{CommandTranslator, TranslationBatcher, TranslationRequest, Translator};
