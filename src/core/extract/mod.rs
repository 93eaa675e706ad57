//! Key extraction: source files to key/namespace associations.

pub mod extractor;
pub mod visitor;

pub use extractor::{Extraction, KeyExtractor, KeyNamespaceAssociation, extract_keys};
pub use visitor::{KeyCallSite, TranslationCallVisitor};
