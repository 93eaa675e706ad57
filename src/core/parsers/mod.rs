//! Source file parsers.
//!
//! - `jsx`: JS/JSX/TS/TSX source parser (uses swc for AST generation)

pub mod jsx;

pub use jsx::{ParsedSource, parse_source};
