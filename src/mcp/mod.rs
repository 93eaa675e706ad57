//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes key listing and key creation to AI assistants over stdio.
//!
//! ## Module Structure
//!
//! - `server`: MCP server and tool implementations
//! - `types`: tool parameter and result types

mod server;
pub mod types;

pub use server::{I18nMcpServer, run_server};
