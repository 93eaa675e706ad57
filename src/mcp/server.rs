use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;
use tracing::info;

use crate::{
    config::load_config,
    core::{context::ProjectContext, reconcile::missing_keys},
    engines::add_translation_key,
};

use super::types::{
    AddTranslationKeyParams, AddTranslationKeyResult, ConfigDto, ConfigValues, GetConfigParams,
    ListUntranslatedKeysParams, UntranslatedKeysResult,
};

fn to_json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

fn load_context(project_root_path: &str) -> Result<ProjectContext, McpError> {
    ProjectContext::load(Path::new(project_root_path))
        .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))
}

#[derive(Clone)]
pub struct I18nMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for I18nMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl I18nMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get the i18n-magic configuration of a project
    #[tool(description = "Get the i18n-magic configuration (locales, namespaces, globs, paths).")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        to_json_result(&ConfigDto {
            config_path: result.path.display().to_string(),
            config: ConfigValues::from(result.config),
        })
    }

    /// List keys used in source but missing from the default locale
    #[tool(
        description = "List translation keys used in source code but missing from the default locale. Returns a sorted list without duplicates, optionally limited to one namespace."
    )]
    pub async fn list_untranslated_keys(
        &self,
        params: Parameters<ListUntranslatedKeysParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let ctx = load_context(&params.project_root_path)?;

        if let Some(namespace) = &params.namespace {
            ctx.config
                .require_namespace(namespace)
                .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        }

        let missing = missing_keys(&ctx)
            .await
            .map_err(|e| McpError::internal_error(format!("Scan failed: {}", e), None))?;

        let keys: BTreeSet<String> = missing
            .into_iter()
            .filter(|record| {
                params
                    .namespace
                    .as_ref()
                    .is_none_or(|ns| record.namespaces.contains(ns))
            })
            .map(|record| record.key)
            .collect();

        to_json_result(&UntranslatedKeysResult {
            total_count: keys.len(),
            keys: keys.into_iter().collect(),
        })
    }

    /// Add a key to the default locale
    #[tool(
        description = "Add a translation key with its default-locale value. The namespaces are taken from where the key is used in source, else from the given namespace, else the default namespace. Run `i18n-magic sync` afterwards to translate it."
    )]
    pub async fn add_translation_key(
        &self,
        params: Parameters<AddTranslationKeyParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let ctx = load_context(&params.project_root_path)?;

        let report = add_translation_key(
            &ctx,
            &params.key,
            &params.value,
            params.namespace.as_deref(),
        )
        .await
        .map_err(|e| McpError::internal_error(format!("Failed to add key: {}", e), None))?;
        info!(key = %report.key, files = report.written.len(), "key added");

        to_json_result(&AddTranslationKeyResult::new(report, |doc| {
            ctx.store.describe(&doc.locale, &doc.namespace)
        }))
    }
}

#[tool_handler]
impl ServerHandler for I18nMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "i18n-magic MCP helps AI agents keep translation files in sync with source code.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration (locales, namespaces, paths)\n\
                 2. list_untranslated_keys - Keys used in code but missing from the default locale\n\
                 3. add_translation_key - Add a key with its default-locale value\n\n\
                 Recommended Workflow:\n\
                 1. Use list_untranslated_keys to find what is missing\n\
                 2. Add each key with add_translation_key\n\
                 3. Run `i18n-magic sync` to translate the new keys into the other locales"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = I18nMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
