use i18n_magic::mcp::{I18nMcpServer, types::GetConfigParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_result_json};

#[tokio::test]
async fn test_get_config_from_file() {
    let fixture = McpTestFixture::with_config(json!({"context": "A cooking app"})).unwrap();
    let server = I18nMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert!(
        json_result["configPath"]
            .as_str()
            .unwrap()
            .ends_with("i18n-magic.json")
    );
    let config = &json_result["config"];
    assert_eq!(config["defaultLocale"], "en");
    assert_eq!(config["namespaces"], json!(["common", "admin"]));
    assert_eq!(
        config["globPatterns"][0],
        json!({"pattern": "src/**/*.tsx", "namespaces": []})
    );
    assert_eq!(config["globPatterns"][1]["namespaces"], json!(["admin"]));
    assert_eq!(config["context"], "A cooking app");
    assert_eq!(config["model"], "gpt-4o-mini");
    assert_eq!(config["hasTranslator"], false);
}

#[tokio::test]
async fn test_get_config_from_nested_directory() {
    let fixture = McpTestFixture::new().unwrap();
    std::fs::create_dir_all(fixture.root_path().join("src/components")).unwrap();
    let server = I18nMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: format!("{}/src/components", fixture.root()),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(json_result["config"]["defaultNamespace"], "common");
}

#[tokio::test]
async fn test_get_config_invalid_fails() {
    let fixture = McpTestFixture::with_config(json!({"defaultLocale": "fr"})).unwrap();
    let server = I18nMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    assert!(server.get_config(params).await.is_err());
}
