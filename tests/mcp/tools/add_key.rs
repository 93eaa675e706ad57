use i18n_magic::mcp::{I18nMcpServer, types::AddTranslationKeyParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_result_json};

fn params(
    fixture: &McpTestFixture,
    key: &str,
    namespace: Option<&str>,
) -> Parameters<AddTranslationKeyParams> {
    Parameters(AddTranslationKeyParams {
        project_root_path: fixture.root(),
        key: key.to_string(),
        value: "Value".to_string(),
        namespace: namespace.map(str::to_string),
    })
}

#[tokio::test]
async fn test_add_key_uses_namespaces_from_source() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_file("src/admin/Users.tsx", r#"t("users.title")"#)
        .unwrap();
    fixture
        .write_locale_file("en", "admin", &json!({"existing": "Existing"}))
        .unwrap();
    let server = I18nMcpServer::new();

    let result = server
        .add_translation_key(params(&fixture, "users.title", Some("common")))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["success"], true);
    assert_eq!(json_result["namespaces"], json!(["admin"]));
    assert_eq!(json_result["fromUsage"], true);
    assert!(
        json_result["files"][0]["filePath"]
            .as_str()
            .unwrap()
            .ends_with("locales/en/admin.json")
    );
    assert_eq!(
        fixture.read_locale_file("en", "admin").unwrap(),
        json!({"existing": "Existing", "users.title": "Value"})
    );
    assert!(!fixture.root_path().join("locales/de/admin.json").exists());
}

#[tokio::test]
async fn test_add_unused_key_to_given_namespace() {
    let fixture = McpTestFixture::new().unwrap();
    let server = I18nMcpServer::new();

    let result = server
        .add_translation_key(params(&fixture, "new.key", Some("admin")))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromUsage"], false);
    assert_eq!(
        fixture.read_locale_file("en", "admin").unwrap(),
        json!({"new.key": "Value"})
    );
}

#[tokio::test]
async fn test_add_unused_key_defaults_to_default_namespace() {
    let fixture = McpTestFixture::new().unwrap();
    let server = I18nMcpServer::new();

    server
        .add_translation_key(params(&fixture, "new.key", None))
        .await
        .unwrap();

    assert_eq!(
        fixture.read_locale_file("en", "common").unwrap(),
        json!({"new.key": "Value"})
    );
}

#[tokio::test]
async fn test_add_key_unknown_namespace_fails() {
    let fixture = McpTestFixture::new().unwrap();
    let server = I18nMcpServer::new();

    let result = server
        .add_translation_key(params(&fixture, "new.key", Some("nope")))
        .await;

    assert!(result.is_err());
}
