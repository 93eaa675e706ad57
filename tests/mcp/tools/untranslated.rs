use i18n_magic::mcp::{I18nMcpServer, types::ListUntranslatedKeysParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_result_json};

fn fixture() -> McpTestFixture {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_file(
            "src/App.tsx",
            r#"t("zeta"); t("alpha"); t("zeta"); t("present");"#,
        )
        .unwrap();
    fixture
        .write_file("src/admin/Users.tsx", r#"t("users.title")"#)
        .unwrap();
    fixture
        .write_locale_file("en", "common", &json!({"present": "Present"}))
        .unwrap();
    fixture
}

#[tokio::test]
async fn test_lists_sorted_unique_keys() {
    let fixture = fixture();
    let server = I18nMcpServer::new();

    let params = Parameters(ListUntranslatedKeysParams {
        project_root_path: fixture.root(),
        namespace: None,
    });

    let result = server.list_untranslated_keys(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 3);
    assert_eq!(json_result["keys"], json!(["alpha", "users.title", "zeta"]));
}

#[tokio::test]
async fn test_filters_by_namespace() {
    let fixture = fixture();
    let server = I18nMcpServer::new();

    let params = Parameters(ListUntranslatedKeysParams {
        project_root_path: fixture.root(),
        namespace: Some("admin".to_string()),
    });

    let result = server.list_untranslated_keys(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["keys"], json!(["users.title"]));
}

#[tokio::test]
async fn test_unknown_namespace_is_rejected() {
    let fixture = fixture();
    let server = I18nMcpServer::new();

    let params = Parameters(ListUntranslatedKeysParams {
        project_root_path: fixture.root(),
        namespace: Some("nope".to_string()),
    });

    assert!(server.list_untranslated_keys(params).await.is_err());
}
