//! End-to-end sessions against the real reference data
//!
//! Exercises the complete flow: embedded datasets -> provider -> registry
//! -> dispatcher -> line transport, as an assistant host would drive it.

use gosling_data::{Datasets, GoslingTool};
use gosling_mcp::{DatasetProvider, GoslingMcpServer, SessionEnd, Transport};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use std::collections::BTreeSet;

const INITIALIZE: &str = r#"{"jsonrpc":"2.0","id":"init","method":"initialize","params":{"protocolVersion":"2024-11-05","capabilities":{},"clientInfo":{"name":"integration","version":"0.0.1"}}}"#;

fn call(id: usize, name: &str) -> String {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": "tools/call",
        "params": {"name": name, "arguments": {}}
    })
    .to_string()
}

async fn run_session(lines: &[String]) -> Vec<Value> {
    let server = GoslingMcpServer::from_reference_data().unwrap();
    let input: String = lines.iter().map(|l| format!("{l}\n")).collect();
    let mut output = Vec::new();

    let stats = server
        .serve(Transport::new(input.as_bytes(), &mut output))
        .await;
    assert_eq!(stats.end, SessionEnd::EndOfStream);

    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

fn text_of(response: &Value) -> &str {
    response["result"]["content"][0]["text"].as_str().unwrap()
}

#[tokio::test]
async fn test_catalog_advertised_in_declaration_order() {
    let responses = run_session(&[
        INITIALIZE.to_string(),
        r#"{"jsonrpc":"2.0","id":1,"method":"tools/list"}"#.to_string(),
    ])
    .await;

    let tools = responses[1]["result"]["tools"].as_array().unwrap();
    let advertised: Vec<(&str, &str)> = tools
        .iter()
        .map(|t| (t["name"].as_str().unwrap(), t["description"].as_str().unwrap()))
        .collect();
    let declared: Vec<(&str, &str)> = GoslingTool::ALL
        .iter()
        .map(|t| (t.name(), t.description()))
        .collect();
    assert_eq!(advertised, declared);

    for tool in tools {
        assert_eq!(
            tool["inputSchema"],
            json!({"type": "object", "properties": {}, "required": []})
        );
    }
}

#[test]
fn test_catalog_and_bindings_are_the_same_set() {
    let datasets = Datasets::load().unwrap();
    let advertised: BTreeSet<String> = datasets.catalog().into_iter().map(|t| t.name).collect();
    let bound: BTreeSet<String> = datasets.get_all_bindings().into_keys().collect();
    assert_eq!(advertised, bound);
    assert_eq!(advertised.len(), GoslingTool::ALL.len());
}

#[tokio::test]
async fn test_every_tool_returns_its_dataset() {
    let datasets = Datasets::load().unwrap();
    let mut lines = vec![INITIALIZE.to_string()];
    for (i, tool) in GoslingTool::ALL.iter().enumerate() {
        lines.push(call(i, tool.name()));
    }

    let responses = run_session(&lines).await;
    assert_eq!(responses.len(), GoslingTool::ALL.len() + 1);

    for (i, tool) in GoslingTool::ALL.iter().enumerate() {
        let response = &responses[i + 1];
        assert_eq!(response["id"], i);

        let expected = datasets.get(*tool).unwrap();
        let text = text_of(response);
        assert_eq!(text, serde_json::to_string_pretty(expected).unwrap());

        let parsed: Value = serde_json::from_str(text).unwrap();
        assert_eq!(&parsed, expected, "{} does not round-trip", tool);
    }
}

#[rstest]
#[case::providers(GoslingTool::ComputeModuleProviders, "{\n  \"required_providers\": {\n    \"yandex\"")]
#[case::schema(GoslingTool::DatabaseSchema, "{\n  \"description\":")]
#[case::endpoints(GoslingTool::MothergooseApiEndpoints, "[\n  {\n    \"method\":")]
#[tokio::test]
async fn test_text_keeps_authored_key_order(#[case] tool: GoslingTool, #[case] prefix: &str) {
    let responses = run_session(&[INITIALIZE.to_string(), call(1, tool.name())]).await;
    let text = text_of(&responses[1]);
    assert!(text.starts_with(prefix), "unexpected start of {}: {}", tool, &text[..60.min(text.len())]);
}

#[tokio::test]
async fn test_steering_document_is_a_json_string() {
    let responses = run_session(&[
        INITIALIZE.to_string(),
        call(1, GoslingTool::SteeringProduct.name()),
    ])
    .await;

    let document: String = serde_json::from_str(text_of(&responses[1])).unwrap();
    assert!(document.starts_with("# Product: Polar Gosling"));
}

#[tokio::test]
async fn test_calls_are_idempotent_and_leave_catalog_unchanged() {
    let list = r#"{"jsonrpc":"2.0","id":100,"method":"tools/list"}"#.to_string();
    let responses = run_session(&[
        INITIALIZE.to_string(),
        list.clone(),
        call(1, "get_fly_examples"),
        call(1, "get_fly_examples"),
        call(2, "get_not_a_tool"),
        list,
    ])
    .await;

    assert_eq!(responses[1], responses[5]);
    assert_eq!(text_of(&responses[2]), text_of(&responses[3]));
    assert_eq!(text_of(&responses[4]), "Unknown tool: get_not_a_tool");
}
