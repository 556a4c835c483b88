use api_contract::{ApiResponse, DisplayAck};
use domain::DisplayCommand;

#[test]
fn api_response_success() {
    let response = ApiResponse::success("ok");
    assert!(response.success);
    assert!(response.data.is_some());
    assert!(response.error.is_none());
}

#[test]
fn api_response_error() {
    let response = ApiResponse::<()>::error("VALIDATION.UNKNOWN_MOOD", "unknown mood: \"\"");
    assert!(!response.success);
    assert!(response.data.is_none());
    let error = response.error.expect("error body");
    assert_eq!(error.code, "VALIDATION.UNKNOWN_MOOD");
}

#[test]
fn api_response_parses_adapter_rejection() {
    let payload = r#"{"success":false,"data":null,"error":{"code":"VALIDATION.COLOR_RANGE","message":"bad"}}"#;
    let response: ApiResponse<DisplayAck> = serde_json::from_str(payload).expect("parse");
    assert!(!response.success);
    assert_eq!(
        response.error.map(|error| error.code).as_deref(),
        Some("VALIDATION.COLOR_RANGE")
    );
}

#[test]
fn api_response_parses_acknowledgement() {
    let payload = r#"{"success":true,"data":{"status":"Display cleared","command":{"type":"clear"}},"error":null}"#;
    let response: ApiResponse<DisplayAck> = serde_json::from_str(payload).expect("parse");
    let ack = response.data.expect("ack");
    assert_eq!(ack.status, "Display cleared");
    assert_eq!(ack.command, DisplayCommand::Clear);
}
