//! 输入验证辅助函数
//!
//! - normalize_required：验证必填字段，去除空格并检查非空
//! - parse_json：把请求体解析失败统一为 400 + ApiResponse
//! - parse_optional_json：请求体可省略（空 body 取默认值）

use crate::utils::response::bad_request_error;
use axum::{Json, body::Bytes, extract::rejection::JsonRejection, response::Response};
use serde::de::DeserializeOwned;

/// 验证必填字段，去除空格并检查非空
pub fn normalize_required(value: String, field: &str) -> Result<String, Response> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(bad_request_error(format!("{field} required")));
    }
    Ok(trimmed.to_string())
}

/// 解析 JSON 请求体
pub fn parse_json<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, Response> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| bad_request_error(rejection.body_text()))
}

/// 解析可省略的 JSON 请求体
pub fn parse_optional_json<T>(body: &Bytes) -> Result<T, Response>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|err| bad_request_error(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use api_contract::SendClearRequest;

    #[test]
    fn normalize_required_trims() {
        assert_eq!(
            normalize_required("  pi4 ".to_string(), "hostname").ok(),
            Some("pi4".to_string())
        );
        assert!(normalize_required("   ".to_string(), "hostname").is_err());
    }

    #[test]
    fn optional_body_defaults_when_empty() {
        let req: SendClearRequest = parse_optional_json(&Bytes::new()).expect("empty");
        assert_eq!(req.device_id, None);
        let req: SendClearRequest =
            parse_optional_json(&Bytes::from_static(br#"{"deviceId":4}"#)).expect("body");
        assert_eq!(req.device_id, Some(4));
        assert!(parse_optional_json::<SendClearRequest>(&Bytes::from_static(b"{")).is_err());
    }
}
