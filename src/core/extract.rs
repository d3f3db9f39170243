//! 请求体提取器
//!
//! 与 `axum::Json` 不同：不检查 `Content-Type`，空请求体按 `{}` 处理，
//! 解析失败返回 400 而不是让请求崩溃。

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::core::error::CoreError;

pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = CoreError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| CoreError::BadRequest(format!("读取请求体失败: {}", e)))?;

        decode_body(&bytes).map(JsonBody)
    }
}

pub fn decode_body<T>(bytes: &[u8]) -> Result<T, CoreError>
where
    T: DeserializeOwned + Default,
{
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    serde_json::from_slice(bytes)
        .map_err(|e| CoreError::BadRequest(format!("请求体不是有效的 JSON: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(default)]
    struct Probe {
        name: Option<String>,
        count: Option<u32>,
    }

    #[test]
    fn test_empty_body_uses_defaults() {
        assert_eq!(decode_body::<Probe>(b"").unwrap(), Probe::default());
        assert_eq!(decode_body::<Probe>(b"  \n").unwrap(), Probe::default());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let probe: Probe = decode_body(br#"{"name":"x","extra":[1,2]}"#).unwrap();
        assert_eq!(probe.name.as_deref(), Some("x"));
        assert_eq!(probe.count, None);
    }

    #[test]
    fn test_malformed_body_is_bad_request() {
        let err = decode_body::<Probe>(b"{not json").unwrap_err();
        assert!(matches!(err, CoreError::BadRequest(_)));

        let err = decode_body::<Probe>(br#"{"count":"many"}"#).unwrap_err();
        assert!(matches!(err, CoreError::BadRequest(_)));
    }
}
