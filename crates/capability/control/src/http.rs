//! HTTP 传输：`POST http://{hostname}:{port}{endpoint}`，应答为 `ApiResponse` 信封。
//!
//! 只解析信封本身：2xx 且 `success:true` 即视为设备已受理，`data` 的具体形状不参与判断。

use crate::{DeviceTransport, TransportError};
use api_contract::ApiResponse;
use async_trait::async_trait;
use serde::de::IgnoredAny;
use domain::EncodedCommand;
use ledfleet_storage::DeviceRecord;

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|err| TransportError::Connect(err.to_string()))?;
        Ok(Self { client })
    }
}

fn endpoint_url(device: &DeviceRecord, command: &EncodedCommand) -> String {
    format!("http://{}{}", device.address(), command.endpoint)
}

#[async_trait]
impl DeviceTransport for HttpTransport {
    async fn send(
        &self,
        device: &DeviceRecord,
        command: &EncodedCommand,
    ) -> Result<(), TransportError> {
        let mut request = self.client.post(endpoint_url(device, command));
        if let Some(body) = &command.body {
            request = request.json(body);
        }
        let response = request
            .send()
            .await
            .map_err(|err| TransportError::Connect(err.to_string()))?;
        let status = response.status();
        let body = match response.json::<ApiResponse<IgnoredAny>>().await {
            Ok(body) => body,
            Err(_) if !status.is_success() => {
                return Err(TransportError::Rejected {
                    code: format!("HTTP.{}", status.as_u16()),
                    message: status.to_string(),
                });
            }
            Err(err) => return Err(TransportError::MalformedResponse(err.to_string())),
        };
        if status.is_success() && body.success {
            return Ok(());
        }
        Err(match body.error {
            Some(error) => TransportError::Rejected {
                code: error.code,
                message: error.message,
            },
            None => TransportError::Rejected {
                code: format!("HTTP.{}", status.as_u16()),
                message: status.to_string(),
            },
        })
    }
}
