//! 员工 REST 后端客户端
//!
//! 后端接口固定为 `{base}/employeeapi/{all,get/:id,add,update,delete/:id}`。
//! 列表与按 ID 查询返回原始 JSON，由管理器决定如何解释响应形状。

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use crate::app::employee::model::Employee;
use crate::core::error::{ClientError, ClientResult};

/// 员工后端抽象
#[async_trait]
pub trait EmployeeApi: Send + Sync {
    /// `GET /employeeapi/all`，空响应体为 `Value::Null`
    async fn list_all(&self) -> ClientResult<Value>;
    /// `GET /employeeapi/get/{id}`，空响应体为 `Value::Null`
    async fn get(&self, id: i64) -> ClientResult<Value>;
    async fn add(&self, employee: &Employee) -> ClientResult<()>;
    async fn update(&self, employee: &Employee) -> ClientResult<()>;
    /// 返回响应体原文
    async fn delete(&self, id: i64) -> ClientResult<String>;
}

/// 基于 reqwest 的后端客户端
#[derive(Debug, Clone)]
pub struct RestEmployeeApi {
    client: Client,
    base_url: String,
}

impl RestEmployeeApi {
    /// `timeout` 为 `None` 时使用 reqwest 默认值
    pub fn new(base_url: &str, timeout: Option<Duration>) -> ClientResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: format!("{}/employeeapi", base_url.trim_end_matches('/')),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// 非 2xx 转为错误，否则返回响应体文本
    async fn read_body(response: reqwest::Response) -> ClientResult<String> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(%status, "employee backend rejected request");
            return Err(ClientError::Status { status, body });
        }

        Ok(body)
    }

    fn parse_json(body: &str) -> ClientResult<Value> {
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(body)?)
    }
}

#[async_trait]
impl EmployeeApi for RestEmployeeApi {
    async fn list_all(&self) -> ClientResult<Value> {
        let url = self.url("all");
        debug!(%url, "GET");
        let response = self.client.get(&url).send().await?;
        Self::parse_json(&Self::read_body(response).await?)
    }

    async fn get(&self, id: i64) -> ClientResult<Value> {
        let url = self.url(&format!("get/{}", id));
        debug!(%url, "GET");
        let response = self.client.get(&url).send().await?;
        Self::parse_json(&Self::read_body(response).await?)
    }

    async fn add(&self, employee: &Employee) -> ClientResult<()> {
        let url = self.url("add");
        debug!(%url, id = employee.id, "POST");
        let response = self.client.post(&url).json(employee).send().await?;
        Self::read_body(response).await?;
        Ok(())
    }

    async fn update(&self, employee: &Employee) -> ClientResult<()> {
        let url = self.url("update");
        debug!(%url, id = employee.id, "PUT");
        let response = self.client.put(&url).json(employee).send().await?;
        Self::read_body(response).await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> ClientResult<String> {
        let url = self.url(&format!("delete/{}", id));
        debug!(%url, "DELETE");
        let response = self.client.delete(&url).send().await?;
        Self::read_body(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalised() {
        let api = RestEmployeeApi::new("http://localhost:2030/", None).unwrap();
        assert_eq!(api.base_url(), "http://localhost:2030/employeeapi");
        assert_eq!(api.url("all"), "http://localhost:2030/employeeapi/all");
    }

    #[test]
    fn test_empty_body_parses_as_null() {
        assert_eq!(RestEmployeeApi::parse_json("").unwrap(), Value::Null);
        assert_eq!(RestEmployeeApi::parse_json("  \n").unwrap(), Value::Null);
        assert!(RestEmployeeApi::parse_json("<html>").is_err());
    }
}
