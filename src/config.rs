//! 配置加载
//!
//! 依次查找 `config.toml`、`./config/config.toml`，都不存在时使用默认值。
//! 环境变量 `EMPLOYEE_MANAGER_BACKEND_URL` 覆盖后端地址。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const BACKEND_URL_ENV: &str = "EMPLOYEE_MANAGER_BACKEND_URL";

const CONFIG_PATHS: [&str; 2] = ["config.toml", "./config/config.toml"];

/// 应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub http: HttpConfig,
    pub backend: BackendConfig,
    pub logging: LoggingConfig,
    /// 配置来源文件，使用默认值时为 `None`
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

/// HTTP 服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// 绑定地址
    pub bind_address: String,
    /// HTTP 服务端口
    pub port: u16,
    /// 单个请求的处理超时（秒）
    pub request_timeout_seconds: u64,
}

/// 员工后端配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// REST 服务根地址，不含 `/employeeapi`
    pub base_url: String,
    /// 客户端超时（秒），未设置时使用 HTTP 客户端默认值
    pub timeout_seconds: Option<u64>,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8080,
            request_timeout_seconds: 30,
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:2030".to_string(),
            timeout_seconds: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl HttpConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl BackendConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl Config {
    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        let mut config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.source = Some(path.as_ref().to_path_buf());

        Ok(config)
    }

    /// 用给定值覆盖后端地址（空字符串忽略）
    pub fn with_backend_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.backend.base_url = url.trim().to_string();
        }
        self
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.bind_address.is_empty() {
            return Err(ConfigError::Validation("bind address must not be empty".to_string()));
        }
        if self.http.port == 0 {
            return Err(ConfigError::Validation("port must be greater than 0".to_string()));
        }

        let url = reqwest::Url::parse(&self.backend.base_url).map_err(|e| {
            ConfigError::Validation(format!(
                "invalid backend url {}: {}",
                self.backend.base_url, e
            ))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Validation(format!(
                "backend url must use http or https, got {}",
                url.scheme()
            )));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "invalid log level: {}, expected one of {:?}",
                self.logging.level, valid_levels
            )));
        }

        Ok(())
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    FileRead(String),
    #[error("failed to parse config: {0}")]
    Parse(String),
    #[error("invalid config: {0}")]
    Validation(String),
}

/// 从文件或默认值加载配置，应用环境变量覆盖并校验
pub fn load_config() -> Result<Config, ConfigError> {
    let config = match CONFIG_PATHS.iter().find(|p| Path::new(p).exists()) {
        Some(path) => Config::load_from_file(path)?,
        None => Config::default(),
    };

    let config = config.with_backend_url(std::env::var(BACKEND_URL_ENV).ok());
    config.validate()?;
    Ok(config)
}
