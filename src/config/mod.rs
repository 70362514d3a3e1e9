/// 分发器配置
///
/// 提供TOML/JSON配置文件和环境变量覆盖
use crate::core::logging::LOG_TARGET;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 文件读取错误
    #[error("Config file error: {0}")]
    FileError(#[from] std::io::Error),
    /// 解析错误
    #[error("Config parse error: {0}")]
    ParseError(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// 事件分发器配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatcherConfig {
    /// 未显式指定优先级时使用的默认优先级
    #[serde(default)]
    pub default_priority: i32,

    /// 日志配置
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            default_priority: 0,
            logging: LoggingConfig::default(),
        }
    }
}

impl DispatcherConfig {
    /// 创建默认配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 从TOML文件加载配置
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::FileError)?;
        Self::from_toml_str(&content)
    }

    /// 从TOML字符串解析配置
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// 从JSON文件加载配置
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::FileError)?;
        Self::from_json_str(&content)
    }

    /// 从JSON字符串解析配置
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        serde_json::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// 保存为TOML文件
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        fs::write(path, content).map_err(ConfigError::FileError)
    }

    /// 保存为JSON文件
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        fs::write(path, content).map_err(ConfigError::FileError)
    }

    /// 从环境变量覆盖配置
    ///
    /// - `NODE_EVENTS_DEFAULT_PRIORITY`: 默认优先级
    /// - `NODE_EVENTS_LOG_LEVEL`: 日志级别 (trace/debug/info/warn/error)
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = env::var("NODE_EVENTS_DEFAULT_PRIORITY") {
            if let Ok(priority) = val.parse() {
                self.default_priority = priority;
            }
        }
        if let Ok(val) = env::var("NODE_EVENTS_LOG_LEVEL") {
            if let Some(level) = LogLevel::parse(&val) {
                self.logging.level = level;
            }
        }
    }

    /// 加载配置文件并应用环境变量覆盖
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.apply_env_overrides();
        config
    }

    /// 自动查找并加载配置文件
    ///
    /// 按以下顺序查找：
    /// 1. ./node_events.toml
    /// 2. ./node_events.json
    /// 3. ~/.config/node_events/config.toml
    /// 4. 使用默认配置
    pub fn load_or_default() -> Self {
        Self::load_or_default_in(".")
    }

    /// 在指定目录中查找配置文件，找不到时回退到用户配置目录和默认配置
    ///
    /// 文件存在但无法解析时记录警告并使用默认配置，不再继续查找。
    pub fn load_or_default_in<P: AsRef<Path>>(dir: P) -> Self {
        let found = match Self::load_from_dir(dir) {
            Ok(None) => Self::user_config_path()
                .map(|path| Self::read_existing(&path, Self::from_toml_str))
                .unwrap_or(Ok(None)),
            other => other,
        };

        match found {
            Ok(Some(config)) => config,
            Ok(None) => {
                tracing::info!(target: LOG_TARGET, "Using default configuration");
                Self::default()
            }
            Err(err) => {
                tracing::warn!(
                    target: LOG_TARGET,
                    error = %err,
                    "Config file is invalid, using default configuration"
                );
                Self::default()
            }
        }
    }

    /// 从目录中加载 `node_events.toml` 或 `node_events.json`
    ///
    /// 两个文件都不存在时返回 `Ok(None)`。
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> ConfigResult<Option<Self>> {
        let dir = dir.as_ref();
        let toml_path = dir.join("node_events.toml");
        if let Some(config) = Self::read_existing(&toml_path, Self::from_toml_str)? {
            return Ok(Some(config));
        }
        Self::read_existing(&dir.join("node_events.json"), Self::from_json_str)
    }

    fn user_config_path() -> Option<PathBuf> {
        env::var_os("HOME").map(|home| {
            PathBuf::from(home)
                .join(".config")
                .join("node_events")
                .join("config.toml")
        })
    }

    fn read_existing(
        path: &Path,
        parse: fn(&str) -> ConfigResult<Self>,
    ) -> ConfigResult<Option<Self>> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(ConfigError::FileError(err)),
        };
        let config = parse(&content).map_err(|err| match err {
            ConfigError::ParseError(msg) => {
                ConfigError::ParseError(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })?;
        tracing::info!(target: LOG_TARGET, path = %path.display(), "Loaded config");
        Ok(Some(config))
    }
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别
    pub level: LogLevel,

    /// 是否输出到控制台
    pub log_to_console: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            log_to_console: true,
        }
    }
}

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// 跟踪
    Trace,
    /// 调试
    Debug,
    /// 信息
    Info,
    /// 警告
    #[serde(alias = "warning")]
    Warn,
    /// 错误
    Error,
}

impl LogLevel {
    /// 解析日志级别（不区分大小写）
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }
}
