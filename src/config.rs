use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

/// 一次运行的完整配置
///
/// 启动时构建一次，之后只读。没有任何全局可变状态。
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// 目标服务器地址（base URL）
    pub server: String,

    /// 输出详细程度（-v 的次数）
    pub verbose: u8,

    /// 未在描述符中指定 timeout 时的默认超时
    pub default_timeout: Duration,
}

impl RunConfig {
    /// 默认超时: 2000ms
    pub const DEFAULT_TIMEOUT_MILLIS: u64 = 2000;

    pub fn new(server: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            verbose: 0,
            default_timeout: Duration::from_millis(Self::DEFAULT_TIMEOUT_MILLIS),
        }
    }

    pub fn with_verbose(mut self, verbose: u8) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = timeout;
        self
    }
}

/// restcheck.toml 中的默认值
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileDefaults {
    pub server: Option<String>,
    pub timeout_millis: Option<u64>,
}

/// 配置文件加载器
pub struct ConfigLoader;

impl ConfigLoader {
    /// 配置文件名
    const CONFIG_FILE: &'static str = "restcheck.toml";

    /// 从指定路径加载配置文件
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<FileDefaults, String> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// 查找并加载配置文件
    /// 查找顺序：
    /// 1. 当前目录及其父目录
    /// 2. 用户配置目录 ~/.config/restcheck/
    pub fn find_and_load() -> Option<FileDefaults> {
        if let Some(defaults) = Self::try_load_from_current_dir() {
            return Some(defaults);
        }

        if let Some(defaults) = Self::try_load_from_user_dir() {
            return Some(defaults);
        }

        None
    }

    /// 尝试从当前目录及其父目录加载
    fn try_load_from_current_dir() -> Option<FileDefaults> {
        let mut current = std::env::current_dir().ok()?;

        loop {
            let config_path = current.join(Self::CONFIG_FILE);
            if config_path.exists() {
                return Self::load_from_path(&config_path).ok();
            }

            // 尝试父目录
            if !current.pop() {
                break;
            }
        }

        None
    }

    /// 尝试从用户配置目录加载
    fn try_load_from_user_dir() -> Option<FileDefaults> {
        let home = dirs::home_dir()?;
        let config_path = home
            .join(".config")
            .join("restcheck")
            .join(Self::CONFIG_FILE);

        if config_path.exists() {
            Self::load_from_path(&config_path).ok()
        } else {
            None
        }
    }

    /// 合并 CLI 参数与文件默认值（CLI 优先）
    pub fn build_config(
        cli_server: Option<String>,
        cli_timeout_millis: Option<u64>,
        verbose: u8,
        defaults: Option<FileDefaults>,
    ) -> Result<RunConfig, String> {
        let defaults = defaults.unwrap_or_default();

        let server = cli_server
            .or(defaults.server)
            .ok_or_else(|| "No server configured (pass --server or set it in restcheck.toml)".to_string())?;

        let timeout_millis = cli_timeout_millis
            .or(defaults.timeout_millis)
            .unwrap_or(RunConfig::DEFAULT_TIMEOUT_MILLIS);

        Ok(RunConfig::new(server)
            .with_verbose(verbose)
            .with_timeout(Duration::from_millis(timeout_millis)))
    }
}
