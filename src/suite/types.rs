use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;
use serde_json::Value;

use crate::http::Method;
use crate::matcher::{Expectation, MatchError, parse_expectation};

/// 单个测试描述符（请求 + 期望），执行期间只读
#[derive(Debug, Clone, PartialEq)]
pub struct Descriptor {
    /// 诊断用名称，无语义作用
    pub name: Option<String>,

    /// 纯等待描述符：只休眠，不发请求，不做任何检查
    pub wait_millis: Option<u64>,

    /// HTTP 方法，缺省 GET
    pub method: Method,

    /// 拼接到 server base 之后的路径
    pub url: String,

    /// 请求体（JSON）；有 files 时降级为普通表单字段
    pub args: Option<Value>,

    /// 文件上传：字段名 -> 本地文件路径，存在时请求为 multipart
    pub files: Option<BTreeMap<String, PathBuf>>,

    /// 状态码期望，缺省精确匹配 200
    pub status: Expectation,

    /// content-type 期望，缺省精确匹配 "application/json"
    /// （比较前会去掉 ;charset=... 后缀）
    pub content_type: Expectation,

    /// 单请求超时，缺省取进程级默认值
    pub timeout_millis: Option<u64>,

    /// 响应体期望；仅当有效 content-type 为 application/json 时比较
    pub returns: Expectation,
}

impl Descriptor {
    /// 诊断标签: name 或 "METHOD url"
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("{} {}", self.method, self.url),
        }
    }

    pub fn is_wait(&self) -> bool {
        self.wait_millis.is_some()
    }
}

/// 描述符的 serde 原始形态（JSON 字段名）
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDescriptor {
    name: Option<String>,
    wait: Option<u64>,
    method: Option<Method>,
    url: Option<String>,
    args: Option<Value>,
    files: Option<BTreeMap<String, PathBuf>>,
    status: Option<Value>,
    #[serde(rename = "contentType")]
    content_type: Option<Value>,
    timeout: Option<u64>,
    returns: Option<Value>,
}

impl Descriptor {
    /// 从 JSON 值构建描述符，应用缺省值
    pub fn from_value(value: &Value) -> Result<Self, ParseError> {
        let raw: RawDescriptor =
            serde_json::from_value(value.clone()).map_err(ParseError::Json)?;

        // 等待描述符不需要 url，其余字段一概忽略
        let url = match (&raw.wait, raw.url) {
            (Some(_), url) => url.unwrap_or_default(),
            (None, Some(url)) => url,
            (None, None) => return Err(ParseError::MissingUrl),
        };

        let status = match &raw.status {
            Some(value) => parse_expectation(value)?,
            None => Expectation::Literal(Value::from(200)),
        };
        let content_type = match &raw.content_type {
            Some(value) => parse_expectation(value)?,
            None => Expectation::Literal(Value::from("application/json")),
        };
        let returns = match &raw.returns {
            Some(value) => parse_expectation(value)?,
            None => Expectation::DontCare,
        };

        Ok(Self {
            name: raw.name,
            wait_millis: raw.wait,
            method: raw.method.unwrap_or_default(),
            url,
            args: raw.args,
            files: raw.files,
            status,
            content_type,
            timeout_millis: raw.timeout,
            returns,
        })
    }
}

/// 一个序列：共享同一个 cookie jar、严格串行执行的描述符列表
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    /// 序列名（通常是文件名去掉扩展名）
    pub name: String,

    /// 按声明顺序执行的描述符
    pub descriptors: Vec<Descriptor>,
}

impl Sequence {
    pub fn new(name: impl Into<String>, descriptors: Vec<Descriptor>) -> Self {
        Self {
            name: name.into(),
            descriptors,
        }
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

/// 解析错误类型
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// 描述符缺少必需的 url
    #[error("Descriptor is missing a url")]
    MissingUrl,

    /// 顶层不是描述符数组
    #[error("Expected a JSON array of descriptors, got {0}")]
    NotAnArray(String),

    /// JSON 语法或字段错误
    #[error("Invalid descriptor: {0}")]
    Json(#[from] serde_json::Error),

    /// 期望值中的哨兵写法错误
    #[error("Invalid expectation: {0}")]
    Matcher(#[from] MatchError),

    /// IO 错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// 目录下没有任何 .json 序列文件
    #[error("No sequence files found in {0}")]
    NoSequences(String),
}

/// 解析结果类型别名
pub type ParseResult<T> = Result<T, ParseError>;
