use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

/// 匹配错误类型
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("Invalid sentinel: {0}")]
    InvalidSentinel(String),

    #[error("Unknown kind: {0}")]
    UnknownKind(String),
}

/// JSON 值的运行时类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl Kind {
    /// 从字符串解析类别名
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "null" => Some(Self::Null),
            "bool" | "boolean" => Some(Self::Bool),
            "number" => Some(Self::Number),
            "string" => Some(Self::String),
            "array" => Some(Self::Array),
            "object" => Some(Self::Object),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }

    /// 实际值的类别
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 期望值
///
/// 字面量按深度相等比较，哨兵变体提供逃生出口：
/// 任意值、指定类别的任意值、可缺省字段
#[derive(Debug, Clone, PartialEq)]
pub enum Expectation {
    /// 标量字面量，深度相等
    Literal(Value),
    /// 任意值都匹配
    DontCare,
    /// 类别相同即匹配
    MatchType(Kind),
    /// 字段可以缺失；存在时必须匹配内层期望
    Optional(Box<Expectation>),
    /// 逐字段结构匹配
    Object(BTreeMap<String, Expectation>),
    /// 逐元素匹配，长度必须一致
    Array(Vec<Expectation>),
}

impl Expectation {
    pub fn is_optional(&self) -> bool {
        matches!(self, Expectation::Optional(_))
    }
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expectation::Literal(value) => write!(f, "{}", value),
            Expectation::DontCare => write!(f, "<dontCare>"),
            Expectation::MatchType(kind) => write!(f, "<type:{}>", kind),
            Expectation::Optional(inner) => write!(f, "<optional:{}>", inner),
            Expectation::Object(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "\"{}\":{}", key, value)?;
                }
                write!(f, "}}")
            }
            Expectation::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}
