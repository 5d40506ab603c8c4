use std::fmt;
use std::str::FromStr;

use crate::{RestcheckError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
}

impl Default for Method {
    fn default() -> Self {
        Method::Get
    }
}

impl FromStr for Method {
    type Err = RestcheckError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "DELETE" => Ok(Method::Delete),
            "PATCH" => Ok(Method::Patch),
            "HEAD" => Ok(Method::Head),
            "OPTIONS" => Ok(Method::Options),
            _ => Err(RestcheckError::ParseError(format!(
                "Invalid HTTP method: {}",
                s
            ))),
        }
    }
}

impl Method {
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
        }
    }

    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
            Method::Patch => reqwest::Method::PATCH,
            Method::Head => reqwest::Method::HEAD,
            Method::Options => reqwest::Method::OPTIONS,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 规范化 base URL
///
/// 缺少协议时补上 http:// 前缀，去掉末尾多余的 /
pub fn normalize_base(server: &str) -> String {
    let trimmed = server.trim();
    let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    };
    with_scheme.trim_end_matches('/').to_string()
}

/// 拼接 base URL 与描述符中的路径
pub fn join_url(base: &str, path: &str) -> String {
    let base = normalize_base(base);
    if path.is_empty() {
        return base;
    }
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_from_str() {
        assert_eq!(Method::parse("get").unwrap(), Method::Get);
        assert_eq!(Method::parse("POST").unwrap(), Method::Post);
        assert_eq!(Method::parse("Delete").unwrap(), Method::Delete);
        assert!(Method::parse("FETCH").is_err());
    }

    #[test]
    fn test_method_default_is_get() {
        assert_eq!(Method::default(), Method::Get);
    }

    #[test]
    fn test_normalize_base_adds_scheme() {
        assert_eq!(normalize_base("localhost:3000"), "http://localhost:3000");
        assert_eq!(normalize_base("example.com"), "http://example.com");
    }

    #[test]
    fn test_normalize_base_keeps_scheme() {
        assert_eq!(
            normalize_base("https://api.example.com"),
            "https://api.example.com"
        );
        assert_eq!(normalize_base("http://localhost"), "http://localhost");
    }

    #[test]
    fn test_normalize_base_strips_trailing_slash() {
        assert_eq!(normalize_base("http://localhost:3000/"), "http://localhost:3000");
    }

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("localhost:3000", "/api/users"),
            "http://localhost:3000/api/users"
        );
        assert_eq!(
            join_url("https://example.com/", "hello"),
            "https://example.com/hello"
        );
    }
}
