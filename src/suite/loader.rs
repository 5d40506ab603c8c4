use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::suite::types::{Descriptor, ParseError, ParseResult, Sequence};

/// 序列文件加载器
///
/// 一个 .json 文件是一个序列（描述符数组），
/// 目录则按文件名排序加载其中所有 .json 文件
pub struct SuiteLoader;

impl SuiteLoader {
    /// 从文件或目录加载序列
    pub fn load_path<P: AsRef<Path>>(path: P) -> ParseResult<Vec<Sequence>> {
        let path = path.as_ref();
        if path.is_dir() {
            Self::load_dir(path)
        } else {
            Ok(vec![Self::load_file(path)?])
        }
    }

    /// 加载单个序列文件
    pub fn load_file<P: AsRef<Path>>(path: P) -> ParseResult<Sequence> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("sequence")
            .to_string();
        Self::parse_content(name, &content)
    }

    /// 加载目录下的全部序列文件（按文件名排序）
    fn load_dir(path: &Path) -> ParseResult<Vec<Sequence>> {
        let mut files: Vec<_> = fs::read_dir(path)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("json"))
            .collect();
        files.sort();

        if files.is_empty() {
            return Err(ParseError::NoSequences(path.display().to_string()));
        }

        files.iter().map(Self::load_file).collect()
    }

    /// 从字符串内容解析一个序列
    pub fn parse_content(name: impl Into<String>, content: &str) -> ParseResult<Sequence> {
        let value: Value = serde_json::from_str(content)?;
        let items = match value {
            Value::Array(items) => items,
            other => {
                return Err(ParseError::NotAnArray(
                    crate::matcher::Kind::of(&other).to_string(),
                ));
            }
        };

        let descriptors = items
            .iter()
            .map(Descriptor::from_value)
            .collect::<ParseResult<Vec<_>>>()?;

        Ok(Sequence::new(name, descriptors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_parse_content() {
        let content = r#"[
            {"name": "ping", "url": "/ping"},
            {"wait": 100},
            {"method": "POST", "url": "/users", "args": {"name": "bob"}, "status": 201}
        ]"#;

        let sequence = SuiteLoader::parse_content("smoke", content).unwrap();
        assert_eq!(sequence.name, "smoke");
        assert_eq!(sequence.len(), 3);
        assert!(sequence.descriptors[1].is_wait());
    }

    #[test]
    fn test_parse_content_rejects_non_array() {
        let result = SuiteLoader::parse_content("bad", r#"{"url": "/x"}"#);
        assert!(matches!(result, Err(ParseError::NotAnArray(_))));
    }

    #[test]
    fn test_load_file_uses_stem_as_name() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("login-flow.json");
        let mut file = fs::File::create(&file_path).unwrap();
        file.write_all(br#"[{"url": "/login"}]"#).unwrap();

        let sequence = SuiteLoader::load_file(&file_path).unwrap();
        assert_eq!(sequence.name, "login-flow");
        assert_eq!(sequence.len(), 1);
    }

    #[test]
    fn test_load_dir_sorted() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.json"), r#"[{"url": "/b"}]"#).unwrap();
        fs::write(temp_dir.path().join("a.json"), r#"[{"url": "/a"}]"#).unwrap();
        // 非 json 文件被忽略
        fs::write(temp_dir.path().join("notes.txt"), "ignore me").unwrap();

        let sequences = SuiteLoader::load_path(temp_dir.path()).unwrap();
        assert_eq!(sequences.len(), 2);
        assert_eq!(sequences[0].name, "a");
        assert_eq!(sequences[1].name, "b");
    }

    #[test]
    fn test_load_empty_dir_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = SuiteLoader::load_path(temp_dir.path());
        assert!(matches!(result, Err(ParseError::NoSequences(_))));
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let result = SuiteLoader::load_file("/nonexistent/path.json");
        assert!(matches!(result, Err(ParseError::Io(_))));
    }
}
