pub mod loader;
pub mod types;

// Re-export commonly used types
pub use loader::SuiteLoader;
pub use types::{Descriptor, ParseError, ParseResult, Sequence};

/// 从文件或目录加载序列
pub fn load_path<P: AsRef<std::path::Path>>(path: P) -> ParseResult<Vec<Sequence>> {
    SuiteLoader::load_path(path)
}

/// 从字符串内容解析一个序列
pub fn parse_content(name: impl Into<String>, content: &str) -> ParseResult<Sequence> {
    SuiteLoader::parse_content(name, content)
}
