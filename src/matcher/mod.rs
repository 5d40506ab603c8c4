mod evaluator;
mod parser;
/// 匹配模块 - 带哨兵谓词的 JSON 深度结构比较
mod types;

pub use evaluator::matches;
pub use parser::parse_expectation;
pub use types::{Expectation, Kind, MatchError};
