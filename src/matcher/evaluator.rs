use serde_json::Value;

use crate::matcher::types::{Expectation, Kind};

/// 深度结构匹配
///
/// 对象匹配是严格的：actual 中出现期望里没有的 key 算不匹配，
/// 期望里标记为 optional 的字段允许缺失
pub fn matches(expected: &Expectation, actual: &Value) -> bool {
    match expected {
        Expectation::DontCare => true,
        Expectation::MatchType(kind) => Kind::of(actual) == *kind,
        Expectation::Optional(inner) => matches(inner, actual),
        Expectation::Literal(value) => value == actual,
        Expectation::Array(items) => match actual {
            Value::Array(actual_items) => {
                items.len() == actual_items.len()
                    && items
                        .iter()
                        .zip(actual_items)
                        .all(|(expected, actual)| matches(expected, actual))
            }
            _ => false,
        },
        Expectation::Object(fields) => match actual {
            Value::Object(actual_map) => {
                // actual 不得包含期望之外的 key
                if actual_map.keys().any(|key| !fields.contains_key(key)) {
                    return false;
                }
                fields.iter().all(|(key, expected)| match actual_map.get(key) {
                    Some(actual) => matches(expected, actual),
                    None => expected.is_optional(),
                })
            }
            _ => false,
        },
    }
}
