use std::collections::BTreeMap;

use serde_json::Value;

use crate::matcher::types::{Expectation, Kind, MatchError};

/// 把描述符 JSON 中的期望值解析为 Expectation
///
/// 哨兵写法为单 key 对象:
/// - {"$dontCare": true}            任意值
/// - {"$type": "string"}            类别匹配
/// - {"$optional": <inner>}         可缺省字段
///
/// 其余对象逐字段解析，数组逐元素解析，标量是字面量
pub fn parse_expectation(value: &Value) -> Result<Expectation, MatchError> {
    match value {
        Value::Object(map) => {
            if map.len() == 1 {
                let (key, inner) = map.iter().next().expect("len == 1");
                match key.as_str() {
                    "$dontCare" => {
                        return match inner {
                            Value::Bool(true) => Ok(Expectation::DontCare),
                            other => Err(MatchError::InvalidSentinel(format!(
                                "$dontCare expects true, got {}",
                                other
                            ))),
                        };
                    }
                    "$type" => {
                        return match inner {
                            Value::String(kind) => Kind::parse(kind)
                                .map(Expectation::MatchType)
                                .ok_or_else(|| MatchError::UnknownKind(kind.clone())),
                            other => Err(MatchError::InvalidSentinel(format!(
                                "$type expects a kind name, got {}",
                                other
                            ))),
                        };
                    }
                    "$optional" => {
                        return Ok(Expectation::Optional(Box::new(parse_expectation(inner)?)));
                    }
                    _ => {}
                }
            }

            let mut fields = BTreeMap::new();
            for (key, inner) in map {
                fields.insert(key.clone(), parse_expectation(inner)?);
            }
            Ok(Expectation::Object(fields))
        }
        Value::Array(items) => {
            let parsed = items
                .iter()
                .map(parse_expectation)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Expectation::Array(parsed))
        }
        scalar => Ok(Expectation::Literal(scalar.clone())),
    }
}
