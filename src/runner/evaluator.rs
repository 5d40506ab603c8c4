use serde_json::Value;

use crate::http::Response;
use crate::matcher::matches;
use crate::runner::types::Outcome;
use crate::suite::Descriptor;

/// 把（描述符，响应）对分类为 Passed / Failed / Error
///
/// 检查顺序固定，遇到第一个不匹配即返回:
/// 1. 状态码
/// 2. 有效 content-type（已去掉 ;charset=...）
/// 3. 仅当有效 content-type 为 application/json 时解析并比较响应体，
///    解析失败是 Error 而非 Failed
pub fn evaluate(descriptor: &Descriptor, response: &Response) -> Outcome {
    let code = response.status.code();
    if !matches(&descriptor.status, &Value::from(code)) {
        return Outcome::Failed(format!(
            "wrong status code: {} (expected {})",
            code, descriptor.status
        ));
    }

    let effective = response.effective_content_type();
    if !matches(&descriptor.content_type, &Value::from(effective.as_str())) {
        return Outcome::Failed(format!(
            "wrong content type: {} (expected {})",
            effective, descriptor.content_type
        ));
    }

    if effective == "application/json" {
        let body: Value = match serde_json::from_str(&response.body) {
            Ok(value) => value,
            Err(e) => return Outcome::Error(format!("invalid JSON body: {}", e)),
        };
        if !matches(&descriptor.returns, &body) {
            return Outcome::Failed(format!(
                "wrong response body (expected {})",
                descriptor.returns
            ));
        }
    }

    Outcome::Passed
}
