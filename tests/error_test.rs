use restcheck::{RestcheckError, Result};

#[test]
fn test_parse_error() {
    let err = RestcheckError::ParseError("test error".to_string());
    assert_eq!(err.to_string(), "解析错误: test error");
}

#[test]
fn test_timeout_display() {
    let err = RestcheckError::Timeout(50);
    assert_eq!(err.to_string(), "请求超时 (50 ms)");
}

#[test]
fn test_error_conversion_from_anyhow() {
    let anyhow_err = anyhow::anyhow!("test anyhow error");
    let restcheck_err: RestcheckError = anyhow_err.into();
    assert!(restcheck_err.to_string().contains("test anyhow error"));
}

#[test]
fn test_error_conversion_from_parse_error() {
    let parse_err = restcheck::suite::ParseError::MissingUrl;
    let restcheck_err: RestcheckError = parse_err.into();
    assert!(matches!(restcheck_err, RestcheckError::ParseError(_)));
}

#[test]
fn test_result_type() {
    fn returns_error() -> Result<()> {
        Err(RestcheckError::ParseError("test".to_string()))
    }

    let result = returns_error();
    assert!(result.is_err());
    match result {
        Err(RestcheckError::ParseError(msg)) => assert_eq!(msg, "test"),
        _ => panic!("Expected ParseError"),
    }
}
