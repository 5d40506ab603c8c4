use std::fs;

use restcheck::config::RunConfig;
use restcheck::runner::{Outcome, SequenceRunner};
use restcheck::suite::SuiteLoader;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// files 描述符发 multipart：每个文件一个 part（字段名、文件名、二进制
/// content-type），args 的每个 key 一个普通表单字段
#[tokio::test]
async fn test_multipart_upload_parts() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .mount(&mock_server)
        .await;

    // 准备本地文件
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("data.bin");
    fs::write(&file_path, b"binary payload").unwrap();

    let content = format!(
        r#"[{{
            "method": "POST",
            "url": "/upload",
            "files": {{"attachment": "{}"}},
            "args": {{"note": "a note", "count": 3}},
            "returns": {{"ok": true}}
        }}]"#,
        file_path.display()
    );
    let sequence = SuiteLoader::parse_content("upload", &content).unwrap();

    let runner = SequenceRunner::new(RunConfig::new(mock_server.uri()));
    let report = runner.run(&sequence).await.unwrap();
    assert_eq!(report.results[0].outcome, Outcome::Passed);

    // 检查服务器实际收到的 multipart body
    let received = mock_server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);

    let request = &received[0];
    let content_type = request
        .headers
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.starts_with("multipart/form-data"));

    let body = String::from_utf8_lossy(&request.body);
    // 文件 part
    assert!(body.contains(r#"name="attachment""#));
    assert!(body.contains(r#"filename="data.bin""#));
    assert!(body.contains("application/octet-stream"));
    assert!(body.contains("binary payload"));
    // args 作为普通表单字段：字符串原样，数字为 JSON 渲染
    assert!(body.contains(r#"name="note""#));
    assert!(body.contains("a note"));
    assert!(body.contains(r#"name="count""#));
    assert!(body.contains("3"));
    // args 不再作为 JSON body 出现
    assert!(!body.contains(r#"{"note""#));
}

/// 上传文件不存在：该描述符以 Error 结束，不影响后续描述符
#[tokio::test]
async fn test_missing_upload_file_is_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/after"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&mock_server)
        .await;

    let sequence = SuiteLoader::parse_content(
        "bad-upload",
        r#"[
            {"method": "POST", "url": "/upload", "files": {"f": "/no/such/file.bin"}},
            {"url": "/after"}
        ]"#,
    )
    .unwrap();

    let runner = SequenceRunner::new(RunConfig::new(mock_server.uri()));
    let report = runner.run(&sequence).await.unwrap();

    assert!(report.results[0].outcome.is_error());
    assert_eq!(report.results[1].outcome, Outcome::Passed);

    // 失败的上传没有产生请求
    let received = mock_server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].url.path(), "/after");
}
