use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use reqwest::multipart::{Form, Part};
use serde_json::Value;

use crate::http::response::Response;
use crate::http::types::join_url;
use crate::suite::Descriptor;
use crate::{RestcheckError, Result};

/// HTTP 客户端（请求分发器）
///
/// 每个序列创建一个 Client：内部的 cookie store 随之隔离，
/// 序列内的 Set-Cookie 状态自动延续到后续请求
pub struct Client {
    inner: reqwest::Client,
    default_timeout: Duration,
}

impl Client {
    pub fn new(default_timeout: Duration) -> Result<Self> {
        Ok(Self {
            inner: reqwest::Client::builder().cookie_store(true).build()?,
            default_timeout,
        })
    }

    /// 把一个描述符转换为恰好一次 HTTP 调用
    pub async fn dispatch(&self, descriptor: &Descriptor, base: &str) -> Result<Response> {
        let url = join_url(base, &descriptor.url);
        let timeout_millis = descriptor
            .timeout_millis
            .unwrap_or(self.default_timeout.as_millis() as u64);

        let mut request = self
            .inner
            .request(descriptor.method.to_reqwest(), &url)
            .timeout(Duration::from_millis(timeout_millis));

        if let Some(files) = &descriptor.files {
            // 文件上传时 args 作为普通表单字段，不再作为 JSON body
            request = request.multipart(build_multipart(files, descriptor.args.as_ref()).await?);
        } else if let Some(args) = &descriptor.args {
            request = request.json(args);
        }

        tracing::debug!("{} {}", descriptor.method, url);

        let start = Instant::now();
        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                RestcheckError::Timeout(timeout_millis)
            } else {
                RestcheckError::HttpError(e)
            }
        })?;
        let duration = start.elapsed();

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.text().await?;

        tracing::debug!("-> {} ({} ms)", status, duration.as_millis());
        tracing::trace!("response headers: {:?}", headers);
        tracing::trace!("response body: {}", body);

        Response::new(status, headers, body, duration)
    }
}

/// 构建 multipart 表单
///
/// 每个文件字段从磁盘整体读入，字段名来自 files 的 key，
/// 文件名取路径最后一段，content-type 固定为 application/octet-stream；
/// args 中的每个 key 作为普通文本字段附加（字符串原样，其他值为紧凑 JSON）
async fn build_multipart(
    files: &BTreeMap<String, PathBuf>,
    args: Option<&Value>,
) -> Result<Form> {
    let mut form = Form::new();

    for (field, path) in files {
        // 读文件失败对该描述符是致命错误，向上传播为 Error
        let bytes = tokio::fs::read(path).await?;
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();
        let part = Part::bytes(bytes)
            .file_name(filename)
            .mime_str("application/octet-stream")?;
        form = form.part(field.clone(), part);
    }

    if let Some(Value::Object(map)) = args {
        for (key, value) in map {
            let text = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            form = form.text(key.clone(), text);
        }
    }

    Ok(form)
}
