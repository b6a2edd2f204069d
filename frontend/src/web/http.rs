//! HTTP 请求封装模块
//!
//! 用 `gloo-net` 实现核心库的 `HttpClient`。请求 future 被丢弃时
//! （例如 `CancelToken` 取消）会通过 `AbortController` 中止底层 fetch。

use async_trait::async_trait;
use cinebox::error::{ApiError, ApiResult};
use cinebox::request::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use gloo_net::http::{Method, RequestBuilder};
use web_sys::AbortController;

fn to_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

/// drop 时中止仍在进行的 fetch
struct AbortOnDrop(Option<AbortController>);

impl AbortOnDrop {
    /// 请求已完成，不再需要中止
    fn disarm(mut self) {
        self.0 = None;
    }
}

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        if let Some(controller) = self.0.take() {
            controller.abort();
        }
    }
}

/// 浏览器 fetch 客户端
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FetchClient;

#[async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn send(&self, req: HttpRequest) -> ApiResult<HttpResponse> {
        let controller = AbortController::new().ok();
        let signal = controller.as_ref().map(|c| c.signal());

        let mut builder = RequestBuilder::new(&req.url)
            .method(to_method(req.method))
            .abort_signal(signal.as_ref());
        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        let request = match req.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(format!("请求构建失败: {}", e)))?;

        let guard = AbortOnDrop(controller);
        let res = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("读取响应失败: {}", e)))?;
        guard.disarm();

        Ok(HttpResponse { status, body })
    }
}
