//! LocalStorage 封装模块
//!
//! 令牌以原始字符串保存（不经过 JSON 编码），键名与 `cinebox::session` 一致。

use cinebox::session::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, SessionStore};
use cinebox_shared::TokenPair;
use gloo_storage::{LocalStorage, Storage};

/// 浏览器会话存储
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSession;

impl BrowserSession {
    fn get(key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(key: &str, value: &str) {
        if LocalStorage::raw().set_item(key, value).is_err() {
            cinebox::log_error!("[Session] 无法写入 {}", key);
        }
    }
}

impl SessionStore for BrowserSession {
    fn access_token(&self) -> Option<String> {
        Self::get(ACCESS_TOKEN_KEY)
    }

    fn refresh_token(&self) -> Option<String> {
        Self::get(REFRESH_TOKEN_KEY)
    }

    fn store(&self, tokens: &TokenPair) {
        Self::set(ACCESS_TOKEN_KEY, &tokens.access);
        Self::set(REFRESH_TOKEN_KEY, &tokens.refresh);
    }

    fn clear(&self) {
        LocalStorage::delete(ACCESS_TOKEN_KEY);
        LocalStorage::delete(REFRESH_TOKEN_KEY);
    }
}
