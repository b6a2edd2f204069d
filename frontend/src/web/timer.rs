//! 定时器封装模块

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;

/// 在 `millis` 毫秒后执行一次 `callback`
///
/// 用于提示信息展示后的延迟跳转。
pub fn after<F>(millis: u32, callback: F)
where
    F: FnOnce() + 'static,
{
    spawn_local(async move {
        TimeoutFuture::new(millis).await;
        callback();
    });
}
