//! 页面间共用的小组件与辅助函数

use crate::web::router::RouterService;
use cinebox::Gate;
use leptos::prelude::*;

/// 把一次受保护加载的结果落到页面状态上
///
/// 重定向交给路由服务，失败写入 `error`，取消则什么都不做。
/// 只有 `Gate::Ready` 返回值，此时 `error` 被清空。
pub fn settle<T>(
    gate: Gate<T>,
    router: RouterService,
    error: WriteSignal<Option<String>>,
) -> Option<T> {
    match gate {
        Gate::Ready(value) => {
            error.set(None);
            Some(value)
        }
        Gate::Redirect(route) => {
            router.redirect(route);
            None
        }
        Gate::Failed(message) => {
            error.set(Some(message));
            None
        }
        Gate::Cancelled => None,
    }
}

/// 错误提示框，消息为空时不渲染
#[component]
pub fn ErrorAlert(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! {
                <div role="alert" class="alert alert-error text-sm py-2 my-2">
                    <span>{text}</span>
                </div>
            }
        })
    }
}

/// 成功提示框
#[component]
pub fn SuccessAlert(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! {
                <div role="status" class="alert alert-success text-sm py-2 my-2">
                    <span>{text}</span>
                </div>
            }
        })
    }
}

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <span class="loading loading-spinner loading-lg text-primary"></span>
        </div>
    }
}
