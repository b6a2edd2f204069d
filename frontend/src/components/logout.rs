use crate::components::common::{ErrorAlert, settle};
use crate::use_api;
use crate::web::BrowserSession;
use crate::web::router::use_router;
use cinebox::AppRoute;
use cinebox::auth::logout;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 进入即注销，成功后回到登录页
#[component]
pub fn LogoutPage() -> impl IntoView {
    let api = use_api();
    let router = use_router();
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    spawn_local(async move {
        let gate = logout(&api, &BrowserSession).await;
        if settle(gate, router, set_error_msg).is_some() {
            router.redirect(AppRoute::Login);
        }
    });

    view! {
        <div class="flex flex-col items-center mt-10 gap-4">
            <Show
                when=move || error_msg.get().is_some()
                fallback=|| view! { <p>"Logging out..."</p> }
            >
                <ErrorAlert message=error_msg />
            </Show>
        </div>
    }
}
