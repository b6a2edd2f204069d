use crate::components::common::{ErrorAlert, Spinner, settle};
use crate::use_api;
use crate::web::BrowserSession;
use crate::web::router::use_router;
use cinebox::AppRoute;
use cinebox::auth::load_users;
use cinebox_shared::UserRow;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn UserListPage() -> impl IntoView {
    let api = use_api();
    let router = use_router();

    let (users, set_users) = signal(Vec::<UserRow>::new());
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    // 初始加载
    spawn_local(async move {
        let gate = load_users(&api, &BrowserSession).await;
        if let Some(list) = settle(gate, router, set_error_msg) {
            set_users.set(list);
        }
        set_loading.set(false);
    });

    view! {
        <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
            <div class="max-w-3xl mx-auto mt-6">
                <h2 class="text-2xl font-bold text-center mb-4">"User List"</h2>
                <ErrorAlert message=error_msg />
                <table class="table table-zebra w-full">
                    <thead>
                        <tr>
                            <th>"Email"</th>
                            <th>"Username"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show
                            when=move || users.with(|u| !u.is_empty())
                            fallback=|| view! {
                                <tr><td colspan="2" class="text-center">"No users found"</td></tr>
                            }
                        >
                            <For
                                each=move || users.get()
                                key=|user| user.email.clone()
                                children=|user| view! {
                                    <tr>
                                        <td>{user.email}</td>
                                        <td>{user.username}</td>
                                    </tr>
                                }
                            />
                        </Show>
                    </tbody>
                </table>
                <button class="btn btn-error mt-4" on:click=move |_| router.go(AppRoute::Logout)>
                    "Logout"
                </button>
            </div>
        </Show>
    }
}
