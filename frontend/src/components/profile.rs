use crate::components::common::{ErrorAlert, Spinner, SuccessAlert, settle};
use crate::use_api;
use crate::web::BrowserSession;
use crate::web::router::use_router;
use cinebox::auth::{load_profile, rename};
use cinebox_shared::User;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 当前用户资料；超级用户可以修改用户名
#[component]
pub fn ProfilePage() -> impl IntoView {
    let api = StoredValue::new(use_api());
    let router = use_router();

    let (user, set_user) = signal(Option::<User>::None);
    let new_username = RwSignal::new(String::new());
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (success_msg, set_success_msg) = signal(Option::<String>::None);

    spawn_local(async move {
        let gate = load_profile(&api.get_value(), &BrowserSession).await;
        if let Some(me) = settle(gate, router, set_error_msg) {
            new_username.set(me.username.clone());
            set_user.set(Some(me));
        }
        set_loading.set(false);
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_success_msg.set(None);

        let api = api.get_value();
        spawn_local(async move {
            let gate = rename(&api, &BrowserSession, &new_username.get_untracked()).await;
            if let Some(updated) = settle(gate, router, set_error_msg) {
                set_success_msg.set(Some(format!("Username updated to {}.", updated.username)));
                set_user.set(Some(updated));
            }
        });
    };

    let is_superuser = move || user.with(|u| u.as_ref().is_some_and(|u| u.is_superuser));

    view! {
        <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
            <div class="max-w-xl mx-auto mt-6 space-y-4">
                <h2 class="text-2xl font-bold">"Profile"</h2>
                <ErrorAlert message=error_msg />
                <SuccessAlert message=success_msg />
                {move || user.get().map(|u| view! {
                    <div class="card bg-base-100 shadow">
                        <div class="card-body">
                            <p><strong>"Username: "</strong>{u.username}</p>
                            <p><strong>"Email: "</strong>{u.email}</p>
                            <p><strong>"ID: "</strong>{u.id}</p>
                            <p>
                                <strong>"Superuser: "</strong>
                                {if u.is_superuser { "Yes" } else { "No" }}
                            </p>
                        </div>
                    </div>
                })}
                <Show when=is_superuser>
                    <form class="flex gap-2 items-end" on:submit=on_submit>
                        <label class="form-control flex-1">
                            <span class="label-text">"New username"</span>
                            <input type="text" class="input input-bordered" bind:value=new_username />
                        </label>
                        <button type="submit" class="btn btn-primary">"Update"</button>
                    </form>
                </Show>
            </div>
        </Show>
    }
}
