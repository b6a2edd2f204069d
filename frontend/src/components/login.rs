use crate::components::common::ErrorAlert;
use crate::use_api;
use crate::web::BrowserSession;
use crate::web::router::{Link, use_router};
use cinebox::AppRoute;
use cinebox::auth::login;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = use_api();
    let router = use_router();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_is_submitting.set(true);
        set_error_msg.set(None);

        let api = api.clone();
        spawn_local(async move {
            let result = login(
                &api,
                &BrowserSession,
                &email.get_untracked(),
                &password.get_untracked(),
            )
            .await;
            match result {
                Ok(next) => router.go(next),
                Err(message) => set_error_msg.set(Some(message)),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="flex justify-center mt-10">
            <div class="card w-full max-w-md shadow-xl bg-base-100">
                <form class="card-body" on:submit=on_submit>
                    <h2 class="card-title text-2xl justify-center">"Login"</h2>
                    <ErrorAlert message=error_msg />

                    <label class="form-control w-full">
                        <span class="label-text">"Email"</span>
                        <input
                            type="email"
                            class="input input-bordered w-full"
                            placeholder="Enter email"
                            required
                            bind:value=email
                        />
                    </label>
                    <label class="form-control w-full">
                        <span class="label-text">"Password"</span>
                        <input
                            type="password"
                            class="input input-bordered w-full"
                            placeholder="Password"
                            required
                            bind:value=password
                        />
                    </label>

                    <div class="form-control mt-4">
                        <button class="btn btn-primary" type="submit" disabled=is_submitting>
                            {move || if is_submitting.get() { "Logging in..." } else { "Login" }}
                        </button>
                    </div>
                    <p class="text-sm text-center mt-2">
                        "Don't have an account? "
                        <Link to=AppRoute::Register class="link link-primary">"Register"</Link>
                    </p>
                </form>
            </div>
        </div>
    }
}
