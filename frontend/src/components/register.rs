use crate::components::common::{ErrorAlert, SuccessAlert};
use crate::use_api;
use crate::web::router::{Link, use_router};
use crate::web::timer;
use cinebox::AppRoute;
use cinebox::auth::{REGISTRATION_REDIRECT_DELAY_MS, REGISTRATION_SUCCEEDED, register};
use cinebox_shared::Registration;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = use_api();
    let router = use_router();

    let email = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let re_password = RwSignal::new(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (success_msg, set_success_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error_msg.set(None);
        set_success_msg.set(None);
        set_is_submitting.set(true);

        let form = Registration {
            email: email.get_untracked(),
            username: username.get_untracked(),
            password: password.get_untracked(),
            re_password: re_password.get_untracked(),
        };
        let api = api.clone();
        spawn_local(async move {
            match register(&api, &form).await {
                Ok(_) => {
                    set_success_msg.set(Some(REGISTRATION_SUCCEEDED.to_string()));
                    timer::after(REGISTRATION_REDIRECT_DELAY_MS, move || {
                        router.go(AppRoute::Login)
                    });
                }
                Err(message) => set_error_msg.set(Some(message)),
            }
            set_is_submitting.set(false);
        });
    };

    let field = move |label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <label class="form-control w-full">
                <span class="label-text">{label}</span>
                <input type=kind class="input input-bordered w-full" required bind:value=value />
            </label>
        }
    };

    view! {
        <div class="flex justify-center mt-10">
            <div class="card w-full max-w-md shadow-xl bg-base-100">
                <form class="card-body" on:submit=on_submit>
                    <h2 class="card-title text-2xl justify-center">"Register"</h2>
                    <ErrorAlert message=error_msg />
                    <SuccessAlert message=success_msg />

                    {field("Email", "email", email)}
                    {field("Username", "text", username)}
                    {field("Password", "password", password)}
                    {field("Confirm Password", "password", re_password)}

                    <div class="form-control mt-4">
                        <button class="btn btn-primary" type="submit" disabled=is_submitting>
                            "Register"
                        </button>
                    </div>
                    <p class="text-sm text-center mt-2">
                        "Already have an account? "
                        <Link to=AppRoute::Login class="link link-primary">"Login"</Link>
                    </p>
                </form>
            </div>
        </div>
    }
}
