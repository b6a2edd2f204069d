use crate::components::common::{ErrorAlert, SuccessAlert, settle};
use crate::use_api;
use crate::web::BrowserSession;
use crate::web::router::use_router;
use cinebox::catalog::{ADD_SUCCEEDED, add_movie, can_add};
use cinebox_shared::NewMovie;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn AddMoviePage() -> impl IntoView {
    let api = use_api();
    let router = use_router();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (success_msg, set_success_msg) = signal(Option::<String>::None);

    let form = move || NewMovie {
        title: title.get(),
        overview: description.get(),
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error_msg.set(None);
        set_success_msg.set(None);

        let payload = NewMovie {
            title: title.get_untracked(),
            overview: description.get_untracked(),
        };
        let api = api.clone();
        spawn_local(async move {
            let gate = add_movie(&api, &BrowserSession, &payload).await;
            if settle(gate, router, set_error_msg).is_some() {
                set_success_msg.set(Some(ADD_SUCCEEDED.to_string()));
                title.set(String::new());
                description.set(String::new());
            }
        });
    };

    view! {
        <div class="max-w-xl mx-auto my-8">
            <h2 class="text-2xl font-bold mb-4">"Add New Movie"</h2>
            <ErrorAlert message=error_msg />
            <SuccessAlert message=success_msg />
            <form class="space-y-3" on:submit=on_submit>
                <label class="form-control">
                    <span class="label-text">"Title"</span>
                    <input type="text" class="input input-bordered" required bind:value=title />
                </label>
                <label class="form-control">
                    <span class="label-text">"Description"</span>
                    <textarea class="textarea textarea-bordered" rows="3" required bind:value=description></textarea>
                </label>
                <button class="btn btn-primary" type="submit" disabled=move || !can_add(&form())>
                    "Add Movie"
                </button>
            </form>
        </div>
    }
}
