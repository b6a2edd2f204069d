use crate::components::common::{ErrorAlert, SuccessAlert, settle};
use crate::use_api;
use crate::web::BrowserSession;
use crate::web::router::use_router;
use cinebox::admin::{IMPORT_SUCCEEDED, import, search};
use cinebox_shared::{ImportDraft, SearchHit};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 导入草稿的可编辑字段
#[derive(Clone, Copy)]
struct DraftForm {
    open: RwSignal<bool>,
    tmdb_id: RwSignal<i64>,
    title: RwSignal<String>,
    release_date: RwSignal<String>,
    vote_average: RwSignal<String>,
    overview: RwSignal<String>,
}

impl DraftForm {
    fn new() -> Self {
        Self {
            open: RwSignal::new(false),
            tmdb_id: RwSignal::new(0),
            title: RwSignal::new(String::new()),
            release_date: RwSignal::new(String::new()),
            vote_average: RwSignal::new(String::new()),
            overview: RwSignal::new(String::new()),
        }
    }

    /// 选中搜索结果后复制其字段
    fn fill(&self, hit: &SearchHit) {
        let draft = ImportDraft::from(hit);
        self.tmdb_id.set(draft.tmdb_id);
        self.title.set(draft.title);
        self.release_date.set(draft.release_date);
        self.vote_average.set(draft.vote_average);
        self.overview.set(draft.overview);
        self.open.set(true);
    }

    fn reset(&self) {
        self.open.set(false);
        self.tmdb_id.set(0);
        self.title.set(String::new());
        self.release_date.set(String::new());
        self.vote_average.set(String::new());
        self.overview.set(String::new());
    }

    fn to_draft(&self) -> ImportDraft {
        ImportDraft {
            tmdb_id: self.tmdb_id.get_untracked(),
            title: self.title.get_untracked(),
            release_date: self.release_date.get_untracked(),
            vote_average: self.vote_average.get_untracked(),
            overview: self.overview.get_untracked(),
        }
    }
}

/// 管理员搜索外部电影库并导入
#[component]
pub fn MovieSearchPage() -> impl IntoView {
    let api = StoredValue::new(use_api());
    let router = use_router();

    let query = RwSignal::new(String::new());
    let (results, set_results) = signal(Vec::<SearchHit>::new());
    let (searching, set_searching) = signal(false);
    let (adding, set_adding) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (success_msg, set_success_msg) = signal(Option::<String>::None);
    let draft = DraftForm::new();

    let on_search = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_success_msg.set(None);
        set_searching.set(true);

        let term = query.get_untracked();
        spawn_local(async move {
            let gate = search(&api.get_value(), &BrowserSession, &term).await;
            if let Some(hits) = settle(gate, router, set_error_msg) {
                set_results.set(hits);
            }
            set_searching.set(false);
        });
    };

    let on_import = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_success_msg.set(None);
        set_adding.set(true);

        let submitted = draft.to_draft();
        let term = query.get_untracked();
        spawn_local(async move {
            let gate = import(&api.get_value(), &BrowserSession, &submitted, &term).await;
            if let Some(outcome) = settle(gate, router, set_error_msg) {
                set_success_msg.set(Some(IMPORT_SUCCEEDED.to_string()));
                if let Some(hits) = outcome.results {
                    set_results.set(hits);
                }
                draft.reset();
            }
            set_adding.set(false);
        });
    };

    view! {
        <div class="max-w-4xl mx-auto mt-8">
            <h2 class="text-2xl font-bold text-center mb-4">"Admin Movie Search"</h2>
            <ErrorAlert message=error_msg />
            <SuccessAlert message=success_msg />

            <form class="flex gap-2 items-end" on:submit=on_search>
                <label class="form-control flex-1">
                    <span class="label-text">"Search Movies"</span>
                    <input
                        type="text"
                        class="input input-bordered"
                        placeholder="Enter movie title"
                        bind:value=query
                    />
                </label>
                <button class="btn btn-primary" type="submit" disabled=searching>
                    {move || if searching.get() { "Searching..." } else { "Search" }}
                </button>
            </form>

            <Show when=move || results.with(|r| !r.is_empty())>
                <table class="table table-zebra w-full mt-4">
                    <thead>
                        <tr>
                            <th>"Title"</th>
                            <th>"Release Date"</th>
                            <th>"Vote Average"</th>
                            <th>"Add to Database"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || results.get()
                            key=|hit| hit.id
                            children=move |hit| {
                                let title = hit.title.clone();
                                let release = hit.release_date.clone().unwrap_or_default();
                                let vote = hit.vote_average;
                                view! {
                                    <tr>
                                        <td>{title}</td>
                                        <td>{release}</td>
                                        <td>{vote}</td>
                                        <td>
                                            <button
                                                class="btn btn-success btn-sm"
                                                disabled=adding
                                                on:click=move |_| draft.fill(&hit)
                                            >
                                                "Add"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>

            <Show when=move || draft.open.get()>
                <div class="modal modal-open">
                    <form class="modal-box space-y-2" on:submit=on_import>
                        <h3 class="font-bold text-lg">"Edit Movie Details"</h3>
                        <label class="form-control">
                            <span class="label-text">"Title"</span>
                            <input type="text" class="input input-bordered" bind:value={draft.title} />
                        </label>
                        <label class="form-control">
                            <span class="label-text">"Release Date"</span>
                            <input type="text" class="input input-bordered" bind:value={draft.release_date} />
                        </label>
                        <label class="form-control">
                            <span class="label-text">"Vote Average"</span>
                            <input type="text" class="input input-bordered" bind:value={draft.vote_average} />
                        </label>
                        <label class="form-control">
                            <span class="label-text">"Overview"</span>
                            <textarea class="textarea textarea-bordered" bind:value={draft.overview}></textarea>
                        </label>
                        <div class="modal-action">
                            <button type="button" class="btn" on:click=move |_| draft.reset()>"Cancel"</button>
                            <button type="submit" class="btn btn-primary" disabled=adding>"Save Movie"</button>
                        </div>
                    </form>
                </div>
            </Show>
        </div>
    }
}
