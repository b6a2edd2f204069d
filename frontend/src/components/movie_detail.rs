use crate::components::common::{ErrorAlert, Spinner, SuccessAlert, settle};
use crate::use_api;
use crate::web::BrowserSession;
use crate::web::router::use_router;
use crate::web::timer;
use cinebox::catalog::{
    DELETE_REDIRECT_DELAY_MS, DELETE_SUCCEEDED, delete_movie, load_movie_detail, save_movie,
};
use cinebox::reviews::{add_review, apply_like, rate_movie, toggle_like};
use cinebox_shared::protocol::LikeAction;
use cinebox_shared::{Movie, MovieUpdate, Review};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 管理员编辑表单
#[derive(Clone, Copy)]
struct EditForm {
    open: RwSignal<bool>,
    title: RwSignal<String>,
    overview: RwSignal<String>,
    vote_average: RwSignal<String>,
    poster_path: RwSignal<String>,
}

impl EditForm {
    fn new() -> Self {
        Self {
            open: RwSignal::new(false),
            title: RwSignal::new(String::new()),
            overview: RwSignal::new(String::new()),
            vote_average: RwSignal::new(String::new()),
            poster_path: RwSignal::new(String::new()),
        }
    }

    /// 用当前电影预填并打开
    fn open_for(&self, movie: &Movie) {
        let prefill = MovieUpdate::from_movie(movie);
        self.title.set(prefill.title);
        self.overview.set(prefill.overview);
        self.vote_average.set(prefill.vote_average);
        self.poster_path.set(prefill.poster_path);
        self.open.set(true);
    }

    fn to_update(&self, tmdb_id: i64) -> MovieUpdate {
        MovieUpdate {
            tmdb_id,
            title: self.title.get_untracked(),
            overview: self.overview.get_untracked(),
            vote_average: self.vote_average.get_untracked(),
            poster_path: self.poster_path.get_untracked(),
        }
    }
}

#[component]
pub fn MovieDetailPage(tmdb_id: String) -> impl IntoView {
    let api = StoredValue::new(use_api());
    let tmdb_id = StoredValue::new(tmdb_id);
    let router = use_router();

    let (movie, set_movie) = signal(Option::<Movie>::None);
    let (is_superuser, set_is_superuser) = signal(false);
    let (reviews, set_reviews) = signal(Vec::<Review>::new());
    let (loading, set_loading) = signal(true);

    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (notice, set_notice) = signal(Option::<String>::None);
    let (delete_msg, set_delete_msg) = signal(Option::<String>::None);
    let (review_error, set_review_error) = signal(Option::<String>::None);
    let (rating_error, set_rating_error) = signal(Option::<String>::None);
    let (like_error, set_like_error) = signal(Option::<String>::None);

    let new_review = RwSignal::new(String::new());
    let new_rating = RwSignal::new(String::new());
    let edit = EditForm::new();

    // 初始加载
    spawn_local(async move {
        let gate = load_movie_detail(&api.get_value(), &BrowserSession, &tmdb_id.get_value()).await;
        if let Some(detail) = settle(gate, router, set_error_msg) {
            set_is_superuser.set(detail.is_superuser);
            set_reviews.set(detail.reviews);
            set_notice.set(detail.notice);
            set_movie.set(Some(detail.movie));
        }
        set_loading.set(false);
    });

    // =========================================================
    // 评论与点赞
    // =========================================================

    let on_add_review = move |_| {
        let Some(movie_pk) = movie.with_untracked(|m| m.as_ref().map(|m| m.id)) else {
            return;
        };
        let text = new_review.get_untracked();
        spawn_local(async move {
            let gate = add_review(
                &api.get_value(),
                &BrowserSession,
                &tmdb_id.get_value(),
                movie_pk,
                &text,
            )
            .await;
            if let Some(review) = settle(gate, router, set_review_error) {
                set_reviews.update(|list| list.push(review));
                new_review.set(String::new());
            }
        });
    };

    let on_like = move |review_id: i64, action: LikeAction| {
        spawn_local(async move {
            let gate = toggle_like(
                &api.get_value(),
                &BrowserSession,
                &tmdb_id.get_value(),
                review_id,
                action,
            )
            .await;
            if settle(gate, router, set_like_error).is_some() {
                set_reviews.update(|list| apply_like(list, review_id, action));
            }
        });
    };

    // =========================================================
    // 评分
    // =========================================================

    let on_rate = move |_| {
        let Some(movie_pk) = movie.with_untracked(|m| m.as_ref().map(|m| m.id)) else {
            return;
        };
        let rating = new_rating.get_untracked();
        spawn_local(async move {
            let gate = rate_movie(
                &api.get_value(),
                &BrowserSession,
                &tmdb_id.get_value(),
                movie_pk,
                &rating,
            )
            .await;
            if let Some(reloaded) = settle(gate, router, set_rating_error) {
                new_rating.set(String::new());
                if let Some(updated) = reloaded {
                    set_movie.set(Some(updated));
                }
            }
        });
    };

    // =========================================================
    // 管理员编辑 / 删除
    // =========================================================

    let on_edit = move |_| {
        movie.with_untracked(|m| {
            if let Some(m) = m {
                edit.open_for(m);
            }
        });
    };

    let on_save = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(current) = movie.with_untracked(|m| m.as_ref().map(|m| m.tmdb_id)) else {
            return;
        };
        let form = edit.to_update(current);
        spawn_local(async move {
            let gate = save_movie(&api.get_value(), &BrowserSession, &tmdb_id.get_value(), &form).await;
            if let Some(updated) = settle(gate, router, set_error_msg) {
                set_movie.set(Some(updated));
                edit.open.set(false);
            }
        });
    };

    let on_delete = move |_| {
        spawn_local(async move {
            let gate = delete_movie(&api.get_value(), &BrowserSession, &tmdb_id.get_value()).await;
            if settle(gate, router, set_error_msg).is_some() {
                set_movie.set(None);
                set_delete_msg.set(Some(DELETE_SUCCEEDED.to_string()));
                timer::after(DELETE_REDIRECT_DELAY_MS, move || router.back());
            }
        });
    };

    view! {
        <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
            <div class="max-w-5xl mx-auto mt-4 space-y-4">
                <ErrorAlert message=error_msg />
                <SuccessAlert message=delete_msg />
                <ErrorAlert message=review_error />
                <ErrorAlert message=rating_error />
                <ErrorAlert message=like_error />

                <Show
                    when=move || movie.with(|m| m.is_some())
                    fallback=move || {
                        delete_msg.with(|d| d.is_none()).then(|| view! { <p>"No movie details available."</p> })
                    }
                >
                    {move || movie.get().map(|m| view! {
                        <div class="card lg:card-side bg-base-100 shadow">
                            <figure class="lg:w-1/3">
                                <img src=m.poster_path.clone() alt=m.title.clone() />
                            </figure>
                            <div class="card-body">
                                <h2 class="card-title">{m.title.clone()}</h2>
                                <p>{m.overview.clone()}</p>
                                <p><strong>"Vote Average: " {m.vote_average}</strong></p>
                                <p>"Average Rating: " {m.average_rating}</p>
                                <Show when=move || is_superuser.get()>
                                    <div class="card-actions">
                                        <button class="btn btn-primary" on:click=on_edit>"Edit"</button>
                                        <button class="btn btn-error" on:click=on_delete>"Delete"</button>
                                    </div>
                                </Show>
                            </div>
                        </div>
                    })}

                    <section>
                        <h2 class="text-2xl font-bold my-2">"Reviews"</h2>
                        {move || notice.get().map(|n| view! { <p class="text-warning">{n}</p> })}
                        <label class="form-control">
                            <span class="label-text">"Add a Review"</span>
                            <textarea class="textarea textarea-bordered" rows="3" bind:value=new_review></textarea>
                        </label>
                        <button class="btn btn-primary mt-2" on:click=on_add_review>"Submit Review"</button>
                        <ul class="mt-4 space-y-2">
                            <For
                                each=move || reviews.get()
                                key=|review| (review.id, review.likes)
                                children=move |review| {
                                    let id = review.id;
                                    view! {
                                        <li class="p-3 rounded bg-base-200">
                                            <p>{review.text}</p>
                                            <p>"Likes: " {review.likes}</p>
                                            <button class="btn btn-sm" on:click=move |_| on_like(id, LikeAction::Like)>"Like"</button>
                                            <button class="btn btn-sm ml-2" on:click=move |_| on_like(id, LikeAction::Unlike)>"Unlike"</button>
                                        </li>
                                    }
                                }
                            />
                        </ul>
                    </section>

                    <section>
                        <label class="form-control max-w-xs">
                            <span class="label-text">"Rate this Movie"</span>
                            <input
                                type="number"
                                min="0"
                                max="10"
                                step="0.1"
                                class="input input-bordered"
                                bind:value=new_rating
                            />
                        </label>
                        <button class="btn btn-primary mt-2" on:click=on_rate>"Submit Rating"</button>
                    </section>

                    <Show when=move || edit.open.get()>
                        <div class="modal modal-open">
                            <form class="modal-box space-y-2" on:submit=on_save>
                                <h3 class="font-bold text-lg">"Edit Movie"</h3>
                                <label class="form-control">
                                    <span class="label-text">"Title"</span>
                                    <input type="text" class="input input-bordered" bind:value={edit.title} />
                                </label>
                                <label class="form-control">
                                    <span class="label-text">"Overview"</span>
                                    <textarea class="textarea textarea-bordered" rows="3" bind:value={edit.overview}></textarea>
                                </label>
                                <label class="form-control">
                                    <span class="label-text">"Vote Average"</span>
                                    <input
                                        type="number"
                                        min="0"
                                        max="10"
                                        step="0.1"
                                        class="input input-bordered"
                                        bind:value={edit.vote_average}
                                    />
                                </label>
                                <label class="form-control">
                                    <span class="label-text">"Poster Path"</span>
                                    <input type="text" class="input input-bordered" bind:value={edit.poster_path} />
                                </label>
                                <div class="modal-action">
                                    <button type="button" class="btn" on:click=move |_| edit.open.set(false)>"Cancel"</button>
                                    <button type="submit" class="btn btn-primary">"Save Changes"</button>
                                </div>
                            </form>
                        </div>
                    </Show>
                </Show>
            </div>
        </Show>
    }
}
