use crate::components::common::{ErrorAlert, settle};
use crate::use_api;
use crate::web::BrowserSession;
use crate::web::router::{RouterService, use_router};
use cinebox::catalog::{load_movies, placeholder_pager};
use cinebox::pagination::Pager;
use cinebox::{AppRoute, CancelToken};
use cinebox_shared::Movie;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 分页电影列表
///
/// 页码来自路由；翻页会销毁当前页面，`on_cleanup` 随即取消仍在进行的请求。
#[component]
pub fn MoviesPage(page: u32) -> impl IntoView {
    let api = use_api();
    let router = use_router();

    let (movies, set_movies) = signal(Vec::<Movie>::new());
    let (pager, set_pager) = signal(placeholder_pager(page));
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let cancel = CancelToken::new();
    on_cleanup({
        let cancel = cancel.clone();
        move || cancel.cancel()
    });

    spawn_local(async move {
        let gate = load_movies(&api, &BrowserSession, page, &cancel).await;
        if cancel.is_cancelled() {
            return;
        }
        if let Some(loaded) = settle(gate, router, set_error_msg) {
            set_movies.set(loaded.movies);
            set_pager.set(loaded.pager);
        }
        set_loading.set(false);
    });

    view! {
        <div class="mt-4">
            <h1 class="text-3xl font-bold mb-4">"Movies"</h1>
            <Show when=move || loading.get()>
                <div class="alert alert-info">"Loading..."</div>
            </Show>
            <ErrorAlert message=error_msg />

            <div class="grid grid-cols-1 md:grid-cols-3 lg:grid-cols-4 gap-4">
                <Show
                    when=move || !movies.with(|m| m.is_empty())
                    fallback=move || (!loading.get()).then(|| view! { <p>"No movies available."</p> })
                >
                    <For
                        each=move || movies.get()
                        key=|movie| movie.tmdb_id
                        children=move |movie| view! { <MovieCard movie=movie router=router /> }
                    />
                </Show>
            </div>

            {move || view! { <PageLinks pager=pager.get() router=router /> }}
        </div>
    }
}

#[component]
fn MovieCard(movie: Movie, router: RouterService) -> impl IntoView {
    let target = AppRoute::MovieDetail(movie.tmdb_id.to_string());
    let release = movie
        .release_date
        .map(|d| d.to_string())
        .unwrap_or_default();

    view! {
        <div
            class="card bg-base-100 shadow cursor-pointer"
            on:click=move |_| router.go(target.clone())
        >
            <figure>
                <img src=movie.poster_path alt=movie.title.clone() class="h-96 w-full object-cover" />
            </figure>
            <div class="card-body">
                <h5 class="card-title">{movie.title}</h5>
                <p>{movie.overview}</p>
                <p class="text-sm opacity-70">"Release Date: " {release}</p>
                <p class="text-sm opacity-70">"Rating: " {movie.vote_average}</p>
            </div>
        </div>
    }
}

/// 页码导航：首页、上一页、5 个页码的窗口、省略号与末页、下一页、尾页
///
/// 不可用的按钮被禁用，窗口外的页码点击不做任何事。
#[component]
fn PageLinks(pager: Pager, router: RouterService) -> impl IntoView {
    let jump = move |target: Option<u32>| {
        if let Some(page) = target {
            router.go(AppRoute::Movies(page));
        }
    };
    let control = move |label: &'static str, enabled: bool, target: Option<u32>| {
        view! {
            <button class="join-item btn" disabled=!enabled on:click=move |_| jump(target)>
                {label}
            </button>
        }
    };

    view! {
        <div class="join flex justify-center mt-6">
            {control("«", pager.first_enabled(), pager.first())}
            {control("‹", pager.prev_enabled(), pager.prev())}
            {pager
                .window()
                .map(|page| {
                    let class = if page == pager.current {
                        "join-item btn btn-active"
                    } else {
                        "join-item btn"
                    };
                    view! {
                        <button
                            class=class
                            on:click=move |_| jump(pager.target(page))
                        >
                            {page}
                        </button>
                    }
                })
                .collect_view()}
            <button class="join-item btn btn-disabled">"…"</button>
            <button class="join-item btn" on:click=move |_| jump(pager.target(pager.total_pages))>
                {pager.total_pages}
            </button>
            {control("›", pager.next_enabled(), pager.next())}
            {control("»", pager.last_enabled(), pager.last())}
        </div>
    }
}
