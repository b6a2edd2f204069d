//! Cinebox 前端应用
//!
//! 页面逻辑都在 `cinebox` 核心库中，这里只负责渲染与浏览器适配：
//! - `web::router`: 路由服务（History API）
//! - `web::http` / `web::storage` / `web::timer`: 浏览器能力的封装
//! - `components`: UI 组件层

mod components {
    pub mod add_movie;
    pub mod common;
    pub mod home;
    pub mod login;
    pub mod logout;
    pub mod movie_detail;
    pub mod movie_search;
    pub mod movies_page;
    pub mod navbar;
    pub mod profile;
    pub mod register;
    pub mod user_list;
}

pub(crate) mod web {
    mod http;
    pub mod router;
    mod storage;
    pub mod timer;

    pub use http::FetchClient;
    pub use storage::BrowserSession;
}

use crate::components::add_movie::AddMoviePage;
use crate::components::home::HomePage;
use crate::components::login::LoginPage;
use crate::components::logout::LogoutPage;
use crate::components::movie_detail::MovieDetailPage;
use crate::components::movie_search::MovieSearchPage;
use crate::components::movies_page::MoviesPage;
use crate::components::navbar::Navbar;
use crate::components::profile::ProfilePage;
use crate::components::register::RegisterPage;
use crate::components::user_list::UserListPage;

use cinebox::config::ApiConfig;
use cinebox::{AppRoute, CineboxApi};
use leptos::prelude::*;
use web::FetchClient;
use web::router::{Router, RouterOutlet};

/// 页面使用的 API 客户端
pub(crate) type Api = CineboxApi<FetchClient>;

/// 从 Context 获取 API 客户端
pub(crate) fn use_api() -> Api {
    use_context::<Api>().expect("Api should be provided")
}

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Logout => view! { <LogoutPage /> }.into_any(),
        AppRoute::UserList => view! { <UserListPage /> }.into_any(),
        AppRoute::Movies(page) => view! { <MoviesPage page=page /> }.into_any(),
        AppRoute::MovieSearch => view! { <MovieSearchPage /> }.into_any(),
        AppRoute::AddMovie => view! { <AddMoviePage /> }.into_any(),
        AppRoute::MovieDetail(tmdb_id) => view! { <MovieDetailPage tmdb_id=tmdb_id /> }.into_any(),
        AppRoute::Profile => view! { <ProfilePage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-[60vh]">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_build_env();
    cinebox::log_info!("[App] Backend origin: {}", config.origin);
    provide_context(CineboxApi::new(&config, FetchClient));

    view! {
        <Router>
            <Navbar />
            <main class="container mx-auto p-4">
                <RouterOutlet matcher=route_matcher />
            </main>
        </Router>
    }
}
