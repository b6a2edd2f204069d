use crate::web::router::Link;
use cinebox::AppRoute;
use leptos::prelude::*;

/// 公开的欢迎页
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="hero min-h-[60vh]">
            <div class="hero-content text-center">
                <div>
                    <h1 class="text-4xl font-bold">"Welcome to Cinebox"</h1>
                    <div class="flex gap-4 justify-center mt-6">
                        <Link to=AppRoute::Login class="btn btn-link">"Login"</Link>
                        <Link to=AppRoute::Register class="btn btn-link">"Register"</Link>
                    </div>
                </div>
            </div>
        </div>
    }
}
