use crate::web::router::{Link, use_router};
use cinebox::AppRoute;
use leptos::prelude::*;

/// 顶部导航栏
///
/// 登录、注册页只显示品牌名，其余页面显示站内链接与注销按钮。
#[component]
pub fn Navbar() -> impl IntoView {
    let router = use_router();
    let show_links = move || !router.current_route().get().hides_navigation();

    view! {
        <nav class="navbar bg-neutral text-neutral-content px-4">
            <div class="flex-1 gap-2">
                <Link to=AppRoute::Home class="btn btn-ghost text-xl">"Cinebox"</Link>
                <Show when=show_links>
                    <ul class="menu menu-horizontal px-1">
                        <li><Link to=AppRoute::Home>"Home"</Link></li>
                        <li><Link to=AppRoute::Movies(1)>"Movies"</Link></li>
                        <li><Link to=AppRoute::MovieSearch>"Search"</Link></li>
                        <li><Link to=AppRoute::AddMovie>"Add Movie"</Link></li>
                        <li><Link to=AppRoute::Profile>"Profile"</Link></li>
                        <li><Link to=AppRoute::UserList>"User List"</Link></li>
                    </ul>
                </Show>
            </div>
            <Show when=show_links>
                <div class="flex-none">
                    <Link to=AppRoute::Logout class="btn btn-outline btn-sm">"Logout"</Link>
                </div>
            </Show>
        </nav>
    }
}
