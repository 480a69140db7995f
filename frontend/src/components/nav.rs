use crate::auth::AuthContext;
use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

fn nav_link(current: &Route, to: Route, label: &str) -> Html {
    let active = *current == to;
    html! {
        <Link<Route>
            to={to}
            classes={classes!(
                "px-3", "py-2", "rounded-md", "text-sm", "font-medium",
                "transition-colors", "duration-200",
                if active {
                    classes!("bg-white/20", "text-white")
                } else {
                    classes!("text-blue-100", "hover:bg-white/10", "hover:text-white")
                }
            )}
        >
            {label.to_string()}
        </Link<Route>>
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let navigator = use_navigator().unwrap();
    let current_route = use_route::<Route>().unwrap_or(Route::Home);

    let on_logout_click = {
        let auth = auth.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            auth.logout.emit(());
            navigator.push(&Route::Home);
        })
    };

    let on_login_click = {
        let navigator = navigator.clone();
        Callback::from(move |_| {
            navigator.push(&Route::Login);
        })
    };

    html! {
        <nav class="sticky top-0 z-50 bg-gradient-to-r from-slate-800 to-blue-600 text-white shadow-lg">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between h-16 items-center">
                    <div class="flex items-center space-x-4 sm:space-x-8">
                        <Link<Route> to={Route::Home} classes="flex items-baseline space-x-1">
                            <span class="text-lg sm:text-xl font-medium bg-white text-blue-600 px-2 py-0.5 rounded">{"Matchpoint"}</span>
                        </Link<Route>>

                        <div class="hidden md:flex space-x-6">
                            {nav_link(&current_route, Route::Tournaments, "Tournaments")}
                            {nav_link(&current_route, Route::Marketplace, "Marketplace")}
                            if auth.state.is_authenticated() {
                                {nav_link(&current_route, Route::Messages, "Messages")}
                            }
                            if auth.state.is_club() {
                                {nav_link(&current_route, Route::Dashboard, "Dashboard")}
                            }
                        </div>
                    </div>

                    <div class="flex items-center space-x-3">
                        if let Some(user) = &auth.state.user {
                            <span class="hidden sm:inline text-sm text-blue-100">{&user.name}</span>
                            <button
                                onclick={on_logout_click}
                                class="px-3 py-2 rounded-md text-sm font-medium text-blue-100 hover:bg-white/10 hover:text-white"
                            >
                                {"Sign out"}
                            </button>
                        } else {
                            <button
                                onclick={on_login_click}
                                class="px-3 py-2 rounded-md text-sm font-medium bg-white text-blue-600 hover:bg-blue-50"
                            >
                                {"Sign in"}
                            </button>
                        }
                    </div>
                </div>
            </div>
        </nav>
    }
}
