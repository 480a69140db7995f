use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let navigator = use_navigator().unwrap();

    let on_home = Callback::from(move |_| {
        navigator.push(&Route::Home);
    });

    html! {
        <div class="not-found-page min-h-screen bg-gradient-to-br from-blue-50 via-white to-indigo-50 flex items-center justify-center py-16">
            <div class="text-center px-4">
                <p class="text-6xl font-bold text-blue-600 mb-4">{"404"}</p>
                <h1 class="text-2xl font-semibold text-gray-900 mb-2">{"Page not found"}</h1>
                <p class="text-gray-600 mb-8">{"The page you are looking for does not exist."}</p>
                <button
                    onclick={on_home}
                    class="inline-flex items-center px-6 py-3 text-sm font-semibold text-white bg-gradient-to-r from-blue-600 to-indigo-600 rounded-xl shadow-lg hover:shadow-xl transition-all"
                >
                    {"Go home"}
                </button>
            </div>
        </div>
    }
}
