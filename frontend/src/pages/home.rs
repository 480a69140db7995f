use crate::auth::AuthContext;
use crate::components::status_badge::StatusBadge;
use crate::config;
use crate::storage::LocalTournamentStore;
use crate::Route;
use shared::dates::format_display_date;
use shared::{filter_tournaments, FilterCriteria, Tournament, TournamentStore};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Home)]
pub fn home() -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let navigator = use_navigator().unwrap();
    let featured = use_state(Vec::<Tournament>::new);

    {
        let featured = featured.clone();
        use_effect_with((), move |_| {
            if let Ok(items) = LocalTournamentStore.list() {
                // First few non-completed rows of the default ordering.
                featured.set(filter_tournaments(
                    items,
                    &FilterCriteria::default(),
                    Some(config::FEATURED_LIMIT),
                ));
            }
        });
    }

    let on_browse = {
        let navigator = navigator.clone();
        Callback::from(move |_| {
            navigator.push(&Route::Tournaments);
        })
    };

    let on_register = {
        let navigator = navigator.clone();
        Callback::from(move |_| {
            navigator.push(&Route::Register);
        })
    };

    html! {
        <div class="home-page min-h-screen bg-gradient-to-br from-blue-50 via-white to-indigo-50">
            // Hero
            <div class="relative overflow-hidden">
                <div class="container mx-auto px-4 sm:px-6 lg:px-8 py-12 sm:py-16 lg:py-20">
                    <div class="text-center max-w-4xl mx-auto">
                        <h1 class="text-3xl sm:text-4xl lg:text-5xl font-bold text-gray-900 mb-6 leading-tight">
                            <span class="bg-gradient-to-r from-blue-600 to-indigo-600 bg-clip-text text-transparent">
                                {"Find your next tournament"}
                            </span>
                        </h1>
                        <p class="text-lg sm:text-xl text-gray-600 mb-8 leading-relaxed max-w-3xl mx-auto">
                            {"Browse tournaments near you, manage your club's events, and trade gear with other athletes."}
                        </p>
                        <div class="flex flex-col sm:flex-row gap-4 justify-center items-center">
                            <button
                                onclick={on_browse.clone()}
                                class="w-full sm:w-auto inline-flex items-center justify-center px-8 py-4 text-lg font-semibold text-white bg-gradient-to-r from-blue-600 to-indigo-600 rounded-xl shadow-lg hover:shadow-xl transform hover:-translate-y-1 transition-all duration-200"
                            >
                                <span class="mr-2 text-xl">{"🏆"}</span>
                                {"Browse Tournaments"}
                            </button>
                            if !auth.state.is_authenticated() {
                                <button
                                    onclick={on_register}
                                    class="w-full sm:w-auto inline-flex items-center justify-center px-8 py-4 text-lg font-semibold text-blue-600 bg-white border-2 border-blue-200 rounded-xl shadow-lg hover:bg-blue-50 transform hover:-translate-y-1 transition-all duration-200"
                                >
                                    {"Create an account"}
                                </button>
                            }
                        </div>
                    </div>
                </div>
            </div>

            // Featured tournaments
            if !featured.is_empty() {
                <div class="py-12 bg-white">
                    <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                        <h2 class="text-2xl sm:text-3xl font-bold text-gray-900 mb-8 text-center">
                            {"Coming up"}
                        </h2>
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                            {for featured.iter().map(|tournament| {
                                let id = tournament.id.clone();
                                let navigator = navigator.clone();
                                html! {
                                    <div
                                        class="bg-gradient-to-br from-blue-50 to-indigo-50 rounded-2xl p-6 hover:shadow-lg transition-all duration-200 cursor-pointer"
                                        onclick={Callback::from(move |_| {
                                            navigator.push(&Route::TournamentDetails { id: id.clone() });
                                        })}
                                    >
                                        <div class="flex justify-between items-start mb-3">
                                            <h3 class="text-lg font-semibold text-gray-900">{&tournament.name}</h3>
                                            <StatusBadge status={tournament.status} />
                                        </div>
                                        <p class="text-sm text-gray-600">{&tournament.club}</p>
                                        <p class="text-sm text-gray-500 mt-1">
                                            {format!("{}, {}", tournament.location.city, tournament.location.state)}
                                        </p>
                                        <p class="text-xs text-gray-500 mt-3">
                                            {format_display_date(tournament.start_date)}
                                        </p>
                                    </div>
                                }
                            })}
                        </div>
                    </div>
                </div>
            }
        </div>
    }
}
