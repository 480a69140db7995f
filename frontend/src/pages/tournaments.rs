use crate::auth::AuthContext;
use crate::components::status_badge::StatusBadge;
use crate::storage::{self, LocalTournamentStore};
use crate::Route;
use shared::dates::format_display_date;
use shared::{
    city_facets, filter_tournaments, state_facets, FilterCriteria, Tournament, TournamentStatus,
    TournamentStore,
};
use std::str::FromStr;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TournamentsProps {}

#[function_component(Tournaments)]
pub fn tournaments(_props: &TournamentsProps) -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let navigator = use_navigator().unwrap();

    let records = use_state(Vec::<Tournament>::new);
    let error = use_state(|| None::<String>);
    // Active criteria used for the listing
    let criteria = use_state(FilterCriteria::default);
    // Draft criteria edited in the controls before applying
    let draft = use_state(FilterCriteria::default);
    let show_filters = use_state(|| false);

    let reload = {
        let records = records.clone();
        let error = error.clone();
        Callback::from(move |_: ()| {
            match LocalTournamentStore.list() {
                Ok(items) => {
                    records.set(items);
                    error.set(None);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        })
    };

    // Initial load
    {
        let reload = reload.clone();
        use_effect_with((), move |_| {
            reload.emit(());
        });
    }

    // Another tab wrote the store: refresh the derived listing state.
    {
        let reload = reload.clone();
        use_effect_with((), move |_| {
            let listener = storage::on_storage_change(move || reload.emit(()));
            move || drop(listener)
        });
    }

    let state_options = state_facets(&records);
    let city_options = city_facets(&records, &draft.state);
    let filtered = filter_tournaments((*records).clone(), &criteria, None);
    let active_filter_count = criteria.active_count();

    let on_search_change = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.search = input.value();
            draft.set(next);
        })
    };

    let on_state_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            // Changing state always clears the selected city.
            next.set_state(input.value());
            draft.set(next);
        })
    };

    let on_city_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.city = input.value();
            draft.set(next);
        })
    };

    let on_status_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.status = TournamentStatus::from_str(&input.value()).ok();
            draft.set(next);
        })
    };

    let apply_filters = {
        let draft = draft.clone();
        let criteria = criteria.clone();
        Callback::from(move |_| {
            criteria.set((*draft).clone());
        })
    };

    let clear_filters = {
        let draft = draft.clone();
        let criteria = criteria.clone();
        Callback::from(move |_| {
            draft.set(FilterCriteria::default());
            criteria.set(FilterCriteria::default());
        })
    };

    let toggle_filters = {
        let show_filters = show_filters.clone();
        Callback::from(move |_| {
            show_filters.set(!*show_filters);
        })
    };

    let on_create = {
        let navigator = navigator.clone();
        Callback::from(move |_| {
            navigator.push(&Route::TournamentCreate);
        })
    };

    html! {
        <div class="min-h-screen bg-gray-50">
            <header class="p-4 sticky top-16 z-40 bg-white shadow-sm">
                <div class="container mx-auto flex justify-between items-center flex-wrap gap-3">
                    <h1 class="text-xl font-medium">{"Tournaments"}</h1>
                    if auth.state.is_club() {
                        <button
                            onclick={on_create.clone()}
                            class="inline-flex items-center justify-center px-6 py-3 text-base font-semibold text-white bg-blue-600 rounded-lg shadow-md hover:bg-blue-700"
                        >
                            <span class="mr-2">{"➕"}</span>
                            {"Create Tournament"}
                        </button>
                    }
                </div>
            </header>

            <main class="container mx-auto px-4 py-6">
                // Search bar and filter controls
                <div class="bg-white rounded-lg shadow-sm p-4 mb-6">
                    <div class="flex flex-col md:flex-row gap-4">
                        <div class="flex-1">
                            <input
                                type="text"
                                placeholder="Search by name, club, city or state..."
                                value={draft.search.clone()}
                                oninput={on_search_change}
                                class="w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent"
                            />
                        </div>
                        <div class="flex gap-2">
                            <button
                                onclick={toggle_filters}
                                class="px-4 py-2 border border-gray-300 rounded-lg hover:bg-gray-50 flex items-center gap-2 relative"
                            >
                                <span>{"Filters"}</span>
                                <span class="text-sm">{"▼"}</span>
                                {if active_filter_count > 0 {
                                    html! { <span class="absolute -top-2 -right-2 inline-flex items-center justify-center rounded-full bg-blue-600 text-white text-xs w-5 h-5">{active_filter_count}</span> }
                                } else { html! {} }}
                            </button>
                            <button
                                onclick={apply_filters.reform(|_| ())}
                                class="px-6 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700"
                            >
                                {"Search"}
                            </button>
                            <button
                                onclick={clear_filters.reform(|_| ())}
                                class="px-4 py-2 border border-gray-300 rounded-lg hover:bg-gray-50"
                            >
                                {"Clear"}
                            </button>
                        </div>
                    </div>

                    if *show_filters {
                        <div class="mt-4 pt-4 border-t border-gray-200">
                            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                                <div>
                                    <label class="block text-sm font-medium text-gray-700 mb-1">{"State"}</label>
                                    <select
                                        value={draft.state.clone()}
                                        onchange={on_state_change}
                                        class="w-full px-3 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500"
                                    >
                                        <option value="" selected={draft.state.is_empty()}>{"All states"}</option>
                                        {for state_options.iter().map(|facet| html! {
                                            <option value={facet.value.clone()} selected={draft.state == facet.value}>
                                                {format!("{} ({})", facet.value, facet.count)}
                                            </option>
                                        })}
                                    </select>
                                </div>
                                <div>
                                    <label class="block text-sm font-medium text-gray-700 mb-1">{"City"}</label>
                                    <select
                                        value={draft.city.clone()}
                                        onchange={on_city_change}
                                        class="w-full px-3 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500"
                                    >
                                        <option value="" selected={draft.city.is_empty()}>{"All cities"}</option>
                                        {for city_options.iter().map(|facet| html! {
                                            <option value={facet.value.clone()} selected={draft.city == facet.value}>
                                                {format!("{} ({})", facet.value, facet.count)}
                                            </option>
                                        })}
                                    </select>
                                </div>
                                <div>
                                    <label class="block text-sm font-medium text-gray-700 mb-1">{"Status"}</label>
                                    <select
                                        onchange={on_status_change}
                                        class="w-full px-3 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500"
                                    >
                                        <option value="" selected={draft.status.is_none()}>{"Any status"}</option>
                                        {for TournamentStatus::all().iter().map(|status| html! {
                                            <option value={status.as_str()} selected={draft.status == Some(*status)}>
                                                {status.label()}
                                            </option>
                                        })}
                                    </select>
                                </div>
                            </div>
                        </div>
                    }
                </div>

                // Results
                if let Some(error) = &*error {
                    <div class="bg-red-50 border border-red-200 rounded-lg p-4 mb-6">
                        <div class="flex">
                            <div class="text-red-400">{"⚠️"}</div>
                            <div class="ml-3">
                                <h3 class="text-sm font-medium text-red-800">{"Stored data could not be read"}</h3>
                                <div class="mt-1 text-sm text-red-700">{error}</div>
                            </div>
                        </div>
                    </div>
                } else if filtered.is_empty() {
                    <div class="bg-white rounded-lg shadow-sm p-12 text-center">
                        <div class="text-6xl mb-4">{"🏆"}</div>
                        <h2 class="text-2xl font-bold text-gray-900 mb-4">{"No Tournaments Found"}</h2>
                        <p class="text-gray-600 mb-6">
                            {"No tournaments match your filters. Try adjusting the criteria."}
                        </p>
                    </div>
                } else {
                    <div class="bg-white rounded-lg shadow-sm overflow-hidden">
                        <div class="overflow-x-auto">
                            <table class="min-w-full divide-y divide-gray-200">
                                <thead class="bg-gray-50">
                                    <tr>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Name"}</th>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Club"}</th>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Location"}</th>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Dates"}</th>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Status"}</th>
                                        <th class="px-6 py-3 text-right text-xs font-medium text-gray-500 uppercase tracking-wider">{"Participants"}</th>
                                    </tr>
                                </thead>
                                <tbody class="bg-white divide-y divide-gray-200">
                                    {for filtered.iter().map(|tournament| {
                                        let id = tournament.id.clone();
                                        let navigator = navigator.clone();
                                        html! {
                                            <tr
                                                class="hover:bg-gray-50 cursor-pointer"
                                                onclick={Callback::from(move |_| {
                                                    navigator.push(&Route::TournamentDetails { id: id.clone() });
                                                })}
                                            >
                                                <td class="px-6 py-4 whitespace-nowrap">
                                                    <div class="text-sm font-medium text-gray-900">{&tournament.name}</div>
                                                </td>
                                                <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{&tournament.club}</td>
                                                <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">
                                                    {format!("{}, {}", tournament.location.city, tournament.location.state)}
                                                </td>
                                                <td class="px-6 py-4 whitespace-nowrap text-xs text-gray-600">
                                                    {if tournament.start_date == tournament.end_date {
                                                        format_display_date(tournament.start_date)
                                                    } else {
                                                        format!(
                                                            "{} – {}",
                                                            format_display_date(tournament.start_date),
                                                            format_display_date(tournament.end_date)
                                                        )
                                                    }}
                                                </td>
                                                <td class="px-6 py-4 whitespace-nowrap">
                                                    <StatusBadge status={tournament.status} />
                                                </td>
                                                <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500 text-right">
                                                    {tournament.participants_count}
                                                </td>
                                            </tr>
                                        }
                                    })}
                                </tbody>
                            </table>
                        </div>
                    </div>
                }
            </main>
        </div>
    }
}
