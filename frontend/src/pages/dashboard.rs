use crate::auth::AuthContext;
use crate::components::status_badge::StatusBadge;
use crate::storage::{self, LocalTournamentStore};
use crate::Route;
use shared::dates::format_display_date;
use shared::{Tournament, TournamentStatus, TournamentStore};
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_router::prelude::*;

/// Management view for the signed-in club: its own tournaments with
/// per-status counts and delete.
#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let navigator = use_navigator().unwrap();
    let records = use_state(Vec::<Tournament>::new);
    let error = use_state(|| Option::<String>::None);

    let user_id = auth
        .state
        .user
        .as_ref()
        .map(|u| u.id.clone())
        .unwrap_or_default();

    let reload = {
        let records = records.clone();
        let error = error.clone();
        let user_id = user_id.clone();
        Callback::from(move |_: ()| match LocalTournamentStore.list() {
            Ok(items) => {
                records.set(
                    items
                        .into_iter()
                        .filter(|t| t.created_by == user_id)
                        .collect(),
                );
                error.set(None);
            }
            Err(e) => error.set(Some(e.to_string())),
        })
    };

    {
        let reload = reload.clone();
        use_effect_with(user_id.clone(), move |_| {
            reload.emit(());
        });
    }

    // Refresh when another tab writes the collection.
    {
        let reload = reload.clone();
        use_effect_with((), move |_| {
            let listener = storage::on_storage_change(move || reload.emit(()));
            move || drop(listener)
        });
    }

    let count_for = |status: TournamentStatus| records.iter().filter(|t| t.status == status).count();

    let on_create = {
        let navigator = navigator.clone();
        Callback::from(move |_| {
            navigator.push(&Route::TournamentCreate);
        })
    };

    html! {
        <div class="dashboard-page min-h-screen bg-gradient-to-br from-blue-50 via-white to-indigo-50 py-8">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 max-w-5xl">
                <div class="flex flex-col sm:flex-row sm:items-center sm:justify-between gap-4 mb-8">
                    <div>
                        <h1 class="text-2xl sm:text-3xl font-bold text-gray-900">{"Club dashboard"}</h1>
                        if let Some(user) = auth.state.user.as_ref() {
                            if let Some(club) = user.club_name.as_ref() {
                                <p class="text-gray-600 mt-1">{club}</p>
                            }
                        }
                    </div>
                    <button
                        onclick={on_create}
                        class="inline-flex items-center px-6 py-3 text-sm font-semibold text-white bg-gradient-to-r from-blue-600 to-indigo-600 rounded-xl shadow-lg hover:shadow-xl transition-all"
                    >
                        {"＋ New tournament"}
                    </button>
                </div>

                if let Some(error) = (*error).as_ref() {
                    <div class="mb-6 bg-red-50 border border-red-200 rounded-xl p-4">
                        <p class="text-sm text-red-600">{error}</p>
                    </div>
                }

                <div class="grid grid-cols-2 lg:grid-cols-4 gap-4 mb-8">
                    {for TournamentStatus::all().iter().map(|status| html! {
                        <div class="bg-white rounded-xl shadow p-5 text-center">
                            <p class="text-3xl font-bold text-gray-900">{count_for(*status)}</p>
                            <p class="text-sm text-gray-500 mt-1">{status.label()}</p>
                        </div>
                    })}
                </div>

                if records.is_empty() {
                    <div class="bg-white rounded-2xl shadow p-12 text-center">
                        <p class="text-gray-600">{"You haven't created any tournaments yet."}</p>
                    </div>
                } else {
                    <div class="bg-white rounded-2xl shadow overflow-hidden">
                        <table class="min-w-full divide-y divide-gray-200">
                            <thead class="bg-gray-50">
                                <tr>
                                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Tournament"}</th>
                                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Dates"}</th>
                                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Status"}</th>
                                    <th class="px-6 py-3 text-right text-xs font-medium text-gray-500 uppercase tracking-wider">{"Actions"}</th>
                                </tr>
                            </thead>
                            <tbody class="bg-white divide-y divide-gray-200">
                                {for records.iter().map(|tournament| {
                                    let id = tournament.id.clone();
                                    let on_status_change = {
                                        let reload = reload.clone();
                                        let error = error.clone();
                                        let tournament = tournament.clone();
                                        Callback::from(move |e: Event| {
                                            let select: HtmlSelectElement = e.target_unchecked_into();
                                            let Ok(status) = select.value().parse::<TournamentStatus>() else {
                                                return;
                                            };
                                            let mut updated = tournament.clone();
                                            updated.status = status;
                                            match LocalTournamentStore.put(&updated) {
                                                Ok(()) => reload.emit(()),
                                                Err(e) => error.set(Some(e.to_string())),
                                            }
                                        })
                                    };
                                    let on_view = {
                                        let navigator = navigator.clone();
                                        let id = id.clone();
                                        Callback::from(move |_| {
                                            navigator.push(&Route::TournamentDetails { id: id.clone() });
                                        })
                                    };
                                    let on_delete = {
                                        let reload = reload.clone();
                                        let error = error.clone();
                                        let id = id.clone();
                                        Callback::from(move |_| {
                                            match LocalTournamentStore.delete(&id) {
                                                Ok(()) => reload.emit(()),
                                                Err(e) => error.set(Some(e.to_string())),
                                            }
                                        })
                                    };
                                    html! {
                                        <tr>
                                            <td class="px-6 py-4">
                                                <p class="text-sm font-medium text-gray-900">{&tournament.name}</p>
                                                <p class="text-sm text-gray-500">
                                                    {format!("{}, {}", tournament.location.city, tournament.location.state)}
                                                </p>
                                            </td>
                                            <td class="px-6 py-4 text-sm text-gray-600">
                                                {format!(
                                                    "{} to {}",
                                                    format_display_date(tournament.start_date),
                                                    format_display_date(tournament.end_date)
                                                )}
                                            </td>
                                            <td class="px-6 py-4">
                                                <div class="flex items-center gap-2">
                                                    <StatusBadge status={tournament.status} />
                                                    <select
                                                        onchange={on_status_change}
                                                        class="text-sm border border-gray-300 rounded-lg px-2 py-1"
                                                    >
                                                        {for TournamentStatus::all().iter().map(|status| html! {
                                                            <option
                                                                value={status.as_str()}
                                                                selected={*status == tournament.status}
                                                            >
                                                                {status.label()}
                                                            </option>
                                                        })}
                                                    </select>
                                                </div>
                                            </td>
                                            <td class="px-6 py-4 text-right space-x-3">
                                                <button
                                                    onclick={on_view}
                                                    class="text-sm font-medium text-blue-600 hover:text-blue-800"
                                                >
                                                    {"View"}
                                                </button>
                                                <button
                                                    onclick={on_delete}
                                                    class="text-sm font-medium text-red-600 hover:text-red-800"
                                                >
                                                    {"Delete"}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })}
                            </tbody>
                        </table>
                    </div>
                }
            </div>
        </div>
    }
}
