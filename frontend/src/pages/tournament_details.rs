use crate::auth::AuthContext;
use crate::components::status_badge::StatusBadge;
use crate::storage::{self, LocalTournamentStore};
use crate::Route;
use shared::dates::format_display_date;
use shared::{Tournament, TournamentStore};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TournamentDetailsProps {
    pub id: String,
}

#[function_component(TournamentDetails)]
pub fn tournament_details(props: &TournamentDetailsProps) -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let navigator = use_navigator().unwrap();
    let tournament = use_state(|| Option::<Tournament>::None);
    let error = use_state(|| Option::<String>::None);

    {
        let tournament = tournament.clone();
        let error = error.clone();
        use_effect_with(props.id.clone(), move |id| {
            match LocalTournamentStore.get(id) {
                Ok(Some(found)) => tournament.set(Some(found)),
                Ok(None) => error.set(Some("Tournament not found".to_string())),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    }

    let on_back = {
        let navigator = navigator.clone();
        Callback::from(move |_| {
            navigator.push(&Route::Tournaments);
        })
    };

    let on_message_club = {
        let navigator = navigator.clone();
        let error = error.clone();
        let current_user = auth.state.user.clone();
        let created_by = tournament.as_ref().map(|t| t.created_by.clone());
        Callback::from(move |_| {
            let Some(user) = current_user.as_ref() else {
                navigator.push(&Route::Login);
                return;
            };
            let Some(created_by) = created_by.as_ref() else {
                return;
            };
            match storage::find_or_create_conversation(&user.id, created_by) {
                Ok(_) => navigator.push(&Route::Messages),
                Err(e) => error.set(Some(e.to_string())),
            }
        })
    };

    html! {
        <div class="tournament-details-page min-h-screen bg-gradient-to-br from-blue-50 via-white to-indigo-50 py-8">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 max-w-4xl">
                <button
                    onclick={on_back}
                    class="mb-6 inline-flex items-center text-sm font-medium text-blue-600 hover:text-blue-800"
                >
                    {"← Back to tournaments"}
                </button>

                if let Some(error) = (*error).as_ref() {
                    <div class="bg-red-50 border border-red-200 rounded-xl p-6 text-center">
                        <p class="text-red-600 font-medium">{error}</p>
                    </div>
                } else if let Some(tournament) = (*tournament).as_ref() {
                    <div class="bg-white rounded-2xl shadow-xl overflow-hidden">
                        <div class="bg-gradient-to-r from-blue-600 to-indigo-600 px-6 sm:px-8 py-8 text-white">
                            <div class="flex flex-col sm:flex-row sm:items-start sm:justify-between gap-4">
                                <div>
                                    <h1 class="text-2xl sm:text-3xl font-bold">{&tournament.name}</h1>
                                    <p class="mt-1 text-blue-100">{&tournament.club}</p>
                                </div>
                                <StatusBadge status={tournament.status} />
                            </div>
                        </div>

                        <div class="p-6 sm:p-8">
                            <dl class="grid grid-cols-1 sm:grid-cols-2 gap-6 mb-8">
                                <div>
                                    <dt class="text-sm font-medium text-gray-500">{"Location"}</dt>
                                    <dd class="mt-1 text-lg text-gray-900">
                                        {format!("{}, {}", tournament.location.city, tournament.location.state)}
                                    </dd>
                                </div>
                                <div>
                                    <dt class="text-sm font-medium text-gray-500">{"Dates"}</dt>
                                    <dd class="mt-1 text-lg text-gray-900">
                                        {format!(
                                            "{} – {}",
                                            format_display_date(tournament.start_date),
                                            format_display_date(tournament.end_date)
                                        )}
                                    </dd>
                                </div>
                                <div>
                                    <dt class="text-sm font-medium text-gray-500">{"Participants"}</dt>
                                    <dd class="mt-1 text-lg text-gray-900">
                                        {tournament.participants_count}{" teams"}
                                    </dd>
                                </div>
                                <div>
                                    <dt class="text-sm font-medium text-gray-500">{"Status"}</dt>
                                    <dd class="mt-1 text-lg text-gray-900">{tournament.status.label()}</dd>
                                </div>
                            </dl>

                            if !tournament.schedule.is_empty() {
                                <div class="mb-8">
                                    <h2 class="text-xl font-semibold text-gray-900 mb-4">{"Schedule"}</h2>
                                    <div class="overflow-x-auto rounded-xl border border-gray-200">
                                        <table class="min-w-full divide-y divide-gray-200">
                                            <thead class="bg-gray-50">
                                                <tr>
                                                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Day"}</th>
                                                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Date"}</th>
                                                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"First match"}</th>
                                                </tr>
                                            </thead>
                                            <tbody class="bg-white divide-y divide-gray-200">
                                                {for tournament.schedule.iter().map(|day| html! {
                                                    <tr>
                                                        <td class="px-6 py-4 text-sm font-medium text-gray-900">{&day.label}</td>
                                                        <td class="px-6 py-4 text-sm text-gray-600">{format_display_date(day.date)}</td>
                                                        <td class="px-6 py-4 text-sm text-gray-600">{day.start_time.format("%H:%M").to_string()}</td>
                                                    </tr>
                                                })}
                                            </tbody>
                                        </table>
                                    </div>
                                </div>
                            }

                            if auth.state.user.as_ref().map(|u| u.id.as_str())
                                != Some(tournament.created_by.as_str())
                            {
                                <button
                                    onclick={on_message_club}
                                    class="inline-flex items-center px-6 py-3 text-sm font-semibold text-white bg-gradient-to-r from-blue-600 to-indigo-600 rounded-xl shadow-lg hover:shadow-xl transition-all duration-200"
                                >
                                    <span class="mr-2">{"💬"}</span>
                                    {"Message club"}
                                </button>
                            }
                        </div>
                    </div>
                } else {
                    <div class="flex justify-center items-center py-16">
                        <div class="animate-spin rounded-full h-10 w-10 border-b-2 border-blue-600"></div>
                    </div>
                }
            </div>
        </div>
    }
}
