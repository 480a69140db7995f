use std::rc::Rc;

use chrono::NaiveTime;
use gloo::console::log;
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};
use shared::dates::{parse_calendar_date, validate_date_range};
use shared::{derive_schedule, Location, ScheduleDay, Tournament, TournamentStatus, TournamentStore};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::AuthContext;
use crate::config;
use crate::storage::LocalTournamentStore;
use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
enum WizardStep {
    Basics,
    LocationDates,
    Schedule,
    Review,
}

impl WizardStep {
    fn title(self) -> &'static str {
        match self {
            WizardStep::Basics => "Basics",
            WizardStep::LocationDates => "Location & dates",
            WizardStep::Schedule => "Schedule",
            WizardStep::Review => "Review",
        }
    }

    fn number(self) -> usize {
        match self {
            WizardStep::Basics => 1,
            WizardStep::LocationDates => 2,
            WizardStep::Schedule => 3,
            WizardStep::Review => 4,
        }
    }
}

/// Draft form state, persisted under [`config::WIZARD_DRAFT_KEY`] so an
/// accidental navigation away does not lose a half-entered tournament.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct WizardState {
    step: WizardStep,
    name: String,
    club: String,
    participants_count: String,
    city: String,
    state: String,
    start_date: String,
    end_date: String,
    status: TournamentStatus,
    schedule: Vec<ScheduleDay>,
}

impl Default for WizardState {
    fn default() -> Self {
        WizardState {
            step: WizardStep::Basics,
            name: String::new(),
            club: String::new(),
            participants_count: String::new(),
            city: String::new(),
            state: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            status: TournamentStatus::Open,
            schedule: Vec::new(),
        }
    }
}

impl WizardState {
    /// Validation gate for leaving the current step. Returns the first
    /// problem as a user-facing message.
    fn validate_step(&self) -> Result<(), String> {
        match self.step {
            WizardStep::Basics => {
                if self.name.trim().is_empty() {
                    return Err("Tournament name is required".to_string());
                }
                if self.club.trim().is_empty() {
                    return Err("Club name is required".to_string());
                }
                self.parsed_participants().map(|_| ())
            }
            WizardStep::LocationDates => {
                if self.city.trim().is_empty() {
                    return Err("City is required".to_string());
                }
                if self.state.trim().is_empty() {
                    return Err("State is required".to_string());
                }
                let start = parse_calendar_date(&self.start_date)
                    .map_err(|_| "Start date is required".to_string())?;
                let end = parse_calendar_date(&self.end_date)
                    .map_err(|_| "End date is required".to_string())?;
                validate_date_range(start, end)
                    .map_err(|_| "End date must be on or after the start date".to_string())
            }
            WizardStep::Schedule | WizardStep::Review => Ok(()),
        }
    }

    fn parsed_participants(&self) -> Result<u32, String> {
        self.participants_count
            .trim()
            .parse::<u32>()
            .map_err(|_| "Expected participants must be a whole number".to_string())
    }

    /// Re-derives the per-day schedule when the stored one does not match the
    /// entered date range, keeping label and time edits otherwise.
    fn sync_schedule(&mut self) {
        let (Ok(start), Ok(end)) = (
            parse_calendar_date(&self.start_date),
            parse_calendar_date(&self.end_date),
        ) else {
            return;
        };
        let matches_range = !self.schedule.is_empty()
            && self.schedule.first().map(|d| d.date) == Some(start)
            && self.schedule.last().map(|d| d.date) == Some(end)
            && self.schedule.windows(2).all(|w| w[0].date < w[1].date);
        if !matches_range {
            self.schedule = derive_schedule(start, end).unwrap_or_default();
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum WizardAction {
    SetName(String),
    SetClub(String),
    SetParticipants(String),
    SetCity(String),
    SetState(String),
    SetStartDate(String),
    SetEndDate(String),
    SetStatus(TournamentStatus),
    SetScheduleLabel(usize, String),
    SetScheduleTime(usize, String),
    GoTo(WizardStep),
    Reset,
}

fn wizard_reducer(state: &mut WizardState, action: WizardAction) {
    match action {
        WizardAction::SetName(v) => state.name = v,
        WizardAction::SetClub(v) => state.club = v,
        WizardAction::SetParticipants(v) => state.participants_count = v,
        WizardAction::SetCity(v) => state.city = v,
        WizardAction::SetState(v) => state.state = v.to_ascii_uppercase(),
        WizardAction::SetStartDate(v) => state.start_date = v,
        WizardAction::SetEndDate(v) => state.end_date = v,
        WizardAction::SetStatus(v) => state.status = v,
        WizardAction::SetScheduleLabel(index, label) => {
            if let Some(day) = state.schedule.get_mut(index) {
                day.label = label;
            }
        }
        WizardAction::SetScheduleTime(index, raw) => {
            if let Some(day) = state.schedule.get_mut(index) {
                if let Ok(time) = NaiveTime::parse_from_str(&raw, "%H:%M") {
                    day.start_time = time;
                }
            }
        }
        WizardAction::GoTo(step) => {
            if step == WizardStep::Schedule {
                state.sync_schedule();
            }
            state.step = step;
        }
        WizardAction::Reset => *state = WizardState::default(),
    }
}

impl Reducible for WizardState {
    type Action = WizardAction;
    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        wizard_reducer(&mut next, action);
        Rc::new(next)
    }
}

#[function_component(TournamentCreate)]
pub fn tournament_create() -> Html {
    let navigator = use_navigator().unwrap();
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let error_message = use_state(|| None::<String>);

    let club_name = auth
        .state
        .user
        .as_ref()
        .and_then(|u| u.club_name.clone())
        .unwrap_or_default();

    let form = {
        let club_name = club_name.clone();
        use_reducer_eq(move || {
            let mut draft = LocalStorage::get::<WizardState>(config::WIZARD_DRAFT_KEY)
                .unwrap_or_default();
            if draft.club.is_empty() {
                draft.club = club_name;
            }
            draft
        })
    };

    // Persist the draft on every change.
    {
        let form = form.clone();
        use_effect_with(form, move |form| {
            let _ = LocalStorage::set(config::WIZARD_DRAFT_KEY, &**form);
            || ()
        });
    }

    let dispatch_input = {
        let form = form.clone();
        move |make: fn(String) -> WizardAction| {
            let form = form.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                form.dispatch(make(input.value()));
            })
        }
    };

    let on_next = {
        let form = form.clone();
        let error_message = error_message.clone();
        Callback::from(move |_| {
            if let Err(message) = form.validate_step() {
                error_message.set(Some(message));
                return;
            }
            error_message.set(None);
            let next = match form.step {
                WizardStep::Basics => WizardStep::LocationDates,
                WizardStep::LocationDates => WizardStep::Schedule,
                WizardStep::Schedule => WizardStep::Review,
                WizardStep::Review => WizardStep::Review,
            };
            form.dispatch(WizardAction::GoTo(next));
        })
    };

    let on_back = {
        let form = form.clone();
        let error_message = error_message.clone();
        Callback::from(move |_| {
            error_message.set(None);
            let previous = match form.step {
                WizardStep::Basics => WizardStep::Basics,
                WizardStep::LocationDates => WizardStep::Basics,
                WizardStep::Schedule => WizardStep::LocationDates,
                WizardStep::Review => WizardStep::Schedule,
            };
            form.dispatch(WizardAction::GoTo(previous));
        })
    };

    let on_submit = {
        let form = form.clone();
        let error_message = error_message.clone();
        let navigator = navigator.clone();
        let user = auth.state.user.clone();
        Callback::from(move |_| {
            let Some(user) = user.as_ref() else {
                navigator.push(&Route::Login);
                return;
            };
            let participants_count = match form.parsed_participants() {
                Ok(n) => n,
                Err(message) => {
                    error_message.set(Some(message));
                    return;
                }
            };
            let (Ok(start_date), Ok(end_date)) = (
                parse_calendar_date(&form.start_date),
                parse_calendar_date(&form.end_date),
            ) else {
                error_message.set(Some("Dates are incomplete".to_string()));
                return;
            };
            let tournament = Tournament {
                id: uuid::Uuid::new_v4().to_string(),
                name: form.name.trim().to_string(),
                club: form.club.trim().to_string(),
                location: Location {
                    city: form.city.trim().to_string(),
                    state: form.state.trim().to_string(),
                },
                start_date,
                end_date,
                status: form.status,
                participants_count,
                schedule: form.schedule.clone(),
                created_by: user.id.clone(),
                created_at: chrono::Utc::now(),
            };
            match LocalTournamentStore.put(&tournament) {
                Ok(()) => {
                    log!(format!("Created tournament {}", tournament.id));
                    LocalStorage::delete(config::WIZARD_DRAFT_KEY);
                    form.dispatch(WizardAction::Reset);
                    navigator.push(&Route::TournamentDetails { id: tournament.id });
                }
                Err(e) => error_message.set(Some(e.to_string())),
            }
        })
    };

    let step_indicator = {
        let steps = [
            WizardStep::Basics,
            WizardStep::LocationDates,
            WizardStep::Schedule,
            WizardStep::Review,
        ];
        html! {
            <div class="flex items-center justify-center gap-2 sm:gap-4 mb-8">
                {for steps.iter().map(|step| {
                    let active = *step == form.step;
                    let done = step.number() < form.step.number();
                    let circle = if active {
                        "bg-blue-600 text-white"
                    } else if done {
                        "bg-blue-100 text-blue-700"
                    } else {
                        "bg-gray-100 text-gray-400"
                    };
                    html! {
                        <div class="flex items-center gap-2">
                            <span class={classes!(
                                "w-8", "h-8", "rounded-full", "flex", "items-center",
                                "justify-center", "text-sm", "font-semibold", circle
                            )}>
                                {step.number()}
                            </span>
                            <span class={classes!(
                                "hidden", "sm:inline", "text-sm",
                                if active { "text-gray-900 font-medium" } else { "text-gray-400" }
                            )}>
                                {step.title()}
                            </span>
                        </div>
                    }
                })}
            </div>
        }
    };

    let field_class = "w-full px-4 py-3 border border-gray-300 rounded-xl focus:ring-2 focus:ring-blue-500 focus:border-transparent";
    let label_class = "block text-sm font-medium text-gray-700 mb-2";

    let step_body = match form.step {
        WizardStep::Basics => html! {
            <div class="space-y-6">
                <div>
                    <label class={label_class}>{"Tournament name"}</label>
                    <input
                        type="text"
                        class={field_class}
                        placeholder="Copa Paulista Sub-17"
                        value={form.name.clone()}
                        oninput={dispatch_input(WizardAction::SetName)}
                    />
                </div>
                <div>
                    <label class={label_class}>{"Organizing club"}</label>
                    <input
                        type="text"
                        class={field_class}
                        value={form.club.clone()}
                        oninput={dispatch_input(WizardAction::SetClub)}
                    />
                </div>
                <div>
                    <label class={label_class}>{"Expected participants"}</label>
                    <input
                        type="number"
                        min="0"
                        class={field_class}
                        placeholder="24"
                        value={form.participants_count.clone()}
                        oninput={dispatch_input(WizardAction::SetParticipants)}
                    />
                </div>
            </div>
        },
        WizardStep::LocationDates => html! {
            <div class="space-y-6">
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-6">
                    <div>
                        <label class={label_class}>{"City"}</label>
                        <input
                            type="text"
                            class={field_class}
                            placeholder="Sao Paulo"
                            value={form.city.clone()}
                            oninput={dispatch_input(WizardAction::SetCity)}
                        />
                    </div>
                    <div>
                        <label class={label_class}>{"State"}</label>
                        <input
                            type="text"
                            maxlength="2"
                            class={field_class}
                            placeholder="SP"
                            value={form.state.clone()}
                            oninput={dispatch_input(WizardAction::SetState)}
                        />
                    </div>
                </div>
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-6">
                    <div>
                        <label class={label_class}>{"Start date"}</label>
                        <input
                            type="date"
                            class={field_class}
                            value={form.start_date.clone()}
                            oninput={dispatch_input(WizardAction::SetStartDate)}
                        />
                    </div>
                    <div>
                        <label class={label_class}>{"End date"}</label>
                        <input
                            type="date"
                            class={field_class}
                            value={form.end_date.clone()}
                            oninput={dispatch_input(WizardAction::SetEndDate)}
                        />
                    </div>
                </div>
                <div>
                    <label class={label_class}>{"Registration status"}</label>
                    <select
                        class={field_class}
                        onchange={{
                            let form = form.clone();
                            Callback::from(move |e: Event| {
                                let select: HtmlSelectElement = e.target_unchecked_into();
                                if let Ok(status) = select.value().parse::<TournamentStatus>() {
                                    form.dispatch(WizardAction::SetStatus(status));
                                }
                            })
                        }}
                    >
                        {for TournamentStatus::all().iter().map(|status| html! {
                            <option value={status.as_str()} selected={*status == form.status}>
                                {status.label()}
                            </option>
                        })}
                    </select>
                </div>
            </div>
        },
        WizardStep::Schedule => html! {
            <div class="space-y-4">
                <p class="text-sm text-gray-500">
                    {"One entry per day of play. Rename the days and adjust the first-match times as needed."}
                </p>
                {for form.schedule.iter().enumerate().map(|(index, day)| {
                    let on_label = {
                        let form = form.clone();
                        Callback::from(move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            form.dispatch(WizardAction::SetScheduleLabel(index, input.value()));
                        })
                    };
                    let on_time = {
                        let form = form.clone();
                        Callback::from(move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            form.dispatch(WizardAction::SetScheduleTime(index, input.value()));
                        })
                    };
                    html! {
                        <div class="flex flex-col sm:flex-row sm:items-center gap-3 bg-gray-50 rounded-xl p-4">
                            <span class="text-sm text-gray-500 sm:w-32">
                                {shared::dates::format_display_date(day.date)}
                            </span>
                            <input
                                type="text"
                                class="flex-1 px-3 py-2 border border-gray-300 rounded-lg"
                                value={day.label.clone()}
                                oninput={on_label}
                            />
                            <input
                                type="time"
                                class="px-3 py-2 border border-gray-300 rounded-lg"
                                value={day.start_time.format("%H:%M").to_string()}
                                oninput={on_time}
                            />
                        </div>
                    }
                })}
            </div>
        },
        WizardStep::Review => html! {
            <dl class="grid grid-cols-1 sm:grid-cols-2 gap-x-8 gap-y-4">
                <div>
                    <dt class="text-sm font-medium text-gray-500">{"Name"}</dt>
                    <dd class="text-gray-900">{&form.name}</dd>
                </div>
                <div>
                    <dt class="text-sm font-medium text-gray-500">{"Club"}</dt>
                    <dd class="text-gray-900">{&form.club}</dd>
                </div>
                <div>
                    <dt class="text-sm font-medium text-gray-500">{"Location"}</dt>
                    <dd class="text-gray-900">{format!("{}, {}", form.city, form.state)}</dd>
                </div>
                <div>
                    <dt class="text-sm font-medium text-gray-500">{"Dates"}</dt>
                    <dd class="text-gray-900">{format!("{} to {}", form.start_date, form.end_date)}</dd>
                </div>
                <div>
                    <dt class="text-sm font-medium text-gray-500">{"Status"}</dt>
                    <dd class="text-gray-900">{form.status.label()}</dd>
                </div>
                <div>
                    <dt class="text-sm font-medium text-gray-500">{"Participants"}</dt>
                    <dd class="text-gray-900">{&form.participants_count}</dd>
                </div>
                <div class="sm:col-span-2">
                    <dt class="text-sm font-medium text-gray-500">{"Schedule"}</dt>
                    <dd class="text-gray-900">
                        {format!("{} day(s) of play", form.schedule.len())}
                    </dd>
                </div>
            </dl>
        },
    };

    html! {
        <div class="tournament-create-page min-h-screen bg-gradient-to-br from-blue-50 via-white to-indigo-50 py-8">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 max-w-2xl">
                <div class="bg-white rounded-2xl shadow-xl p-6 sm:p-8">
                    <h1 class="text-2xl font-bold text-gray-900 mb-6 text-center">
                        {"New tournament"}
                    </h1>
                    {step_indicator}

                    if let Some(message) = (*error_message).as_ref() {
                        <div class="mb-6 bg-red-50 border border-red-200 rounded-xl p-4">
                            <p class="text-sm text-red-600">{message}</p>
                        </div>
                    }

                    {step_body}

                    <div class="flex justify-between mt-8">
                        <button
                            onclick={on_back}
                            disabled={form.step == WizardStep::Basics}
                            class="px-6 py-3 text-sm font-medium text-gray-700 bg-gray-100 rounded-xl hover:bg-gray-200 disabled:opacity-40 transition-colors"
                        >
                            {"Back"}
                        </button>
                        if form.step == WizardStep::Review {
                            <button
                                onclick={on_submit}
                                class="px-6 py-3 text-sm font-semibold text-white bg-gradient-to-r from-blue-600 to-indigo-600 rounded-xl shadow-lg hover:shadow-xl transition-all"
                            >
                                {"Create tournament"}
                            </button>
                        } else {
                            <button
                                onclick={on_next}
                                class="px-6 py-3 text-sm font-semibold text-white bg-blue-600 rounded-xl hover:bg-blue-700 transition-colors"
                            >
                                {"Next"}
                            </button>
                        }
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled_state() -> WizardState {
        WizardState {
            step: WizardStep::LocationDates,
            name: "Copa Teste".to_string(),
            club: "EC Teste".to_string(),
            participants_count: "16".to_string(),
            city: "Santos".to_string(),
            state: "SP".to_string(),
            start_date: "2024-03-05".to_string(),
            end_date: "2024-03-07".to_string(),
            status: TournamentStatus::Open,
            schedule: Vec::new(),
        }
    }

    #[test]
    fn test_basics_step_requires_name_and_count() {
        let mut state = WizardState {
            step: WizardStep::Basics,
            ..filled_state()
        };
        assert!(state.validate_step().is_ok());
        state.name.clear();
        assert!(state.validate_step().is_err());
        state.name = "Copa".to_string();
        state.participants_count = "many".to_string();
        assert!(state.validate_step().is_err());
    }

    #[test]
    fn test_location_step_rejects_inverted_range() {
        let mut state = filled_state();
        state.start_date = "2024-03-08".to_string();
        assert!(state.validate_step().is_err());
    }

    #[test]
    fn test_entering_schedule_step_derives_days() {
        let mut state = filled_state();
        wizard_reducer(&mut state, WizardAction::GoTo(WizardStep::Schedule));
        assert_eq!(state.schedule.len(), 3);
        assert_eq!(state.schedule[0].label, "Day 1");
    }

    #[test]
    fn test_schedule_edits_survive_revisit_with_same_dates() {
        let mut state = filled_state();
        wizard_reducer(&mut state, WizardAction::GoTo(WizardStep::Schedule));
        wizard_reducer(
            &mut state,
            WizardAction::SetScheduleLabel(0, "Group stage".to_string()),
        );
        wizard_reducer(&mut state, WizardAction::GoTo(WizardStep::LocationDates));
        wizard_reducer(&mut state, WizardAction::GoTo(WizardStep::Schedule));
        assert_eq!(state.schedule[0].label, "Group stage");
    }

    #[test]
    fn test_schedule_rederived_when_dates_change() {
        let mut state = filled_state();
        wizard_reducer(&mut state, WizardAction::GoTo(WizardStep::Schedule));
        wizard_reducer(
            &mut state,
            WizardAction::SetEndDate("2024-03-06".to_string()),
        );
        wizard_reducer(&mut state, WizardAction::GoTo(WizardStep::Schedule));
        assert_eq!(state.schedule.len(), 2);
    }
}
