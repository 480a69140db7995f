use crate::auth::AuthContext;
use crate::Route;
use shared::{RegisterRequest, UserRole};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::events::SubmitEvent;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Register)]
pub fn register() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let role = use_state(|| UserRole::Athlete);
    let club_name = use_state(String::new);
    let error = use_state(String::new);
    let loading = use_state(|| false);

    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let navigator = use_navigator().unwrap();

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let role = role.clone();
        let club_name = club_name.clone();
        let error = error.clone();
        let loading = loading.clone();
        let auth = auth.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if name.is_empty() || email.is_empty() || password.is_empty() {
                error.set("Please fill in all required fields".to_string());
                return;
            }
            if *role == UserRole::Club && club_name.is_empty() {
                error.set("Club accounts need a club name".to_string());
                return;
            }

            loading.set(true);
            error.set(String::new());
            auth.register.emit(RegisterRequest {
                name: name.to_string(),
                email: email.to_string(),
                password: password.to_string(),
                role: *role,
                club_name: if club_name.is_empty() {
                    None
                } else {
                    Some(club_name.to_string())
                },
            });
        })
    };

    let text_setter = |state: UseStateHandle<String>| {
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    let on_role_change = {
        let role = role.clone();
        Callback::from(move |e: Event| {
            let input: HtmlSelectElement = e.target_unchecked_into();
            role.set(match input.value().as_str() {
                "club" => UserRole::Club,
                _ => UserRole::Athlete,
            });
        })
    };

    {
        let loading = loading.clone();
        let error = error.clone();
        let auth_state = auth.state.clone();
        use_effect_with(auth_state, move |state| {
            loading.set(state.loading);
            if let Some(err) = &state.error {
                error.set(err.clone());
            }
            || ()
        });
    }

    {
        let auth_state = auth.state.clone();
        let navigator = navigator.clone();
        use_effect_with(auth_state.user.clone(), move |user| {
            if user.is_some() {
                navigator.push(&Route::Tournaments);
            }
            || ()
        });
    }

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-gray-900">
                        {"Create your account"}
                    </h2>
                    <p class="mt-2 text-center text-sm text-gray-600">
                        {"Already registered? "}
                        <Link<Route> to={Route::Login} classes="font-medium text-indigo-600 hover:text-indigo-500">
                            {"Sign in"}
                        </Link<Route>>
                    </p>
                </div>
                <form class="mt-8 space-y-4" onsubmit={onsubmit}>
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">{"Name"}</label>
                        <input
                            type="text"
                            required=true
                            class="w-full px-3 py-2 border border-gray-300 rounded-md focus:ring-indigo-500 focus:border-indigo-500 sm:text-sm"
                            placeholder="Your name"
                            onchange={text_setter(name.clone())}
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">{"Email address"}</label>
                        <input
                            type="email"
                            required=true
                            class="w-full px-3 py-2 border border-gray-300 rounded-md focus:ring-indigo-500 focus:border-indigo-500 sm:text-sm"
                            placeholder="you@example.com"
                            onchange={text_setter(email.clone())}
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">{"Password"}</label>
                        <input
                            type="password"
                            required=true
                            class="w-full px-3 py-2 border border-gray-300 rounded-md focus:ring-indigo-500 focus:border-indigo-500 sm:text-sm"
                            placeholder="At least 8 characters"
                            onchange={text_setter(password.clone())}
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">{"Account type"}</label>
                        <select
                            onchange={on_role_change}
                            class="w-full px-3 py-2 border border-gray-300 rounded-md focus:ring-indigo-500 focus:border-indigo-500 sm:text-sm"
                        >
                            <option value="athlete" selected={*role == UserRole::Athlete}>{"Athlete"}</option>
                            <option value="club" selected={*role == UserRole::Club}>{"Club"}</option>
                        </select>
                    </div>
                    if *role == UserRole::Club {
                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-1">{"Club name"}</label>
                            <input
                                type="text"
                                class="w-full px-3 py-2 border border-gray-300 rounded-md focus:ring-indigo-500 focus:border-indigo-500 sm:text-sm"
                                placeholder="Your club's display name"
                                onchange={text_setter(club_name.clone())}
                            />
                        </div>
                    }

                    if !error.is_empty() {
                        <div class="text-red-500 text-sm text-center">
                            {error.to_string()}
                        </div>
                    }

                    <div>
                        <button
                            type="submit"
                            disabled={*loading}
                            class="group relative w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-white bg-indigo-600 hover:bg-indigo-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-indigo-500 disabled:opacity-50"
                        >
                            if *loading {
                                {"Creating account..."}
                            } else {
                                {"Register"}
                            }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
