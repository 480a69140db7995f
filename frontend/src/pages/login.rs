use crate::auth::AuthContext;
use crate::Route;
use log::debug;
use shared::LoginRequest;
use web_sys::HtmlInputElement;
use yew::events::SubmitEvent;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Login)]
pub fn login() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(String::new);
    let loading = use_state(|| false);

    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let navigator = use_navigator().unwrap();

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let loading = loading.clone();
        let auth = auth.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let email = email.to_string();
            let password = password.to_string();

            if email.is_empty() || password.is_empty() {
                error.set("Please enter both email and password".to_string());
                return;
            }

            loading.set(true);
            error.set(String::new());
            auth.login.emit(LoginRequest { email, password });
        })
    };

    let onemailchange = {
        let email = email.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onpasswordchange = {
        let password = password.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    // Mirror auth state into the local loading/error banner
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

    // Redirect once signed in
    {
        let auth_state = auth.state.clone();
        let navigator = navigator.clone();
        use_effect_with(auth_state.user.clone(), move |user| {
            if user.is_some() {
                debug!("Login successful, redirecting to tournaments");
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
                        {"Sign in to your account"}
                    </h2>
                    <p class="mt-2 text-center text-sm text-gray-600">
                        {"No account yet? "}
                        <Link<Route> to={Route::Register} classes="font-medium text-indigo-600 hover:text-indigo-500">
                            {"Register here"}
                        </Link<Route>>
                    </p>
                </div>
                <form class="mt-8 space-y-6" onsubmit={onsubmit}>
                    <div class="rounded-md shadow-sm -space-y-px">
                        <div>
                            <label for="email" class="sr-only">{"Email address"}</label>
                            <input
                                id="email"
                                name="email"
                                type="email"
                                required=true
                                class="appearance-none rounded-none relative block w-full px-3 py-2 border border-gray-300 placeholder-gray-500 text-gray-900 rounded-t-md focus:outline-none focus:ring-indigo-500 focus:border-indigo-500 focus:z-10 sm:text-sm"
                                placeholder="Email address"
                                onchange={onemailchange}
                            />
                        </div>
                        <div>
                            <label for="password" class="sr-only">{"Password"}</label>
                            <input
                                id="password"
                                name="password"
                                type="password"
                                required=true
                                class="appearance-none rounded-none relative block w-full px-3 py-2 border border-gray-300 placeholder-gray-500 text-gray-900 rounded-b-md focus:outline-none focus:ring-indigo-500 focus:border-indigo-500 focus:z-10 sm:text-sm"
                                placeholder="Password"
                                onchange={onpasswordchange}
                            />
                        </div>
                    </div>

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
                                {"Signing in..."}
                            } else {
                                {"Sign in"}
                            }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
