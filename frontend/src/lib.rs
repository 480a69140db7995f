use crate::auth::{AuthContext, AuthProvider};
use crate::components::footer::Footer;
use crate::components::nav::Nav;
use log::{debug, info};
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod auth;
pub mod components;
pub mod config;
pub mod services;
pub mod storage;
pub mod pages {
    pub mod dashboard;
    pub mod home;
    pub mod login;
    pub mod marketplace;
    pub mod messages;
    pub mod not_found;
    pub mod register;
    pub mod tournament_create;
    pub mod tournament_details;
    pub mod tournaments;
}

use pages::{
    dashboard::Dashboard, home::Home, login::Login, marketplace::Marketplace, messages::Messages,
    not_found::NotFound, register::Register, tournament_create::TournamentCreate,
    tournament_details::TournamentDetails, tournaments::Tournaments,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/tournaments")]
    Tournaments,
    #[at("/tournaments/new")]
    TournamentCreate,
    #[at("/tournament/:id")]
    TournamentDetails { id: String },
    #[at("/dashboard")]
    Dashboard,
    #[at("/marketplace")]
    Marketplace,
    #[at("/messages")]
    Messages,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    html! {
        <AuthProvider>
            <BrowserRouter>
                <div class="app-container min-h-screen flex flex-col">
                    <Nav />
                    <main class="flex-1">
                        <Switch<Route> render={switch} />
                    </main>
                    <Footer />
                </div>
            </BrowserRouter>
        </AuthProvider>
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
}

#[function_component(ProtectedRoute)]
pub fn protected_route(props: &Props) -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let navigator = use_navigator().unwrap();
    let is_authenticated = auth.state.is_authenticated();

    {
        let navigator = navigator.clone();
        use_effect_with(is_authenticated, move |is_auth| {
            if !*is_auth {
                navigator.push(&Route::Login);
            }
            || ()
        });
    }

    if is_authenticated {
        html! { <>{props.children.clone()}</> }
    } else {
        html! {}
    }
}

fn switch(routes: Route) -> Html {
    debug!("Route switch: {:?}", routes);
    match routes {
        Route::Home => html! { <Home /> },
        Route::Login => html! { <Login /> },
        Route::Register => html! { <Register /> },
        Route::Tournaments => html! { <Tournaments /> },
        Route::TournamentDetails { id } => html! { <TournamentDetails id={id} /> },
        Route::TournamentCreate => html! {
            <ProtectedRoute>
                <TournamentCreate />
            </ProtectedRoute>
        },
        Route::Dashboard => html! {
            <ProtectedRoute>
                <Dashboard />
            </ProtectedRoute>
        },
        Route::Marketplace => html! { <Marketplace /> },
        Route::Messages => html! {
            <ProtectedRoute>
                <Messages />
            </ProtectedRoute>
        },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[wasm_bindgen]
pub fn run_app() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    console_error_panic_hook::set_once();
    info!("Initializing application");

    // First-run demo data so the listings are not empty.
    storage::ensure_seed_data();

    yew::Renderer::<App>::new().render();
    info!("Application mounted");
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    run_app()
}
