use crate::services::auth;
use log::error;
use shared::{LoginRequest, RegisterRequest, User, UserRole};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::functional::use_reducer_eq;
use yew::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
    pub error: Option<String>,
}

impl PartialEq for AuthState {
    fn eq(&self, other: &Self) -> bool {
        self.loading == other.loading
            && self.error == other.error
            && match (&self.user, &other.user) {
                (Some(a), Some(b)) => a.id == b.id,
                (None, None) => true,
                _ => false,
            }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Whether the current account manages a club (can create tournaments).
    pub fn is_club(&self) -> bool {
        self.user
            .as_ref()
            .map(|u| u.role == UserRole::Club)
            .unwrap_or(false)
    }
}

#[derive(Clone, Debug)]
pub enum AuthAction {
    Pending,
    SignedIn(User),
    Failed(String),
    SignedOut,
}

impl Reducible for AuthState {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AuthAction::Pending => Rc::new(Self {
                loading: true,
                error: None,
                ..(*self).clone()
            }),
            AuthAction::SignedIn(user) => Rc::new(Self {
                user: Some(user),
                loading: false,
                error: None,
            }),
            AuthAction::Failed(error) => Rc::new(Self {
                user: None,
                loading: false,
                error: Some(error),
            }),
            AuthAction::SignedOut => Rc::new(Self::default()),
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct AuthProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[derive(Clone, PartialEq)]
pub struct AuthContext {
    pub state: AuthState,
    pub login: Callback<LoginRequest>,
    pub register: Callback<RegisterRequest>,
    pub logout: Callback<()>,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    // Restore the signed-in user from local storage, if any.
    let user = auth::restore_session();
    let state = use_reducer_eq(move || AuthState {
        user,
        ..Default::default()
    });

    let login = {
        let state = state.clone();
        Callback::from(move |request: LoginRequest| {
            let state = state.clone();
            spawn_local(async move {
                state.dispatch(AuthAction::Pending);
                match auth::login(request).await {
                    Ok(user) => state.dispatch(AuthAction::SignedIn(user)),
                    Err(e) => state.dispatch(AuthAction::Failed(e)),
                }
            });
        })
    };

    let register = {
        let state = state.clone();
        Callback::from(move |request: RegisterRequest| {
            let state = state.clone();
            spawn_local(async move {
                state.dispatch(AuthAction::Pending);
                match auth::register(request).await {
                    Ok(user) => state.dispatch(AuthAction::SignedIn(user)),
                    Err(e) => state.dispatch(AuthAction::Failed(e)),
                }
            });
        })
    };

    let logout = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            let state = state.clone();
            spawn_local(async move {
                state.dispatch(AuthAction::Pending);
                match auth::logout().await {
                    Ok(()) => state.dispatch(AuthAction::SignedOut),
                    Err(e) => {
                        error!("Logout failed: {e}");
                        state.dispatch(AuthAction::Failed(e));
                    }
                }
            });
        })
    };

    let context = AuthContext {
        state: (*state).clone(),
        login,
        register,
        logout,
    };

    html! {
        <ContextProvider<AuthContext> context={context}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}
