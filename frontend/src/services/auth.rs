//! Mock authentication service.
//!
//! There is no server: accounts live in the local user collection and every
//! call sleeps for a fixed fake latency before resolving. Failures surface
//! as plain `String` messages for the banner, matching the rest of the
//! service layer.

use crate::config;
use crate::storage;
use chrono::Utc;
use gloo_storage::{LocalStorage, Storage};
use gloo_timers::future::TimeoutFuture;
use log::debug;
use shared::{LoginRequest, RegisterRequest, Session, User, UserRole};
use validator::Validate;

async fn simulate_latency() {
    TimeoutFuture::new(config::MOCK_AUTH_LATENCY_MS).await;
}

fn persist_session(user: &User) -> Result<(), String> {
    let session = Session {
        user_id: user.id.clone(),
        token: uuid::Uuid::new_v4().to_string(),
        created_at: Utc::now(),
    };
    LocalStorage::set(config::SESSION_KEY, &session)
        .map_err(|e| format!("Failed to store session: {e}"))?;
    LocalStorage::set(config::CURRENT_USER_KEY, user)
        .map_err(|e| format!("Failed to store user: {e}"))?;
    Ok(())
}

pub async fn register(request: RegisterRequest) -> Result<User, String> {
    debug!("Registering new user: {}", request.email);
    simulate_latency().await;

    request.validate().map_err(|e| e.to_string())?;
    if request.role == UserRole::Club && request.club_name.as_deref().unwrap_or("").is_empty() {
        return Err("Club accounts need a club name".to_string());
    }

    let mut users = storage::load_users().map_err(|e| e.to_string())?;
    if users
        .iter()
        .any(|u| u.email.eq_ignore_ascii_case(&request.email))
    {
        return Err(format!("An account already exists for {}", request.email));
    }

    let user = User {
        id: uuid::Uuid::new_v4().to_string(),
        name: request.name,
        email: request.email,
        password: request.password,
        role: request.role,
        club_name: request.club_name,
        created_at: Utc::now(),
    };
    users.push(user.clone());
    storage::save_users(&users).map_err(|e| e.to_string())?;
    persist_session(&user)?;

    debug!("Successfully registered user: {}", user.email);
    Ok(user)
}

pub async fn login(request: LoginRequest) -> Result<User, String> {
    debug!("Attempting login for user: {}", request.email);
    simulate_latency().await;

    let users = storage::load_users().map_err(|e| e.to_string())?;
    let user = users
        .into_iter()
        .find(|u| u.email.eq_ignore_ascii_case(&request.email) && u.password == request.password)
        .ok_or_else(|| "Invalid email or password".to_string())?;

    persist_session(&user)?;
    debug!("Login successful for user: {}", user.email);
    Ok(user)
}

pub async fn logout() -> Result<(), String> {
    debug!("Logging out");
    simulate_latency().await;
    LocalStorage::delete(config::SESSION_KEY);
    LocalStorage::delete(config::CURRENT_USER_KEY);
    Ok(())
}

/// The signed-in user from the previous visit, if the stored session and
/// user snapshot are both present and consistent.
pub fn restore_session() -> Option<User> {
    let session: Session = LocalStorage::get(config::SESSION_KEY).ok()?;
    let user: User = LocalStorage::get(config::CURRENT_USER_KEY).ok()?;
    if user.id == session.user_id {
        Some(user)
    } else {
        None
    }
}
