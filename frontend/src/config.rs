//! Storage keys and app-wide constants.
//!
//! All persistence is browser local storage; the key names below are the
//! whole "schema". Collections are read and written wholesale under a single
//! key each.

/// Tournament collection (JSON array of `shared::Tournament`).
pub const TOURNAMENTS_KEY: &str = "matchpoint.tournaments";

/// Registered users (JSON array of `shared::User`).
pub const USERS_KEY: &str = "matchpoint.users";

/// Active session (`shared::Session`), absent when signed out.
pub const SESSION_KEY: &str = "matchpoint.session";

/// Signed-in user snapshot, kept alongside the session so the nav can render
/// without re-reading the user collection.
pub const CURRENT_USER_KEY: &str = "matchpoint.current_user";

/// Marketplace listings (JSON array of `shared::MarketListing`).
pub const LISTINGS_KEY: &str = "matchpoint.listings";

/// Conversations (JSON array of `shared::Conversation`).
pub const CONVERSATIONS_KEY: &str = "matchpoint.conversations";

/// Draft state of the tournament-creation wizard.
pub const WIZARD_DRAFT_KEY: &str = "matchpoint.tournament_draft";

/// Fixed fake latency of the mock auth calls, in milliseconds. Not
/// cancellable and never retried.
pub const MOCK_AUTH_LATENCY_MS: u32 = 450;

/// Maximum rows shown on the featured strip of the home page.
pub const FEATURED_LIMIT: usize = 4;
