//! # Session State
//!
//! The session lifecycle as a plain value:
//!
//! ```text
//! Anonymous ──login──▶ Authenticated
//! Authenticated ──logout──▶ Anonymous
//! Anonymous ──logout──▶ Anonymous   (nothing to destroy)
//! ```
//!
//! Handlers [`load`](SessionState::load) the state from the `tower_sessions::Session`,
//! apply a transition, then [`persist`](SessionState::persist) the result. The
//! transitions themselves never touch the store.

use crate::db::models::User;
use crate::error::AppResult;
use tower_sessions::Session;

/// Key under which the authenticated user is stored in the session
pub const SESSION_USER_KEY: &str = "user";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    /// Holds the full user row as read from the store at login
    Authenticated(User),
}

/// What a logout has to do to the underlying session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoutOutcome {
    /// A user was logged in; the session must be destroyed
    Destroy,
    /// Nobody was logged in
    NoSession,
}

impl SessionState {
    /// Read the current state from the request's session
    pub async fn load(session: &Session) -> AppResult<Self> {
        let user: Option<User> = session.get(SESSION_USER_KEY).await?;

        Ok(match user {
            Some(user) => SessionState::Authenticated(user),
            None => SessionState::Anonymous,
        })
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            SessionState::Anonymous => None,
        }
    }

    /// A successful login replaces whatever user the session held
    pub fn login(self, user: User) -> Self {
        SessionState::Authenticated(user)
    }

    pub fn logout(self) -> (Self, LogoutOutcome) {
        let outcome = match self {
            SessionState::Authenticated(_) => LogoutOutcome::Destroy,
            SessionState::Anonymous => LogoutOutcome::NoSession,
        };

        (SessionState::Anonymous, outcome)
    }

    /// Write this state back to the request's session
    ///
    /// `Authenticated` stores the user; `Anonymous` destroys the session record.
    pub async fn persist(&self, session: &Session) -> AppResult<()> {
        match self {
            SessionState::Authenticated(user) => session.insert(SESSION_USER_KEY, user).await?,
            SessionState::Anonymous => session.flush().await?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tower_sessions::MemoryStore;

    fn sue() -> User {
        User {
            id: 1,
            username: "sue".into(),
            password: "$2b$04$digest".into(),
        }
    }

    #[test]
    fn login_then_logout_round_trips_to_anonymous() {
        let state = SessionState::Anonymous.login(sue());
        assert_eq!(state.user(), Some(&sue()));

        let (state, outcome) = state.logout();
        assert_eq!(state, SessionState::Anonymous);
        assert_eq!(outcome, LogoutOutcome::Destroy);
    }

    #[test]
    fn anonymous_logout_is_a_no_op() {
        let (state, outcome) = SessionState::Anonymous.logout();

        assert_eq!(state.user(), None);
        assert_eq!(outcome, LogoutOutcome::NoSession);
    }

    #[tokio::test]
    async fn persisted_state_loads_back() {
        let session = Session::new(None, Arc::new(MemoryStore::default()), None);
        assert_eq!(
            SessionState::load(&session).await.unwrap(),
            SessionState::Anonymous
        );

        SessionState::Anonymous
            .login(sue())
            .persist(&session)
            .await
            .unwrap();
        assert_eq!(
            SessionState::load(&session).await.unwrap(),
            SessionState::Authenticated(sue())
        );

        let (anonymous, _) = SessionState::load(&session).await.unwrap().logout();
        anonymous.persist(&session).await.unwrap();
        assert_eq!(
            SessionState::load(&session).await.unwrap(),
            SessionState::Anonymous
        );
    }
}
