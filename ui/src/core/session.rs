//! Session probe and streak fetch state.
//!
//! Every failure is folded quietly: a failed probe means anonymous, a failed
//! streak fetch keeps the previous count.

use api::{ApiError, NavbarApi, User};
use dioxus::logger::tracing::{debug, warn};

use super::streak::Streak;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionPhase {
    #[default]
    Probing,
    Authenticated(User),
    Anonymous,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    phase: SessionPhase,
    streak: Streak,
    // id the streak was last requested for
    fetched_for: Option<String>,
}

impl SessionState {
    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    pub fn user(&self) -> Option<&User> {
        match &self.phase {
            SessionPhase::Authenticated(user) => Some(user),
            SessionPhase::Probing | SessionPhase::Anonymous => None,
        }
    }

    /// Id of the signed-in user. A blank `_id` counts as no identity.
    pub fn user_id(&self) -> Option<&str> {
        self.user()
            .map(|u| u.id.as_str())
            .filter(|id| !id.is_empty())
    }

    pub fn streak(&self) -> Streak {
        self.streak
    }

    pub fn apply_probe(&mut self, user: Option<User>) {
        match user {
            Some(user) => self.phase = SessionPhase::Authenticated(user),
            None => {
                self.phase = SessionPhase::Anonymous;
                self.fetched_for = None;
            }
        }
    }

    /// Id to request a streak for, if the current user has not been fetched yet.
    pub fn streak_target(&self) -> Option<&str> {
        let id = self.user_id()?;
        (self.fetched_for.as_deref() != Some(id)).then_some(id)
    }

    /// Claim the pending fetch. Returns the id exactly once per identity change.
    pub fn begin_streak_fetch(&mut self) -> Option<String> {
        let id = self.streak_target()?.to_owned();
        self.fetched_for = Some(id.clone());
        Some(id)
    }

    pub fn apply_streak(&mut self, user_id: &str, result: Result<u32, ApiError>) {
        if self.user_id() != Some(user_id) {
            debug!(user_id, "dropping streak for a user no longer signed in");
            return;
        }
        match result {
            Ok(count) => {
                debug!(user_id, count, "streak loaded");
                self.streak = Streak(count);
            }
            Err(err) => warn!(user_id, %err, "streak fetch failed; keeping previous value"),
        }
    }
}

/// Ask the backend whether a session exists. Never fails.
pub async fn probe_session<A: NavbarApi>(api: &A) -> Option<User> {
    match api.check_auth().await {
        Ok(Some(user)) => {
            debug!(user_id = %user.id, "session probe: authenticated");
            Some(user)
        }
        Ok(None) => {
            debug!("session probe: response carried no user");
            None
        }
        Err(err) => {
            debug!(%err, "session probe: anonymous");
            None
        }
    }
}
