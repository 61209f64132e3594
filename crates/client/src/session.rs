use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use shared_types::{User, SESSION_EXPIRED_MESSAGE};

/// Where the session stands.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionPhase {
    /// Startup: the "who am I" check has not answered yet.
    Resolving,
    SignedIn(User),
    /// `notice` is set when the sign-out was forced (session expiry).
    SignedOut { notice: Option<String> },
}

/// Holds at most one authenticated user.
///
/// Mutated only by resolve, login, logout and 401-forced expiry; the last
/// mutation wins.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    phase: SessionPhase,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            phase: SessionPhase::Resolving,
        }
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    /// Apply the startup "who am I" answer. Ignored once resolved, so a slow
    /// check cannot overwrite a login that happened meanwhile.
    pub fn resolve(&mut self, user: Option<User>) {
        if self.phase != SessionPhase::Resolving {
            return;
        }
        self.phase = match user {
            Some(user) => SessionPhase::SignedIn(user),
            None => SessionPhase::SignedOut { notice: None },
        };
    }

    pub fn sign_in(&mut self, user: User) {
        tracing::info!(user_id = user.id, "session started");
        self.phase = SessionPhase::SignedIn(user);
    }

    pub fn sign_out(&mut self) {
        self.phase = SessionPhase::SignedOut { notice: None };
    }

    /// Forced logout after a 401.
    pub fn expire(&mut self) {
        if matches!(self.phase, SessionPhase::SignedIn(_)) {
            tracing::warn!("session expired, signing out");
        }
        self.phase = SessionPhase::SignedOut {
            notice: Some(SESSION_EXPIRED_MESSAGE.to_string()),
        };
    }

    pub fn user(&self) -> Option<&User> {
        match &self.phase {
            SessionPhase::SignedIn(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user().is_some()
    }

    pub fn is_resolving(&self) -> bool {
        self.phase == SessionPhase::Resolving
    }

    pub fn notice(&self) -> Option<&str> {
        match &self.phase {
            SessionPhase::SignedOut { notice } => notice.as_deref(),
            _ => None,
        }
    }
}

/// Shared mutable cell that async loaders write into.
///
/// Implemented for Dioxus signals (the app) and `Rc<RefCell<_>>` (tests).
pub trait Store<T> {
    fn update(&self, f: impl FnOnce(&mut T));
}

impl<T: 'static> Store<T> for Signal<T> {
    fn update(&self, f: impl FnOnce(&mut T)) {
        let mut signal = *self;
        f(&mut signal.write());
    }
}

impl<T> Store<T> for Rc<RefCell<T>> {
    fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.borrow_mut());
    }
}
