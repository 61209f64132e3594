use client::{Session, ViewRouter};
use dioxus::prelude::*;
use shared_types::{sections_for, Role, Section, User};

/// Global session and view state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub session: Signal<Session>,
    pub router: Signal<ViewRouter>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            session: Signal::new(Session::new()),
            router: Signal::new(ViewRouter::new()),
        }
    }

    pub fn current_user(&self) -> Option<User> {
        self.session.read().user().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }

    pub fn sign_in(&mut self, user: User) {
        tracing::info!(user = %user.username, "signed in");
        self.session.write().sign_in(user);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Role of the signed-in user, if any and if recognised.
pub fn use_role() -> Option<Role> {
    let auth = use_auth();
    let role = auth.session.read().user().and_then(|u| u.role);
    role
}

/// Sections the sidebar offers for the current role.
pub fn use_sidebar_sections() -> Vec<&'static Section> {
    sections_for(use_role())
}
