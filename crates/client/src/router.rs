use shared_types::{has_capability, reachable_section, AppError, Capability, Role, SectionId, User};

use crate::session::Session;

/// What the main area shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    SignedOut,
    /// Authenticated but without dashboard access. Terminal until logout.
    AccessDenied,
    Loading(SectionId),
    Section(SectionId),
    /// Requested id is unknown or not reachable for the role.
    NotFound(String),
}

/// Session-aware view state machine.
///
/// Every activation or refresh bumps `load_ticket`; the section watching the
/// ticket runs its loader and reports back through [`ViewRouter::loaded`].
#[derive(Debug, Clone, PartialEq)]
pub struct ViewRouter {
    active: SectionId,
    view: View,
    load_ticket: u64,
    logout_pending: bool,
    /// Section from the URL the app was opened on; consumed by the next mount.
    landing: Option<String>,
}

impl Default for ViewRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewRouter {
    pub fn new() -> Self {
        Self {
            active: SectionId::Dashboard,
            view: View::SignedOut,
            load_ticket: 0,
            logout_pending: false,
            landing: None,
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn load_ticket(&self) -> u64 {
        self.load_ticket
    }

    pub fn logout_pending(&self) -> bool {
        self.logout_pending
    }

    fn begin_load(&mut self, id: SectionId) {
        self.active = id;
        self.load_ticket += 1;
        self.view = View::Loading(id);
    }

    fn not_found(&mut self, id: &str) {
        tracing::debug!(error = %AppError::unknown_section(id), "section not available");
        self.view = View::NotFound(id.to_string());
    }

    /// Section the next [`ViewRouter::mount`] enters instead of the dashboard.
    pub fn set_landing(&mut self, id: &str) {
        self.landing = Some(id.to_string());
    }

    /// Enter the router for the current session user.
    ///
    /// Starts on the landing section when one was set, else the dashboard.
    pub fn mount(&mut self, user: Option<&User>) -> &View {
        self.logout_pending = false;
        let landing = self.landing.take();
        match user {
            None => self.view = View::SignedOut,
            Some(u) if !has_capability(u.role, Capability::Dashboard) => {
                self.view = View::AccessDenied
            }
            Some(u) => match landing {
                None => self.begin_load(SectionId::Dashboard),
                Some(id) => match reachable_section(u.role, &id) {
                    Some(section) => self.begin_load(section),
                    None => self.not_found(&id),
                },
            },
        }
        &self.view
    }

    /// Switch sections. Unknown or unreachable ids land on `NotFound`.
    pub fn set_active_section(&mut self, role: Option<Role>, id: &str) -> &View {
        if matches!(self.view, View::SignedOut | View::AccessDenied) {
            return &self.view;
        }
        match reachable_section(role, id) {
            Some(section) => self.begin_load(section),
            None => self.not_found(id),
        }
        &self.view
    }

    /// Reload the active section without changing it.
    pub fn refresh(&mut self) {
        if matches!(self.view, View::Loading(_) | View::Section(_)) {
            self.begin_load(self.active);
        }
    }

    /// The active section's load settled.
    pub fn loaded(&mut self, id: SectionId) {
        if self.view == View::Loading(id) {
            self.view = View::Section(id);
        }
    }

    pub fn request_logout(&mut self) {
        if self.view != View::SignedOut {
            self.logout_pending = true;
        }
    }

    pub fn cancel_logout(&mut self) {
        self.logout_pending = false;
    }

    /// Clear the session and drop to the signed-out root, whatever the view was.
    pub fn confirm_logout(&mut self, session: &mut Session) {
        session.sign_out();
        self.logout_pending = false;
        self.view = View::SignedOut;
    }

    /// Follow the session after an external change (login, forced expiry).
    pub fn sync_session(&mut self, session: &Session) {
        match (session.user(), &self.view) {
            (None, View::SignedOut) => {}
            (None, _) => {
                self.logout_pending = false;
                self.view = View::SignedOut;
            }
            (Some(user), View::SignedOut) => {
                let user = user.clone();
                self.mount(Some(&user));
            }
            (Some(_), _) => {}
        }
    }
}
