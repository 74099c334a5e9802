use dioxus::prelude::*;
use portal::Session;
use shared_types::{Role, User};

/// Global session state shared via context.
///
/// A thin reactive wrapper around [`Session`]; all transition rules live
/// there, this type only makes the value observable by the UI.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionState {
    pub session: Signal<Session>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            session: Signal::new(Session::new()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }

    pub fn identity(&self) -> Option<User> {
        self.session.read().identity().cloned()
    }

    pub fn sign_in(&mut self, user: User) {
        self.session.write().login(user);
    }

    pub fn sign_out(&mut self) {
        self.session.write().logout();
    }
}

/// Hook to access session state.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}

/// The signed-in identity, if any.
pub fn use_identity() -> Option<User> {
    use_session().identity()
}

/// The current role, defaulting to least privilege when signed out.
pub fn use_role() -> Role {
    use_identity().map(|u| u.role).unwrap_or_default()
}
