use shared_types::User;

/// The process-wide authentication state, a two-state machine.
///
/// `LoggedIn` carries the identity, so "authenticated without identity"
/// (and the reverse) cannot be represented. Login and logout each replace
/// the whole value, which makes both transitions atomic.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Session {
    #[default]
    LoggedOut,
    LoggedIn(User),
}

impl Session {
    pub fn new() -> Self {
        Session::LoggedOut
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::LoggedIn(_))
    }

    pub fn identity(&self) -> Option<&User> {
        match self {
            Session::LoggedOut => None,
            Session::LoggedIn(user) => Some(user),
        }
    }

    /// `LoggedOut -> LoggedIn(user)`. Always succeeds; the simulated
    /// authentication sequence has no failure path. Logging in over an
    /// existing session replaces the identity.
    pub fn login(&mut self, user: User) {
        tracing::info!(user_id = user.id, role = user.role.as_str(), "session login");
        *self = Session::LoggedIn(user);
    }

    /// Any state `-> LoggedOut`. Module-local ephemeral state dies with the
    /// unmounted views; the session never held it.
    pub fn logout(&mut self) {
        if let Session::LoggedIn(user) = self {
            tracing::info!(user_id = user.id, "session logout");
        }
        *self = Session::LoggedOut;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{Department, Role};

    fn user() -> User {
        User {
            id: 1,
            name: "Anna Kowalska".to_string(),
            email: "anna.kowalska@energetyka.pl".to_string(),
            role: Role::Employee,
            department: Department::It,
            avatar: "👩‍💻".to_string(),
        }
    }

    #[test]
    fn starts_logged_out() {
        let session = Session::new();
        assert!(!session.is_authenticated());
        assert!(session.identity().is_none());
    }

    #[test]
    fn login_sets_identity_atomically() {
        let mut session = Session::new();
        session.login(user());
        assert!(session.is_authenticated());
        assert_eq!(session.identity().map(|u| u.id), Some(1));
    }

    #[test]
    fn logout_clears_identity() {
        let mut session = Session::new();
        session.login(user());
        session.logout();
        assert_eq!(session, Session::LoggedOut);
        assert!(session.identity().is_none());
    }

    #[test]
    fn logout_when_logged_out_is_a_no_op() {
        let mut session = Session::new();
        session.logout();
        assert_eq!(session, Session::LoggedOut);
    }
}
