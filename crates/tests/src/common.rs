use portal::Session;
use shared_types::{Department, Role, User};

/// A throwaway identity with the given role.
pub fn user_with_role(role: Role) -> User {
    User {
        id: 100,
        name: "Test Person".to_string(),
        email: "test.person@energetyka.pl".to_string(),
        role,
        department: Department::It,
        avatar: "👤".to_string(),
    }
}

/// A session already signed in with the given role.
pub fn session_with_role(role: Role) -> Session {
    let mut session = Session::new();
    session.login(user_with_role(role));
    session
}
