use crate::model::user::UserDto;

/// Session state shared through context. `fetched` separates "session check
/// still in flight" from "checked, nobody signed in" so screens never flash
/// the signed-out chrome at a signed-in user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserState {
    pub user: Option<UserDto>,
    pub fetched: bool,
}

impl UserState {
    /// Record a signed-in user after login or a successful session check.
    pub fn establish(&mut self, user: UserDto) {
        self.user = Some(user);
        self.fetched = true;
    }

    /// Drop the session after logout or a failed session check.
    pub fn end(&mut self) {
        self.user = None;
        self.fetched = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> UserDto {
        serde_json::from_str(r#"{ "_id": "u1", "name": "Asha", "email": "asha@example.com" }"#)
            .unwrap()
    }

    /// Test the session lifecycle from first render through logout.
    ///
    /// Expected: a fresh state reports neither a user nor a completed check,
    /// and both transitions mark the check as done.
    #[test]
    fn establish_and_end_mark_fetched() {
        let mut state = UserState::default();
        assert!(state.user.is_none());
        assert!(!state.fetched);

        state.establish(sample_user());
        assert!(state.fetched);
        assert_eq!(state.user.as_ref().map(|u| u.name.as_str()), Some("Asha"));

        state.end();
        assert!(state.fetched);
        assert!(state.user.is_none());
    }

    /// Test that a failed session check still completes the gate.
    ///
    /// Expected: `end` with no prior user leaves the state signed out but
    /// fetched, which is what lets guarded screens redirect instead of
    /// waiting forever.
    #[test]
    fn end_without_user_completes_check() {
        let mut state = UserState::default();
        state.end();

        assert!(state.fetched);
        assert!(state.user.is_none());
    }
}
