use crate::models::UserProfile;

/// In-memory auth session. Lives for the process only; persistent storage is
/// the embedding application's concern.
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Option<String>,
    user: Option<UserProfile>,
}

impl Session {
    pub fn start(&mut self, token: String, user: Option<UserProfile>) {
        self.token = Some(token);
        self.user = user;
    }

    pub fn clear(&mut self) {
        self.token = None;
        self.user = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|user| user.is_admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_lifecycle() {
        let mut session = Session::default();
        assert!(!session.is_authenticated());

        session.start("abc".to_string(), None);
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("abc"));
        assert!(!session.is_admin());

        session.clear();
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
    }
}
