/// Currently signed-in user, as reported by the host application. This crate
/// only reads the username to target the preference update; it never creates
/// or mutates the session identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub username: String,
}

impl AuthenticatedUser {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

/// Read-only lookup of the current session identity.
pub trait IdentityProvider: Send + Sync {
    /// Returns the signed-in user, or `None` for anonymous sessions.
    fn authenticated_user(&self) -> Option<AuthenticatedUser>;
}

/// Identity provider with a fixed answer, for hosts whose identity is known
/// at construction time and for tests.
pub struct StaticIdentity(Option<AuthenticatedUser>);

impl StaticIdentity {
    pub fn signed_in(username: impl Into<String>) -> Self {
        Self(Some(AuthenticatedUser::new(username)))
    }

    pub fn signed_out() -> Self {
        Self(None)
    }
}

impl IdentityProvider for StaticIdentity {
    fn authenticated_user(&self) -> Option<AuthenticatedUser> {
        self.0.clone()
    }
}
