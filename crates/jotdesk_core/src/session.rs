//! Request-context authentication state.
//!
//! # Responsibility
//! - Check submitted credentials against an injected source.
//! - Track the signed-in flag for one request-handling context.
//!
//! # Invariants
//! - No process-wide mutable state; every context owns its `Session`.
//! - Credential values are never logged.

use log::{info, warn};

/// Source of valid credential pairs.
pub trait CredentialSource {
    /// Returns whether the submitted pair is valid.
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Fixed single-user credential source.
///
/// Stands in for a real user store in local single-user deployments;
/// the embedding layer injects one instance per request-handling
/// context.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    /// Creates a credential source accepting exactly one pair.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl CredentialSource for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

/// Signed-in state for one request-handling context.
#[derive(Debug, Default)]
pub struct Session {
    authenticated: bool,
}

impl Session {
    /// Creates a signed-out session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempts to sign in against the given credential source.
    ///
    /// Returns whether this attempt was accepted; an already signed-in
    /// session stays signed in after a failed attempt.
    pub fn login(
        &mut self,
        source: &impl CredentialSource,
        username: &str,
        password: &str,
    ) -> bool {
        let accepted = source.verify(username, password);
        if accepted {
            self.authenticated = true;
            info!("event=session_login module=session status=ok");
        } else {
            warn!("event=session_login module=session status=rejected");
        }
        accepted
    }

    /// Signs the session out.
    pub fn logout(&mut self) {
        self.authenticated = false;
        info!("event=session_logout module=session status=ok");
    }

    /// Returns whether the session is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}
