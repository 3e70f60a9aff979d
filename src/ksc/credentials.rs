//! KSCBasic credential encoding
//!
//! KSC expects the user name and password base64-encoded inside a custom
//! `Authorization` scheme. Base64 is reversible: this is wire compatibility,
//! not a security control. Anyone who sees the header has the password.

use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Encoded login credentials
#[derive(Clone)]
pub struct Credentials {
    user: String,
    password: String,
}

impl Credentials {
    /// Encode a user name and password
    pub fn new(user: &str, password: &str) -> Self {
        Self {
            user: STANDARD.encode(user.as_bytes()),
            password: STANDARD.encode(password.as_bytes()),
        }
    }

    /// Value for the `Authorization` header on every request
    pub fn authorization_header(&self) -> String {
        format!(
            "KSCBasic user=\"{}\", pass=\"{}\", internal=\"1\"",
            self.user, self.password
        )
    }
}

// Keep encoded secrets out of debug logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &"<redacted>")
            .field("password", &"<redacted>")
            .finish()
    }
}
