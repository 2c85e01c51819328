//! Config-backed admin credential directory.
//!
//! The login handler verifies passwords here before asking the token service
//! for a session credential. Accounts come from the `directory.admins`
//! section of the configuration.

use serde::Deserialize;
use std::sync::OnceLock;

use super::password::{hash_password, verify_password};

/// One admin account as configured.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminAccount {
    pub email: String,
    /// Argon2 PHC-format hash, e.g. output of the `mkpasswd` binary.
    pub password_hash: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// Identity handed to the token service after a successful password check.
#[derive(Debug, Clone)]
pub struct AdminIdentity {
    pub subject: String,
    pub role: Option<String>,
}

pub struct AdminDirectory {
    accounts: Vec<AdminAccount>,
}

impl AdminDirectory {
    pub fn new(accounts: Vec<AdminAccount>) -> Self {
        Self { accounts }
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Verify credentials. Email lookup is case-insensitive; the password is
    /// checked against the stored Argon2 hash. Returns `None` for unknown
    /// emails and wrong passwords alike, and both paths cost one Argon2
    /// verification so response timing does not reveal which emails exist.
    pub fn authenticate(&self, email: &str, password: &str) -> Option<AdminIdentity> {
        let email = email.trim();
        let Some(account) = self
            .accounts
            .iter()
            .find(|a| a.email.eq_ignore_ascii_case(email))
        else {
            let _ = verify_password(password, dummy_hash());
            return None;
        };

        if verify_password(password, &account.password_hash) {
            Some(AdminIdentity {
                subject: account.email.clone(),
                role: account.role.clone(),
            })
        } else {
            None
        }
    }
}

/// Fixed hash verified on the not-found branch of `authenticate`. Hashing a
/// known constant keeps the parameters in lockstep with `hash_password`.
fn dummy_hash() -> &'static str {
    static DUMMY: OnceLock<String> = OnceLock::new();
    DUMMY.get_or_init(|| hash_password("fluentgate-timing-pad").expect("argon2 default params"))
}
