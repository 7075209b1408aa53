//! Allow-list guard composed in front of every entry point.
use crate::constants::icon;
use std::collections::HashSet;

#[derive(Clone, Debug, Default)]
pub struct AuthGate {
    allowed: HashSet<u64>,
}

/// Returned when a user is not on the allow-list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Denied {
    pub user: u64,
}

impl Denied {
    /// Visible notice; carries the caller's own id so an admin can enroll it.
    pub fn notice(&self) -> String {
        format!(
            "{} **Access denied.**\nYour user ID: `{}`\nAsk the bot administrator for access.",
            icon("error"),
            self.user
        )
    }
}

impl AuthGate {
    /// An empty list lets every user through.
    pub fn new(users: impl IntoIterator<Item = u64>) -> Self {
        Self {
            allowed: users.into_iter().collect(),
        }
    }

    pub fn allow_all() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.allowed.is_empty()
    }

    pub fn check(&self, user: u64) -> Result<(), Denied> {
        if self.is_open() || self.allowed.contains(&user) {
            Ok(())
        } else {
            Err(Denied { user })
        }
    }
}
