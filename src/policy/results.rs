//! Policy result types
//!
//! Defines the verdict returned by the access policy engine.

/// Outcome of one access policy evaluation.
///
/// `write_allowed` is meaningful even when the request did not require
/// write, so callers can probe "could I write here" without asking to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessDecision {
    pub allowed: bool,
    pub write_allowed: bool,
}

impl AccessDecision {
    /// Full access.
    pub fn allow_write() -> Self {
        Self {
            allowed: true,
            write_allowed: true,
        }
    }

    /// Read access only.
    pub fn allow_read_only() -> Self {
        Self {
            allowed: true,
            write_allowed: false,
        }
    }

    /// No access.
    pub fn deny() -> Self {
        Self {
            allowed: false,
            write_allowed: false,
        }
    }

    /// Whether this decision satisfies a request that needs write capability
    /// iff `write_required`.
    pub fn permits(&self, write_required: bool) -> bool {
        self.allowed && (!write_required || self.write_allowed)
    }
}
