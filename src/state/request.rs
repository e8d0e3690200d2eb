//! Request tokens guarding against stale responses.
//!
//! Every outbound request gets a fresh token from its controller's
//! [`RequestGeneration`]. A completion is only applied when it carries the
//! token the controller is still waiting for.

use std::fmt;

/// Identifies one outbound request of one controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic token source owned by a controller.
#[derive(Debug, Default)]
pub struct RequestGeneration {
    last: u64,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a token no earlier token equals.
    pub fn issue(&mut self) -> RequestToken {
        self.last += 1;
        RequestToken(self.last)
    }
}
