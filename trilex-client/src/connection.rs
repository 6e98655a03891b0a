//! Explicit connection state for the language-model endpoint.
//!
//! The state is owned by the client and only changes on explicit triggers:
//! a probe outcome, or a failed query. Callers can always read it; nothing
//! mutates it as a side effect of unrelated calls.

use std::fmt;

use serde::Serialize;

/// Where the client stands with the endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionState {
    /// No probe has run yet.
    #[default]
    Untested,
    /// The last probe succeeded and no query has failed since.
    Connected,
    /// The last probe or query failed.
    Failed,
}

impl ConnectionState {
    /// The state a probe outcome transitions into.
    pub fn after_probe(ok: bool) -> Self {
        if ok {
            ConnectionState::Connected
        } else {
            ConnectionState::Failed
        }
    }

    pub fn is_connected(self) -> bool {
        self == ConnectionState::Connected
    }

    /// True when a query should be preceded by a probe.
    pub fn needs_probe(self) -> bool {
        !self.is_connected()
    }

    /// The state a configuration change transitions into: the old probe
    /// outcome says nothing about the new endpoint or model.
    pub fn invalidate(self) -> Self {
        ConnectionState::Untested
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ConnectionState::Untested => "untested",
            ConnectionState::Connected => "connected",
            ConnectionState::Failed => "failed",
        };
        f.write_str(text)
    }
}
