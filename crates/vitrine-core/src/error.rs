#![forbid(unsafe_code)]

//! Mount-time errors.
//!
//! Controllers never fail after they are mounted. Everything that can go
//! wrong is detected while assembling a controller from the page, and the
//! host integration treats any [`MountError`] as "this widget is not on the
//! page": it logs and attaches no listeners.

use std::fmt;

/// Reason a controller could not be assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountError {
    /// A required element (identified by its role) is absent.
    MissingElement {
        /// Human-readable role, e.g. `"scroll track"`.
        role: &'static str,
    },
    /// A group that needs at least one member was empty.
    EmptyGroup {
        /// Role of the missing members.
        role: &'static str,
    },
    /// A configuration value is out of range.
    InvalidConfig {
        /// Offending field name.
        field: &'static str,
        /// Why the value was rejected.
        reason: &'static str,
    },
}

impl fmt::Display for MountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingElement { role } => write!(f, "missing element: {role}"),
            Self::EmptyGroup { role } => write!(f, "no {role} elements found"),
            Self::InvalidConfig { field, reason } => {
                write!(f, "invalid config `{field}`: {reason}")
            }
        }
    }
}

impl std::error::Error for MountError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_role() {
        let err = MountError::MissingElement {
            role: "scroll track",
        };
        assert_eq!(err.to_string(), "missing element: scroll track");
    }

    #[test]
    fn display_invalid_config() {
        let err = MountError::InvalidConfig {
            field: "interval",
            reason: "must be non-zero",
        };
        assert_eq!(err.to_string(), "invalid config `interval`: must be non-zero");
    }
}
