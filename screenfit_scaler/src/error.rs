// Copyright 2026 the Screenfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for scaler construction and lifecycle.

use core::fmt;

/// Error returned when construction or update parameters are invalid.
///
/// Configuration errors surface synchronously to the caller and are never
/// retried or recovered internally. Construction validates before any
/// structural mutation, so a failed construction leaves no observable side
/// effects.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// The container reference or selector resolved to no element.
    ContainerNotFound,
    /// The design width was not a positive number.
    InvalidDesignWidth(f64),
    /// The design height was not a positive number.
    InvalidDesignHeight(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ContainerNotFound => f.write_str("container not found"),
            Self::InvalidDesignWidth(w) => {
                write!(f, "design width must be a positive number, got {w}")
            }
            Self::InvalidDesignHeight(h) => {
                write!(f, "design height must be a positive number, got {h}")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// Error returned by scaler operations.
///
/// [`ScalerError::Destroyed`] is the lifecycle error: once a scaler has been
/// destroyed, every mutating operation fails with it and there is no way
/// back to the active state (a new scaler must be constructed).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScalerError {
    /// Invalid parameters; see [`ConfigError`].
    Config(ConfigError),
    /// The operation was invoked after [`destroy`](crate::Scaler::destroy).
    Destroyed,
}

impl fmt::Display for ScalerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid configuration: {err}"),
            Self::Destroyed => f.write_str("scaler has been destroyed"),
        }
    }
}

impl core::error::Error for ScalerError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Destroyed => None,
        }
    }
}

impl From<ConfigError> for ScalerError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_wraps_into_scaler_error() {
        let err: ScalerError = ConfigError::ContainerNotFound.into();
        assert_eq!(err, ScalerError::Config(ConfigError::ContainerNotFound));
    }

    #[test]
    fn display_messages_name_the_offending_value() {
        use alloc::string::ToString;

        assert!(
            ConfigError::InvalidDesignWidth(0.0)
                .to_string()
                .contains("0")
        );
        assert_eq!(ScalerError::Destroyed.to_string(), "scaler has been destroyed");
    }
}
