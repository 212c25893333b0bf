use thiserror::Error;

/// Wording shown when the current location cannot be resolved.
pub const LOCATION_FAILURE_MESSAGE: &str = "Unable to get your current location";

/// Fallback wording for a by-city failure that carries no message.
pub const RESOLUTION_FAILURE_MESSAGE: &str = "Failed to fetch weather data";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The city query was empty or only whitespace.
    #[error("Invalid input: city name is empty")]
    InvalidInput,

    #[error("{0}")]
    Resolution(String),

    #[error("Location error: {0}")]
    Location(String),

    /// A newer call started before this one finished and stale results are
    /// being discarded.
    #[error("Result superseded by a newer request")]
    Superseded,
}

impl ResolveError {
    /// Message suitable for a toast or status line.
    pub fn user_message(&self) -> String {
        match self {
            ResolveError::InvalidInput => "Please enter a valid city name".to_string(),
            ResolveError::Resolution(msg) if msg.trim().is_empty() => {
                RESOLUTION_FAILURE_MESSAGE.to_string()
            }
            ResolveError::Resolution(msg) => msg.clone(),
            ResolveError::Location(_) => LOCATION_FAILURE_MESSAGE.to_string(),
            ResolveError::Superseded => "A newer request replaced this one".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_failures_use_fixed_wording() {
        let err = ResolveError::Location("gps unavailable".into());
        assert_eq!(err.user_message(), LOCATION_FAILURE_MESSAGE);
        assert!(err.to_string().contains("gps unavailable"));
    }

    #[test]
    fn empty_resolution_message_falls_back() {
        let err = ResolveError::Resolution("  ".into());
        assert_eq!(err.user_message(), RESOLUTION_FAILURE_MESSAGE);

        let err = ResolveError::Resolution("backend down".into());
        assert_eq!(err.user_message(), "backend down");
    }
}
