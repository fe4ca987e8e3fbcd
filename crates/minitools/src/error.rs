#[derive(thiserror::Error, Debug, serde::Deserialize, serde::Serialize)]
pub enum Error {
    #[error("Generic {0}")]
    Generic(String),

    #[error("{0}")]
    Validation(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl Error {
    /// Wrap a core validation or domain error so it renders as-is
    pub fn validation(err: impl std::fmt::Display) -> Self {
        Error::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_keeps_core_message() {
        let err = Error::validation(minitools_core::numeral::NumeralError::DivisionByZero);
        assert_eq!(err.to_string(), "Division by zero");
    }

    #[test]
    fn test_network_prefix() {
        assert_eq!(
            Error::Network("timed out".into()).to_string(),
            "Network error: timed out"
        );
    }
}
