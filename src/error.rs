use thiserror::Error;

#[derive(Error, Debug)]
pub enum CampuslinkError {
    #[error("Please enter your student ID first")]
    MissingId,

    #[error("Service '{0}' not found. Run 'campuslink services' to see what is available")]
    ServiceNotFound(String),

    #[error("Invalid service definition: {0}")]
    InvalidService(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Could not open browser: {0}")]
    BrowserError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Interactive prompt error: {0}")]
    DialoguerError(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, CampuslinkError>;

pub use CampuslinkError as Error;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_id_message() {
        assert_eq!(
            Error::MissingId.to_string(),
            "Please enter your student ID first"
        );
    }

    #[test]
    fn test_service_not_found_names_key() {
        let msg = Error::ServiceNotFound("zoom".into()).to_string();
        assert!(msg.contains("'zoom'"));
        assert!(msg.contains("campuslink services"));
    }
}
