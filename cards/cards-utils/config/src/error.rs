use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardConfigError {
    #[error("You need to define a {0}")]
    MissingField(&'static str),

    #[error("Failed to load card config: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid TOML card config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON card config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Treat a missing or blank field as undefined.
pub(crate) fn required(
    value: Option<String>,
    field: &'static str,
) -> Result<String, CardConfigError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(CardConfigError::MissingField(field))
}
