use modish_core::ColorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    /// Light and dark schemes must define the same token names
    #[error("There is a mismatch in scheme keys: {}", keys.join(", "))]
    SchemeMismatch { keys: Vec<String> },

    #[error("{0} is invalid colorScheme, please use 'light' | 'dark' | 'default'")]
    InvalidMode(String),

    #[error(transparent)]
    Color(#[from] ColorError),

    #[error("Overriding the \"{0}\" key is not possible.")]
    ReservedName(String),

    #[error("theme config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("theme config serialization error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ThemeError {
    /// Whether this is the hex-literal failure of an alpha computation
    pub fn is_invalid_hex(&self) -> bool {
        matches!(self, ThemeError::Color(ColorError::InvalidHex(_)))
    }

    /// Whether this is the out-of-range channel failure of an alpha computation
    pub fn is_invalid_channel(&self) -> bool {
        matches!(self, ThemeError::Color(ColorError::InvalidChannel(_)))
    }
}
