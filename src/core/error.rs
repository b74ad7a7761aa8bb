use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Hormone level out of range: {field} = {value} (expected 0..=100)")]
    StateOutOfRange { field: &'static str, value: f64 },

    #[error("Unknown stimulus: {0:?} (expected normal, cold or hot)")]
    InvalidStimulus(String),

    #[error("Unknown command: {0:?}")]
    UnknownCommand(String),

    #[error("Unknown report language: {0:?} (expected en or zh)")]
    InvalidLanguage(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
