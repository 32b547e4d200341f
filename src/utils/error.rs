use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Document is missing required field '{field}'")]
    MissingFieldError { field: String },

    #[error("Selection requested over an empty venue collection")]
    EmptyInputError,

    #[error("Incorrect {component} value {value}: expected {expected}")]
    InvalidCoordinateError {
        component: String,
        value: f64,
        expected: String,
    },

    #[error("Invalid input: {message}")]
    InputError { message: String },
}

pub type Result<T> = std::result::Result<T, GeoError>;
