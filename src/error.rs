use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("provider error {code}: {description}")]
    Provider { code: String, description: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
