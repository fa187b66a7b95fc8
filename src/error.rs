pub type TessellaResult<T> = Result<T, TessellaError>;

#[derive(thiserror::Error, Debug)]
pub enum TessellaError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("compositing error: {0}")]
    Compositing(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TessellaError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn compositing(msg: impl Into<String>) -> Self {
        Self::Compositing(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
