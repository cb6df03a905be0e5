use thiserror::Error;

pub type SliderResult<T> = Result<T, SliderError>;

#[derive(Debug, Error)]
pub enum SliderError {
    #[error("invalid bounds: initial_min={initial_min}, initial_max={initial_max}")]
    InvalidBounds { initial_min: i64, initial_max: i64 },

    #[error("invalid track width: {0}")]
    InvalidTrackWidth(f64),

    #[error("unknown time view `{0}`")]
    UnknownMode(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("slider has been torn down")]
    TornDown,
}
