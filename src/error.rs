use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("no element matches container selector `{selector}`")]
    ContainerNotFound { selector: String },

    #[error("invalid selector `{0}`: only `.class`, `#id` and `tag` are supported")]
    InvalidSelector(String),

    #[error("container width `{raw}` is not a pixel length")]
    UnparseableWidth { raw: String },

    #[error("container `{selector}` has no computed width")]
    WidthUnset { selector: String },

    #[error("invalid container width: {width}")]
    InvalidWidth { width: f64 },

    #[error("invalid surface size: width={width}, height={height}")]
    InvalidLayout { width: f64, height: f64 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
