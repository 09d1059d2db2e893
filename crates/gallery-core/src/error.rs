use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GalleryError {
    #[error("item {index} has depth {depth}, outside [{min}, {max}]")]
    DepthOutOfRange {
        index: usize,
        depth: f32,
        min: f32,
        max: f32,
    },
    #[error("gallery catalog is empty")]
    EmptyCatalog,
    #[error("item index {index} out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("unknown category `{0}`")]
    UnknownCategory(String),
    #[error("invalid value `{value}` for `{key}`")]
    InvalidConfig { key: String, value: String },
}

pub type Result<T> = std::result::Result<T, GalleryError>;
