use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SliderError {
    /// The track element is not mounted, so there is no rectangle to map against.
    #[error("progress track is not mounted")]
    BoundsUnavailable,
    #[error("invalid track bounds (left {left}, width {width})")]
    InvalidBounds { left: f64, width: f64 },
    #[error("non-finite pointer coordinate {0}")]
    NonFiniteCoordinate(f64),
    #[error("no global document")]
    NoDocument,
    #[error("event listener `{kind}`: {reason}")]
    Listener { kind: &'static str, reason: String },
}

impl SliderError {
    pub fn listener(kind: &'static str, err: JsValue) -> Self {
        SliderError::Listener {
            kind,
            reason: format!("{:?}", err),
        }
    }
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("{id}: missing `---` front matter")]
    MissingFrontMatter { id: String },
    #[error("{id}: {source}")]
    Schema {
        id: String,
        #[source]
        source: serde_yaml::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
