//! Error types for loading the material registry.

use std::path::PathBuf;

use thiserror::Error;

use crate::cell::MaterialClass;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read elements file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid elements JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("elements config has no top-level \"elements\" array")]
    MissingElements,

    #[error("elements config lists {found} materials, expected {expected}")]
    CountMismatch { expected: usize, found: usize },

    #[error("material index {0} is out of range")]
    IndexOutOfRange(usize),

    #[error("material index {0} is listed more than once")]
    DuplicateIndex(usize),

    #[error("air must have class Empty, found {0}")]
    AirNotEmpty(MaterialClass),

    #[error("bedrock must not move, found class {0}")]
    BedrockMovable(MaterialClass),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unknown material class {0}")]
pub struct UnknownClass(pub u8);
