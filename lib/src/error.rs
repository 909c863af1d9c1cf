use thiserror::Error;

use crate::command::Command;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// No built-in curve is registered under this name
    #[error("unknown grammar `{0}`")]
    UnknownCurve(String),
    /// [crate::geometry::single_line] was handed segments that do not form one path
    #[error("segment {index} does not start where the previous one ends")]
    NonContiguous { index: usize },
    #[error("generation {generation} would hold {len} bytes, over the limit of {limit}")]
    GenerationTooLarge {
        generation: usize,
        len: usize,
        limit: usize,
    },
    /// The command table has no symbol bound to a command the caller needs
    #[error("no symbol is bound to the {0:?} command")]
    MissingCommand(Command),
}
