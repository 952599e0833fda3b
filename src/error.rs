//! Error types for markdown conversion and HTML serialization.

/// Error raised while building or serializing an HTML node tree.
///
/// Every variant aborts conversion of the document being processed; the
/// converter never substitutes defaults.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Container node has an empty tag.
    #[error("container node requires a tag")]
    MissingTag,

    /// Container node was built without its children ever being set.
    #[error("container node <{tag}> requires children")]
    MissingChildren {
        /// Tag of the incomplete container.
        tag: String,
    },

    /// First line of the document is not a level-1 heading.
    #[error("no level-1 heading found on the first line")]
    NoTitleFound,
}

/// Result alias for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;
