//! Error types for channel access
//!
//! Only recoverable conditions are modelled here. Programmer errors such as
//! asking for the name of a channel that does not exist panic instead.

use thiserror::Error;

/// Recoverable error returned by bounds-checked channel access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// A positional read went past the last channel.
    #[error("channel index {index} out of range (color has {len} channels)")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of channels the color actually has
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_range_message() {
        let error = ColorError::IndexOutOfRange { index: 3, len: 3 };
        assert_eq!(
            error.to_string(),
            "channel index 3 out of range (color has 3 channels)"
        );
    }
}
