use std::ffi::FromBytesWithNulError;
use std::io;
use std::str::Utf8Error;

/// Errors reported by the bounded copy and by the buffer accessors.
///
/// Truncation is deliberately absent: under [`crate::OverflowPolicy::Truncate`]
/// a shortened copy is a successful [`crate::CopyOutcome::Truncated`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CopyError {
    /// No input string was supplied on the command line.
    MissingArgument,
    /// The input plus its terminator does not fit in the destination.
    /// Nothing was written.
    InputTooLong { input_len: usize, capacity: usize },
    /// The buffer contents are not valid UTF-8.
    InvalidUtf8 {
        error_len: Option<usize>,
        valid_up_to: usize,
    },
    /// The buffer contents cannot be viewed as a C string.
    InvalidString,
    /// Writing the buffer contents to the console failed.
    Io(io::ErrorKind),
}

impl From<Utf8Error> for CopyError {
    fn from(e: Utf8Error) -> Self {
        Self::InvalidUtf8 {
            error_len: e.error_len(),
            valid_up_to: e.valid_up_to(),
        }
    }
}

impl From<FromBytesWithNulError> for CopyError {
    fn from(_: FromBytesWithNulError) -> Self {
        Self::InvalidString
    }
}

impl From<io::Error> for CopyError {
    fn from(e: io::Error) -> Self {
        Self::Io(e.kind())
    }
}

impl std::fmt::Display for CopyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use CopyError::*;
        match self {
            MissingArgument => write!(f, "Missing required argument <input_string>."),
            InputTooLong {
                input_len,
                capacity,
            } => write!(
                f,
                "Input of {} bytes does not fit a {} byte buffer (at most {} bytes plus terminator).",
                input_len,
                capacity,
                capacity.saturating_sub(1)
            ),
            InvalidUtf8 {
                valid_up_to,
                error_len: Some(len),
            } => write!(
                f,
                "Invalid UTF-8 detected in a string from the buffer. \
                Index: {}, Length: {}.",
                valid_up_to, len
            ),
            InvalidUtf8 {
                valid_up_to,
                error_len: None,
            } => write!(
                f,
                "Invalid UTF-8 detected in a string from the buffer. \
                Index: {}.",
                valid_up_to
            ),
            InvalidString => write!(
                f,
                "Buffer contents contain an interior NUL and cannot form a C string."
            ),
            Io(kind) => write!(f, "Failed to write buffer contents: {}.", kind),
        }
    }
}

impl std::error::Error for CopyError {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn utf8_error_keeps_position() {
        let bytes = [b'o', b'k', 0xff];
        let err: CopyError = std::str::from_utf8(&bytes).unwrap_err().into();
        assert_eq!(
            err,
            CopyError::InvalidUtf8 {
                error_len: Some(1),
                valid_up_to: 2
            }
        );
    }

    #[test]
    fn too_long_message_names_both_sizes() {
        let msg = CopyError::InputTooLong {
            input_len: 1000,
            capacity: 20,
        }
        .to_string();
        assert!(msg.contains("1000"), "message was {:?}", msg);
        assert!(msg.contains("20 byte"), "message was {:?}", msg);
        assert!(msg.contains("at most 19"), "message was {:?}", msg);
    }

    #[test]
    fn io_error_maps_to_kind() {
        let err: CopyError = io::Error::new(io::ErrorKind::BrokenPipe, "gone").into();
        assert_eq!(err, CopyError::Io(io::ErrorKind::BrokenPipe));
    }
}
