use crate::CopyError;
use std::ffi::CStr;

/// Views the start of `bytes` as a C string, looking for the terminator
/// only within the first `max_len` bytes.
///
/// The search never reads past the end of `bytes`, whatever `max_len` says.
///
/// # Arguments
/// * `bytes` - Storage that should hold a NUL terminated string
/// * `max_len` - Maximum number of bytes to search for the terminator
///
/// # Errors
/// - `CopyError::InvalidString` if no terminator is found within `max_len` bytes
///
/// # Examples
/// ```
/// # use bounded_copy::nul_terminated_prefix;
/// let storage = *b"hi\0garbage";
/// let s = nul_terminated_prefix(&storage, storage.len()).expect("terminator is present");
/// assert_eq!(s.to_bytes(), b"hi");
/// ```
pub fn nul_terminated_prefix(bytes: &[u8], max_len: usize) -> Result<&CStr, CopyError> {
    let window = &bytes[..max_len.min(bytes.len())];
    let len = window
        .iter()
        .position(|&b| b == 0)
        .ok_or(CopyError::InvalidString)?;

    Ok(CStr::from_bytes_with_nul(&bytes[..len + 1])?)
}

/// Whether `input_len` content bytes plus one terminator fit in `capacity`.
///
/// # Examples
/// ```
/// # use bounded_copy::fits_with_terminator;
/// assert!(fits_with_terminator(19, 20));
/// assert!(!fits_with_terminator(20, 20));
/// assert!(!fits_with_terminator(usize::MAX, usize::MAX));
/// ```
pub fn fits_with_terminator(input_len: usize, capacity: usize) -> bool {
    input_len
        .checked_add(1)
        .map_or(false, |needed| needed <= capacity)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    pub fn prefix_stops_at_first_nul() {
        let storage = *b"abc\0def\0";
        let s = nul_terminated_prefix(&storage, storage.len()).unwrap();
        assert_eq!(s.to_bytes(), b"abc");
    }

    #[test]
    pub fn prefix_without_terminator_in_window() {
        let storage = *b"abcdef\0";
        assert_eq!(
            nul_terminated_prefix(&storage, 4),
            Err(CopyError::InvalidString)
        );
    }

    #[test]
    pub fn prefix_limit_larger_than_slice() {
        let storage = *b"abc";
        assert_eq!(
            nul_terminated_prefix(&storage, 1024),
            Err(CopyError::InvalidString)
        );

        let storage = *b"abc\0";
        let s = nul_terminated_prefix(&storage, 1024).unwrap();
        assert_eq!(s.to_bytes(), b"abc");
    }

    #[test]
    pub fn empty_string_is_just_a_terminator() {
        let s = nul_terminated_prefix(&[0u8], 1).unwrap();
        assert!(s.to_bytes().is_empty());
        assert_eq!(nul_terminated_prefix(&[], 0), Err(CopyError::InvalidString));
    }

    #[test]
    pub fn terminator_accounting() {
        assert!(fits_with_terminator(0, 1));
        assert!(!fits_with_terminator(0, 0));
        assert!(fits_with_terminator(19, 20));
        assert!(!fits_with_terminator(20, 20));
        assert!(!fits_with_terminator(1000, 20));
    }
}
