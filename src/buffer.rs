use crate::common_logging::generic_debug;
use crate::utilities::{fits_with_terminator, nul_terminated_prefix};
use crate::CopyError;
use std::borrow::Cow;
use std::ffi::CStr;
use std::fmt;

/// What to do when an input does not fit the destination.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Refuse the copy with [`CopyError::InputTooLong`]; the buffer is left untouched.
    #[default]
    Reject,
    /// Keep the first `capacity - 1` bytes and report the loss as
    /// [`CopyOutcome::Truncated`].
    Truncate,
}

impl OverflowPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverflowPolicy::Reject => "reject",
            OverflowPolicy::Truncate => "truncate",
        }
    }
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a truncating write.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Truncation {
    /// Content bytes now held by the buffer.
    pub stored: usize,
    /// Input bytes that did not fit. Zero means nothing was lost.
    pub dropped: usize,
}

impl Truncation {
    pub fn occurred(&self) -> bool {
        self.dropped > 0
    }
}

/// Result of a successful write under an [`OverflowPolicy`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The whole input was stored.
    Copied { len: usize },
    /// Only a prefix was stored.
    Truncated { stored: usize, dropped: usize },
}

impl CopyOutcome {
    pub fn is_truncated(&self) -> bool {
        matches!(self, CopyOutcome::Truncated { .. })
    }

    /// Content bytes held by the buffer after the write.
    pub fn stored(&self) -> usize {
        match *self {
            CopyOutcome::Copied { len } => len,
            CopyOutcome::Truncated { stored, .. } => stored,
        }
    }
}

impl From<Truncation> for CopyOutcome {
    fn from(t: Truncation) -> Self {
        if t.occurred() {
            CopyOutcome::Truncated {
                stored: t.stored,
                dropped: t.dropped,
            }
        } else {
            CopyOutcome::Copied { len: t.stored }
        }
    }
}

/// A fixed-capacity, NUL terminated byte buffer.
///
/// `N` counts the terminator, so the buffer holds at most `N - 1` content
/// bytes and the byte right after the content is always `0`. Every write
/// goes through a length check first; there is no way to store more than
/// `N` bytes.
///
/// `N` must be non-zero. `BoundedBuffer::<0>::new()` fails to compile.
#[derive(Clone, PartialEq, Eq)]
pub struct BoundedBuffer<const N: usize> {
    data: [u8; N],
    len: usize,
}

impl<const N: usize> BoundedBuffer<N> {
    const HAS_ROOM_FOR_TERMINATOR: () = assert!(N > 0, "a bounded buffer needs room for its terminator");

    /// Create an empty buffer.
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::HAS_ROOM_FOR_TERMINATOR;
        Self {
            data: [0u8; N],
            len: 0,
        }
    }

    /// Total size in bytes, terminator included.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// The longest content this buffer accepts without truncation.
    pub const fn max_content_len(&self) -> usize {
        N - 1
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Reset to the empty string, zeroing the old contents.
    pub fn clear(&mut self) {
        self.data.fill(0);
        self.len = 0;
    }

    /// Store all of `input`, or nothing.
    ///
    /// # Errors
    /// * [`CopyError::InputTooLong`] if `input.len() + 1 > N`. The buffer is
    ///   left exactly as it was.
    pub fn try_copy_from(&mut self, input: &[u8]) -> Result<(), CopyError> {
        if !fits_with_terminator(input.len(), N) {
            return Err(CopyError::InputTooLong {
                input_len: input.len(),
                capacity: N,
            });
        }

        self.store(input);
        Ok(())
    }

    /// Store as much of `input` as fits, always leaving room for the terminator.
    ///
    /// The cut is made at a byte boundary, so a multi-byte UTF-8 character
    /// may be split; [`Self::to_str_lossy`] renders such a tail as U+FFFD.
    pub fn copy_truncating(&mut self, input: &[u8]) -> Truncation {
        let stored = input.len().min(self.max_content_len());
        self.store(&input[..stored]);

        Truncation {
            stored,
            dropped: input.len() - stored,
        }
    }

    /// Write `input` under `policy`.
    pub fn copy_with_policy(
        &mut self,
        input: &[u8],
        policy: OverflowPolicy,
    ) -> Result<CopyOutcome, CopyError> {
        generic_debug!(
            "copying {} bytes into a {} byte buffer (policy: {})",
            input.len(),
            N,
            policy
        );
        match policy {
            OverflowPolicy::Reject => {
                self.try_copy_from(input)?;
                Ok(CopyOutcome::Copied { len: input.len() })
            }
            OverflowPolicy::Truncate => Ok(self.copy_truncating(input).into()),
        }
    }

    fn store(&mut self, content: &[u8]) {
        debug_assert!(content.len() < N);
        let (head, tail) = self.data.split_at_mut(content.len());
        head.copy_from_slice(content);
        // tail is non-empty: it starts with the terminator slot
        tail.fill(0);
        self.len = content.len();
    }

    /// The raw storage, terminator and zeroed tail included.
    pub fn storage(&self) -> &[u8; N] {
        &self.data
    }

    /// Content bytes, no terminator.
    pub fn to_bytes(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// Content bytes followed by the terminator.
    pub fn to_bytes_with_nul(&self) -> &[u8] {
        &self.data[..=self.len]
    }

    /// View the contents as a C string.
    ///
    /// # Returns
    /// * On success: the contents as a `&CStr`
    /// * On failure: [`CopyError::InvalidString`] when the contents hold an interior NUL
    pub fn as_c_str(&self) -> Result<&CStr, CopyError> {
        let s = nul_terminated_prefix(&self.data, self.len + 1)?;
        if s.to_bytes().len() != self.len {
            return Err(CopyError::InvalidString);
        }
        Ok(s)
    }

    /// Get the contents as text.
    ///
    /// # Returns
    /// * On success: the UTF-8 validated string.
    /// * On failure: [`CopyError::InvalidUtf8`]
    pub fn to_str(&self) -> Result<&str, CopyError> {
        Ok(std::str::from_utf8(self.to_bytes())?)
    }

    /// Get the contents as text, replacing invalid UTF-8 with the
    /// replacement character instead of failing.
    pub fn to_str_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.to_bytes())
    }
}

impl<const N: usize> Default for BoundedBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes [`BoundedBuffer::to_str_lossy`].
impl<const N: usize> fmt::Display for BoundedBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_str_lossy())
    }
}

impl<const N: usize> fmt::Debug for BoundedBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedBuffer")
            .field("capacity", &N)
            .field("len", &self.len)
            .field("contents", &self.to_str_lossy())
            .finish()
    }
}
