#![allow(clippy::uninlined_format_args)]

//! Bounds-checked copy of a short string into a fixed-size stack buffer.
//!
//! Every write into a [`BoundedBuffer`] is checked against its capacity. What
//! happens to input that does not fit is chosen with an [`OverflowPolicy`]:
//! reject it with [`CopyError::InputTooLong`], or keep a prefix and report
//! [`CopyOutcome::Truncated`].

mod buffer;
mod common_logging;
mod copy;
mod error;
mod utilities;

pub use buffer::{BoundedBuffer, CopyOutcome, OverflowPolicy, Truncation};
pub use copy::{copy_into, process_user_input, CopyParams, CopyReport, DEFAULT_CAPACITY};
pub use error::CopyError;
pub use utilities::{fits_with_terminator, nul_terminated_prefix};

/// Version of this crate as `<git tag>-<short commit>`, fixed at build time.
pub fn get_version() -> &'static str {
    env!("BOUNDED_COPY_VERSION")
}
