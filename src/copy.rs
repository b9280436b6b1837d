use crate::common_logging::{generic_error, generic_info, generic_warn};
use crate::{BoundedBuffer, CopyError, CopyOutcome, OverflowPolicy};
use std::io::Write;

/// Size of the destination buffer used by [`process_user_input`], terminator included.
pub const DEFAULT_CAPACITY: usize = 20;

/// Runtime configuration for the copy routine.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct CopyParams {
    policy: OverflowPolicy,
}

impl CopyParams {
    pub fn new(policy: OverflowPolicy) -> Self {
        Self { policy }
    }

    /// Choose what happens to input that does not fit.
    ///
    /// Defaults to [`OverflowPolicy::Reject`].
    pub fn set_policy(&mut self, policy: OverflowPolicy) -> &mut Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }
}

/// What a call to [`copy_into`] stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyReport {
    pub outcome: CopyOutcome,
    /// Buffer contents as printed, with invalid UTF-8 replaced.
    pub contents: String,
    /// Size of the destination, terminator included.
    pub capacity: usize,
}

impl CopyReport {
    pub fn is_truncated(&self) -> bool {
        self.outcome.is_truncated()
    }
}

/// Copy `input` into a [`DEFAULT_CAPACITY`] byte buffer and print it to `out`.
///
/// This is [`copy_into`] with `N = DEFAULT_CAPACITY`.
pub fn process_user_input<W: Write>(
    input: &[u8],
    params: &CopyParams,
    out: &mut W,
) -> Result<CopyReport, CopyError> {
    copy_into::<DEFAULT_CAPACITY, W>(input, params, out)
}

/// Copy `input` into a fresh `N` byte stack buffer under `params`, then
/// write `Processing input: <contents>` to `out`.
///
/// # Errors
/// * [`CopyError::InputTooLong`] under [`OverflowPolicy::Reject`] when the
///   input does not fit. Nothing is printed.
/// * [`CopyError::Io`] if writing to `out` fails.
pub fn copy_into<const N: usize, W: Write>(
    input: &[u8],
    params: &CopyParams,
    out: &mut W,
) -> Result<CopyReport, CopyError> {
    let mut buffer = BoundedBuffer::<N>::new();

    let outcome = match buffer.copy_with_policy(input, params.policy()) {
        Ok(outcome) => outcome,
        Err(e) => {
            generic_error!("rejected input: {}", e);
            return Err(e);
        }
    };

    match outcome {
        CopyOutcome::Truncated { stored, dropped } => {
            generic_warn!(
                "input truncated to {} bytes, {} bytes dropped",
                stored,
                dropped
            );
        }
        CopyOutcome::Copied { len } => {
            generic_info!("copied {} bytes", len);
        }
    }

    writeln!(out, "Processing input: {}", buffer)?;

    Ok(CopyReport {
        outcome,
        contents: buffer.to_str_lossy().into_owned(),
        capacity: N,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io;

    fn run(input: &str, policy: OverflowPolicy) -> (Result<CopyReport, CopyError>, String) {
        let mut out = Vec::new();
        let result = process_user_input(input.as_bytes(), &CopyParams::new(policy), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn hello_is_printed_unmodified() {
        let (result, printed) = run("hello", OverflowPolicy::Reject);
        let report = result.unwrap();
        assert_eq!(report.outcome, CopyOutcome::Copied { len: 5 });
        assert_eq!(report.contents, "hello");
        assert_eq!(report.capacity, DEFAULT_CAPACITY);
        assert_eq!(printed, "Processing input: hello\n");
    }

    #[test]
    fn rejected_input_prints_nothing() {
        let long = "A".repeat(1000);
        let (result, printed) = run(&long, OverflowPolicy::Reject);
        assert_eq!(
            result,
            Err(CopyError::InputTooLong {
                input_len: 1000,
                capacity: 20
            })
        );
        assert!(printed.is_empty());
    }

    #[test]
    fn truncated_input_prints_prefix() {
        let long = "A".repeat(1000);
        let (result, printed) = run(&long, OverflowPolicy::Truncate);
        let report = result.unwrap();
        assert!(report.is_truncated());
        assert_eq!(report.contents, "A".repeat(19));
        assert_eq!(printed, format!("Processing input: {}\n", "A".repeat(19)));
    }

    #[test]
    fn other_capacities() {
        let mut out = Vec::new();
        let params = CopyParams::new(OverflowPolicy::Truncate);
        let report = copy_into::<4, _>(b"abcdef", &params, &mut out).unwrap();
        assert_eq!(report.contents, "abc");
        assert_eq!(report.capacity, 4);
        assert_eq!(
            report.outcome,
            CopyOutcome::Truncated {
                stored: 3,
                dropped: 3
            }
        );
    }

    #[test]
    fn params_setter() {
        let mut params = CopyParams::default();
        assert_eq!(params.policy(), OverflowPolicy::Reject);
        params.set_policy(OverflowPolicy::Truncate);
        assert_eq!(params.policy(), OverflowPolicy::Truncate);
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_is_reported() {
        let result = process_user_input(b"hello", &CopyParams::default(), &mut ClosedPipe);
        assert_eq!(result, Err(CopyError::Io(io::ErrorKind::BrokenPipe)));
    }
}
