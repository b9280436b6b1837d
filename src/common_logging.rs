// Each macro forwards to whichever logging backend features are enabled.
// With neither feature on, the arguments are still type-checked but nothing is emitted.

macro_rules! generic_error {
    ($($expr:tt)*) => {
        #[cfg(feature = "log_backend")]
        log::error!($($expr)*);
        #[cfg(feature = "tracing_backend")]
        tracing::error!($($expr)*);
        #[cfg(not(any(feature = "log_backend", feature = "tracing_backend")))]
        {
            let _ = format_args!($($expr)*);
        }
    };
}

macro_rules! generic_warn {
    ($($expr:tt)*) => {
        #[cfg(feature = "log_backend")]
        log::warn!($($expr)*);
        #[cfg(feature = "tracing_backend")]
        tracing::warn!($($expr)*);
        #[cfg(not(any(feature = "log_backend", feature = "tracing_backend")))]
        {
            let _ = format_args!($($expr)*);
        }
    };
}

macro_rules! generic_info {
    ($($expr:tt)*) => {
        #[cfg(feature = "log_backend")]
        log::info!($($expr)*);
        #[cfg(feature = "tracing_backend")]
        tracing::info!($($expr)*);
        #[cfg(not(any(feature = "log_backend", feature = "tracing_backend")))]
        {
            let _ = format_args!($($expr)*);
        }
    };
}

macro_rules! generic_debug {
    ($($expr:tt)*) => {
        #[cfg(feature = "log_backend")]
        log::debug!($($expr)*);
        #[cfg(feature = "tracing_backend")]
        tracing::debug!($($expr)*);
        #[cfg(not(any(feature = "log_backend", feature = "tracing_backend")))]
        {
            let _ = format_args!($($expr)*);
        }
    };
}

pub(crate) use {generic_debug, generic_error, generic_info, generic_warn};
