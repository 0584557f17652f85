// All engine events share the `carousel` target so hosts can filter them with one directive.

#[cfg(feature = "tracing")]
macro_rules! cevent {
    ($level:ident, $($tt:tt)*) => {
        tracing::event!(target: "carousel", tracing::Level::$level, $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! cevent {
    ($level:ident, $($tt:tt)*) => {};
}

/// Per-frame and remap detail.
macro_rules! ctrace {
    ($($tt:tt)*) => {
        cevent!(TRACE, $($tt)*)
    };
}

/// Slide starts, drag commits and transition overrides.
macro_rules! cdebug {
    ($($tt:tt)*) => {
        cevent!(DEBUG, $($tt)*)
    };
}

/// Host misuse that the engine tolerates.
macro_rules! cwarn {
    ($($tt:tt)*) => {
        cevent!(WARN, $($tt)*)
    };
}
