//! Logging shims: forwarded to `defmt` when the feature is enabled, compiled out otherwise.
#![allow(unused_macros)]

#[cfg(feature = "defmt")]
macro_rules! trace {
    ($($arg:tt)+) => {
        ::defmt::trace!($($arg)+)
    };
}

#[cfg(feature = "defmt")]
macro_rules! debug {
    ($($arg:tt)+) => {
        ::defmt::debug!($($arg)+)
    };
}

#[cfg(feature = "defmt")]
macro_rules! warn {
    ($($arg:tt)+) => {
        ::defmt::warn!($($arg)+)
    };
}

#[cfg(not(feature = "defmt"))]
macro_rules! trace {
    ($s:literal $(, $x:expr)* $(,)?) => {{
        #[allow(unused_parens)]
        let _ = ($(&$x),*);
    }};
}

#[cfg(not(feature = "defmt"))]
macro_rules! debug {
    ($s:literal $(, $x:expr)* $(,)?) => {{
        #[allow(unused_parens)]
        let _ = ($(&$x),*);
    }};
}

#[cfg(not(feature = "defmt"))]
macro_rules! warn {
    ($s:literal $(, $x:expr)* $(,)?) => {{
        #[allow(unused_parens)]
        let _ = ($(&$x),*);
    }};
}
