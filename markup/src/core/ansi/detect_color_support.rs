// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{env,
          sync::atomic::{AtomicI8, Ordering}};

/// # Terminal color support detection
///
/// Detection reads environment variables, so the result is memoized. An explicit
/// override takes precedence over both the cache and detection.
///
/// ```rust
/// use r3bl_markup::{global_color_support, ColorSupport};
///
/// global_color_support::set_override(ColorSupport::NoColor);
/// assert_eq!(global_color_support::detect(), ColorSupport::NoColor);
/// global_color_support::clear_override();
/// ```
///
/// ## Global variables
///
/// - `COLOR_SUPPORT_GLOBAL`: explicit override values (highest priority)
/// - `COLOR_SUPPORT_CACHED`: memoized detection results
pub mod global_color_support {
    use super::{AtomicI8, ColorSupport, Ordering, Stream,
                examine_env_vars_to_determine_color_support};

    static COLOR_SUPPORT_GLOBAL: AtomicI8 = AtomicI8::new(NOT_SET_VALUE);

    static COLOR_SUPPORT_CACHED: AtomicI8 = AtomicI8::new(NOT_SET_VALUE);

    const NOT_SET_VALUE: i8 = -1;

    /// Determine what kind of color the client (stdout) can display.
    ///
    /// 1. If [`set_override`] was called, return that value.
    /// 2. If detection was previously run, return the cached result.
    /// 3. Otherwise run detection once and cache the result.
    #[must_use]
    pub fn detect() -> ColorSupport {
        if let Ok(it) = try_get_override() {
            return it;
        }

        if let Ok(cached) = try_get_cached() {
            return cached;
        }

        let detected = examine_env_vars_to_determine_color_support(Stream::Stdout);
        set_cached(detected);
        detected
    }

    /// Override the color support. Regardless of the value of the environment variables
    /// the value you set here will be used when you call [`detect()`].
    ///
    /// # Testing support
    ///
    /// Any test that calls this function must be annotated with `#[serial]` (from the
    /// [serial_test](https://crates.io/crates/serial_test) crate), since tests run in
    /// parallel.
    pub fn set_override(value: ColorSupport) {
        COLOR_SUPPORT_GLOBAL.store(i8::from(value), Ordering::Release);
    }

    pub fn clear_override() { COLOR_SUPPORT_GLOBAL.store(NOT_SET_VALUE, Ordering::Release); }

    /// Clear the cached detection result, forcing re-detection on next call.
    pub fn clear_cache() { COLOR_SUPPORT_CACHED.store(NOT_SET_VALUE, Ordering::Release); }

    /// # Errors
    ///
    /// Returns `Err(())` if no cached value has been set yet.
    #[allow(clippy::result_unit_err)]
    pub fn try_get_cached() -> Result<ColorSupport, ()> {
        ColorSupport::try_from(COLOR_SUPPORT_CACHED.load(Ordering::Acquire))
    }

    pub fn set_cached(value: ColorSupport) {
        COLOR_SUPPORT_CACHED.store(i8::from(value), Ordering::Release);
    }

    /// # Errors
    ///
    /// Returns `Err(())` if no override value has been set.
    #[allow(clippy::result_unit_err)]
    pub fn try_get_override() -> Result<ColorSupport, ()> {
        ColorSupport::try_from(COLOR_SUPPORT_GLOBAL.load(Ordering::Acquire))
    }
}

/// Determine whether color is supported heuristically, based on environment variables.
/// Call [`global_color_support::detect()`] instead, which caches the result.
///
/// 1. Explicit color disabling (`NO_COLOR`, `TERM=dumb`) or not a TTY (unless
///    `IGNORE_IS_TERMINAL` is set) means no color.
/// 2. `COLORTERM=truecolor` or `COLORTERM=24bit` means truecolor.
/// 3. A `TERM` ending in `256color` means the 256-color palette.
/// 4. Any other ANSI-ish `TERM`, `COLORTERM`, `CLICOLOR`, or running in CI means the
///    16-color palette.
#[must_use]
pub fn examine_env_vars_to_determine_color_support(stream: Stream) -> ColorSupport {
    if helpers::env_no_color()
        || env::var("TERM").is_ok_and(|v| v == "dumb")
        || !(helpers::is_a_tty(stream)
            || env::var("IGNORE_IS_TERMINAL").is_ok_and(|v| v != "0"))
    {
        return ColorSupport::NoColor;
    }

    if env::var("COLORTERM").is_ok_and(|v| v == "truecolor" || v == "24bit") {
        return ColorSupport::Truecolor;
    }

    if env::var("TERM").is_ok_and(|term| helpers::check_256_color(&term)) {
        return ColorSupport::Ansi256;
    }

    if env::var("COLORTERM").is_ok()
        || env::var("TERM").is_ok_and(|term| helpers::check_ansi_color(&term))
        || env::var("CLICOLOR").is_ok_and(|v| v != "0")
        || is_ci::uncached()
    {
        return ColorSupport::Ansi16;
    }

    ColorSupport::NoColor
}

/// The stream to check for color support.
#[derive(Clone, Copy, Debug)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// The result of the color support check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSupport {
    Truecolor,
    Ansi256,
    Ansi16,
    NoColor,
}

/// These trait implementations allow us to use `ColorSupport` and `i8` interchangeably.
mod convert_between_color_and_i8 {
    impl TryFrom<i8> for super::ColorSupport {
        type Error = ();

        #[rustfmt::skip]
        fn try_from(value: i8) -> Result<Self, Self::Error> {
            match value {
                1 => Ok(super::ColorSupport::Ansi256),
                2 => Ok(super::ColorSupport::Truecolor),
                3 => Ok(super::ColorSupport::NoColor),
                4 => Ok(super::ColorSupport::Ansi16),
                _ => Err(()),
            }
        }
    }

    impl From<super::ColorSupport> for i8 {
        #[rustfmt::skip]
        fn from(value: super::ColorSupport) -> Self {
            match value {
                super::ColorSupport::Ansi256   => 1,
                super::ColorSupport::Truecolor => 2,
                super::ColorSupport::NoColor   => 3,
                super::ColorSupport::Ansi16    => 4,
            }
        }
    }
}

mod helpers {
    use super::{Stream, env};

    #[must_use]
    pub fn is_a_tty(stream: Stream) -> bool {
        use std::io::IsTerminal;
        match stream {
            Stream::Stdout => std::io::stdout().is_terminal(),
            Stream::Stderr => std::io::stderr().is_terminal(),
        }
    }

    #[must_use]
    pub fn check_256_color(term: &str) -> bool {
        term.ends_with("256") || term.ends_with("256color")
    }

    #[must_use]
    pub fn check_ansi_color(term: &str) -> bool {
        term.starts_with("screen")
            || term.starts_with("vscode")
            || term.starts_with("xterm")
            || term.starts_with("vt100")
            || term.starts_with("vt220")
            || term.starts_with("rxvt")
            || term.contains("color")
            || term.contains("ansi")
            || term.contains("cygwin")
            || term.contains("linux")
    }

    #[must_use]
    pub fn env_no_color() -> bool {
        match env::var("NO_COLOR").as_deref() {
            Ok("0") | Err(_) => false,
            Ok(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case(ColorSupport::Truecolor)]
    #[test_case(ColorSupport::Ansi256)]
    #[test_case(ColorSupport::Ansi16)]
    #[test_case(ColorSupport::NoColor)]
    #[serial]
    fn test_override_cycle(value: ColorSupport) {
        global_color_support::set_override(value);
        assert_eq2!(global_color_support::try_get_override(), Ok(value));
        assert_eq2!(global_color_support::detect(), value);
        global_color_support::clear_override();
        assert_eq2!(global_color_support::try_get_override(), Err(()));
    }

    #[test]
    #[serial]
    fn test_cache_is_used_when_no_override() {
        global_color_support::clear_override();
        global_color_support::set_cached(ColorSupport::Ansi256);
        assert_eq2!(global_color_support::detect(), ColorSupport::Ansi256);
        global_color_support::clear_cache();
        assert_eq2!(global_color_support::try_get_cached(), Err(()));
    }

    #[test]
    fn test_i8_conversion_rejects_unknown_values() {
        assert_eq2!(ColorSupport::try_from(-1), Err(()));
        assert_eq2!(ColorSupport::try_from(9), Err(()));
    }

    #[test_case("xterm-256color", true)]
    #[test_case("screen-256", true)]
    #[test_case("xterm", false)]
    fn test_check_256_color(term: &str, expected: bool) {
        assert_eq2!(helpers::check_256_color(term), expected);
    }
}
