// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrapper for [`pretty_assertions::assert_eq`!] macro.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// Format the arguments into a [`crate::InlineString`], which stays on the stack for
/// short strings (like SGR parameter lists and css class names).
///
/// # Example
///
/// ```
/// use r3bl_markup::inline_string;
/// let it = inline_string!("{};{}", 1, 31);
/// assert_eq!(it.as_str(), "1;31");
/// ```
#[macro_export]
macro_rules! inline_string {
    ($($format:tt)*) => {{
        use std::fmt::Write as _;
        let mut acc = $crate::InlineString::new();
        // We don't care about the result of this operation.
        _ = write!(&mut acc, $($format)*);
        acc
    }};
}
