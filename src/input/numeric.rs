/*
    dumpctx

    Copyright 2024-2025 Daniel Balsom

    Permission is hereby granted, free of charge, to any person obtaining a
    copy of this software and associated documentation files (the “Software”),
    to deal in the Software without restriction, including without limitation
    the rights to use, copy, modify, merge, publish, distribute, sublicense,
    and/or sell copies of the Software, and to permit persons to whom the
    Software is furnished to do so, subject to the following conditions:

    The above copyright notice and this permission notice shall be included in
    all copies or substantial portions of the Software.

    THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
    IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
    FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
    AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
    LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
    FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
    DEALINGS IN THE SOFTWARE.

    --------------------------------------------------------------------------
*/

//! Rendering and parsing rules for integer inputs.

use std::{fmt::Display, str::FromStr};

/// Render an integer input. Absent values render as nothing.
pub(crate) fn format<T: Display>(name: &str, value: Option<T>, use_equals: bool) -> String {
    match value {
        Some(v) if use_equals => format!("{name}={v}"),
        Some(v) => format!("{name} {v}"),
        None => String::new(),
    }
}

/// Parse an integer value token. Surrounding quotes are tolerated; anything else that does not
/// parse as `T`, including values outside the range of `T`, yields `None`.
pub(crate) fn parse<T: FromStr>(token: &str) -> Option<T> {
    super::string::unquote(token.trim()).parse::<T>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        assert_eq!(format::<i32>("--speed", None, true), "");
        assert_eq!(format("--speed", Some(8), true), "--speed=8");
        assert_eq!(format("--speed", Some(8), false), "--speed 8");
    }

    #[test]
    fn test_parse() {
        assert_eq!(parse::<i32>("-12"), Some(-12));
        assert_eq!(parse::<i32>("\"40\""), Some(40));
        assert_eq!(parse::<i32>("twelve"), None);
        assert_eq!(parse::<u8>("255"), Some(255));
        assert_eq!(parse::<u8>("256"), None);
        assert_eq!(parse::<u8>("-1"), None);
    }
}
