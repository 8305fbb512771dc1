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

//! Split a parameter string into command line tokens.
//!
//! Tokens are separated by whitespace, except that whitespace inside a pair of double quotes does
//! not split. Quote characters are kept in the token; inputs strip them when they store a value.
//! A token may mix quoted and unquoted runs, so `--image-path="C:\My Dumps"` is one token.

use once_cell::sync::Lazy;
use regex::Regex;

static TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| {
    // An unterminated quote falls through to the lone `"` alternative and is kept as text.
    Regex::new(r#"(?:[^\s"]+|"[^"]*"|")+"#).expect("token pattern is valid")
});

/// Split `parameters` into tokens, keeping quoted substrings together.
pub fn split_parameter_string(parameters: &str) -> Vec<String> {
    TOKEN_REGEX
        .find_iter(parameters)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_plain() {
        assert_eq!(
            split_parameter_string("cd skeleton  --drive=E: --speed=8"),
            vec!["cd", "skeleton", "--drive=E:", "--speed=8"]
        );
    }

    #[test]
    fn test_split_quoted() {
        assert_eq!(
            split_parameter_string(r#"dvd --image-path="C:\My Dumps" --image-name "My Disc""#),
            vec!["dvd", r#"--image-path="C:\My Dumps""#, "--image-name", r#""My Disc""#]
        );
    }

    #[test]
    fn test_split_unterminated_quote() {
        assert_eq!(
            split_parameter_string(r#"--image-name "My Disc"#),
            vec!["--image-name", r#""My"#, "Disc"]
        );
    }

    #[test]
    fn test_split_empty() {
        assert!(split_parameter_string("").is_empty());
        assert!(split_parameter_string("   \t ").is_empty());
    }
}
