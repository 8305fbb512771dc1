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

//! Typed command line inputs.
//!
//! An [Input] is a named, optionally required value cell. Every input has a long name (such as
//! `--drive`), an optional short alias (such as `-h`), and a value of one [InputKind]. An input
//! knows how to render itself into a command line token and how to claim tokens from a split
//! parameter string.
//!
//! The kinds are dispatched by enum, with the per-kind rendering and parsing rules living in the
//! [flag], [string] and [numeric] submodules.

pub mod flag;
pub mod numeric;
pub mod string;

use std::fmt::{self, Display, Formatter};

/// The kind of value an [Input] holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputKind {
    /// A boolean switch. Present on the command line or not, never followed by a value.
    Flag,
    /// Free text, optionally wrapped in double quotes when rendered.
    String,
    /// A signed 32-bit integer.
    Int32,
    /// An unsigned byte, 0-255.
    UInt8,
}

impl Display for InputKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            InputKind::Flag => write!(f, "flag"),
            InputKind::String => write!(f, "string"),
            InputKind::Int32 => write!(f, "int32"),
            InputKind::UInt8 => write!(f, "uint8"),
        }
    }
}

/// The current value of an [Input]. `None` is the absent state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum InputValue {
    Flag(Option<bool>),
    String(Option<String>),
    Int32(Option<i32>),
    UInt8(Option<u8>),
}

impl InputValue {
    fn kind(&self) -> InputKind {
        match self {
            InputValue::Flag(_) => InputKind::Flag,
            InputValue::String(_) => InputKind::String,
            InputValue::Int32(_) => InputKind::Int32,
            InputValue::UInt8(_) => InputKind::UInt8,
        }
    }

    fn empty(kind: InputKind) -> Self {
        match kind {
            InputKind::Flag => InputValue::Flag(None),
            InputKind::String => InputValue::String(None),
            InputKind::Int32 => InputValue::Int32(None),
            InputKind::UInt8 => InputValue::UInt8(None),
        }
    }
}

/// A named command line input holding an optional value.
///
/// The names, requiredness and quoting policy are fixed once the input has been built; only the
/// value changes afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Input {
    name: &'static str,
    short_name: Option<&'static str>,
    required: bool,
    quotes: bool,
    value: InputValue,
}

impl Input {
    fn new(name: &'static str, kind: InputKind) -> Self {
        Self {
            name,
            short_name: None,
            required: false,
            quotes: false,
            value: InputValue::empty(kind),
        }
    }

    /// Create a boolean [InputKind::Flag] input.
    pub fn flag(name: &'static str) -> Self {
        Self::new(name, InputKind::Flag)
    }

    /// Create a free text [InputKind::String] input.
    pub fn string(name: &'static str) -> Self {
        Self::new(name, InputKind::String)
    }

    /// Create a signed [InputKind::Int32] input.
    pub fn int32(name: &'static str) -> Self {
        Self::new(name, InputKind::Int32)
    }

    /// Create an unsigned byte [InputKind::UInt8] input.
    pub fn uint8(name: &'static str) -> Self {
        Self::new(name, InputKind::UInt8)
    }

    /// Set the short alias accepted in addition to the long name.
    pub fn with_short(mut self, short_name: &'static str) -> Self {
        self.short_name = Some(short_name);
        self
    }

    /// Mark the input as required.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Wrap string values in double quotes when rendering. Has no effect on other kinds.
    pub fn with_quotes(mut self, quotes: bool) -> Self {
        self.quotes = quotes;
        self
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn short_name(&self) -> Option<&'static str> {
        self.short_name
    }

    #[inline]
    pub fn required(&self) -> bool {
        self.required
    }

    #[inline]
    pub fn quotes(&self) -> bool {
        self.quotes
    }

    #[inline]
    pub fn kind(&self) -> InputKind {
        self.value.kind()
    }

    /// Return every name this input answers to, long name first.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.name).chain(self.short_name)
    }

    /// Return true if the input holds a value that would be rendered on a command line.
    /// A flag holding `false` and a string holding an empty value count as unset.
    pub fn is_set(&self) -> bool {
        match &self.value {
            InputValue::Flag(v) => *v == Some(true),
            InputValue::String(v) => v.as_deref().is_some_and(|s| !s.is_empty()),
            InputValue::Int32(v) => v.is_some(),
            InputValue::UInt8(v) => v.is_some(),
        }
    }

    /// Reset the input to the absent state.
    pub fn clear_value(&mut self) {
        self.value = InputValue::empty(self.kind());
    }

    /// Render the input as a command line fragment, or an empty string if it has no value.
    ///
    /// When `use_equals` is set, value-bearing inputs render as `name=value`; otherwise as
    /// `name value`.
    pub fn format(&self, use_equals: bool) -> String {
        match &self.value {
            InputValue::Flag(v) => flag::format(self.name, *v),
            InputValue::String(v) => string::format(self.name, v.as_deref(), self.quotes, use_equals),
            InputValue::Int32(v) => numeric::format(self.name, *v, use_equals),
            InputValue::UInt8(v) => numeric::format(self.name, *v, use_equals),
        }
    }

    /// Try to claim the token at `parts[*index]`.
    ///
    /// Returns false, leaving both the value and `index` untouched, if `index` is out of bounds,
    /// if the token names a different input, or if a value-bearing input cannot find a usable
    /// value. On success `index` is left on the last token consumed: a flag or a `name=value`
    /// token leaves it where it was, a `name value` pair moves it to the value token. The caller
    /// steps past it.
    pub fn process<S: AsRef<str>>(&mut self, parts: &[S], index: &mut usize) -> bool {
        let Some(token) = parts.get(*index).map(|p| p.as_ref()) else {
            return false;
        };

        if self.kind() == InputKind::Flag {
            // Flags are single-token: `--flag=value` is not a flag match
            if !self.names_match(token) {
                return false;
            }
            self.value = InputValue::Flag(Some(true));
            return true;
        }

        let (raw, consumed) = if let Some(joined) = self.split_equals(token) {
            (joined, 0)
        }
        else if self.names_match(token) {
            match parts.get(*index + 1) {
                Some(next) => (next.as_ref(), 1),
                None => {
                    log::trace!("Input::process(): {} has no value token following it", self.name);
                    return false;
                }
            }
        }
        else {
            return false;
        };

        let claimed = match &mut self.value {
            InputValue::String(v) => {
                *v = Some(string::unquote(raw).to_string());
                true
            }
            InputValue::Int32(v) => numeric::parse::<i32>(raw).map(|n| *v = Some(n)).is_some(),
            InputValue::UInt8(v) => numeric::parse::<u8>(raw).map(|n| *v = Some(n)).is_some(),
            InputValue::Flag(_) => false,
        };

        if claimed {
            *index += consumed;
        }
        else {
            log::debug!("Input::process(): value '{}' is not a valid {} for {}", raw, self.kind(), self.name);
        }
        claimed
    }

    fn names_match(&self, token: &str) -> bool {
        token == self.name || self.short_name.is_some_and(|s| token == s)
    }

    /// If `token` has the form `name=value` for one of our names, return the value part.
    fn split_equals<'a>(&self, token: &'a str) -> Option<&'a str> {
        self.names()
            .find_map(|name| token.strip_prefix(name).and_then(|rest| rest.strip_prefix('=')))
    }

    /// Set a flag input. Returns false if this is not a flag input.
    pub fn set_flag(&mut self, value: bool) -> bool {
        match &mut self.value {
            InputValue::Flag(v) => {
                *v = Some(value);
                true
            }
            _ => self.kind_mismatch(InputKind::Flag),
        }
    }

    /// Set a string input. Returns false if this is not a string input.
    pub fn set_string(&mut self, value: impl Into<String>) -> bool {
        match &mut self.value {
            InputValue::String(v) => {
                *v = Some(value.into());
                true
            }
            _ => self.kind_mismatch(InputKind::String),
        }
    }

    /// Set or clear a signed integer input. Returns false if this is not an int32 input.
    pub fn set_int32(&mut self, value: Option<i32>) -> bool {
        match &mut self.value {
            InputValue::Int32(v) => {
                *v = value;
                true
            }
            _ => self.kind_mismatch(InputKind::Int32),
        }
    }

    /// Set an unsigned byte input from a wider integer.
    ///
    /// Values outside 0-255 are rejected and leave the input as it was. Returns true only if the
    /// value was stored.
    pub fn set_uint8(&mut self, value: i32) -> bool {
        let name = self.name;
        match &mut self.value {
            InputValue::UInt8(v) => match u8::try_from(value) {
                Ok(byte) => {
                    *v = Some(byte);
                    true
                }
                Err(_) => {
                    log::warn!("Input::set_uint8(): {} is out of range for {}", value, name);
                    false
                }
            },
            _ => self.kind_mismatch(InputKind::UInt8),
        }
    }

    fn kind_mismatch(&self, wanted: InputKind) -> bool {
        log::warn!(
            "Input: attempted to set {} value on {} input {}",
            wanted,
            self.kind(),
            self.name
        );
        false
    }

    pub fn flag_value(&self) -> Option<bool> {
        match &self.value {
            InputValue::Flag(v) => *v,
            _ => None,
        }
    }

    pub fn string_value(&self) -> Option<&str> {
        match &self.value {
            InputValue::String(v) => v.as_deref(),
            _ => None,
        }
    }

    pub fn int32_value(&self) -> Option<i32> {
        match &self.value {
            InputValue::Int32(v) => *v,
            _ => None,
        }
    }

    pub fn uint8_value(&self) -> Option<u8> {
        match &self.value {
            InputValue::UInt8(v) => *v,
            _ => None,
        }
    }

    /// Return the logical value as display text, or `None` if the input is unset.
    pub fn value_string(&self) -> Option<String> {
        if !self.is_set() {
            return None;
        }
        match &self.value {
            InputValue::Flag(v) => v.map(|b| b.to_string()),
            InputValue::String(v) => v.clone(),
            InputValue::Int32(v) => v.map(|n| n.to_string()),
            InputValue::UInt8(v) => v.map(|n| n.to_string()),
        }
    }
}

impl Display for Input {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self.short_name {
            Some(short) => write!(f, "{} ({}) [{}]", self.name, short, self.kind()),
            None => write!(f, "{} [{}]", self.name, self.kind()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(s: &[&str]) -> Vec<String> {
        s.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_flag_format() {
        let mut input = Input::flag("--verbose");
        assert_eq!(input.format(true), "");
        input.set_flag(false);
        assert_eq!(input.format(true), "");
        input.set_flag(true);
        assert_eq!(input.format(true), "--verbose");
        assert_eq!(input.format(false), "--verbose");
    }

    #[test]
    fn test_flag_process_short_name() {
        let mut input = Input::flag("--help").with_short("-h");
        let tokens = parts(&["cd", "-h"]);
        let mut index = 1;
        assert!(input.process(&tokens, &mut index));
        assert_eq!(index, 1);
        assert_eq!(input.flag_value(), Some(true));
    }

    #[test]
    fn test_process_out_of_bounds() {
        let mut input = Input::flag("--verbose");
        let tokens = parts(&["--verbose"]);
        let mut index = 1;
        assert!(!input.process(&tokens, &mut index));
        assert_eq!(index, 1);
        assert!(!input.is_set());
    }

    #[test]
    fn test_string_quotes() {
        let mut input = Input::string("--name").with_quotes(true);
        input.set_string("My Disc");
        assert_eq!(input.format(false), "--name \"My Disc\"");
        assert_eq!(input.format(true), "--name=\"My Disc\"");

        let mut parsed = Input::string("--name").with_quotes(true);
        let tokens = parts(&["--name", "\"My Disc\""]);
        let mut index = 0;
        assert!(parsed.process(&tokens, &mut index));
        assert_eq!(index, 1);
        assert_eq!(parsed.string_value(), Some("My Disc"));
    }

    #[test]
    fn test_string_equals_form() {
        let mut input = Input::string("--image-path").with_quotes(true);
        let tokens = parts(&["--image-path=\"C:\\My Dumps\""]);
        let mut index = 0;
        assert!(input.process(&tokens, &mut index));
        assert_eq!(index, 0);
        assert_eq!(input.string_value(), Some("C:\\My Dumps"));
    }

    #[test]
    fn test_string_missing_value() {
        let mut input = Input::string("--drive");
        let tokens = parts(&["--drive"]);
        let mut index = 0;
        assert!(!input.process(&tokens, &mut index));
        assert_eq!(index, 0);
        assert!(!input.is_set());
    }

    #[test]
    fn test_empty_string_renders_nothing() {
        let mut input = Input::string("--drive");
        input.set_string("");
        assert_eq!(input.format(true), "");
        assert!(!input.is_set());
    }

    #[test]
    fn test_int32_process() {
        let mut input = Input::int32("--speed");
        let tokens = parts(&["--speed", "abc", "--speed", "-8"]);
        let mut index = 0;
        assert!(!input.process(&tokens, &mut index));
        assert_eq!(index, 0);
        assert_eq!(input.int32_value(), None);

        index = 2;
        assert!(input.process(&tokens, &mut index));
        assert_eq!(index, 3);
        assert_eq!(input.int32_value(), Some(-8));
        assert_eq!(input.format(true), "--speed=-8");
        assert_eq!(input.format(false), "--speed -8");
    }

    #[test]
    fn test_uint8_bounds() {
        let mut input = Input::uint8("--skip-fill");
        assert!(!input.set_uint8(256));
        assert_eq!(input.uint8_value(), None);
        assert!(!input.set_uint8(-1));
        assert_eq!(input.uint8_value(), None);
        assert!(input.set_uint8(0));
        assert_eq!(input.uint8_value(), Some(0));
        assert!(input.set_uint8(255));
        assert_eq!(input.uint8_value(), Some(255));

        // An out of range set does not disturb the stored value
        assert!(!input.set_uint8(300));
        assert_eq!(input.uint8_value(), Some(255));
    }

    #[test]
    fn test_uint8_process_rejects_out_of_range() {
        let mut input = Input::uint8("--skip-fill");
        let tokens = parts(&["--skip-fill", "256"]);
        let mut index = 0;
        assert!(!input.process(&tokens, &mut index));
        assert_eq!(input.uint8_value(), None);
    }

    #[test]
    fn test_kind_mismatch_is_noop() {
        let mut input = Input::int32("--retries");
        assert!(!input.set_string("12"));
        assert!(!input.set_flag(true));
        assert!(!input.is_set());
    }

    #[test]
    fn test_clear_value_idempotent() {
        let mut input = Input::int32("--retries");
        input.set_int32(Some(20));
        input.clear_value();
        input.clear_value();
        assert!(!input.is_set());
        assert_eq!(input.format(true), "");
        assert_eq!(input.kind(), InputKind::Int32);
    }
}
