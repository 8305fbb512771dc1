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

//! The parameter table: the set of [Input]s a dumping program understands.
//!
//! Entries are kept in declaration order, which is the order used when rendering a command
//! line. Parsing does not depend on the order, since every name in a table is unique.

use indexmap::IndexMap;

use crate::{input::Input, ContextError};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParameterTable {
    inputs: IndexMap<&'static str, Input>,
}

impl ParameterTable {
    /// Build a table from `inputs`, keyed by each input's long name.
    ///
    /// Every long name and short alias must be unique across the whole table; a repeated name
    /// would make it ambiguous which input claims a token.
    pub fn new(inputs: impl IntoIterator<Item = Input>) -> Result<Self, ContextError> {
        let mut table = IndexMap::new();
        for input in inputs {
            for name in input.names() {
                if table.values().any(|existing: &Input| existing.names().any(|n| n == name)) {
                    return Err(ContextError::DuplicateInputName(name.to_string()));
                }
            }
            // A short alias equal to the same input's long name is just as ambiguous
            if input.short_name() == Some(input.name()) {
                return Err(ContextError::DuplicateInputName(input.name().to_string()));
            }
            table.insert(input.name(), input);
        }
        Ok(Self { inputs: table })
    }

    /// Look up an input by its long name or short alias.
    pub fn get(&self, name: &str) -> Option<&Input> {
        match self.inputs.get(name) {
            Some(input) => Some(input),
            None => self.inputs.values().find(|i| i.short_name() == Some(name)),
        }
    }

    /// Look up an input by its long name or short alias, for modification.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Input> {
        let key = match self.inputs.get_key_value(name) {
            Some((key, _)) => *key,
            None => self.inputs.values().find(|i| i.short_name() == Some(name))?.name(),
        };
        self.inputs.get_mut(key)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Iterate over the inputs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Input> {
        self.inputs.values()
    }

    /// Return every long name and short alias in the table, in declaration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.inputs.values().flat_map(|i| i.names()).collect()
    }

    /// Iterate over the inputs that currently hold a value.
    pub fn set_inputs(&self) -> impl Iterator<Item = &Input> {
        self.inputs.values().filter(|i| i.is_set())
    }

    /// Return every input to the absent state.
    pub fn clear_values(&mut self) {
        for input in self.inputs.values_mut() {
            input.clear_value();
        }
    }

    /// Render every input that holds a value, in declaration order.
    pub fn format(&self, use_equals: bool) -> Vec<String> {
        self.inputs
            .values()
            .map(|i| i.format(use_equals))
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Apply a single `name` or `name=value` assignment, as it would appear on a command line.
    /// Returns the long name of the input that took the value.
    pub fn apply(&mut self, assignment: &str) -> Result<&'static str, ContextError> {
        let (name, value) = match assignment.split_once('=') {
            Some((name, value)) => (name.trim(), Some(value.trim())),
            None => (assignment.trim(), None),
        };

        let input = self
            .get_mut(name)
            .ok_or_else(|| ContextError::UnknownFlag(name.to_string()))?;

        let token = match value {
            Some(value) => format!("{}={}", input.name(), value),
            None => input.name().to_string(),
        };
        if input.process(std::slice::from_ref(&token), &mut 0) {
            Ok(input.name())
        }
        else {
            Err(ContextError::InvalidValue(assignment.to_string()))
        }
    }

    /// Offer the token at `parts[*index]` to each input in turn. The first input to claim it
    /// wins; its long name is returned and `index` is left on the last token it consumed.
    pub fn process<S: AsRef<str>>(&mut self, parts: &[S], index: &mut usize) -> Option<&'static str> {
        self.inputs
            .values_mut()
            .find_map(|input| input.process(parts, index).then(|| input.name()))
    }
}
