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

//! # dumpctx
//!
//! dumpctx models the command lines of external disc dumping programs. A single structured
//! model - an [ExecutionContext] - can be turned into a command line with
//! [ExecutionContext::generate_parameters], and an existing command line can be turned back
//! into the same model with [ExecutionContext::parse].
//!
//! Each dumping program is described by a backend: a table of the [Input]s it understands and a
//! policy deciding which modes apply to a given [MediaType] and [RedumpSystem]. The only backend
//! currently implemented is [redumper].
//!
//! dumpctx never launches the dumping program and never inspects its output.

pub mod context;
pub mod input;
pub mod program;
pub mod redumper;
pub mod settings;
pub mod table;
pub mod tokenizer;
pub mod types;

use thiserror::Error;

pub type DumpHashMap<K, V> = std::collections::HashMap<K, V>;

/// Errors produced while building or parsing an execution context.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ContextError {
    #[error("The parameter string was empty")]
    EmptyParameters,
    #[error("Invalid mode or unexpected bare token: {0}")]
    InvalidMode(String),
    #[error("The media type is not supported by this program: {0}")]
    UnsupportedMediaType(String),
    #[error("The flag is not known to this program: {0}")]
    UnknownFlag(String),
    #[error("The value could not be used for this flag: {0}")]
    InvalidValue(String),
    #[error("A settings value could not be used: {0}")]
    SettingsError(String),
    #[error("An input name was declared more than once in a parameter table: {0}")]
    DuplicateInputName(String),
}

pub use crate::{
    context::ExecutionContext,
    input::{Input, InputKind},
    program::InternalProgram,
    settings::{SettingsMap, SettingsStore},
    table::ParameterTable,
    tokenizer::split_parameter_string,
    types::{MediaType, RedumpSystem, SystemCategory, SystemItem},
};

pub mod prelude {
    pub use crate::{
        context::ExecutionContext,
        input::{Input, InputKind},
        program::InternalProgram,
        settings::{SettingsMap, SettingsStore},
        types::{MediaType, RedumpSystem},
        ContextError,
    };
}
