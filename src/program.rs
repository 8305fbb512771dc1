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

//! The dumping programs dumpctx can build command lines for.

use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use strum::IntoEnumIterator;

use crate::{
    context::ExecutionContext,
    redumper::RedumperContext,
    settings::SettingsStore,
    types::{MediaType, RedumpSystem},
};

/// A dumping program with an [ExecutionContext] implementation.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InternalProgram {
    Redumper,
}

impl InternalProgram {
    /// Build a context for this program by parsing an existing command line. Check
    /// [ExecutionContext::is_valid] before using the result.
    pub fn from_parameters(&self, parameters: Option<&str>) -> Box<dyn ExecutionContext> {
        match self {
            InternalProgram::Redumper => Box::new(RedumperContext::from_parameters(parameters)),
        }
    }

    /// Build a context for this program from a drive, an output filename and settings. Check
    /// [ExecutionContext::is_capable] before treating the result as a dump request.
    pub fn from_settings(
        &self,
        system: Option<RedumpSystem>,
        media_type: Option<MediaType>,
        drive_path: Option<&str>,
        filename: &str,
        drive_speed: Option<i32>,
        settings: &dyn SettingsStore,
    ) -> Box<dyn ExecutionContext> {
        match self {
            InternalProgram::Redumper => Box::new(RedumperContext::from_settings(
                system,
                media_type,
                drive_path,
                filename,
                drive_speed,
                settings,
            )),
        }
    }

    /// Return the name of the program's executable, without extension.
    pub fn executable_name(&self) -> &'static str {
        match self {
            InternalProgram::Redumper => "redumper",
        }
    }
}

impl Display for InternalProgram {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            InternalProgram::Redumper => write!(f, "Redumper"),
        }
    }
}

impl FromStr for InternalProgram {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        InternalProgram::iter()
            .find(|p| p.executable_name().eq_ignore_ascii_case(input))
            .ok_or_else(|| format!("Unknown program '{}'", input))
    }
}
