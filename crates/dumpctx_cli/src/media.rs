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
use crate::args::GlobalOptions;
use anyhow::Error;
use dumpctx::{InternalProgram, MediaType, SettingsMap};
use indexmap::IndexMap;
use strum::IntoEnumIterator;

/// Return true if `program` has a dumping command for `media_type`.
fn is_dumpable(program: InternalProgram, media_type: MediaType) -> bool {
    program
        .from_settings(None, Some(media_type), None, "", None, &SettingsMap::new())
        .is_capable()
}

pub(crate) fn run(global: &GlobalOptions, program: InternalProgram) -> Result<(), Error> {
    let mut by_extension: IndexMap<&'static str, Vec<MediaType>> = IndexMap::new();
    for media_type in MediaType::iter() {
        by_extension.entry(media_type.extension()).or_default().push(media_type);
    }

    for (extension, media_types) in &by_extension {
        println!("{}:", extension);
        for media_type in media_types {
            let marker = if is_dumpable(program, *media_type) { "*" } else { " " };
            println!(" {} {:<8} {}", marker, media_type.short_name(), media_type.long_name());
        }
    }

    if !global.silent {
        println!();
        println!("* = can be dumped with {}", program);
    }
    Ok(())
}
