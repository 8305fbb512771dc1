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
use crate::{args::GlobalOptions, settings::load_settings};
use anyhow::{bail, Context, Error};
use dumpctx::ContextError;

pub mod args;

/// Normalize an `--input` value to the flag spelling used on the program's command line.
fn input_assignment(input: &str) -> String {
    if input.starts_with('-') {
        input.to_string()
    }
    else {
        format!("--{}", input)
    }
}

pub(crate) fn run(global: &GlobalOptions, params: &args::GenerateParams) -> Result<(), Error> {
    let settings = load_settings(&params.settings)?;

    let mut context = params.program.from_settings(
        params.system,
        Some(params.media_type),
        params.drive.as_deref(),
        params.out_file.as_deref().unwrap_or_default(),
        params.speed,
        &settings,
    );

    if !context.is_capable() {
        let warning = ContextError::UnsupportedMediaType(params.media_type.to_string());
        log::warn!("generate::run(): {} cannot dump {}", params.program, params.media_type);
        if !global.silent {
            eprintln!("Warning: {}", warning);
        }
    }

    for input in &params.inputs {
        let assignment = input_assignment(input);
        let name = context
            .table_mut()
            .apply(&assignment)
            .with_context(|| format!("Couldn't set input '{}'", input))?;
        log::debug!("generate::run(): set {} from '{}'", name, assignment);
    }

    let missing = context.missing_required();
    if !missing.is_empty() {
        bail!("Missing required inputs: {}", missing.join(", "));
    }

    let parameters = context.generate_parameters();
    if params.with_exe {
        println!("{} {}", params.program.executable_name(), parameters);
    }
    else {
        println!("{}", parameters);
    }

    if !global.silent {
        match context.output_path() {
            Some(path) => eprintln!("Output image: {}", path),
            None => eprintln!("Output image: not determined"),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_assignment() {
        assert_eq!(input_assignment("overwrite"), "--overwrite");
        assert_eq!(input_assignment("lba-start=100"), "--lba-start=100");
        assert_eq!(input_assignment("--skip=1-2"), "--skip=1-2");
        assert_eq!(input_assignment("-h"), "-h");
    }
}
