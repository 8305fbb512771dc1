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

pub mod args;

const NOT_SET: &str = "(not set)";

pub(crate) fn run(global: &GlobalOptions, params: &args::ParseParams) -> Result<(), Error> {
    let mut context = params.program.from_parameters(Some(&params.parameters));

    if let Some(e) = context.parse_error() {
        return Err(Error::new(e.clone()).context(format!("Couldn't parse {} parameters", params.program)));
    }

    let regenerated = context.generate_parameters();
    if global.silent {
        println!("{}", regenerated);
        return Ok(());
    }

    let modes = context.modes().join(" ");
    println!("Program:      {}", context.program());
    println!("Modes:        {}", if modes.trim().is_empty() { NOT_SET } else { modes.as_str() });
    println!("Dumping:      {}", context.is_dumping_command());
    println!("Drive:        {}", context.input_path().as_deref().unwrap_or(NOT_SET));
    println!(
        "Speed:        {}",
        context.speed().map(|s| s.to_string()).as_deref().unwrap_or(NOT_SET)
    );
    println!("Output image: {}", context.output_path().as_deref().unwrap_or(NOT_SET));
    println!();

    println!("Inputs:");
    println!("{}", "-".repeat(79));
    for input in context.table().set_inputs() {
        println!("  {:<28} {}", input.name(), input.value_string().unwrap_or_default());
    }
    println!();

    println!("Regenerated:  {}", regenerated);
    Ok(())
}
