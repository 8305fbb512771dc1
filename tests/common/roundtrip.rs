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

//! Round trip checks: a generated command line, parsed back into a fresh context, must describe
//! the same invocation and generate the same command line again.

use dumpctx::prelude::*;

/// Return the name and rendered value of every input that holds a value.
pub fn set_values(context: &dyn ExecutionContext) -> Vec<(&'static str, String)> {
    context
        .table()
        .set_inputs()
        .map(|i| (i.name(), i.value_string().unwrap_or_default()))
        .collect()
}

pub fn assert_round_trip(context: &mut dyn ExecutionContext) {
    let generated = context.generate_parameters();
    println!("Generated: {}", generated);

    let mut parsed = context.program().from_parameters(Some(&generated));
    assert!(parsed.is_valid(), "failed to parse '{}': {:?}", generated, parsed.parse_error());

    assert_eq!(parsed.modes(), context.modes(), "modes differ for '{}'", generated);
    assert_eq!(set_values(parsed.as_ref()), set_values(context), "inputs differ for '{}'", generated);
    assert_eq!(parsed.generate_parameters(), generated);
}

pub fn assert_idempotent(context: &mut dyn ExecutionContext) {
    let first = context.generate_parameters();
    context.reset();
    assert_eq!(context.table().set_inputs().count(), 0);

    assert_eq!(context.parse(&first), Ok(()));
    assert_eq!(context.generate_parameters(), first);
}
