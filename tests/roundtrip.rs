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
mod common;

use common::{
    capable_contexts,
    full_settings,
    init,
    roundtrip::{assert_idempotent, assert_round_trip},
};
use dumpctx::prelude::*;

#[test]
fn test_round_trip_default_settings() {
    init();
    let contexts = capable_contexts(InternalProgram::Redumper, &SettingsMap::new());
    assert!(!contexts.is_empty());

    for (media_type, system, mut context) in contexts {
        println!("Round trip for {:?} / {:?}", media_type, system);
        assert!(context.is_dumping_command());
        assert_round_trip(context.as_mut());
    }
}

#[test]
fn test_round_trip_full_settings() {
    init();
    let settings = full_settings();
    for (media_type, system, mut context) in capable_contexts(InternalProgram::Redumper, &settings) {
        println!("Round trip for {:?} / {:?}", media_type, system);
        assert_round_trip(context.as_mut());
    }
}

#[test]
fn test_generate_parse_idempotent() {
    init();
    for (_, _, mut context) in capable_contexts(InternalProgram::Redumper, &full_settings()) {
        assert_idempotent(context.as_mut());
    }
}

#[test]
fn test_round_trip_handwritten() {
    init();
    let parameters = [
        "cd refine --drive=/dev/sr0 --speed=8 --retries=100 --image-path=\"/home/user/my dumps\" --image-name=\"disc\"",
        "dvd --verbose --drive=F: --image-name=\"track\" --lba-start=-45150 --lba-end=0",
        "cd skeleton --drive=E: --image-name=\"game\" --force-offset=+48 --skip-fill=170 --skip=\"100-200\"",
        "verify hash info --image-path=\"C:\\dumps\" --image-name=\"track\"",
    ];

    for parameters in parameters {
        let mut context = InternalProgram::Redumper.from_parameters(Some(parameters));
        assert!(context.is_valid(), "{}: {:?}", parameters, context.parse_error());
        assert_round_trip(context.as_mut());
    }
}
