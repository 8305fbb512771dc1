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

    tests/common/mod.rs

    Common support routines for tests
*/
#![allow(dead_code)]

pub mod roundtrip;

use dumpctx::prelude::*;
use strum::IntoEnumIterator;

pub const DRIVE: &str = "E:";
pub const OUT_FILE: &str = "C:\\My Dumps\\disc.bin";
pub const SPEED: i32 = 24;

pub fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Settings that switch on every optional flag the redumper backend derives from settings.
pub fn full_settings() -> SettingsMap {
    SettingsMap::new()
        .with("RedumperEnableVerbose", true)
        .with("RedumperEnableDebug", true)
        .with("RedumperReadMethod", "BE_CDDA")
        .with("RedumperSectorOrder", "DATA_C2_SUB")
        .with("RedumperUseGenericDriveType", true)
        .with("RedumperRereadCount", 7)
        .with("RedumperEnableLeadinRetry", true)
        .with("RedumperLeadinRetryCount", 6)
}

/// Build a context for every media type and system combination the program can dump.
pub fn capable_contexts(
    program: InternalProgram,
    settings: &dyn SettingsStore,
) -> Vec<(MediaType, Option<RedumpSystem>, Box<dyn ExecutionContext>)> {
    let systems = std::iter::once(None).chain(RedumpSystem::iter().map(Some)).collect::<Vec<_>>();

    let mut contexts = Vec::new();
    for media_type in MediaType::iter() {
        for system in &systems {
            let context = program.from_settings(*system, Some(media_type), Some(DRIVE), OUT_FILE, Some(SPEED), settings);
            if context.is_capable() {
                contexts.push((media_type, *system, context));
            }
        }
    }
    contexts
}
