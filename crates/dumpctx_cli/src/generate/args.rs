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
use crate::args::*;
use bpaf::{construct, long, Parser};
use dumpctx::{InternalProgram, MediaType, RedumpSystem};

#[derive(Clone, Debug)]
pub(crate) struct GenerateParams {
    pub(crate) program: InternalProgram,
    pub(crate) media_type: MediaType,
    pub(crate) system: Option<RedumpSystem>,
    pub(crate) drive: Option<String>,
    pub(crate) out_file: Option<String>,
    pub(crate) speed: Option<i32>,
    pub(crate) inputs: Vec<String>,
    pub(crate) with_exe: bool,
    pub(crate) settings: SettingsParams,
}

fn media_type_parser() -> impl Parser<MediaType> {
    long("media-type")
        .short('m')
        .argument::<MediaType>("MEDIA_TYPE")
        .help("The media type to dump, by short or long name, e.g. 'cd' or 'DVD-ROM'")
}

fn system_parser() -> impl Parser<RedumpSystem> {
    long("system")
        .short('s')
        .argument::<RedumpSystem>("SYSTEM")
        .help("The system the media belongs to, by short or long name, e.g. 'psx'")
}

fn drive_parser() -> impl Parser<String> {
    long("drive")
        .short('d')
        .argument::<String>("DRIVE")
        .help("The drive to read from, e.g. 'E:' or '/dev/sr0'")
}

fn out_file_parser() -> impl Parser<String> {
    long("out")
        .short('o')
        .argument::<String>("OUT_FILE")
        .help("Path of the image to write. The directory and base name are passed to the program")
}

fn speed_parser() -> impl Parser<i32> {
    long("speed")
        .argument::<i32>("SPEED")
        .help("The read speed to request from the drive")
        .guard(|&speed| speed > 0, "Speed must be greater than 0")
}

fn input_parser() -> impl Parser<Vec<String>> {
    long("input")
        .short('i')
        .argument::<String>("NAME[=VALUE]")
        .help("Set an additional program input, e.g. 'overwrite' or 'lba-start=100'. May be repeated")
        .many()
}

fn with_exe_parser() -> impl Parser<bool> {
    long("with-exe")
        .help("Prefix the generated parameters with the program's executable name")
        .switch()
}

pub(crate) fn generate_parser() -> impl Parser<GenerateParams> {
    let program = program_parser();
    let media_type = media_type_parser();
    let system = system_parser().optional();
    let drive = drive_parser().optional();
    let out_file = out_file_parser().optional();
    let speed = speed_parser().optional();
    let inputs = input_parser();
    let with_exe = with_exe_parser();
    let settings = settings_parser();

    construct!(GenerateParams {
        program,
        media_type,
        system,
        drive,
        out_file,
        speed,
        inputs,
        with_exe,
        settings
    })
}
