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
use bpaf::*;
use dumpctx::InternalProgram;
use std::{
    fmt::{self, Display, Formatter},
    path::PathBuf,
};

use crate::{
    generate::args::{generate_parser, GenerateParams},
    parse::args::{parse_parser, ParseParams},
};

#[derive(Clone, Debug)]
pub enum Command {
    Version,
    Generate(GenerateParams),
    Parse(ParseParams),
    Systems,
    Media(InternalProgram),
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Command::Version => write!(f, "version"),
            Command::Generate(_) => write!(f, "generate"),
            Command::Parse(_) => write!(f, "parse"),
            Command::Systems => write!(f, "systems"),
            Command::Media(_) => write!(f, "media"),
        }
    }
}

#[derive(Debug)]
pub struct AppParams {
    pub global: GlobalOptions,
    pub command: Command,
}

#[derive(Debug)]
pub struct GlobalOptions {
    pub silent: bool,
}

/// Where settings values come from. Values given with `--set` override values read from the
/// settings file.
#[derive(Clone, Debug)]
pub(crate) struct SettingsParams {
    pub(crate) set: Vec<String>,
    pub(crate) settings_file: Option<PathBuf>,
}

pub fn global_options_parser() -> impl Parser<GlobalOptions> {
    let silent = long("silent")
        .help("Suppress all output except required output")
        .switch();

    construct!(GlobalOptions { silent })
}

pub(crate) fn program_parser() -> impl Parser<InternalProgram> {
    long("program")
        .short('p')
        .argument::<InternalProgram>("PROGRAM")
        .help("The dumping program to target. Only 'redumper' is currently supported")
        .fallback(InternalProgram::Redumper)
}

pub(crate) fn settings_parser() -> impl Parser<SettingsParams> {
    let set = long("set")
        .argument::<String>("KEY=VALUE")
        .help("Set a settings value, e.g. RedumperRereadCount=10. May be repeated")
        .many();
    let settings_file = long("settings")
        .argument::<PathBuf>("SETTINGS_FILE")
        .help("Read settings from a file of KEY=VALUE lines")
        .optional();

    construct!(SettingsParams { set, settings_file })
}

pub(crate) fn command_parser() -> impl Parser<AppParams> {
    let global = global_options_parser();

    let version = pure(Command::Version)
        .to_options()
        .command("version")
        .help("Display version information and exit");

    let generate = construct!(Command::Generate(generate_parser()))
        .to_options()
        .command("generate")
        .help("Generate a command line for dumping a media type");
    let parse = construct!(Command::Parse(parse_parser()))
        .to_options()
        .command("parse")
        .help("Parse an existing command line and describe it");
    let systems = pure(Command::Systems)
        .to_options()
        .command("systems")
        .help("List the known systems, grouped by category");
    let media = construct!(Command::Media(program_parser()))
        .to_options()
        .command("media")
        .help("List the known media types and their default image extensions");

    let command = construct!([version, generate, parse, systems, media]);

    construct!(AppParams { global, command })
}
