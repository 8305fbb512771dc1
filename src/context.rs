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

//! The [ExecutionContext] trait and helpers shared by every backend.
//!
//! An execution context is the per-invocation model of one dumping program's command line: the
//! selected media type and system, the resolved modes, and a [ParameterTable] holding the value
//! of every flag. A context is built either from an existing command line, which is parsed
//! immediately, or from a drive, an output filename and a settings store, from which defaults are
//! derived.

use crate::{
    input::Input,
    program::InternalProgram,
    settings::SettingsStore,
    table::ParameterTable,
    types::{extension, MediaType, RedumpSystem},
    ContextError,
    DumpHashMap,
};

pub trait ExecutionContext {
    /// Return the program this context builds command lines for.
    fn program(&self) -> InternalProgram;

    /// Return the media type the context was built for, if known.
    fn media_type(&self) -> Option<MediaType>;

    /// Return the system the context was built for, if known.
    fn system(&self) -> Option<RedumpSystem>;

    /// Return the base command, or `None` if the context cannot dump its media type.
    fn base_command(&self) -> Option<&'static str>;

    /// Return the resolved modes, in command line order. Empty until modes are resolved.
    fn modes(&self) -> &[&'static str];

    fn table(&self) -> &ParameterTable;

    fn table_mut(&mut self) -> &mut ParameterTable;

    /// Return, for each base command, the flags that are legal with it.
    fn command_support(&self) -> DumpHashMap<&'static str, Vec<&'static str>>;

    /// Render the context as a command line.
    fn generate_parameters(&mut self) -> String;

    /// Parse a command line into this context.
    ///
    /// On failure the context may be partially updated and should be discarded.
    fn parse(&mut self, parameters: &str) -> Result<(), ContextError>;

    /// Derive modes and flag values from a drive, an output filename, a drive speed and a
    /// settings store.
    fn set_default_parameters(
        &mut self,
        drive_path: Option<&str>,
        filename: &str,
        drive_speed: Option<i32>,
        settings: &dyn SettingsStore,
    );

    /// Clear the modes and every flag value.
    fn reset(&mut self);

    /// Return true if the resolved modes include an operation that produces a disc image.
    fn is_dumping_command(&self) -> bool;

    /// Return the drive path the command line reads from.
    fn input_path(&self) -> Option<String>;

    /// Return the full path of the image the command line writes, or `None` while it is not yet
    /// determined.
    fn output_path(&self) -> Option<String>;

    fn speed(&self) -> Option<i32>;

    fn set_speed(&mut self, speed: Option<i32>);

    /// Return the error recorded when the context was built from a command line, if any.
    fn parse_error(&self) -> Option<&ContextError>;

    /// Return true unless building the context from a command line failed.
    fn is_valid(&self) -> bool {
        self.parse_error().is_none()
    }

    /// Return true if the context has a base command, i.e. it can be used to dump its media.
    fn is_capable(&self) -> bool {
        self.base_command().is_some()
    }

    /// Return the default image extension for `media_type`.
    fn default_extension(&self, media_type: Option<MediaType>) -> Option<&'static str> {
        extension(media_type)
    }

    /// Return the media type implied by the command line itself, for programs whose commands
    /// name one.
    fn detected_media_type(&self) -> Option<MediaType> {
        None
    }

    fn input(&self, name: &str) -> Option<&Input> {
        self.table().get(name)
    }

    fn input_mut(&mut self, name: &str) -> Option<&mut Input> {
        self.table_mut().get_mut(name)
    }

    /// Return the long names of required inputs that hold no value.
    fn missing_required(&self) -> Vec<&'static str> {
        self.table()
            .iter()
            .filter(|i| i.required() && !i.is_set())
            .map(|i| i.name())
            .collect()
    }
}

/// Split a filename into its directory and its base name without extension. Both `/` and `\`
/// are treated as separators, so Windows paths split the same way on every host.
pub fn split_filename(filename: &str) -> (Option<&str>, Option<&str>) {
    let (directory, file_name) = match filename.rfind(&['/', '\\'][..]) {
        Some(pos) => {
            let mut directory = &filename[..pos];
            // Keep the separator of a root directory, such as `/` or `C:\`
            if directory.is_empty() || directory.ends_with(':') {
                directory = &filename[..=pos];
            }
            (Some(directory), &filename[pos + 1..])
        }
        None => (None, filename),
    };

    let stem = match file_name.rfind('.') {
        Some(dot) => &file_name[..dot],
        None => file_name,
    };

    (directory.filter(|d| !d.is_empty()), Some(stem).filter(|s| !s.is_empty()))
}

/// Join an output directory, base name and extension into a path.
///
/// The separator follows the directory: a directory written with `\` is joined with `\`, one
/// written with `/` with `/`. Returns `None` if either the directory or the name is missing.
pub fn join_output_path(directory: Option<&str>, name: Option<&str>, extension: Option<&str>) -> Option<String> {
    let directory = directory.filter(|d| !d.is_empty())?;
    let name = name.filter(|n| !n.is_empty())?;
    let extension = extension.unwrap_or_default();

    if directory.ends_with(&['/', '\\'][..]) {
        return Some(format!("{directory}{name}{extension}"));
    }

    let separator = if directory.contains('\\') {
        '\\'
    }
    else if directory.contains('/') {
        '/'
    }
    else {
        std::path::MAIN_SEPARATOR
    };

    Some(format!("{directory}{separator}{name}{extension}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_filename() {
        assert_eq!(split_filename("C:\\dumps\\track.bin"), (Some("C:\\dumps"), Some("track")));
        assert_eq!(split_filename("/home/user/disc.iso"), (Some("/home/user"), Some("disc")));
        assert_eq!(split_filename("disc.iso"), (None, Some("disc")));
        assert_eq!(split_filename("disc"), (None, Some("disc")));
        assert_eq!(split_filename("my.disc.bin"), (None, Some("my.disc")));
        assert_eq!(split_filename("/track.bin"), (Some("/"), Some("track")));
        assert_eq!(split_filename("C:\\track.bin"), (Some("C:\\"), Some("track")));
        assert_eq!(split_filename("C:\\dumps\\"), (Some("C:\\dumps"), None));
        assert_eq!(split_filename(""), (None, None));
    }

    #[test]
    fn test_join_output_path() {
        assert_eq!(
            join_output_path(Some("C:\\dumps"), Some("track"), Some(".bin")),
            Some("C:\\dumps\\track.bin".to_string())
        );
        assert_eq!(
            join_output_path(Some("/mnt/dumps"), Some("disc"), Some(".iso")),
            Some("/mnt/dumps/disc.iso".to_string())
        );
        assert_eq!(
            join_output_path(Some("C:\\"), Some("track"), Some(".bin")),
            Some("C:\\track.bin".to_string())
        );
        assert_eq!(join_output_path(Some("dumps"), Some("track"), None).map(|p| p.ends_with("track")), Some(true));
        assert_eq!(join_output_path(None, Some("track"), Some(".bin")), None);
        assert_eq!(join_output_path(Some("C:\\dumps"), None, Some(".bin")), None);
        assert_eq!(join_output_path(Some(""), Some(""), Some(".bin")), None);
    }
}
