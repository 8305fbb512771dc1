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

//! The redumper backend.
//!
//! redumper is unusual in two ways: its base command may be several modes listed together, and
//! every flag is accepted with every mode, with redumper itself ignoring flags that do not apply.

pub mod commands;
pub mod flags;
pub mod settings;

use crate::{
    context::{join_output_path, split_filename, ExecutionContext},
    input::{string::trim_quotes, Input},
    program::InternalProgram,
    settings::SettingsStore,
    table::ParameterTable,
    tokenizer::split_parameter_string,
    types::{MediaType, RedumpSystem},
    ContextError,
    DumpHashMap,
};

use self::settings::{DriveType, ReadMethod, SectorOrder};

/// Image name used when a parsed command line does not name its image.
pub const DEFAULT_IMAGE_NAME: &str = "track";

/// Build a fresh redumper parameter table. Every call returns new inputs, so no two contexts
/// ever share a value.
pub fn parameter_table() -> ParameterTable {
    use flags::*;
    ParameterTable::new([
        // General
        Input::flag(HELP_LONG).with_short(HELP_SHORT),
        Input::flag(VERSION),
        Input::flag(VERBOSE),
        Input::flag(AUTO_EJECT),
        Input::flag(DEBUG),
        Input::string(DRIVE),
        Input::int32(SPEED),
        Input::int32(RETRIES),
        Input::string(IMAGE_PATH).with_quotes(true),
        Input::string(IMAGE_NAME).with_quotes(true),
        Input::flag(OVERWRITE),
        // Drive configuration
        Input::string(DRIVE_TYPE),
        Input::int32(DRIVE_READ_OFFSET),
        Input::int32(DRIVE_C2_SHIFT),
        Input::int32(DRIVE_PREGAP_START),
        Input::string(DRIVE_READ_METHOD),
        Input::string(DRIVE_SECTOR_ORDER),
        // Drive specific
        Input::flag(PLEXTOR_SKIP_LEADIN),
        Input::int32(PLEXTOR_LEADIN_RETRIES),
        Input::flag(ASUS_SKIP_LEADOUT),
        // Offset
        Input::int32(FORCE_OFFSET),
        Input::int32(AUDIO_SILENCE_THRESHOLD),
        Input::flag(CORRECT_OFFSET_SHIFT),
        Input::flag(OFFSET_SHIFT_RELOCATE),
        // Split
        Input::flag(FORCE_SPLIT),
        Input::flag(LEAVE_UNCHANGED),
        Input::flag(FORCE_QTOC),
        Input::uint8(SKIP_FILL),
        Input::flag(ISO9660_TRIM),
        // Miscellaneous
        Input::int32(LBA_START),
        Input::int32(LBA_END),
        Input::flag(REFINE_SUBCHANNEL),
        Input::string(SKIP),
        Input::int32(DUMP_WRITE_OFFSET),
        Input::int32(DUMP_READ_SIZE),
        Input::flag(OVERREAD_LEADOUT),
        Input::flag(FORCE_UNSCRAMBLED),
        Input::flag(LEGACY_SUBS),
        Input::flag(DISABLE_CDTEXT),
    ])
    .expect("redumper input names are unique")
}

/// An execution context for redumper.
#[derive(Clone, Debug)]
pub struct RedumperContext {
    media_type: Option<MediaType>,
    system: Option<RedumpSystem>,
    base_command: Option<&'static str>,
    modes: Option<Vec<&'static str>>,
    table: ParameterTable,
    parse_error: Option<ContextError>,
}

impl Default for RedumperContext {
    fn default() -> Self {
        Self {
            media_type: None,
            system: None,
            base_command: Some(commands::NONE),
            modes: None,
            table: parameter_table(),
            parse_error: None,
        }
    }
}

impl RedumperContext {
    pub fn new() -> Self {
        Default::default()
    }

    /// Build a context by parsing an existing command line. The outcome of the parse is kept and
    /// reported by [ExecutionContext::is_valid] and [ExecutionContext::parse_error].
    pub fn from_parameters(parameters: Option<&str>) -> Self {
        let mut context = Self::new();
        let result = match parameters {
            Some(parameters) => context.parse(parameters),
            None => Err(ContextError::EmptyParameters),
        };
        if let Err(e) = result {
            log::debug!("RedumperContext::from_parameters(): {}", e);
            context.parse_error = Some(e);
        }
        context
    }

    /// Build a context for dumping `media_type` from `drive_path` to `filename`, taking tuning
    /// values from `settings`.
    pub fn from_settings(
        system: Option<RedumpSystem>,
        media_type: Option<MediaType>,
        drive_path: Option<&str>,
        filename: &str,
        drive_speed: Option<i32>,
        settings: &dyn SettingsStore,
    ) -> Self {
        let mut context = Self {
            system,
            media_type,
            ..Self::new()
        };
        context.set_default_parameters(drive_path, filename, drive_speed, settings);
        context
    }

    /// Set the modes explicitly, replacing any resolved or parsed modes.
    pub fn set_modes(&mut self, modes: Vec<&'static str>) {
        self.modes = Some(modes);
    }

    fn string_value(&self, name: &str) -> Option<&str> {
        self.table
            .get(name)
            .and_then(|i| i.string_value())
            .map(trim_quotes)
            .filter(|v| !v.is_empty())
    }

    fn set_string(&mut self, name: &str, value: &str) {
        if let Some(input) = self.table.get_mut(name) {
            input.set_string(value);
        }
    }

    fn set_flag(&mut self, name: &str) {
        if let Some(input) = self.table.get_mut(name) {
            input.set_flag(true);
        }
    }

    fn set_int32(&mut self, name: &str, value: Option<i32>) {
        if let Some(input) = self.table.get_mut(name) {
            input.set_int32(value);
        }
    }

    /// Return the command line spelling of a settings value, or `None` for the `NONE` sentinel.
    /// Values that are not known to us are passed through unchanged.
    fn setting_choice<T>(value: &str, none: T) -> Option<String>
    where
        T: std::str::FromStr<Err = String> + PartialEq + ToString,
    {
        if value.is_empty() {
            return None;
        }
        match value.parse::<T>() {
            Ok(choice) if choice == none => None,
            Ok(choice) => Some(choice.to_string()),
            Err(e) => {
                log::warn!("RedumperContext: {}, passing it through unchanged", e);
                Some(value.to_string())
            }
        }
    }
}

impl ExecutionContext for RedumperContext {
    fn program(&self) -> InternalProgram {
        InternalProgram::Redumper
    }

    fn media_type(&self) -> Option<MediaType> {
        self.media_type
    }

    fn system(&self) -> Option<RedumpSystem> {
        self.system
    }

    fn base_command(&self) -> Option<&'static str> {
        self.base_command
    }

    fn modes(&self) -> &[&'static str] {
        self.modes.as_deref().unwrap_or(&[])
    }

    fn table(&self) -> &ParameterTable {
        &self.table
    }

    fn table_mut(&mut self) -> &mut ParameterTable {
        &mut self.table
    }

    /// Every flag is supported with the single base command.
    fn command_support(&self) -> DumpHashMap<&'static str, Vec<&'static str>> {
        let mut support = DumpHashMap::new();
        support.insert(commands::NONE, self.table.names());
        support
    }

    fn generate_parameters(&mut self) -> String {
        let modes = self.modes.get_or_insert_with(|| vec![commands::NONE]);

        let mut parameters = Vec::new();
        let joined = modes.join(" ");
        if !joined.trim().is_empty() {
            parameters.push(joined);
        }
        parameters.extend(self.table.format(true));

        parameters.join(" ").trim().to_string()
    }

    fn parse(&mut self, parameters: &str) -> Result<(), ContextError> {
        if parameters.trim().is_empty() {
            return Err(ContextError::EmptyParameters);
        }

        self.base_command = Some(commands::NONE);
        let parts = split_parameter_string(parameters);

        // Modes come first, up to the first flag
        let modes = self.modes.insert(Vec::new());
        let mut index = 0;
        while index < parts.len() {
            let part = parts[index].as_str();
            if let Some(mode) = commands::mode_from_str(part) {
                modes.push(mode);
                index += 1;
            }
            else if part.starts_with('-') {
                break;
            }
            else {
                log::debug!("RedumperContext::parse(): '{}' is neither a mode nor a flag", part);
                return Err(ContextError::InvalidMode(part.to_string()));
            }
        }

        while index < parts.len() {
            match self.table.process(&parts, &mut index) {
                Some(name) => log::trace!("RedumperContext::parse(): matched {}", name),
                None => log::debug!("RedumperContext::parse(): ignoring unrecognized token '{}'", parts[index]),
            }
            index += 1;
        }

        if self.string_value(flags::IMAGE_NAME).is_none() {
            self.set_string(flags::IMAGE_NAME, DEFAULT_IMAGE_NAME);
        }

        Ok(())
    }

    fn set_default_parameters(
        &mut self,
        drive_path: Option<&str>,
        filename: &str,
        drive_speed: Option<i32>,
        options: &dyn SettingsStore,
    ) {
        self.base_command = Some(commands::NONE);
        match commands::resolve_modes(self.media_type, self.system) {
            Some(modes) => {
                log::debug!(
                    "RedumperContext::set_default_parameters(): {:?} / {:?} resolved to modes {:?}",
                    self.media_type,
                    self.system,
                    modes
                );
                self.modes = Some(modes);
            }
            None => {
                log::warn!(
                    "RedumperContext::set_default_parameters(): redumper cannot dump media type {:?}",
                    self.media_type
                );
                self.base_command = None;
                return;
            }
        }

        self.set_string(flags::DRIVE, drive_path.unwrap_or_default());
        self.set_int32(flags::SPEED, drive_speed);

        if options.get_bool(settings::ENABLE_VERBOSE, settings::ENABLE_VERBOSE_DEFAULT) {
            self.set_flag(flags::VERBOSE);
        }
        if options.get_bool(settings::ENABLE_DEBUG, settings::ENABLE_DEBUG_DEFAULT) {
            self.set_flag(flags::DEBUG);
        }

        let read_method = options.get_string(settings::READ_METHOD, settings::READ_METHOD_DEFAULT);
        if let Some(read_method) = Self::setting_choice(&read_method, ReadMethod::None) {
            self.set_string(flags::DRIVE_READ_METHOD, &read_method);
        }

        let sector_order = options.get_string(settings::SECTOR_ORDER, settings::SECTOR_ORDER_DEFAULT);
        if let Some(sector_order) = Self::setting_choice(&sector_order, SectorOrder::None) {
            self.set_string(flags::DRIVE_SECTOR_ORDER, &sector_order);
        }

        if options.get_bool(
            settings::USE_GENERIC_DRIVE_TYPE,
            settings::USE_GENERIC_DRIVE_TYPE_DEFAULT,
        ) {
            self.set_string(flags::DRIVE_TYPE, &DriveType::Generic.to_string());
        }

        let (image_path, image_name) = split_filename(filename);
        if let Some(image_path) = image_path {
            self.set_string(flags::IMAGE_PATH, image_path);
        }
        if let Some(image_name) = image_name {
            self.set_string(flags::IMAGE_NAME, image_name);
        }

        let retries = options.get_int(settings::REREAD_COUNT, settings::REREAD_COUNT_DEFAULT);
        self.set_int32(flags::RETRIES, Some(retries));

        if options.get_bool(settings::ENABLE_LEADIN_RETRY, settings::ENABLE_LEADIN_RETRY_DEFAULT) {
            let leadin_retries = options.get_int(settings::LEADIN_RETRY_COUNT, settings::LEADIN_RETRY_COUNT_DEFAULT);
            self.set_int32(flags::PLEXTOR_LEADIN_RETRIES, Some(leadin_retries));
        }
    }

    fn reset(&mut self) {
        self.base_command = Some(commands::NONE);
        self.modes = None;
        self.table.clear_values();
    }

    fn is_dumping_command(&self) -> bool {
        commands::is_dumping(self.modes())
    }

    fn input_path(&self) -> Option<String> {
        self.string_value(flags::DRIVE).map(str::to_string)
    }

    fn output_path(&self) -> Option<String> {
        join_output_path(
            self.string_value(flags::IMAGE_PATH),
            self.string_value(flags::IMAGE_NAME),
            self.default_extension(self.media_type),
        )
    }

    fn speed(&self) -> Option<i32> {
        self.table.get(flags::SPEED).and_then(|i| i.int32_value())
    }

    fn set_speed(&mut self, speed: Option<i32>) {
        self.set_int32(flags::SPEED, speed);
    }

    fn parse_error(&self) -> Option<&ContextError> {
        self.parse_error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SettingsMap;

    #[test]
    fn test_parameter_table_fresh() {
        let mut first = parameter_table();
        let second = parameter_table();
        first.get_mut(flags::SPEED).unwrap().set_int32(Some(4));
        assert_eq!(second.get(flags::SPEED).unwrap().int32_value(), None);
        assert_eq!(first.len(), 39);
    }

    #[test]
    fn test_generate_without_modes() {
        let mut context = RedumperContext::new();
        assert_eq!(context.generate_parameters(), "");
        assert_eq!(context.modes(), &[commands::NONE]);

        context.set_speed(Some(8));
        assert_eq!(context.generate_parameters(), "--speed=8");
        assert!(!context.is_dumping_command());
    }

    #[test]
    fn test_generate_defaults() {
        let mut context = RedumperContext::from_settings(
            None,
            Some(MediaType::CdRom),
            Some("E:"),
            "C:\\dumps\\disc.bin",
            Some(24),
            &SettingsMap::new(),
        );
        assert_eq!(
            context.generate_parameters(),
            "cd skeleton --verbose --drive=E: --speed=24 --retries=20 --image-path=\"C:\\dumps\" --image-name=\"disc\""
        );
        assert!(context.is_dumping_command());
    }

    #[test]
    fn test_parse_modes_and_flags() {
        let mut context = RedumperContext::new();
        let result = context.parse("cd refine --drive=E: --speed 8 --skip-fill=170 --image-name \"My Disc\" -h");
        assert_eq!(result, Ok(()));
        assert_eq!(context.modes(), &[commands::CD, commands::REFINE]);
        assert_eq!(context.input_path().as_deref(), Some("E:"));
        assert_eq!(context.speed(), Some(8));
        assert_eq!(context.input(flags::SKIP_FILL).unwrap().uint8_value(), Some(170));
        assert_eq!(context.input(flags::IMAGE_NAME).unwrap().string_value(), Some("My Disc"));
        assert_eq!(context.input(flags::HELP_LONG).unwrap().flag_value(), Some(true));
    }

    #[test]
    fn test_parse_invalid_mode() {
        let mut context = RedumperContext::new();
        assert_eq!(
            context.parse("cd bogus --verbose"),
            Err(ContextError::InvalidMode("bogus".to_string()))
        );
        // The modes read before the failure are kept
        assert_eq!(context.modes(), &[commands::CD]);
        assert!(!context.input(flags::VERBOSE).unwrap().is_set());
    }

    #[test]
    fn test_parse_empty() {
        let mut context = RedumperContext::new();
        assert_eq!(context.parse(""), Err(ContextError::EmptyParameters));
        assert_eq!(context.parse("   "), Err(ContextError::EmptyParameters));
        assert!(context.modes().is_empty());

        let context = RedumperContext::from_parameters(None);
        assert!(!context.is_valid());
        assert_eq!(context.parse_error(), Some(&ContextError::EmptyParameters));
    }

    #[test]
    fn test_parse_defaults_image_name() {
        let context = RedumperContext::from_parameters(Some("dvd --drive=F:"));
        assert!(context.is_valid());
        assert_eq!(context.input(flags::IMAGE_NAME).unwrap().string_value(), Some(DEFAULT_IMAGE_NAME));
        // No image path, so the output path is not yet determined
        assert_eq!(context.output_path(), None);
    }

    #[test]
    fn test_malformed_value_is_skipped() {
        let context = RedumperContext::from_parameters(Some("cd --speed fast --retries 5"));
        assert!(context.is_valid());
        assert_eq!(context.speed(), None);
        assert_eq!(context.input(flags::RETRIES).unwrap().int32_value(), Some(5));
    }

    #[test]
    fn test_read_method_sentinel() {
        let settings = SettingsMap::new()
            .with(settings::READ_METHOD, "NONE")
            .with(settings::SECTOR_ORDER, "data_sub");
        let context = RedumperContext::from_settings(None, Some(MediaType::Dvd), Some("E:"), "disc.iso", None, &settings);
        assert!(!context.input(flags::DRIVE_READ_METHOD).unwrap().is_set());
        assert_eq!(
            context.input(flags::DRIVE_SECTOR_ORDER).unwrap().string_value(),
            Some("DATA_SUB")
        );

        let settings = SettingsMap::new().with(settings::READ_METHOD, "FUTURE_METHOD");
        let context = RedumperContext::from_settings(None, Some(MediaType::Dvd), Some("E:"), "disc.iso", None, &settings);
        assert_eq!(
            context.input(flags::DRIVE_READ_METHOD).unwrap().string_value(),
            Some("FUTURE_METHOD")
        );
    }

    #[test]
    fn test_command_support() {
        let context = RedumperContext::new();
        let support = context.command_support();
        assert_eq!(support.len(), 1);
        let supported = &support[commands::NONE];
        assert!(supported.contains(&flags::HELP_SHORT));
        assert!(supported.contains(&flags::DISABLE_CDTEXT));
        assert_eq!(supported.len(), 40);
    }

    #[test]
    fn test_reset() {
        let mut context = RedumperContext::from_parameters(Some("cd --verbose --speed=4"));
        context.reset();
        assert!(context.modes().is_empty());
        assert_eq!(context.table().set_inputs().count(), 0);
        assert!(context.missing_required().is_empty());
    }
}
