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
use crate::args::SettingsParams;
use anyhow::{Context, Error};
use dumpctx::SettingsMap;
use std::path::Path;

/// Read a settings file made of `KEY=VALUE` lines.
pub(crate) fn read_settings_file(path: &Path) -> Result<SettingsMap, Error> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Couldn't read settings file {}", path.display()))?;
    let settings = text
        .parse::<SettingsMap>()
        .with_context(|| format!("Invalid settings file {}", path.display()))?;
    log::debug!(
        "read_settings_file(): read {} settings from {}",
        settings.len(),
        path.display()
    );
    Ok(settings)
}

/// Build the settings for a command: the settings file first, if any, then each `--set` value.
pub(crate) fn load_settings(params: &SettingsParams) -> Result<SettingsMap, Error> {
    let mut settings = match &params.settings_file {
        Some(path) => read_settings_file(path)?,
        None => SettingsMap::new(),
    };

    for assignment in &params.set {
        settings
            .set_assignment(assignment)
            .with_context(|| format!("Invalid --set value '{}'", assignment))?;
    }
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dumpctx::SettingsStore;
    use std::io::Write;

    #[test]
    fn test_settings_file_with_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# redumper tuning").unwrap();
        writeln!(file, "RedumperRereadCount=10").unwrap();
        writeln!(file, "RedumperEnableDebug=true").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "RedumperReadMethod=").unwrap();
        file.flush().unwrap();

        let params = SettingsParams {
            set: vec!["RedumperRereadCount=5".to_string()],
            settings_file: Some(file.path().to_path_buf()),
        };
        let settings = load_settings(&params).unwrap();

        assert_eq!(settings.get_int("RedumperRereadCount", 20), 5);
        assert!(settings.get_bool("RedumperEnableDebug", false));
        assert_eq!(settings.get_string("RedumperReadMethod", "NONE"), "NONE");
        assert_eq!(settings.len(), 3);
    }

    #[test]
    fn test_missing_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let params = SettingsParams {
            set: Vec::new(),
            settings_file: Some(dir.path().join("missing.cfg")),
        };
        assert!(load_settings(&params).is_err());
    }

    #[test]
    fn test_invalid_set_value() {
        let params = SettingsParams {
            set: vec!["RedumperRereadCount".to_string()],
            settings_file: None,
        };
        let e = load_settings(&params).unwrap_err();
        assert!(e.to_string().contains("RedumperRereadCount"));
    }
}
