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

//! Physical media types and their default image extensions.

use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use strum::IntoEnumIterator;

/// The type of physical media being dumped.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MediaType {
    /// A CD-ROM or any other CD-family disc, including audio discs.
    CdRom,
    /// A DVD-ROM or DVD-Video disc.
    Dvd,
    /// A BD-ROM or BD-Video disc.
    BluRay,
    HdDvd,
    /// A Sega GD-ROM.
    GdRom,
    NintendoGameCubeGameDisc,
    NintendoWiiOpticalDisc,
    NintendoWiiUOpticalDisc,
    /// A Sony Universal Media Disc.
    Umd,
    LaserDisc,
    FloppyDisk,
    Floptical,
    IomegaZip,
    Cassette,
    Cartridge,
    HardDisk,
    CompactFlash,
    MultiMediaCard,
    SdCard,
    FlashDrive,
}

impl MediaType {
    /// Return the human-readable name of the media type.
    pub fn long_name(&self) -> &'static str {
        use MediaType::*;
        match self {
            CdRom => "CD-ROM",
            Dvd => "DVD-ROM",
            BluRay => "BD-ROM",
            HdDvd => "HD-DVD ROM",
            GdRom => "GD-ROM",
            NintendoGameCubeGameDisc => "GameCube Game Disc",
            NintendoWiiOpticalDisc => "Wii Optical Disc",
            NintendoWiiUOpticalDisc => "Wii U Optical Disc",
            Umd => "UMD",
            LaserDisc => "LD-ROM / LV-ROM",
            FloppyDisk => "Floppy Disk",
            Floptical => "Floptical",
            IomegaZip => "Iomega Zip Disk",
            Cassette => "Cassette Tape",
            Cartridge => "Cartridge",
            HardDisk => "Hard Disk",
            CompactFlash => "CompactFlash",
            MultiMediaCard => "MultiMediaCard",
            SdCard => "SD Card",
            FlashDrive => "Flash Drive",
        }
    }

    /// Return the short identifier of the media type, as accepted by [MediaType::from_str].
    pub fn short_name(&self) -> &'static str {
        use MediaType::*;
        match self {
            CdRom => "cd",
            Dvd => "dvd",
            BluRay => "bd",
            HdDvd => "hddvd",
            GdRom => "gd",
            NintendoGameCubeGameDisc => "gc",
            NintendoWiiOpticalDisc => "wii",
            NintendoWiiUOpticalDisc => "wiiu",
            Umd => "umd",
            LaserDisc => "ld",
            FloppyDisk => "fd",
            Floptical => "floptical",
            IomegaZip => "zip",
            Cassette => "cassette",
            Cartridge => "cart",
            HardDisk => "hdd",
            CompactFlash => "cf",
            MultiMediaCard => "mmc",
            SdCard => "sd",
            FlashDrive => "flash",
        }
    }

    /// Return the default image file extension for the media type, including the leading dot.
    pub fn extension(&self) -> &'static str {
        use MediaType::*;
        match self {
            CdRom | GdRom | Cartridge | HardDisk | CompactFlash | MultiMediaCard | SdCard | FlashDrive => ".bin",
            Dvd | HdDvd | BluRay | NintendoWiiOpticalDisc | Umd => ".iso",
            LaserDisc | NintendoGameCubeGameDisc => ".raw",
            NintendoWiiUOpticalDisc => ".wud",
            FloppyDisk | Floptical | IomegaZip => ".img",
            Cassette => ".wav",
        }
    }
}

/// Return the default image file extension for an optional media type. An unknown media type
/// has no extension.
pub fn extension(media_type: Option<MediaType>) -> Option<&'static str> {
    media_type.map(|m| m.extension())
}

impl Display for MediaType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.long_name())
    }
}

impl FromStr for MediaType {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim().to_lowercase();
        MediaType::iter()
            .find(|m| m.short_name() == input || m.long_name().to_lowercase() == input)
            .ok_or_else(|| format!("Unknown media type '{}'", input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extensions() {
        assert_eq!(extension(Some(MediaType::CdRom)), Some(".bin"));
        assert_eq!(extension(Some(MediaType::Dvd)), Some(".iso"));
        assert_eq!(extension(Some(MediaType::NintendoGameCubeGameDisc)), Some(".raw"));
        assert_eq!(extension(Some(MediaType::NintendoWiiUOpticalDisc)), Some(".wud"));
        assert_eq!(extension(None), None);
    }

    #[test]
    fn test_every_media_type_has_an_extension() {
        for media_type in MediaType::iter() {
            assert!(media_type.extension().starts_with('.'), "{:?}", media_type);
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("cd".parse::<MediaType>(), Ok(MediaType::CdRom));
        assert_eq!("BD-ROM".parse::<MediaType>(), Ok(MediaType::BluRay));
        assert!("vinyl".parse::<MediaType>().is_err());

        // Every short name parses back to its own media type
        for media_type in MediaType::iter() {
            assert_eq!(media_type.short_name().parse::<MediaType>(), Ok(media_type));
        }
    }
}
