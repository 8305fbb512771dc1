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

//! Systems tracked by redump, grouped into categories.

use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use strum::IntoEnumIterator;

/// The broad category a [RedumpSystem] belongs to.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, PartialOrd, Ord, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SystemCategory {
    DiscBasedConsole,
    OtherConsole,
    Computer,
    Arcade,
    Other,
}

impl Display for SystemCategory {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            SystemCategory::DiscBasedConsole => write!(f, "Disc-Based Consoles"),
            SystemCategory::OtherConsole => write!(f, "Other Consoles"),
            SystemCategory::Computer => write!(f, "Computers"),
            SystemCategory::Arcade => write!(f, "Arcade"),
            SystemCategory::Other => write!(f, "Other"),
        }
    }
}

/// A system as catalogued by redump. The system can change which modes a dumping program is
/// asked to run; a Super Audio CD is dumped differently from any other CD, for example.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RedumpSystem {
    // Disc-based consoles
    AtariJaguarCd,
    MicrosoftXbox,
    MicrosoftXbox360,
    NecPcEngineCd,
    NintendoGameCube,
    NintendoWii,
    NintendoWiiU,
    Panasonic3do,
    PhilipsCdi,
    SegaMegaCd,
    SegaDreamcast,
    SegaSaturn,
    SonyPlayStation,
    SonyPlayStation2,
    SonyPlayStation3,
    SonyPlayStation4,
    SonyPlayStationPortable,
    // Other consoles
    HasbroVideoNow,
    VTechVFlash,
    // Computers
    AppleMacintosh,
    CommodoreAmigaCd,
    FujitsuFmTowns,
    IbmPcCompatible,
    NecPc98,
    SharpX68000,
    // Arcade
    KonamiSystem573,
    NamcoSystem246,
    SegaChihiro,
    SegaNaomi,
    SegaNaomi2,
    // Other
    AudioCd,
    BdVideo,
    DvdVideo,
    EnhancedCd,
    PhotoCd,
    SuperAudioCd,
    VideoCd,
}

impl RedumpSystem {
    fn info(&self) -> (SystemCategory, &'static str, &'static str) {
        use RedumpSystem::*;
        use SystemCategory::*;
        match self {
            AtariJaguarCd => (DiscBasedConsole, "Atari Jaguar CD Interactive Multimedia System", "ajcd"),
            MicrosoftXbox => (DiscBasedConsole, "Microsoft Xbox", "xbox"),
            MicrosoftXbox360 => (DiscBasedConsole, "Microsoft Xbox 360", "xbox360"),
            NecPcEngineCd => (DiscBasedConsole, "NEC PC Engine CD & TurboGrafx CD", "pce"),
            NintendoGameCube => (DiscBasedConsole, "Nintendo GameCube", "gc"),
            NintendoWii => (DiscBasedConsole, "Nintendo Wii", "wii"),
            NintendoWiiU => (DiscBasedConsole, "Nintendo Wii U", "wiiu"),
            Panasonic3do => (DiscBasedConsole, "Panasonic 3DO Interactive Multiplayer", "3do"),
            PhilipsCdi => (DiscBasedConsole, "Philips CD-i", "cdi"),
            SegaMegaCd => (DiscBasedConsole, "Sega Mega CD & Sega CD", "mcd"),
            SegaDreamcast => (DiscBasedConsole, "Sega Dreamcast", "dc"),
            SegaSaturn => (DiscBasedConsole, "Sega Saturn", "ss"),
            SonyPlayStation => (DiscBasedConsole, "Sony PlayStation", "psx"),
            SonyPlayStation2 => (DiscBasedConsole, "Sony PlayStation 2", "ps2"),
            SonyPlayStation3 => (DiscBasedConsole, "Sony PlayStation 3", "ps3"),
            SonyPlayStation4 => (DiscBasedConsole, "Sony PlayStation 4", "ps4"),
            SonyPlayStationPortable => (DiscBasedConsole, "Sony PlayStation Portable", "psp"),
            HasbroVideoNow => (OtherConsole, "Hasbro VideoNow", "hvn"),
            VTechVFlash => (OtherConsole, "VTech V.Flash & V.Smile Pro", "vflash"),
            AppleMacintosh => (Computer, "Apple Macintosh", "mac"),
            CommodoreAmigaCd => (Computer, "Commodore Amiga CD", "acd"),
            FujitsuFmTowns => (Computer, "Fujitsu FM Towns series", "fmt"),
            IbmPcCompatible => (Computer, "IBM PC compatible", "pc"),
            NecPc98 => (Computer, "NEC PC-98 series", "pc-98"),
            SharpX68000 => (Computer, "Sharp X68000", "x68k"),
            KonamiSystem573 => (Arcade, "Konami System 573", "ks573"),
            NamcoSystem246 => (Arcade, "Namco System 246", "ns246"),
            SegaChihiro => (Arcade, "Sega Chihiro", "chihiro"),
            SegaNaomi => (Arcade, "Sega Naomi", "naomi"),
            SegaNaomi2 => (Arcade, "Sega Naomi 2", "naomi2"),
            AudioCd => (Other, "Audio CD", "audio-cd"),
            BdVideo => (Other, "BD-Video", "bd-video"),
            DvdVideo => (Other, "DVD-Video", "dvd-video"),
            EnhancedCd => (Other, "Enhanced CD", "enhanced-cd"),
            PhotoCd => (Other, "Photo CD", "photo-cd"),
            SuperAudioCd => (Other, "Super Audio CD", "sacd"),
            VideoCd => (Other, "Video CD", "vcd"),
        }
    }

    pub fn category(&self) -> SystemCategory {
        self.info().0
    }

    pub fn long_name(&self) -> &'static str {
        self.info().1
    }

    /// Return the short identifier of the system, as accepted by [RedumpSystem::from_str].
    pub fn short_name(&self) -> &'static str {
        self.info().2
    }
}

impl Display for RedumpSystem {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.long_name())
    }
}

impl FromStr for RedumpSystem {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim().to_lowercase();
        RedumpSystem::iter()
            .find(|s| s.short_name() == input || s.long_name().to_lowercase() == input)
            .ok_or_else(|| format!("Unknown system '{}'", input))
    }
}

/// An entry in a grouped list of systems: either a category header or a selectable system.
/// A selectable entry of `None` stands for "no system".
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SystemItem {
    Header(SystemCategory),
    Entry(Option<RedumpSystem>),
}

impl SystemItem {
    pub fn is_header(&self) -> bool {
        matches!(self, SystemItem::Header(_))
    }

    /// Return the system of a selectable entry. Headers and the "no system" entry return `None`.
    pub fn system(&self) -> Option<RedumpSystem> {
        match self {
            SystemItem::Entry(system) => *system,
            SystemItem::Header(_) => None,
        }
    }
}

impl Display for SystemItem {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            SystemItem::Header(category) => write!(f, "---------- {} ----------", category),
            SystemItem::Entry(Some(system)) => write!(f, "{}", system),
            SystemItem::Entry(None) => write!(f, "Unknown"),
        }
    }
}

/// Build the grouped system list: a leading "no system" entry, then each category that has
/// systems as a header followed by its systems sorted by long name.
pub fn system_items() -> Vec<SystemItem> {
    let mut items = vec![SystemItem::Entry(None)];

    for category in SystemCategory::iter() {
        let mut systems: Vec<RedumpSystem> = RedumpSystem::iter().filter(|s| s.category() == category).collect();
        if systems.is_empty() {
            continue;
        }
        systems.sort_by_key(|s| s.long_name());

        items.push(SystemItem::Header(category));
        items.extend(systems.into_iter().map(|s| SystemItem::Entry(Some(s))));
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_names_unique() {
        let mut names: Vec<&str> = RedumpSystem::iter().map(|s| s.short_name()).collect();
        let count = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), count);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("sacd".parse::<RedumpSystem>(), Ok(RedumpSystem::SuperAudioCd));
        assert_eq!("Sony PlayStation 2".parse::<RedumpSystem>(), Ok(RedumpSystem::SonyPlayStation2));
        assert!("nes".parse::<RedumpSystem>().is_err());
    }

    #[test]
    fn test_system_items() {
        let items = system_items();
        assert_eq!(items[0], SystemItem::Entry(None));
        assert!(items[1].is_header());

        // Every system appears exactly once
        let listed: Vec<RedumpSystem> = items.iter().filter_map(|i| i.system()).collect();
        assert_eq!(listed.len(), RedumpSystem::iter().count());

        // Systems under each header share its category and are sorted by name
        let mut current = None;
        let mut last_name = "";
        for item in &items[1..] {
            match item {
                SystemItem::Header(category) => {
                    current = Some(*category);
                    last_name = "";
                }
                SystemItem::Entry(Some(system)) => {
                    assert_eq!(Some(system.category()), current);
                    assert!(system.long_name() >= last_name);
                    last_name = system.long_name();
                }
                SystemItem::Entry(None) => panic!("unexpected empty entry"),
            }
        }
    }
}
