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

//! redumper modes, and the policy choosing them for a media type and system.
//!
//! redumper takes one or more modes ahead of its flags, e.g. `cd skeleton --drive=E:`. Every
//! flag is accepted with every mode, so there is a single base command, [NONE].

use crate::types::{MediaType, RedumpSystem};

/// The base command, and the mode rendered when no mode has been chosen. Renders as nothing.
pub const NONE: &str = "";

pub const CD: &str = "cd";
pub const DVD: &str = "dvd";
pub const BLURAY: &str = "bd";
pub const SACD: &str = "sacd";
pub const NEW: &str = "new";
pub const RINGS: &str = "rings";
pub const DUMP: &str = "dump";
pub const DUMP_NEW: &str = "dumpnew";
pub const REFINE: &str = "refine";
pub const REFINE_NEW: &str = "refinenew";
pub const VERIFY: &str = "verify";
pub const DVD_KEY: &str = "dvdkey";
pub const EJECT: &str = "eject";
pub const DVD_ISO_KEY: &str = "dvdisokey";
pub const PROTECTION: &str = "protection";
pub const SPLIT: &str = "split";
pub const HASH: &str = "hash";
pub const INFO: &str = "info";
pub const SKELETON: &str = "skeleton";
pub const DEBUG: &str = "debug";

/// Every mode keyword recognized while parsing.
pub const MODES: [&str; 20] = [
    CD,
    DVD,
    BLURAY,
    SACD,
    NEW,
    RINGS,
    DUMP,
    DUMP_NEW,
    REFINE,
    REFINE_NEW,
    VERIFY,
    DVD_KEY,
    EJECT,
    DVD_ISO_KEY,
    PROTECTION,
    SPLIT,
    HASH,
    INFO,
    SKELETON,
    DEBUG,
];

/// Modes that acquire a disc image, as opposed to verifying, hashing, reporting or ejecting.
pub const DUMPING_MODES: [&str; 7] = [CD, DVD, BLURAY, SACD, NEW, DUMP, DUMP_NEW];

/// Return the mode keyword matching `token` exactly, if any.
pub fn mode_from_str(token: &str) -> Option<&'static str> {
    MODES.iter().copied().find(|m| *m == token)
}

/// Return true if `modes` contains a mode that produces a disc image.
pub fn is_dumping(modes: &[&str]) -> bool {
    modes.iter().any(|m| DUMPING_MODES.contains(m))
}

/// Choose the modes to run for a media type and system.
///
/// Returns `None` for media types redumper cannot dump.
pub fn resolve_modes(media_type: Option<MediaType>, system: Option<RedumpSystem>) -> Option<Vec<&'static str>> {
    match media_type? {
        MediaType::CdRom => match system {
            Some(RedumpSystem::SuperAudioCd) => Some(vec![SACD]),
            _ => Some(vec![CD, SKELETON]),
        },
        MediaType::Dvd
        | MediaType::HdDvd
        | MediaType::NintendoGameCubeGameDisc
        | MediaType::NintendoWiiOpticalDisc => Some(vec![DVD]),
        MediaType::BluRay | MediaType::NintendoWiiUOpticalDisc => Some(vec![BLURAY]),
        _ => None,
    }
}
