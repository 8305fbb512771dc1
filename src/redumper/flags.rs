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

    src/redumper/flags.rs

    Flag names for the redumper backend
*/

//! Flag names understood by redumper.

// General
pub const HELP_LONG: &str = "--help";
pub const HELP_SHORT: &str = "-h";
pub const VERSION: &str = "--version";
pub const VERBOSE: &str = "--verbose";
pub const AUTO_EJECT: &str = "--auto-eject";
pub const DEBUG: &str = "--debug";
pub const DRIVE: &str = "--drive";
pub const SPEED: &str = "--speed";
pub const RETRIES: &str = "--retries";
pub const IMAGE_PATH: &str = "--image-path";
pub const IMAGE_NAME: &str = "--image-name";
pub const OVERWRITE: &str = "--overwrite";

// Drive configuration
pub const DRIVE_TYPE: &str = "--drive-type";
pub const DRIVE_READ_OFFSET: &str = "--drive-read-offset";
pub const DRIVE_C2_SHIFT: &str = "--drive-c2-shift";
pub const DRIVE_PREGAP_START: &str = "--drive-pregap-start";
pub const DRIVE_READ_METHOD: &str = "--drive-read-method";
pub const DRIVE_SECTOR_ORDER: &str = "--drive-sector-order";

// Drive specific
pub const PLEXTOR_SKIP_LEADIN: &str = "--plextor-skip-leadin";
pub const PLEXTOR_LEADIN_RETRIES: &str = "--plextor-leadin-retries";
pub const ASUS_SKIP_LEADOUT: &str = "--asus-skip-leadout";

// Offset
pub const FORCE_OFFSET: &str = "--force-offset";
pub const AUDIO_SILENCE_THRESHOLD: &str = "--audio-silence-threshold";
pub const CORRECT_OFFSET_SHIFT: &str = "--correct-offset-shift";
pub const OFFSET_SHIFT_RELOCATE: &str = "--offset-shift-relocate";

// Split
pub const FORCE_SPLIT: &str = "--force-split";
pub const LEAVE_UNCHANGED: &str = "--leave-unchanged";
pub const FORCE_QTOC: &str = "--force-qtoc";
pub const SKIP_FILL: &str = "--skip-fill";
pub const ISO9660_TRIM: &str = "--iso9660-trim";

// Miscellaneous
pub const LBA_START: &str = "--lba-start";
pub const LBA_END: &str = "--lba-end";
pub const REFINE_SUBCHANNEL: &str = "--refine-subchannel";
pub const SKIP: &str = "--skip";
pub const DUMP_WRITE_OFFSET: &str = "--dump-write-offset";
pub const DUMP_READ_SIZE: &str = "--dump-read-size";
pub const OVERREAD_LEADOUT: &str = "--overread-leadout";
pub const FORCE_UNSCRAMBLED: &str = "--force-unscrambled";
pub const LEGACY_SUBS: &str = "--legacy-subs";
pub const DISABLE_CDTEXT: &str = "--disable-cdtext";
