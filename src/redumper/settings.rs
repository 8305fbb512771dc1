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

//! Settings keys read by the redumper backend, their defaults, and the values they may hold.

use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use strum::IntoEnumIterator;

pub const ENABLE_VERBOSE: &str = "RedumperEnableVerbose";
pub const ENABLE_VERBOSE_DEFAULT: bool = true;

pub const ENABLE_DEBUG: &str = "RedumperEnableDebug";
pub const ENABLE_DEBUG_DEFAULT: bool = false;

pub const READ_METHOD: &str = "RedumperReadMethod";
pub const READ_METHOD_DEFAULT: &str = "NONE";

pub const SECTOR_ORDER: &str = "RedumperSectorOrder";
pub const SECTOR_ORDER_DEFAULT: &str = "NONE";

pub const USE_GENERIC_DRIVE_TYPE: &str = "RedumperUseGenericDriveType";
pub const USE_GENERIC_DRIVE_TYPE_DEFAULT: bool = false;

pub const REREAD_COUNT: &str = "RedumperRereadCount";
pub const REREAD_COUNT_DEFAULT: i32 = 20;

pub const ENABLE_LEADIN_RETRY: &str = "RedumperEnableLeadinRetry";
pub const ENABLE_LEADIN_RETRY_DEFAULT: bool = false;

pub const LEADIN_RETRY_COUNT: &str = "RedumperLeadinRetryCount";
pub const LEADIN_RETRY_COUNT_DEFAULT: i32 = 4;

/// Look up a variant by its command line spelling, ignoring letter case.
fn find_by_name<T: IntoEnumIterator + Display>(input: &str) -> Option<T> {
    T::iter().find(|v| v.to_string().eq_ignore_ascii_case(input.trim()))
}

/// The read command redumper issues to the drive. `None` leaves the choice to redumper.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReadMethod {
    #[default]
    None,
    Be,
    D8,
    BeCdda,
}

impl Display for ReadMethod {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ReadMethod::None => write!(f, "NONE"),
            ReadMethod::Be => write!(f, "BE"),
            ReadMethod::D8 => write!(f, "D8"),
            ReadMethod::BeCdda => write!(f, "BE_CDDA"),
        }
    }
}

impl FromStr for ReadMethod {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        find_by_name(input).ok_or_else(|| format!("Invalid read method '{}'", input))
    }
}

/// The order of data, C2 and subchannel in the sectors the drive returns. `None` leaves the
/// choice to redumper.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SectorOrder {
    #[default]
    None,
    DataC2Sub,
    DataSubC2,
    DataSub,
    DataC2,
}

impl Display for SectorOrder {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            SectorOrder::None => write!(f, "NONE"),
            SectorOrder::DataC2Sub => write!(f, "DATA_C2_SUB"),
            SectorOrder::DataSubC2 => write!(f, "DATA_SUB_C2"),
            SectorOrder::DataSub => write!(f, "DATA_SUB"),
            SectorOrder::DataC2 => write!(f, "DATA_C2"),
        }
    }
}

impl FromStr for SectorOrder {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        find_by_name(input).ok_or_else(|| format!("Invalid sector order '{}'", input))
    }
}

/// Drive type overrides accepted by `--drive-type`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DriveType {
    Generic,
    Plextor,
    LgAsu8a,
    LgAsu8b,
    LgAsu8c,
    LgAsu3,
    LgAsu2,
}

impl Display for DriveType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            DriveType::Generic => write!(f, "GENERIC"),
            DriveType::Plextor => write!(f, "PLEXTOR"),
            DriveType::LgAsu8a => write!(f, "LG_ASU8A"),
            DriveType::LgAsu8b => write!(f, "LG_ASU8B"),
            DriveType::LgAsu8c => write!(f, "LG_ASU8C"),
            DriveType::LgAsu3 => write!(f, "LG_ASU3"),
            DriveType::LgAsu2 => write!(f, "LG_ASU2"),
        }
    }
}

impl FromStr for DriveType {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        find_by_name(input).ok_or_else(|| format!("Invalid drive type '{}'", input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for method in ReadMethod::iter() {
            assert_eq!(method.to_string().parse::<ReadMethod>(), Ok(method));
        }
        for order in SectorOrder::iter() {
            assert_eq!(order.to_string().parse::<SectorOrder>(), Ok(order));
        }
        for drive_type in DriveType::iter() {
            assert_eq!(drive_type.to_string().parse::<DriveType>(), Ok(drive_type));
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!("be_cdda".parse::<ReadMethod>(), Ok(ReadMethod::BeCdda));
        assert_eq!(" data_sub ".parse::<SectorOrder>(), Ok(SectorOrder::DataSub));
        assert!("FAST".parse::<ReadMethod>().is_err());
    }
}
