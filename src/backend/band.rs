use std::fmt;
use std::str::FromStr;

use derive_more::Display;
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::frequency::Hertz;


pub use table::*;


pub mod table;


/// The firmware keeps band names in a 10 byte buffer, one byte of which is
/// the terminator.
pub const MAX_BAND_NAME_LEN: usize = 9;


#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BandTableError {
    #[error("Band name is empty or whitespace only")]
    EmptyName,
    #[error("Band name `{0}` is longer than {max} bytes", max = MAX_BAND_NAME_LEN)]
    NameTooLong(&'static str),
    #[error("Band `{0}` has an upper limit not above its lower limit")]
    InvertedLimits(&'static str),
    #[error("WSPR frequency of band `{0}` lies outside the band")]
    WsprOutOfBand(&'static str),
    #[error("Band name `{0}` occurs more than once")]
    DuplicateName(&'static str),
    #[error("Band `{0}` does not start above the preceding band")]
    OutOfOrder(&'static str),
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum BandLookupError {
    #[error("Unknown band name `{0}`")]
    UnknownName(String),
    #[error("No band contains {0} Hz")]
    NoBandForFrequency(Hertz),
}


/// # Errors
///
/// Will return `Err` describing the first entry that breaks a per-band
/// invariant, has a duplicate name or is not above the entry before it.
pub const fn validate_table(
    entries: &[BandEntry]
) -> Result<(), BandTableError> {
    let mut i = 0;

    while i < entries.len() {
        let entry = &entries[i];

        if let Err(error) = entry.validate() {
            return Err(error);
        }
        if i > 0 && entries[i - 1].upper_limit >= entry.lower_limit {
            return Err(BandTableError::OutOfOrder(entry.name));
        }

        let mut j = 0;

        while j < i {
            if names_match(entries[j].name, entry.name) {
                return Err(BandTableError::DuplicateName(entry.name));
            }
            j += 1;
        }

        i += 1;
    }

    Ok(())
}

#[must_use]
pub fn bands() -> &'static [BandEntry] {
    &BAND_TABLE
}

/// Case and whitespace are ignored, so `40m`, `40 M` and `40 m` all match.
#[must_use]
pub fn band_by_name(name: &str) -> Option<&'static BandEntry> {
    let entry = bands()
        .iter()
        .find(|entry| names_match(entry.name(), name));

    debug!("Band lookup by name `{name}`: {entry:?}");

    entry
}

#[must_use]
pub fn band_for_frequency(frequency: Hertz) -> Option<&'static BandEntry> {
    let entry = bands()
        .iter()
        .find(|entry| entry.contains(frequency));

    debug!("Band lookup by frequency {frequency} Hz: {entry:?}");

    entry
}

// ASCII case and whitespace are ignored.
const fn names_match(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let (mut i, mut j) = (0, 0);

    loop {
        while i < a.len() && a[i].is_ascii_whitespace() {
            i += 1;
        }
        while j < b.len() && b[j].is_ascii_whitespace() {
            j += 1;
        }

        match (i < a.len(), j < b.len()) {
            (false, false) => return true,
            (true, true) if a[i].eq_ignore_ascii_case(&b[j]) => {
                i += 1;
                j += 1;
            },
            _ => return false,
        }
    }
}


// Serialize only, `name` borrows for `'static`.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash, Serialize)]
#[display("{name}")]
pub struct BandEntry {
    name: &'static str,
    lower_limit: Hertz,
    upper_limit: Hertz,
    wspr_frequency: Hertz,
}

impl BandEntry {
    #[must_use]
    pub const fn new(
        name: &'static str,
        lower_limit: Hertz,
        upper_limit: Hertz,
        wspr_frequency: Hertz,
    ) -> Self {
        Self {
            name,
            lower_limit,
            upper_limit,
            wspr_frequency,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn lower_limit(&self) -> Hertz {
        self.lower_limit
    }

    #[must_use]
    pub const fn upper_limit(&self) -> Hertz {
        self.upper_limit
    }

    #[must_use]
    pub const fn wspr_frequency(&self) -> Hertz {
        self.wspr_frequency
    }

    #[must_use]
    pub const fn width(&self) -> Hertz {
        self.upper_limit.saturating_sub(self.lower_limit)
    }

    /// Both band edges are part of the band.
    #[must_use]
    pub const fn contains(&self, frequency: Hertz) -> bool {
        self.lower_limit <= frequency && frequency <= self.upper_limit
    }

    /// # Errors
    ///
    /// Will return `Err` if the name is blank or does not fit the firmware
    /// buffer, the limits are not strictly ordered or the WSPR frequency is
    /// outside the band.
    pub const fn validate(&self) -> Result<(), BandTableError> {
        if names_match(self.name, "") {
            return Err(BandTableError::EmptyName);
        }
        if self.name.len() > MAX_BAND_NAME_LEN {
            return Err(BandTableError::NameTooLong(self.name));
        }
        if self.upper_limit <= self.lower_limit {
            return Err(BandTableError::InvertedLimits(self.name));
        }
        if !self.contains(self.wspr_frequency) {
            return Err(BandTableError::WsprOutOfBand(self.name));
        }

        Ok(())
    }
}


// Discriminants are the row indices in `BAND_TABLE`.
#[repr(usize)]
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize,
    Deserialize
)]
pub enum Band {
    #[serde(rename = "160 m")]
    M160 = 0,
    #[serde(rename = "80 m")]
    M80  = 1,
    #[serde(rename = "40 m")]
    M40  = 2,
    #[serde(rename = "30 m")]
    M30  = 3,
    #[serde(rename = "20 m")]
    M20  = 4,
    #[serde(rename = "17 m")]
    M17  = 5,
    #[serde(rename = "15 m")]
    M15  = 6,
    #[serde(rename = "12 m")]
    M12  = 7,
    #[serde(rename = "10 m")]
    M10  = 8,
    #[serde(rename = "6 m")]
    M6   = 9,
    #[serde(rename = "2 m")]
    M2   = 10,
}

impl Band {
    pub const ALL: [Self; BAND_COUNT] = [
        Self::M160,
        Self::M80,
        Self::M40,
        Self::M30,
        Self::M20,
        Self::M17,
        Self::M15,
        Self::M12,
        Self::M10,
        Self::M6,
        Self::M2,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn entry(self) -> &'static BandEntry {
        &BAND_TABLE[self.index()]
    }

    #[must_use]
    pub fn from_frequency(frequency: Hertz) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|band| band.entry().contains(frequency))
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.entry().name())
    }
}

impl FromStr for Band {
    type Err = BandLookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|band| names_match(band.entry().name(), s))
            .ok_or_else(|| BandLookupError::UnknownName(s.to_string()))
    }
}
