use crate::constants::{DEFAULT_EXIF_STRIP, DEFAULT_LEVEL, MAX_LEVEL, MIN_LEVEL};
use crate::error::{CompressorError, Result};
use std::ops::BitOr;

/// Metadata marker types the service can strip while optimizing.
///
/// Values combine with `|` into the integer sent as the `exif` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExifStrip(u32);

impl ExifStrip {
    pub const ALL: ExifStrip = ExifStrip(1);
    pub const COMMENT: ExifStrip = ExifStrip(2);
    pub const EXIF: ExifStrip = ExifStrip(4);
    pub const IPTC: ExifStrip = ExifStrip(8);
    pub const ICC: ExifStrip = ExifStrip(16);

    pub const fn from_bits(bits: u32) -> Self {
        ExifStrip(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: ExifStrip) -> bool {
        self.0 & other.0 == other.0
    }
}

impl Default for ExifStrip {
    fn default() -> Self {
        ExifStrip(DEFAULT_EXIF_STRIP)
    }
}

impl BitOr for ExifStrip {
    type Output = ExifStrip;

    fn bitor(self, rhs: ExifStrip) -> ExifStrip {
        ExifStrip(self.0 | rhs.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptimizeOptions {
    pub level: u8,
    pub exif_strip: ExifStrip,
}

impl Default for OptimizeOptions {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL,
            exif_strip: ExifStrip::default(),
        }
    }
}

impl OptimizeOptions {
    /// Merges the supplied fields over the defaults (`level` 90, `exif_strip` 1).
    pub fn new(level: Option<u8>, exif_strip: Option<u32>) -> Result<Self> {
        let level = level.unwrap_or(DEFAULT_LEVEL);
        if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
            return Err(CompressorError::InvalidLevel(level));
        }

        Ok(Self {
            level,
            exif_strip: exif_strip.map(ExifStrip::from_bits).unwrap_or_default(),
        })
    }

    pub fn with_level(mut self, level: u8) -> Result<Self> {
        if level > MAX_LEVEL {
            return Err(CompressorError::InvalidLevel(level));
        }
        self.level = level;
        Ok(self)
    }

    pub fn with_exif_strip(mut self, exif_strip: ExifStrip) -> Self {
        self.exif_strip = exif_strip;
        self
    }
}
