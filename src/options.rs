//! Options shared by classification and rendering.

/// The date system used for serial number conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateSystem {
    /// Windows Excel default (1900-based, includes leap year bug)
    #[default]
    Date1900,
    /// Mac Excel legacy (1904-based)
    Date1904,
}

/// Options for classifying and formatting values.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// The date system to use for serial number conversion.
    pub date_system: DateSystem,
    /// The caller's local offset from UTC, in minutes (UTC+8 is `480`).
    ///
    /// Only the timezone corrections of the fuzzy date parser read this.
    pub utc_offset_minutes: i32,
}

impl FormatOptions {
    /// Options using the 1904 date system.
    pub fn date1904() -> Self {
        FormatOptions {
            date_system: DateSystem::Date1904,
            ..Default::default()
        }
    }

    /// Returns a copy with the given local UTC offset.
    pub fn with_utc_offset(mut self, minutes: i32) -> Self {
        self.utc_offset_minutes = minutes;
        self
    }
}
