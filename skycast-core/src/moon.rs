use std::fmt;

/// Named lunar phase derived from the fraction the timeline API reports:
/// 0 is a new moon, 0.5 a full moon, everything else falls in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoonPhase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhase {
    /// Map a phase fraction to its named phase.
    ///
    /// The quarter boundaries 0, 0.25, 0.5 and 0.75 are exact matches; the
    /// open intervals between them are the crescent/gibbous ranges. Checks
    /// run in order, first match wins.
    pub fn from_fraction(phase: f64) -> Self {
        if phase == 0.0 {
            Self::New
        } else if phase > 0.0 && phase < 0.25 {
            Self::WaxingCrescent
        } else if phase == 0.25 {
            Self::FirstQuarter
        } else if phase > 0.25 && phase < 0.5 {
            Self::WaxingGibbous
        } else if phase == 0.5 {
            Self::Full
        } else if phase > 0.5 && phase < 0.75 {
            Self::WaningGibbous
        } else if phase == 0.75 {
            Self::LastQuarter
        } else {
            Self::WaningCrescent
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::New => "new moon",
            Self::WaxingCrescent => "waxing crescent",
            Self::FirstQuarter => "first quarter",
            Self::WaxingGibbous => "waxing gibbous",
            Self::Full => "full moon",
            Self::WaningGibbous => "waning gibbous",
            Self::LastQuarter => "last quarter",
            Self::WaningCrescent => "waning crescent",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::New => "🌑",
            Self::WaxingCrescent => "🌒",
            Self::FirstQuarter => "🌓",
            Self::WaxingGibbous => "🌔",
            Self::Full => "🌕",
            Self::WaningGibbous => "🌖",
            Self::LastQuarter => "🌗",
            Self::WaningCrescent => "🌘",
        }
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.label(), self.emoji())
    }
}
