//! Routes of administration with their dose and duration tables

use std::fmt;

/// Route by which a substance is taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdministrationRoute {
    /// Swallowed
    Oral,
    /// Under the tongue
    Sublingual,
    /// Between gums and cheek
    Buccal,
    /// Sniffed
    Insufflated,
    /// Rectal
    Rectal,
    /// Through skin
    Transdermal,
    /// Injected under the skin
    Subcutaneous,
    /// Injected into muscle
    Intramuscular,
    /// Injected into a vein
    Intravenous,
    /// Smoked
    Smoked,
    /// Inhaled
    Inhaled,
}

impl AdministrationRoute {
    /// Every route, in feed order
    pub const ALL: [AdministrationRoute; 11] = [
        AdministrationRoute::Oral,
        AdministrationRoute::Sublingual,
        AdministrationRoute::Buccal,
        AdministrationRoute::Insufflated,
        AdministrationRoute::Rectal,
        AdministrationRoute::Transdermal,
        AdministrationRoute::Subcutaneous,
        AdministrationRoute::Intramuscular,
        AdministrationRoute::Intravenous,
        AdministrationRoute::Smoked,
        AdministrationRoute::Inhaled,
    ];

    /// Feed identifier of the route
    pub fn as_str(&self) -> &'static str {
        match self {
            AdministrationRoute::Oral => "oral",
            AdministrationRoute::Sublingual => "sublingual",
            AdministrationRoute::Buccal => "buccal",
            AdministrationRoute::Insufflated => "insufflated",
            AdministrationRoute::Rectal => "rectal",
            AdministrationRoute::Transdermal => "transdermal",
            AdministrationRoute::Subcutaneous => "subcutaneous",
            AdministrationRoute::Intramuscular => "intramuscular",
            AdministrationRoute::Intravenous => "intravenous",
            AdministrationRoute::Smoked => "smoked",
            AdministrationRoute::Inhaled => "inhaled",
        }
    }

    /// Parse a feed identifier
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|route| route.as_str() == s)
    }

    /// Human readable label
    pub fn display_string(&self) -> &'static str {
        match self {
            AdministrationRoute::Oral => "oral (swallowed)",
            AdministrationRoute::Sublingual => "sublingual (under the tongue)",
            AdministrationRoute::Buccal => "buccal (between gums and cheek)",
            AdministrationRoute::Insufflated => "insufflated (sniffed)",
            AdministrationRoute::Rectal => "rectal",
            AdministrationRoute::Transdermal => "transdermal (through skin)",
            AdministrationRoute::Subcutaneous => "subcutaneous (injected)",
            AdministrationRoute::Intramuscular => "intramuscular (injected)",
            AdministrationRoute::Intravenous => "intravenous (injected)",
            AdministrationRoute::Smoked => "smoked",
            AdministrationRoute::Inhaled => "inhaled",
        }
    }
}

impl fmt::Display for AdministrationRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_string())
    }
}

/// Inclusive dose range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoseRange {
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
}

/// Dose table for one route
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoaDose {
    /// Unit the amounts are given in (mg, µg, ...)
    pub units: String,
    /// Threshold dose
    pub threshold: Option<f64>,
    /// Light dose range
    pub light: Option<DoseRange>,
    /// Common dose range
    pub common: Option<DoseRange>,
    /// Strong dose range
    pub strong: Option<DoseRange>,
    /// Amount from which a dose counts as heavy
    pub heavy: Option<f64>,
}

/// Unit of a duration range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DurationUnits {
    /// Seconds
    Seconds,
    /// Minutes
    Minutes,
    /// Hours
    Hours,
    /// Days
    Days,
}

impl DurationUnits {
    /// Parse a feed unit, accepting singular and plural forms
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "second" | "seconds" => Some(DurationUnits::Seconds),
            "minute" | "minutes" => Some(DurationUnits::Minutes),
            "hour" | "hours" => Some(DurationUnits::Hours),
            "day" | "days" => Some(DurationUnits::Days),
            _ => None,
        }
    }

    /// Length of one unit in seconds
    pub fn seconds(&self) -> f64 {
        match self {
            DurationUnits::Seconds => 1.0,
            DurationUnits::Minutes => 60.0,
            DurationUnits::Hours => 3600.0,
            DurationUnits::Days => 86_400.0,
        }
    }
}

/// Duration range in a given unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationRange {
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
    /// Unit of both bounds
    pub units: DurationUnits,
}

impl DurationRange {
    /// Lower bound in seconds
    pub fn min_seconds(&self) -> f64 {
        self.min * self.units.seconds()
    }

    /// Upper bound in seconds
    pub fn max_seconds(&self) -> f64 {
        self.max * self.units.seconds()
    }
}

/// Timeline of effects for one route
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoaDuration {
    /// Time until first effects
    pub onset: Option<DurationRange>,
    /// Time from onset to peak
    pub comeup: Option<DurationRange>,
    /// Length of the peak
    pub peak: Option<DurationRange>,
    /// Time from peak to baseline
    pub offset: Option<DurationRange>,
    /// Total duration
    pub total: Option<DurationRange>,
    /// Residual effects after baseline
    pub afterglow: Option<DurationRange>,
}

/// Dose and duration data for one route of administration
#[derive(Debug, Clone, PartialEq)]
pub struct Roa {
    /// Route this data applies to
    pub route: AdministrationRoute,
    /// Dose table, if the feed carries one
    pub dose: Option<RoaDose>,
    /// Duration table, if the feed carries one
    pub duration: Option<RoaDuration>,
}

impl Roa {
    /// Route data with neither dose nor duration
    pub fn new(route: AdministrationRoute) -> Self {
        Self {
            route,
            dose: None,
            duration: None,
        }
    }
}
