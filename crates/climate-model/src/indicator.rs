//! The annual indicator sources joined into the master table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the five annual per-country indicators.
///
/// The declaration order is the column order of the merged master table and
/// the order in which the outer joins are chained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    /// CO2 emissions per capita.
    Co2,
    /// Primary energy use per capita.
    Energy,
    /// Share of population using at least basic drinking water.
    Water,
    /// Share of population with improved sanitation facilities.
    Sanitation,
    /// GDP per capita (Maddison project).
    Gdp,
}

impl Indicator {
    /// All indicators in master-table column order.
    pub const ALL: [Indicator; 5] = [
        Indicator::Co2,
        Indicator::Energy,
        Indicator::Water,
        Indicator::Sanitation,
        Indicator::Gdp,
    ];

    /// Column name in the merged master table.
    #[must_use]
    pub const fn column_name(self) -> &'static str {
        match self {
            Self::Co2 => "co2_pc",
            Self::Energy => "energy_pc",
            Self::Water => "water_basic_pct",
            Self::Sanitation => "sanitation_pct",
            Self::Gdp => "gdp_pc",
        }
    }

    /// Short label used in diagnostics and missing-source reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Co2 => "co2",
            Self::Energy => "energy",
            Self::Water => "water",
            Self::Sanitation => "sanit",
            Self::Gdp => "gdp",
        }
    }

    /// File names the source may be published under, in lookup order.
    #[must_use]
    pub const fn default_candidates(self) -> &'static [&'static str] {
        match self {
            Self::Co2 => &[
                "co-emissions-per-capita.csv",
                "co2-emissions-per-capita.csv",
            ],
            Self::Energy => &["per-capita-energy-use.csv"],
            Self::Water => &["population-using-at-least-basic-drinking-water.csv"],
            Self::Sanitation => &[
                "share-of-population-with-improved-sanitation-facilities.csv",
                // misspelled name seen in older downloads
                "share-of-population-with-improved-sanitation-faciltities.csv",
            ],
            Self::Gdp => &["gdp-per-capita-maddison-project-database.csv"],
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
