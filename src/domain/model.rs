use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One row of the property spreadsheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub neighborhood: String,
    pub area: Option<i64>,
    pub distance: i64,
    /// Bathrooms in the basic sheet, bedrooms in the zoned one.
    pub rooms: i64,
    pub zone: Option<String>,
    pub property_type: Option<String>,
    pub value: f64,
    pub growth_percent: Option<f64>,
}

/// The user-selected attributes used for exact-match row selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyFilter {
    pub neighborhood: String,
    pub area: Option<i64>,
    pub distance: i64,
    pub rooms: i64,
    pub zone: Option<String>,
    pub property_type: Option<String>,
}

impl PropertyRecord {
    pub fn matches(&self, filter: &PropertyFilter) -> bool {
        self.neighborhood == filter.neighborhood
            && self.area == filter.area
            && self.distance == filter.distance
            && self.rooms == filter.rooms
            && self.zone == filter.zone
            && self.property_type == filter.property_type
    }
}

/// Column layout of the spreadsheet export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// neighborhood, area, distance, bathrooms, estimated_price
    #[default]
    Basic,
    /// District, Distance_to_station, No_of_Bedrooms, London_zone, House_Type,
    /// Predicted_value, Percent_5_years
    Zoned,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Basic => "basic",
            Variant::Zoned => "zoned",
        }
    }

    pub fn rooms_label(&self) -> &'static str {
        match self {
            Variant::Basic => "Number of Bathrooms",
            Variant::Zoned => "Number of Bedrooms",
        }
    }

    pub fn neighborhood_label(&self) -> &'static str {
        match self {
            Variant::Basic => "Select a neighborhood",
            Variant::Zoned => "Select a district",
        }
    }

    pub fn default_projection(&self) -> Projection {
        match self {
            Variant::Basic => Projection::Multiplier { factor: 2.0 },
            Variant::Zoned => Projection::RecordGrowth,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Variant::Basic),
            "zoned" => Ok(Variant::Zoned),
            other => Err(format!("unknown variant '{}' (expected basic or zoned)", other)),
        }
    }
}

/// How the five-year figure is derived from the current estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Projection {
    Multiplier { factor: f64 },
    PercentOffset { percent: f64 },
    /// Uses the matched row's own five-year growth percentage.
    RecordGrowth,
}

impl Projection {
    pub fn project(&self, current: f64, record_growth: Option<f64>) -> f64 {
        match *self {
            Projection::Multiplier { factor } => current * factor,
            Projection::PercentOffset { percent } => current * (1.0 + percent / 100.0),
            Projection::RecordGrowth => match record_growth {
                Some(percent) => current * (1.0 + percent / 100.0),
                None => current,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceBand {
    Green,
    Red,
}

impl PriceBand {
    pub const THRESHOLD: f64 = 1_000_000.0;

    pub fn for_price(current: f64) -> Self {
        if current > Self::THRESHOLD {
            PriceBand::Red
        } else {
            PriceBand::Green
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceBand::Green => "green",
            PriceBand::Red => "red",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub neighborhood: String,
    pub current: f64,
    pub future: f64,
    pub growth_percent: Option<f64>,
    pub band: PriceBand,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Estimate {
    Quote(Quote),
    NotFound,
    Incomplete,
}
