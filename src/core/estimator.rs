use crate::core::table::PriceTable;
use crate::domain::model::{Estimate, PriceBand, Projection, PropertyFilter, Quote, Variant};
use crate::domain::ports::ConfigProvider;
use serde::{Deserialize, Serialize};

/// Raw form values. Everything arrives as optional text; blanks count as missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EstimateInput {
    pub neighborhood: Option<String>,
    pub area: Option<String>,
    pub distance: Option<String>,
    pub rooms: Option<String>,
    pub zone: Option<String>,
    pub property_type: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatorSettings {
    pub variant: Variant,
    pub scale_by_area: bool,
    pub projection: Projection,
}

impl EstimatorSettings {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            scale_by_area: false,
            projection: variant.default_projection(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self {
            variant: config.variant(),
            scale_by_area: config.scale_by_area(),
            projection: config.projection(),
        }
    }

    pub fn area_required(&self) -> bool {
        self.variant == Variant::Basic || self.scale_by_area
    }
}

pub struct Estimator<'a> {
    table: &'a PriceTable,
    settings: EstimatorSettings,
}

impl<'a> Estimator<'a> {
    pub fn new(table: &'a PriceTable, settings: EstimatorSettings) -> Self {
        Self { table, settings }
    }

    pub fn estimate(&self, input: &EstimateInput) -> Estimate {
        let Some((filter, area)) = self.build_filter(input) else {
            tracing::debug!("Incomplete estimate request: {:?}", input);
            return Estimate::Incomplete;
        };

        if filter.neighborhood.is_empty() {
            tracing::debug!("No neighborhood selected");
            return Estimate::NotFound;
        }

        let Some(record) = self.table.lookup(&filter) else {
            tracing::debug!("No record for filter {:?}", filter);
            return Estimate::NotFound;
        };

        let current = match (self.settings.scale_by_area, area) {
            (true, Some(area)) => record.value * area as f64,
            _ => record.value,
        };
        let future = self.settings.projection.project(current, record.growth_percent);

        Estimate::Quote(Quote {
            neighborhood: filter.neighborhood,
            current,
            future,
            growth_percent: record.growth_percent,
            band: PriceBand::for_price(current),
        })
    }

    /// Returns the filter plus the parsed area, or `None` when a required input is missing.
    /// The neighborhood is not required: a blank one simply matches no row.
    pub fn build_filter(&self, input: &EstimateInput) -> Option<(PropertyFilter, Option<i64>)> {
        let neighborhood = non_blank(&input.neighborhood).unwrap_or_default();
        let distance = parse_count(&input.distance)?;
        let rooms = parse_count(&input.rooms)?;

        let area = if self.settings.area_required() {
            Some(parse_count(&input.area)?)
        } else {
            None
        };

        let filter = match self.settings.variant {
            Variant::Basic => PropertyFilter {
                neighborhood,
                area,
                distance,
                rooms,
                zone: None,
                property_type: None,
            },
            Variant::Zoned => PropertyFilter {
                neighborhood,
                area: None,
                distance,
                rooms,
                zone: Some(non_blank(&input.zone)?),
                property_type: Some(non_blank(&input.property_type)?),
            },
        };

        Some((filter, area))
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Whole-number form input: truncated toward zero, negatives clamp to 0.
fn parse_count(value: &Option<String>) -> Option<i64> {
    let raw = non_blank(value)?;
    let number: f64 = raw.parse().ok()?;
    if !number.is_finite() {
        return None;
    }
    Some((number.trunc() as i64).max(0))
}
