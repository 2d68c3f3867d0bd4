use crate::core::boroughs::LONDON_BOROUGHS;
use crate::domain::model::{PropertyFilter, PropertyRecord, Variant};
use crate::utils::error::{LookupError, Result};
use serde::{Deserialize, Serialize};
use std::io::Read;

#[derive(Debug, Deserialize)]
struct BasicRow {
    neighborhood: String,
    area: String,
    distance: String,
    bathrooms: String,
    estimated_price: f64,
}

#[derive(Debug, Deserialize)]
struct ZonedRow {
    #[serde(rename = "District")]
    district: String,
    #[serde(rename = "Distance_to_station")]
    distance_to_station: String,
    #[serde(rename = "No_of_Bedrooms")]
    bedrooms: String,
    #[serde(rename = "London_zone")]
    zone: String,
    #[serde(rename = "House_Type")]
    house_type: String,
    #[serde(rename = "Predicted_value")]
    predicted_value: f64,
    #[serde(rename = "Percent_5_years")]
    percent_5_years: Option<f64>,
}

/// Dropdown contents for the form.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FormOptions {
    pub neighborhoods: Vec<String>,
    pub zones: Vec<String>,
    pub property_types: Vec<String>,
}

/// Immutable in-memory copy of the spreadsheet, in load order.
#[derive(Debug, Clone)]
pub struct PriceTable {
    variant: Variant,
    records: Vec<PropertyRecord>,
}

impl PriceTable {
    pub fn new(variant: Variant, records: Vec<PropertyRecord>) -> Self {
        Self { variant, records }
    }

    pub fn from_csv_bytes(variant: Variant, data: &[u8]) -> Result<Self> {
        Self::from_csv_reader(variant, data)
    }

    pub fn from_csv_reader<R: Read>(variant: Variant, reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();
        match variant {
            Variant::Basic => {
                for (idx, row) in rdr.deserialize::<BasicRow>().enumerate() {
                    records.push(basic_record(idx + 2, row?)?);
                }
            }
            Variant::Zoned => {
                for (idx, row) in rdr.deserialize::<ZonedRow>().enumerate() {
                    records.push(zoned_record(idx + 2, row?)?);
                }
            }
        }

        if records.is_empty() {
            return Err(LookupError::EmptyTableError);
        }

        tracing::debug!("Parsed {} {} records", records.len(), variant);
        Ok(Self { variant, records })
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[PropertyRecord] {
        &self.records
    }

    /// First row, in load order, whose filter fields all equal `filter`.
    pub fn lookup(&self, filter: &PropertyFilter) -> Option<&PropertyRecord> {
        self.records.iter().find(|record| record.matches(filter))
    }

    pub fn form_options(&self) -> FormOptions {
        let neighborhoods = match self.variant {
            Variant::Basic => LONDON_BOROUGHS.iter().map(|b| b.to_string()).collect(),
            Variant::Zoned => distinct(self.records.iter().map(|r| Some(r.neighborhood.as_str()))),
        };

        FormOptions {
            neighborhoods,
            zones: distinct(self.records.iter().map(|r| r.zone.as_deref())),
            property_types: distinct(self.records.iter().map(|r| r.property_type.as_deref())),
        }
    }
}

fn distinct<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for value in values.flatten() {
        if !value.is_empty() && !seen.iter().any(|s| s == value) {
            seen.push(value.to_string());
        }
    }
    seen
}

/// Largest magnitude an f64 holds without losing whole-number precision.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Accepts `949` as well as the `949.0` spreadsheets like to export.
fn parse_integral(row: usize, column: &str, raw: &str) -> Result<i64> {
    let data_error = |message: String| LookupError::DataError {
        row,
        column: column.to_string(),
        message,
    };

    if let Ok(value) = raw.parse::<i64>() {
        return Ok(value);
    }

    let value: f64 = raw
        .parse()
        .map_err(|_| data_error(format!("'{}' is not a number", raw)))?;
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(data_error(format!("'{}' is not a whole number", raw)));
    }
    if value.abs() > MAX_EXACT_INTEGER {
        return Err(data_error(format!("'{}' is out of range", raw)));
    }
    Ok(value as i64)
}

fn basic_record(row: usize, raw: BasicRow) -> Result<PropertyRecord> {
    Ok(PropertyRecord {
        neighborhood: raw.neighborhood,
        area: Some(parse_integral(row, "area", &raw.area)?),
        distance: parse_integral(row, "distance", &raw.distance)?,
        rooms: parse_integral(row, "bathrooms", &raw.bathrooms)?,
        zone: None,
        property_type: None,
        value: raw.estimated_price,
        growth_percent: None,
    })
}

fn zoned_record(row: usize, raw: ZonedRow) -> Result<PropertyRecord> {
    Ok(PropertyRecord {
        neighborhood: raw.district,
        area: None,
        distance: parse_integral(row, "Distance_to_station", &raw.distance_to_station)?,
        rooms: parse_integral(row, "No_of_Bedrooms", &raw.bedrooms)?,
        zone: Some(raw.zone),
        property_type: Some(raw.house_type),
        value: raw.predicted_value,
        growth_percent: raw.percent_5_years,
    })
}
