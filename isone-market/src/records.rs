use crate::error::{MarketError, Result};
use chrono::{Datelike, NaiveDate};
use csv::{ReaderBuilder, StringRecord};
use isone_utils::dates::{day_of_year, parse_date};
use serde::Serialize;
use std::collections::BTreeMap;

/// Column holding the observation date in every tabular fixture.
pub const DATE_COLUMN: &str = "Date";
/// Daily average real-time LMP (USD/MWh).
pub const PRICE_COLUMN: &str = "Avg_RT_LMP";
/// Demand at the day's minimum hour (MWh).
pub const MIN_DEMAND_COLUMN: &str = "Min_Demand";
/// Demand at the day's peak hour (MWh).
pub const PEAK_DEMAND_COLUMN: &str = "Peak_Demand";

/// One day of fractional energy per state.
///
/// A state's value is `None` when the cell was empty or unparseable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionalEnergyRecord {
    pub date: NaiveDate,
    pub values: BTreeMap<String, Option<f64>>,
}

impl RegionalEnergyRecord {
    pub fn new<I, S>(date: NaiveDate, values: I) -> Self
    where
        I: IntoIterator<Item = (S, Option<f64>)>,
        S: Into<String>,
    {
        RegionalEnergyRecord {
            date,
            values: values.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Fractional energy for a state on this day, if present.
    pub fn value(&self, region: &str) -> Option<f64> {
        self.values.get(region).copied().flatten()
    }
}

/// Daily average real-time price for one load zone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceObservation {
    pub date: NaiveDate,
    /// 1-based ordinal derived from `date`
    pub day_of_year: u32,
    pub avg_real_time_price: Option<f64>,
}

impl PriceObservation {
    pub fn new(date: NaiveDate, avg_real_time_price: Option<f64>) -> Self {
        PriceObservation {
            date,
            day_of_year: day_of_year(&date),
            avg_real_time_price,
        }
    }
}

/// Daily peak and minimum demand for one load zone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemandObservation {
    pub date: NaiveDate,
    /// 1-based ordinal derived from `date`
    pub day_of_year: u32,
    /// 1 = Monday .. 7 = Sunday
    pub day_of_week: u32,
    pub peak_demand: Option<f64>,
    pub min_demand: Option<f64>,
}

impl DemandObservation {
    pub fn new(date: NaiveDate, peak_demand: Option<f64>, min_demand: Option<f64>) -> Self {
        DemandObservation {
            date,
            day_of_year: day_of_year(&date),
            day_of_week: date.weekday().number_from_monday(),
            peak_demand,
            min_demand,
        }
    }
}

/// Parse a numeric cell; placeholders and garbage are treated as absent.
pub fn parse_optional_f64(cell: &str) -> Option<f64> {
    let lowered = cell.trim().to_lowercase();
    match lowered.as_str() {
        "" | "null" | "n/a" | "na" | "nan" | "---" => None,
        s => s.parse::<f64>().ok().filter(|v| v.is_finite()),
    }
}

fn column_index(headers: &StringRecord, column: &str, file: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == column)
        .ok_or_else(|| MarketError::MissingColumn {
            file: file.to_string(),
            column: column.to_string(),
        })
}

fn parse_row_date(record: &StringRecord, idx: usize, row: usize, file: &str) -> Result<NaiveDate> {
    let raw = record.get(idx).unwrap_or("");
    parse_date(raw).map_err(|_| MarketError::InvalidDate {
        file: file.to_string(),
        row,
        value: raw.to_string(),
    })
}

fn reader(csv_data: &str) -> csv::Reader<&[u8]> {
    ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(csv_data.as_bytes())
}

/// Parse the wide fractional-energy CSV (`Date` plus one column per state).
///
/// Every non-date column is treated as a state. `file` only labels errors.
pub fn parse_energy_csv(csv_data: &str, file: &str) -> Result<Vec<RegionalEnergyRecord>> {
    let mut rdr = reader(csv_data);
    let headers = rdr.headers()?.clone();
    let date_idx = column_index(&headers, DATE_COLUMN, file)?;

    let mut records = Vec::new();
    let mut absent = 0usize;
    for (i, result) in rdr.records().enumerate() {
        let record = result?;
        let row = i + 2; // 1-based, after the header
        let date = parse_row_date(&record, date_idx, row, file)?;
        let values = headers
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != date_idx)
            .map(|(idx, state)| {
                let value = record.get(idx).and_then(parse_optional_f64);
                if value.is_none() {
                    absent += 1;
                }
                (state.to_string(), value)
            });
        records.push(RegionalEnergyRecord::new(date, values));
    }
    if absent > 0 {
        log::warn!("{}: {} empty or unparseable energy cells", file, absent);
    }
    log::info!("{}: loaded {} fractional energy rows", file, records.len());
    Ok(records)
}

/// Parse a zone export into price observations (`Date`, `Avg_RT_LMP`).
pub fn parse_price_csv(csv_data: &str, file: &str) -> Result<Vec<PriceObservation>> {
    let mut rdr = reader(csv_data);
    let headers = rdr.headers()?.clone();
    let date_idx = column_index(&headers, DATE_COLUMN, file)?;
    let price_idx = column_index(&headers, PRICE_COLUMN, file)?;

    let mut observations = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result?;
        let date = parse_row_date(&record, date_idx, i + 2, file)?;
        let price = record.get(price_idx).and_then(parse_optional_f64);
        observations.push(PriceObservation::new(date, price));
    }
    log::debug!("{}: loaded {} price rows", file, observations.len());
    Ok(observations)
}

/// Parse a zone export into demand observations (`Date`, `Peak_Demand`, `Min_Demand`).
pub fn parse_demand_csv(csv_data: &str, file: &str) -> Result<Vec<DemandObservation>> {
    let mut rdr = reader(csv_data);
    let headers = rdr.headers()?.clone();
    let date_idx = column_index(&headers, DATE_COLUMN, file)?;
    let peak_idx = column_index(&headers, PEAK_DEMAND_COLUMN, file)?;
    let min_idx = column_index(&headers, MIN_DEMAND_COLUMN, file)?;

    let mut observations = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result?;
        let date = parse_row_date(&record, date_idx, i + 2, file)?;
        let peak = record.get(peak_idx).and_then(parse_optional_f64);
        let min = record.get(min_idx).and_then(parse_optional_f64);
        observations.push(DemandObservation::new(date, peak, min));
    }
    log::debug!("{}: loaded {} demand rows", file, observations.len());
    Ok(observations)
}
