//! Reading asset catalogs from CSV.
//!
//! The loader is where untrusted input is cleaned up: malformed rows and
//! non-positive prices are skipped (and logged) here, so that optimizers only
//! ever see valid assets.

use ait_solver::{Asset, Catalog};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Read;
use thiserror::Error;
use tracing::{Level, event};

/// How the profit column of a catalog is expressed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ProfitMode {
    /// A percentage of the price, realized after the holding period
    #[default]
    Percent,
    /// An absolute amount in the price's currency
    Amount,
}

/// Counts of what happened to the rows of a catalog file
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Rows turned into assets
    pub loaded: usize,
    /// Rows rejected as malformed or invalid
    pub skipped: usize,
}

/// Failures that abort loading altogether
#[derive(Debug, Error)]
pub enum LoadError {
    /// The delimiter is not a single ASCII character
    #[error("delimiter must be a single ASCII character, got {0:?}")]
    Delimiter(String),
    /// The underlying reader failed or the file is not valid CSV
    #[error("unreadable catalog: {0}")]
    Csv(#[from] csv::Error),
}

/// Reasons for skipping a single row
#[derive(Debug, Error, PartialEq)]
pub enum RowError {
    #[error("missing {0} column")]
    MissingColumn(&'static str),
    #[error("empty name")]
    EmptyName,
    #[error("{column} is not a number: {value:?}")]
    InvalidNumber { column: &'static str, value: String },
    #[error("price must be strictly positive, got {0}")]
    NonPositivePrice(f64),
}

/// Reads catalogs of (name, price, profit) rows
#[derive(Clone, Debug)]
pub struct CatalogLoader {
    profit_mode: ProfitMode,
    delimiter: u8,
}

impl Default for CatalogLoader {
    fn default() -> Self {
        Self {
            profit_mode: ProfitMode::default(),
            delimiter: b',',
        }
    }
}

impl CatalogLoader {
    pub fn new(profit_mode: ProfitMode, delimiter: &str) -> Result<Self, LoadError> {
        match delimiter.as_bytes() {
            [byte] if byte.is_ascii() => Ok(Self {
                profit_mode,
                delimiter: *byte,
            }),
            _ => Err(LoadError::Delimiter(delimiter.to_owned())),
        }
    }

    /// Read a catalog, skipping rows that cannot become valid assets.
    ///
    /// The first row is treated as a header when its price field is not a
    /// number. A header naming `name`, `price` and `profit` columns (in any
    /// order, case-insensitively) determines where those fields are read
    /// from; otherwise they are the first three columns.
    pub fn load<R: Read>(&self, reader: R) -> Result<(Catalog, LoadReport), LoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .delimiter(self.delimiter)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut columns = Columns::default();
        let mut assets = Vec::new();
        let mut report = LoadReport::default();

        for (row, record) in reader.records().enumerate() {
            let record = record?;

            if row == 0 && columns.is_header(&record) {
                columns = Columns::from_header(&record);
                continue;
            }

            match columns.parse(&record, self.profit_mode) {
                Ok(asset) => {
                    assets.push(asset);
                    report.loaded += 1;
                }
                Err(reason) => {
                    event!(Level::WARN, row = row + 1, %reason, "skipping catalog row");
                    report.skipped += 1;
                }
            }
        }

        event!(
            Level::INFO,
            loaded = report.loaded,
            skipped = report.skipped,
            "catalog loaded"
        );

        Ok((Catalog::new(assets), report))
    }
}

/// Field positions within a record
#[derive(Clone, Copy, Debug, PartialEq)]
struct Columns {
    name: usize,
    price: usize,
    profit: usize,
}

impl Default for Columns {
    fn default() -> Self {
        Self {
            name: 0,
            price: 1,
            profit: 2,
        }
    }
}

impl Columns {
    fn is_header(&self, record: &csv::StringRecord) -> bool {
        record
            .get(self.price)
            .is_some_and(|field| parse_amount(field).is_none())
    }

    fn from_header(record: &csv::StringRecord) -> Self {
        let find = |label: &str, fallback: usize| {
            record
                .iter()
                .position(|field| field.eq_ignore_ascii_case(label))
                .unwrap_or(fallback)
        };
        let defaults = Self::default();
        Self {
            name: find("name", defaults.name),
            price: find("price", defaults.price),
            profit: find("profit", defaults.profit),
        }
    }

    fn parse(&self, record: &csv::StringRecord, mode: ProfitMode) -> Result<Asset, RowError> {
        let field = |index: usize, column: &'static str| {
            record.get(index).ok_or(RowError::MissingColumn(column))
        };
        let number = |index: usize, column: &'static str| {
            let value = field(index, column)?;
            parse_amount(value).ok_or_else(|| RowError::InvalidNumber {
                column,
                value: value.to_owned(),
            })
        };

        let name = field(self.name, "name")?;
        if name.is_empty() {
            return Err(RowError::EmptyName);
        }

        let price = number(self.price, "price")?;
        if price <= 0.0 {
            return Err(RowError::NonPositivePrice(price));
        }

        let profit = match mode {
            ProfitMode::Percent => price * number(self.profit, "profit")? / 100.0,
            ProfitMode::Amount => number(self.profit, "profit")?,
        };

        Ok(Asset::new(name, price, profit))
    }
}

/// Parse a currency amount or percentage written with either decimal mark.
///
/// Accepts surrounding whitespace, a trailing `%`, `€` or `$`, a decimal
/// comma (`12,5`), and thousands separators when both marks are present (the
/// rightmost one is the decimal mark). Returns `None` for anything that is not
/// a finite number.
pub fn parse_amount(field: &str) -> Option<f64> {
    let trimmed = field
        .trim()
        .trim_end_matches(['%', '€', '$'])
        .trim_end();

    let normalized = match (trimmed.rfind('.'), trimmed.rfind(',')) {
        (Some(dot), Some(comma)) if comma > dot => trimmed.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => trimmed.replace(',', ""),
        (None, Some(_)) => trimmed.replace(',', "."),
        _ => trimmed.to_owned(),
    };

    normalized.parse::<f64>().ok().filter(|value| value.is_finite())
}
