use super::{Algorithm, compare::Comparison, solve::Outcome};
use ait_solver::{Budget, Portfolio};
use clap::ValueEnum;
use serde::Serialize;
use std::io::{self, Write};

// The report layouts `solve` can write, picked with --format
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    /// A human-readable table
    Text,
    /// The full portfolio as JSON
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    algorithm: Algorithm,
    budget: Budget,
    remaining: f64,
    portfolio: &'a Portfolio,
}

impl ReportFormat {
    pub fn write<W: Write>(&self, mut buffer: W, outcome: &Outcome) -> anyhow::Result<()> {
        match self {
            Self::Text => write_text(&mut buffer, outcome)?,
            Self::Json => {
                let report = JsonReport {
                    algorithm: outcome.algorithm,
                    budget: outcome.budget,
                    remaining: outcome.remaining(),
                    portfolio: &outcome.portfolio,
                };
                serde_json::to_writer_pretty(&mut buffer, &report)?;
                writeln!(buffer)?;
            }
        }
        buffer.flush()?;
        Ok(())
    }
}

const NAME_WIDTH: usize = 24;

fn write_text<W: Write>(buffer: &mut W, outcome: &Outcome) -> io::Result<()> {
    let portfolio = &outcome.portfolio;

    writeln!(
        buffer,
        "Portfolio ({}, {} of {} assets, budget {:.2})",
        outcome.algorithm,
        portfolio.len(),
        outcome.catalog_len,
        outcome.budget.amount()
    )?;

    if portfolio.is_empty() {
        writeln!(buffer, "No affordable asset improves on buying nothing.")?;
        return Ok(());
    }

    writeln!(buffer)?;
    writeln!(
        buffer,
        "{:<NAME_WIDTH$} {:>12} {:>12} {:>8}",
        "Name", "Price", "Profit", "Return"
    )?;
    for asset in portfolio.assets() {
        writeln!(
            buffer,
            "{:<NAME_WIDTH$} {:>12.2} {:>12.2} {:>7.2}%",
            asset.name(),
            asset.price(),
            asset.profit(),
            asset.return_rate() * 100.0
        )?;
    }
    writeln!(buffer)?;
    writeln!(
        buffer,
        "{:<NAME_WIDTH$} {:>12.2} {:>12.2}",
        "Total",
        portfolio.total_cost(),
        portfolio.total_profit()
    )?;
    writeln!(
        buffer,
        "{:<NAME_WIDTH$} {:>12.2}",
        "Remaining budget",
        outcome.remaining()
    )?;
    Ok(())
}

pub fn write_comparison<W: Write>(mut buffer: W, comparison: &Comparison) -> io::Result<()> {
    writeln!(
        buffer,
        "Budget {:.2}",
        comparison.budget.amount()
    )?;
    for (label, portfolio) in [
        ("exhaustive", &comparison.exhaustive),
        ("knapsack", &comparison.knapsack),
    ] {
        writeln!(
            buffer,
            "{label:<12} cost {:>12.2}  profit {:>12.2}  [{}]",
            portfolio.total_cost(),
            portfolio.total_profit(),
            portfolio.names().collect::<Vec<_>>().join(", ")
        )?;
    }
    writeln!(
        buffer,
        "{}",
        if comparison.agree() {
            "Profits agree."
        } else {
            "Profits DISAGREE."
        }
    )?;
    buffer.flush()
}
