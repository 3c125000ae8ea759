use clap::{Args, ValueEnum};
use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write, stdin, stdout},
    path::PathBuf,
    str::FromStr,
};

// Every subcommand reads a catalog and writes a report.
// This struct standardizes their implementation.
#[derive(Args)]
pub struct IOArgs {
    /// The catalog file, CSV or JSON ("-" implies stdin)
    #[arg(value_parser = clap::value_parser!(PathOrStd))]
    input: PathOrStd,

    /// The output file ("-" implies stdout)
    #[arg(short, long, default_value = "-", value_parser = clap::value_parser!(PathOrStd))]
    output: PathOrStd,

    /// The catalog format (if omitted, will infer from the file extension, then fall back to CSV)
    #[arg(long)]
    input_format: Option<InputFormat>,
}

impl IOArgs {
    pub fn read(&self) -> anyhow::Result<Box<dyn Read>> {
        match &self.input {
            PathOrStd::Path(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
            PathOrStd::Std => Ok(Box::new(stdin().lock())),
        }
    }

    pub fn write(&self) -> anyhow::Result<Box<dyn Write>> {
        match &self.output {
            PathOrStd::Path(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
            PathOrStd::Std => Ok(Box::new(stdout().lock())),
        }
    }

    pub fn input_format(&self) -> InputFormat {
        self.input_format
            .or_else(|| match &self.input {
                PathOrStd::Path(path) => path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .and_then(|ext| ext.parse().ok()),
                PathOrStd::Std => None,
            })
            .unwrap_or(InputFormat::Csv)
    }
}

/// The supported catalog encodings
#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum InputFormat {
    /// Rows of name, price, profit
    Csv,
    /// A `{ "budget": ..., "assets": [...] }` document
    Json,
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" | "CSV" => Ok(Self::Csv),
            "json" | "JSON" => Ok(Self::Json),
            _ => Err(s.to_owned()),
        }
    }
}

#[derive(Clone)]
enum PathOrStd {
    Path(PathBuf),
    Std,
}

impl FromStr for PathOrStd {
    type Err = <PathBuf as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(Self::Std)
        } else {
            Ok(Self::Path(s.parse()?))
        }
    }
}
