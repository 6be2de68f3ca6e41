//! Readers for the Global CMT `CMTSOLUTION` record and for plain tables of
//! moment tensors

use std::{
    collections::HashMap, error::Error, fmt::Display, path::Path,
    str::FromStr, sync::LazyLock,
};

use jiff::civil::DateTime;
use regex::Regex;

use crate::MomentTensor;

/// the first line of a record, like
///
/// PDEW2014 10 15 11 16 34.00  64.4500  -18.0400  10.0 0.0 5.1 ICELAND
static HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)^\s*
        (?P<source>[A-Z]{3,4})\s*
        (?P<year>\d{4})\s+(?P<month>\d{1,2})\s+(?P<day>\d{1,2})\s+
        (?P<hour>\d{1,2})\s+(?P<minute>\d{1,2})\s+(?P<second>\d+(?:\.\d*)?)\s+
        (?P<lat>\S+)\s+(?P<lon>\S+)\s+(?P<depth>\S+)\s+
        (?P<mb>\S+)\s+(?P<ms>\S+)
        \s*(?P<region>.*)$",
    )
    .unwrap()
});

const TENSOR_FIELDS: [&str; 6] = ["Mrr", "Mtt", "Mpp", "Mrt", "Mrp", "Mtp"];

#[derive(Debug, PartialEq)]
pub enum CmtError {
    Io(String),
    /// the first line did not look like a hypocenter line
    Header(String),
    /// a required key was not present in the record
    MissingField(String),
    /// a value could not be parsed as a number
    Parse { field: String, value: String },
    /// a line in a tensor table did not hold six numbers
    TableRow { line: usize, content: String },
}

impl Display for CmtError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CmtError::Io(e) => write!(f, "{e}"),
            CmtError::Header(line) => {
                write!(f, "malformed hypocenter line '{line}'")
            }
            CmtError::MissingField(key) => {
                write!(f, "missing required field '{key}'")
            }
            CmtError::Parse { field, value } => {
                write!(f, "failed to parse '{value}' for field '{field}'")
            }
            CmtError::TableRow { line, content } => write!(
                f,
                "expected six moment tensor components on line {line}, \
                 found '{content}'"
            ),
        }
    }
}

impl Error for CmtError {}

fn parse_num<T: FromStr>(field: &str, value: &str) -> Result<T, CmtError> {
    value.trim().parse().map_err(|_| CmtError::Parse {
        field: field.to_owned(),
        value: value.to_owned(),
    })
}

/// The hypocenter line of a CMT record, as reported by the catalog that
/// located the event
#[derive(Debug, Clone, PartialEq)]
pub struct Hypocenter {
    /// reporting catalog, e.g. PDE, PDEW, PDEQ
    pub source: String,
    pub origin: DateTime,
    pub latitude: f64,
    pub longitude: f64,
    pub depth: f64,
    pub mb: f64,
    pub ms: f64,
    pub region: String,
}

impl FromStr for Hypocenter {
    type Err = CmtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(caps) = HEADER.captures(s) else {
            return Err(CmtError::Header(s.to_owned()));
        };
        let second: f64 = parse_num("second", &caps["second"])?;
        let whole = second.trunc();
        let nanos = ((second - whole) * 1e9).round() as i32;
        let origin = DateTime::new(
            parse_num("year", &caps["year"])?,
            parse_num("month", &caps["month"])?,
            parse_num("day", &caps["day"])?,
            parse_num("hour", &caps["hour"])?,
            parse_num("minute", &caps["minute"])?,
            whole as i8,
            nanos,
        )
        .map_err(|e| CmtError::Header(format!("{s}: {e}")))?;
        Ok(Self {
            source: caps["source"].to_owned(),
            origin,
            latitude: parse_num("latitude", &caps["lat"])?,
            longitude: parse_num("longitude", &caps["lon"])?,
            depth: parse_num("depth", &caps["depth"])?,
            mb: parse_num("mb", &caps["mb"])?,
            ms: parse_num("ms", &caps["ms"])?,
            region: caps["region"].trim().to_owned(),
        })
    }
}

/// A Global CMT solution. The centroid fields are optional, the six tensor
/// components are required and are in dyne·cm
#[derive(Debug, Clone, PartialEq)]
pub struct CmtSolution {
    pub hypocenter: Hypocenter,
    pub event_name: Option<String>,
    pub time_shift: Option<f64>,
    pub half_duration: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub depth: Option<f64>,
    pub tensor: MomentTensor,
}

impl CmtSolution {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CmtError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            CmtError::Io(format!("failed to read {}: {e}", path.display()))
        })?;
        contents.parse()
    }
}

impl FromStr for CmtSolution {
    type Err = CmtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines().skip_while(|l| l.trim().is_empty());
        let hypocenter: Hypocenter = lines
            .next()
            .ok_or_else(|| CmtError::Header(String::new()))?
            .parse()?;

        let mut fields = HashMap::new();
        for line in lines {
            if let Some((key, value)) = line.split_once(':') {
                fields.insert(key.trim(), value.trim());
            } else if !line.trim().is_empty() {
                log::trace!("skipping CMT line without a key: {line}");
            }
        }

        let optional = |key: &str| -> Result<Option<f64>, CmtError> {
            fields.get(key).map(|v| parse_num(key, v)).transpose()
        };
        let mut tensor = [0.0; 6];
        for (c, key) in tensor.iter_mut().zip(TENSOR_FIELDS) {
            let value = fields
                .get(key)
                .ok_or_else(|| CmtError::MissingField(key.to_owned()))?;
            *c = parse_num(key, value)?;
        }
        let [mrr, mtt, mpp, mrt, mrp, mtp] = tensor;

        Ok(Self {
            hypocenter,
            event_name: fields.get("event name").map(|s| s.to_string()),
            time_shift: optional("time shift")?,
            half_duration: optional("half duration")?,
            latitude: optional("latitude")?,
            longitude: optional("longitude")?,
            depth: optional("depth")?,
            tensor: MomentTensor::new(mrr, mtt, mpp, mrt, mrp, mtp),
        })
    }
}

/// parse a table of moment tensors with one Mrr Mtt Mpp Mrt Mrp Mtp row per
/// line. blank lines and lines starting with # are skipped
pub fn parse_tensors(s: &str) -> Result<Vec<MomentTensor>, CmtError> {
    let mut ret = Vec::new();
    for (i, line) in s.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let row_err = || CmtError::TableRow {
            line: i + 1,
            content: line.to_owned(),
        };
        let vals: Vec<f64> = line
            .split_whitespace()
            .map(|s| s.parse())
            .collect::<Result<_, _>>()
            .map_err(|_| row_err())?;
        ret.push(MomentTensor::from_slice(&vals).ok_or_else(row_err)?);
    }
    Ok(ret)
}

pub fn load_tensors(
    path: impl AsRef<Path>,
) -> Result<Vec<MomentTensor>, CmtError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| {
        CmtError::Io(format!("failed to read {}: {e}", path.display()))
    })?;
    parse_tensors(&contents)
}
