use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Who a greeter is talking to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Absent,
    Scalar(String),
    Sequence(Vec<String>),
}

impl Default for Target {
    fn default() -> Self {
        Target::Scalar("World".to_string())
    }
}

impl From<&str> for Target {
    fn from(name: &str) -> Self {
        Target::Scalar(name.to_string())
    }
}

impl From<String> for Target {
    fn from(name: String) -> Self {
        Target::Scalar(name)
    }
}

impl From<Vec<String>> for Target {
    fn from(names: Vec<String>) -> Self {
        Target::Sequence(names)
    }
}

impl From<Vec<&str>> for Target {
    fn from(names: Vec<&str>) -> Self {
        Target::Sequence(names.into_iter().map(str::to_string).collect())
    }
}

impl<T: Into<Target>> From<Option<T>> for Target {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Target::Absent)
    }
}

/// A `name: age` entry read from a roster file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    pub fn inspect(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.age)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadResult {
    pub records: Vec<Person>,
    pub sorted: Vec<Person>,
}

/// What to do with an age that matched the digit pattern but does not fit in a `u32`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AgePolicy {
    /// Fall back to zero.
    #[default]
    Lenient,
    /// Fail the load with `AgeParseError`.
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Inspect,
    Csv,
    Json,
}

impl OutputFormat {
    pub fn file_name(&self) -> &'static str {
        match self {
            OutputFormat::Inspect => "roster.txt",
            OutputFormat::Csv => "roster.csv",
            OutputFormat::Json => "roster.json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inspect" | "text" => Ok(OutputFormat::Inspect),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "Unsupported format '{}'. Valid formats: inspect, csv, json",
                other
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderedOutput {
    pub format: OutputFormat,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct RosterReport {
    pub result: LoadResult,
    pub outputs: Vec<RenderedOutput>,
}
