use std::{fmt, path::PathBuf};

use crate::domain::fixture_settings::FixtureSettings;

pub const STDOUT_MARKER: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    pub fn from_arg(value: &str) -> Self {
        match value.trim() {
            STDOUT_MARKER => OutputTarget::Stdout,
            path => OutputTarget::File(PathBuf::from(path)),
        }
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputTarget::Stdout => f.write_str("<stdout>"),
            OutputTarget::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug)]
pub struct GenerateTestInsertsCommand {
    pub start_id: i64,
    pub end_id: i64,
    pub batch_size: Option<usize>,
    pub output: OutputTarget,
    pub settings: FixtureSettings,
}

#[derive(Debug)]
pub struct GenerateTestInsertsResult {
    pub output: OutputTarget,
    pub row_count: u64,
    pub statement_count: usize,
}
