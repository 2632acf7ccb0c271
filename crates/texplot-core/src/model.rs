use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Measurement name the aggregator reads bar heights from.
pub const AVG_TIME: &str = "avg time";

/// Measurement name the aggregator reads error bars from.
pub const STD_DEV_TIME: &str = "std dev time";

/// Series label under which a combined table's control column is stored.
pub const CONTROL_LABEL: &str = "control";

/// How an algorithm's result reports are interpreted.
///
/// Baseline runs emit a single standalone table. Comparative runs were
/// executed against a control baseline and additionally emit a combined
/// subject/control comparison table, which is the one that gets read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Baseline,
    Comparative,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Baseline => write!(f, "baseline"),
            Mode::Comparative => write!(f, "comparative"),
        }
    }
}

/// One variant's measurements from a report table.
///
/// Reports emit a small fixed vocabulary of measurement names (avg time,
/// std dev time, max inv constraint, min inv level, min strat marked,
/// min strat length), but names are carried through as-is: an unknown
/// name is preserved, never rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    pub measurements: BTreeMap<String, String>,
}

/// All series interpreted from one report: the subject alone, or the
/// subject followed by the control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesData {
    pub series: Vec<Series>,
}

/// One model's slot in a run: `data` is None when no usable table was
/// found, which renders as a gap rather than aborting the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelEntry {
    pub model: String,
    pub data: Option<SeriesData>,
}

/// Results for every model of one algorithm run, in caller order.
///
/// The entry order is the order models were requested in; downstream
/// rendering assigns axis positions from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelData {
    pub entries: Vec<ModelEntry>,
}
