use serde::{Deserialize, Serialize};

use crate::model::{ModelData, Series, AVG_TIME, STD_DEV_TIME};
use crate::parsing::values::{time_value, UNKNOWN_VALUE};

/// Bar height and error bar for one model, both kept as the strings the
/// report produced (or [`UNKNOWN_VALUE`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub time: String,
    pub dev: String,
}

/// One model's slot within a series. `point` is None when the series has
/// no result for that model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelPoint {
    pub model: String,
    pub point: Option<PlotPoint>,
}

/// One bar series across all models, in model order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarSeries {
    pub label: String,
    pub points: Vec<ModelPoint>,
}

/// Everything a renderer needs: series in first-seen order, each holding
/// a point slot for every model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotData {
    pub series: Vec<BarSeries>,
}

/// Reduce gathered results to plottable time/deviation pairs.
///
/// Series labels are collected in the order they first appear (so the
/// subject always precedes the control), and every series carries one
/// slot per model in entry order. Models without a result for a series
/// keep their slot with an empty point.
pub fn aggregate(data: &ModelData) -> PlotData {
    let mut labels: Vec<String> = Vec::new();
    for entry in &data.entries {
        if let Some(series_data) = &entry.data {
            for series in &series_data.series {
                if !labels.contains(&series.label) {
                    labels.push(series.label.clone());
                }
            }
        }
    }

    let series = labels
        .iter()
        .map(|label| BarSeries {
            label: label.clone(),
            points: data
                .entries
                .iter()
                .map(|entry| ModelPoint {
                    model: entry.model.clone(),
                    point: entry
                        .data
                        .as_ref()
                        .and_then(|d| d.series.iter().find(|s| &s.label == label))
                        .map(measure),
                })
                .collect(),
        })
        .collect();

    PlotData { series }
}

fn measure(series: &Series) -> PlotPoint {
    PlotPoint {
        time: time_of(series, AVG_TIME),
        dev: time_of(series, STD_DEV_TIME),
    }
}

fn time_of(series: &Series, name: &str) -> String {
    match series.measurements.get(name) {
        Some(value) => time_value(value),
        None => UNKNOWN_VALUE.to_string(),
    }
}
