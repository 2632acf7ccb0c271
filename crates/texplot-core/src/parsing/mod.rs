pub mod values;

use crate::error::TexplotError;
use crate::extraction::{split_cells, split_rows};
use crate::model::{Mode, Series, SeriesData, CONTROL_LABEL};
use std::collections::BTreeMap;

/// Interpret the tables extracted from one report.
///
/// Baseline reports carry their results in the first table (two columns:
/// measurement name and value). Comparative reports carry theirs in the
/// second table (four columns: name, subject, control, improvement); the
/// improvement column is derived data and is dropped.
///
/// Returns `Ok(None)` when the report holds no table for the requested
/// mode, which the caller records as a gap for that model.
pub fn interpret_tables(
    label: &str,
    tables: &[String],
    mode: Mode,
) -> Result<Option<SeriesData>, TexplotError> {
    match mode {
        Mode::Baseline => interpret_single(label, tables),
        Mode::Comparative => interpret_combined(label, tables),
    }
}

/// First table, `name & value` rows. The first row names the variant
/// and is skipped.
fn interpret_single(label: &str, tables: &[String]) -> Result<Option<SeriesData>, TexplotError> {
    let Some(table) = tables.first() else {
        return Ok(None);
    };

    let mut measurements = BTreeMap::new();
    for row in split_rows(table).iter().skip(1) {
        let cells = split_cells(row);
        if cells.len() != 2 {
            return Err(TexplotError::MalformedRow {
                expected: 2,
                found: cells.len(),
                row: row.trim().to_string(),
            });
        }
        measurements.insert(cells[0].clone(), cells[1].clone());
    }

    Ok(Some(SeriesData {
        series: vec![Series {
            label: label.to_string(),
            measurements,
        }],
    }))
}

/// Second table, `name & subject & control & improvement` rows. The
/// header row is skipped and the improvement column discarded.
fn interpret_combined(label: &str, tables: &[String]) -> Result<Option<SeriesData>, TexplotError> {
    let Some(table) = tables.get(1) else {
        return Ok(None);
    };

    let mut subject = BTreeMap::new();
    let mut control = BTreeMap::new();
    for row in split_rows(table).iter().skip(1) {
        let cells = split_cells(row);
        if cells.len() != 4 {
            return Err(TexplotError::MalformedRow {
                expected: 4,
                found: cells.len(),
                row: row.trim().to_string(),
            });
        }
        subject.insert(cells[0].clone(), cells[1].clone());
        control.insert(cells[0].clone(), cells[2].clone());
    }

    Ok(Some(SeriesData {
        series: vec![
            Series {
                label: label.to_string(),
                measurements: subject,
            },
            Series {
                label: CONTROL_LABEL.to_string(),
                measurements: control,
            },
        ],
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SINGLE: &str =
        r" & ipdr \\avg time & 7.010 s \\std dev time & 0.217 s \\max inv constraint & 8 ";
    const COMBINED: &str = r" & ipdr & control & improvement \\avg time & 7.010 s & 28.395 s & 75.31 \% \\std dev time & 0.217 s & 2.289 s &  ";

    fn tables() -> Vec<String> {
        vec![SINGLE.to_string(), COMBINED.to_string()]
    }

    #[test]
    fn test_baseline_reads_first_table() {
        let data = interpret_tables("pebbling", &tables(), Mode::Baseline)
            .unwrap()
            .unwrap();

        assert_eq!(data.series.len(), 1);
        assert_eq!(data.series[0].label, "pebbling");
        assert_eq!(data.series[0].measurements["avg time"], "7.010 s");
        assert_eq!(data.series[0].measurements["std dev time"], "0.217 s");
        assert_eq!(data.series[0].measurements["max inv constraint"], "8");
    }

    #[test]
    fn test_baseline_no_tables_is_gap() {
        let data = interpret_tables("pebbling", &[], Mode::Baseline).unwrap();
        assert!(data.is_none());
    }

    #[test]
    fn test_baseline_rejects_wrong_cell_count() {
        let tables = vec![r" & ipdr \\avg time & 7.010 s & extra ".to_string()];
        let result = interpret_tables("pebbling", &tables, Mode::Baseline);
        assert!(matches!(
            result,
            Err(TexplotError::MalformedRow {
                expected: 2,
                found: 3,
                ..
            })
        ));
    }

    #[test]
    fn test_comparative_reads_second_table() {
        let data = interpret_tables("pebbling", &tables(), Mode::Comparative)
            .unwrap()
            .unwrap();

        assert_eq!(data.series.len(), 2);
        assert_eq!(data.series[0].label, "pebbling");
        assert_eq!(data.series[1].label, CONTROL_LABEL);
        assert_eq!(data.series[0].measurements["avg time"], "7.010 s");
        assert_eq!(data.series[1].measurements["avg time"], "28.395 s");
        assert_eq!(data.series[1].measurements["std dev time"], "2.289 s");
    }

    #[test]
    fn test_comparative_drops_improvement_column() {
        let data = interpret_tables("pebbling", &tables(), Mode::Comparative)
            .unwrap()
            .unwrap();

        for series in &data.series {
            assert!(!series.measurements.values().any(|v| v.contains("75.31")));
        }
    }

    #[test]
    fn test_comparative_subject_and_control_share_names() {
        let data = interpret_tables("pebbling", &tables(), Mode::Comparative)
            .unwrap()
            .unwrap();

        let subject: Vec<_> = data.series[0].measurements.keys().collect();
        let control: Vec<_> = data.series[1].measurements.keys().collect();
        assert_eq!(subject, control);
    }

    #[test]
    fn test_comparative_missing_second_table_is_gap() {
        let tables = vec![SINGLE.to_string()];
        let data = interpret_tables("pebbling", &tables, Mode::Comparative).unwrap();
        assert!(data.is_none());
    }

    #[test]
    fn test_comparative_rejects_wrong_cell_count() {
        let tables = vec![SINGLE.to_string(), SINGLE.to_string()];
        let result = interpret_tables("pebbling", &tables, Mode::Comparative);
        assert!(matches!(
            result,
            Err(TexplotError::MalformedRow { expected: 4, .. })
        ));
    }

    #[test]
    fn test_unknown_measurement_names_are_preserved() {
        let tables = vec![r" & ipdr \\frobnication count & 3.5 s ".to_string()];
        let data = interpret_tables("bmc", &tables, Mode::Baseline)
            .unwrap()
            .unwrap();
        assert_eq!(data.series[0].measurements["frobnication count"], "3.5 s");
    }
}
