use std::path::PathBuf;

use texplot_core::error::TexplotError;
use texplot_core::extraction::extract_tables;
use texplot_core::model::{Mode, SeriesData};
use texplot_core::parsing::interpret_tables;

use crate::ParseOutput;

pub fn run(
    input_file: PathBuf,
    label: &str,
    mode: Mode,
    output: ParseOutput,
) -> Result<(), TexplotError> {
    let tex = std::fs::read_to_string(&input_file)?;
    let tables = extract_tables(&tex);

    match interpret_tables(label, &tables, mode)? {
        Some(data) => {
            let output_str = match output {
                ParseOutput::Json => serde_json::to_string_pretty(&data)?,
                ParseOutput::Table => format_series(&data),
            };
            println!("{output_str}");
        }
        None => {
            eprintln!(
                "no usable {mode} table found in {}",
                input_file.display()
            );
        }
    }

    Ok(())
}

fn format_series(data: &SeriesData) -> String {
    let mut lines = Vec::new();
    for series in &data.series {
        lines.push(series.label.clone());
        let width = series
            .measurements
            .keys()
            .map(String::len)
            .max()
            .unwrap_or(0);
        for (name, value) in &series.measurements {
            lines.push(format!("  {name:<width$}  {value}"));
        }
    }
    lines.join("\n")
}
