pub mod aggregate;
pub mod catalog;
pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod render;
pub mod source;

use error::TexplotError;
use model::{Mode, ModelData, ModelEntry};
use source::ReportSource;

/// Main API entry point: gather one algorithm's results across a model
/// selection.
///
/// Models whose report holds no usable table are kept as gaps; a report
/// that cannot be loaded at all aborts the run.
pub fn gather_results(
    source: &dyn ReportSource,
    label: &str,
    models: &[String],
    template: &str,
    mode: Mode,
) -> Result<ModelData, TexplotError> {
    let mut entries = Vec::with_capacity(models.len());
    for model in models {
        // Locate and read this model's report
        let run_dir = source::run_dir_name(model, template, mode);
        let tex = source.load(label, model, &run_dir)?;

        // Interpret its tables according to the run mode
        let tables = extraction::extract_tables(&tex);
        let data = parsing::interpret_tables(label, &tables, mode)?;

        entries.push(ModelEntry {
            model: model.clone(),
            data,
        });
    }

    Ok(ModelData { entries })
}

/// Assign an interpretation mode to each algorithm label of a run.
///
/// Labels start out baseline; from the first label the predicate marks
/// as the control trigger onward, every label (that one included) is
/// treated as comparative for the rest of the run.
pub fn assign_modes<'a>(
    labels: &[&'a str],
    is_control: impl Fn(&str) -> bool,
) -> Vec<(&'a str, Mode)> {
    let mut mode = Mode::Baseline;
    labels
        .iter()
        .map(|&label| {
            if is_control(label) {
                mode = Mode::Comparative;
            }
            (label, mode)
        })
        .collect()
}
