use crate::aggregate::{BarSeries, PlotData};
use crate::error::TexplotError;
use crate::model::CONTROL_LABEL;
use crate::parsing::values::UNKNOWN_VALUE;

/// Render plot data as raw coordinate blocks, one per series.
///
/// Each model is assigned a letter index in order. Models without a
/// result keep their letter but render as a placeholder line, so the
/// output always lists every model and the gap stays visible.
pub fn render_coords(plot: &PlotData) -> Result<String, TexplotError> {
    let count = plot.series.iter().map(|s| s.points.len()).max().unwrap_or(0);
    if count > 26 {
        return Err(TexplotError::TooManyModels { count });
    }

    let mut out = String::from("PGFPLOT DATA\n");
    for series in &plot.series {
        out.push_str(&series.label);
        out.push('\n');
        for (letter, point) in ('a'..='z').zip(&series.points) {
            let model = escape(&point.model);
            match &point.point {
                Some(p) => out.push_str(&format!(
                    "({letter}, {}) +- (0, {})\t% {model}\n",
                    p.time, p.dev
                )),
                None => out.push_str(&format!("{UNKNOWN_VALUE}\t% {model}\n")),
            }
        }
        out.push('\n');
    }

    Ok(out)
}

/// Render plot data as a complete pgfplots figure environment.
///
/// Only comparative results fit this layout: the data must hold exactly
/// the subject series followed by the control series. The axis lists
/// every model; models without a result are left out of the coordinate
/// blocks.
pub fn render_figure(plot: &PlotData) -> Result<String, TexplotError> {
    let [subject, control] = plot.series.as_slice() else {
        return Err(TexplotError::FigureSeries {
            found: plot.series.len(),
        });
    };
    if control.label != CONTROL_LABEL {
        return Err(TexplotError::FigureSeries {
            found: plot.series.len(),
        });
    }

    let mut out = String::from("\\begin{figure}\n\\centering\n");
    out.push_str(&format!(
        "\\begin{{vsplot}}{{{}, {}}}{{\n",
        escape(&subject.label),
        escape(&control.label)
    ));
    for point in &subject.points {
        out.push_str(&format!("    \\texttt{{{}}},\n", escape(&point.model)));
    }
    out.push_str("}\n");

    out.push_str(&indent(&coordinate_block(subject)));
    out.push_str("\n\n");
    out.push_str(&indent(&coordinate_block(control)));
    out.push('\n');
    out.push_str("\\end{vsplot}\n\\end{figure}");

    Ok(out)
}

fn coordinate_block(series: &BarSeries) -> String {
    let mut block = String::from(
        "\\addplot+[\n    error bars/.cd,\n    y dir=both,\n    y explicit\n] coordinates {\n",
    );
    for point in &series.points {
        if let Some(p) = &point.point {
            block.push_str(&format!(
                "\t(\\texttt{{{}}}, {}) +- (0, {})\n",
                escape(&point.model),
                p.time,
                p.dev
            ));
        }
    }
    block.push_str("};");
    block
}

/// Escape the characters LaTeX treats specially in model names.
fn escape(s: &str) -> String {
    s.replace('_', "\\_").replace('^', "\\^{}")
}

fn indent(s: &str) -> String {
    s.lines()
        .map(|line| format!("    {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
