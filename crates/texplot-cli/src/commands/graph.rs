use std::fs;
use std::path::Path;

use texplot_core::aggregate::aggregate;
use texplot_core::catalog;
use texplot_core::error::TexplotError;
use texplot_core::render;
use texplot_core::source::DirSource;
use texplot_core::{assign_modes, gather_results};

use crate::{GraphArgs, GraphOutput};

pub fn run(args: GraphArgs) -> Result<(), TexplotError> {
    let available = catalog::load_model_order(&args.model_order)?;
    let selected = if args.all_models {
        available.clone()
    } else {
        catalog::order_selection(&available, &args.models)?
    };
    let labels: Vec<&str> = args.types.iter().map(|t| t.label()).collect();

    banner(&args.dir, &available, &selected, &labels)?;

    let source = DirSource::new(&args.dir);
    let control = args.control.label();
    for (label, mode) in assign_modes(&labels, |l| l == control) {
        let data = gather_results(&source, label, &selected, &args.format, mode)?;
        if args.debug {
            eprintln!("{label} results ({mode}):\n{data:#?}\n");
        }

        let plot = aggregate(&data);
        if args.debug {
            eprintln!("{label} plot data:\n{plot:#?}\n");
        }

        let rendered = match args.output {
            GraphOutput::Coords => render::render_coords(&plot)?,
            GraphOutput::Figure => render::render_figure(&plot)?,
        };
        println!("{rendered}");
    }

    Ok(())
}

/// Echo the run configuration to stderr before any output is produced.
fn banner(
    dir: &Path,
    available: &[String],
    selected: &[String],
    labels: &[&str],
) -> Result<(), TexplotError> {
    let mut content = Vec::new();
    for entry in fs::read_dir(dir)? {
        content.push(entry?.file_name().to_string_lossy().into_owned());
    }
    content.sort();

    eprintln!("folder:\t\t\t {}", dir.display());
    eprintln!("content:\t\t {content:?}");
    eprintln!("available models:\t {available:?}");
    eprintln!("selected models:\t {selected:?}");
    eprintln!("selected algorithms:\t {labels:?}");
    eprintln!();

    Ok(())
}
