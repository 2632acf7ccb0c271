use regex::Regex;
use std::fs;
use std::path::PathBuf;
use std::sync::LazyLock;

use crate::error::TexplotError;
use crate::model::Mode;

static RUN_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(_[0-9]+)$").expect("run suffix pattern is valid"));

/// Where report files come from. The production source reads the output
/// directory tree; tests substitute an in-memory one.
pub trait ReportSource {
    /// Load the raw report text for one model's run.
    fn load(&self, label: &str, model: &str, run_dir: &str) -> Result<String, TexplotError>;
}

/// Reads reports from an output directory laid out as
/// `<root>/<label>/<model>/<run dir>/<run dir>.tex`.
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DirSource { root: root.into() }
    }
}

impl ReportSource for DirSource {
    fn load(&self, label: &str, model: &str, run_dir: &str) -> Result<String, TexplotError> {
        let path = self
            .root
            .join(label)
            .join(model)
            .join(run_dir)
            .join(format!("{run_dir}.tex"));

        fs::read_to_string(&path).map_err(|e| TexplotError::ReportLoad {
            path,
            reason: e.to_string(),
        })
    }
}

/// Build the run directory name for one model: `<model>-<template>`,
/// with a `C` tag spliced in before the trailing run number when the
/// run was comparative (those runs write to a separate directory).
pub fn run_dir_name(model: &str, template: &str, mode: Mode) -> String {
    let name = format!("{model}-{template}");
    match mode {
        Mode::Baseline => name,
        Mode::Comparative => RUN_SUFFIX.replace(&name, "_C$1").into_owned(),
    }
}
