use std::fs;
use std::path::Path;

use crate::error::TexplotError;

/// Load the ordered model catalog from a plain text file, one model name
/// per line. Lines are trimmed and blank lines skipped.
pub fn load_model_order(path: &Path) -> Result<Vec<String>, TexplotError> {
    let contents = fs::read_to_string(path).map_err(|e| TexplotError::CatalogLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect())
}

/// Order a model selection by catalog position, keeping the relative
/// order of duplicates. Selecting a model the catalog does not list is
/// an error.
pub fn order_selection(
    catalog: &[String],
    selected: &[String],
) -> Result<Vec<String>, TexplotError> {
    let mut indexed = Vec::with_capacity(selected.len());
    for model in selected {
        let Some(index) = catalog.iter().position(|c| c == model) else {
            return Err(TexplotError::UnknownModel {
                model: model.clone(),
            });
        };
        indexed.push((index, model.clone()));
    }
    indexed.sort_by_key(|(index, _)| *index);

    Ok(indexed.into_iter().map(|(_, model)| model).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<String> {
        vec![
            "german".to_string(),
            "anderson".to_string(),
            "peterson".to_string(),
        ]
    }

    #[test]
    fn test_load_model_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model_order.txt");
        fs::write(&path, "german\nanderson\n\npeterson\n").unwrap();

        assert_eq!(load_model_order(&path).unwrap(), catalog());
    }

    #[test]
    fn test_load_model_order_trims_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model_order.txt");
        fs::write(&path, "german \n  anderson\n").unwrap();

        assert_eq!(load_model_order(&path).unwrap(), vec!["german", "anderson"]);
    }

    #[test]
    fn test_load_model_order_missing_file() {
        let result = load_model_order(Path::new("/nonexistent/model_order.txt"));
        assert!(matches!(result, Err(TexplotError::CatalogLoad { .. })));
    }

    #[test]
    fn test_order_selection_sorts_by_catalog_position() {
        let selected = vec!["peterson".to_string(), "german".to_string()];
        let ordered = order_selection(&catalog(), &selected).unwrap();
        assert_eq!(ordered, vec!["german", "peterson"]);
    }

    #[test]
    fn test_order_selection_rejects_unknown_model() {
        let selected = vec!["nope".to_string()];
        let result = order_selection(&catalog(), &selected);
        assert!(matches!(
            result,
            Err(TexplotError::UnknownModel { model }) if model == "nope"
        ));
    }

    #[test]
    fn test_order_selection_keeps_duplicates() {
        let selected = vec![
            "peterson".to_string(),
            "german".to_string(),
            "peterson".to_string(),
        ];
        let ordered = order_selection(&catalog(), &selected).unwrap();
        assert_eq!(ordered, vec!["german", "peterson", "peterson"]);
    }
}
