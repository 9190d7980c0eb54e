//! Catalog exclusion list: ids configured ahead of time and suppressed from
//! display after a query consolidates.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::beers::Beer;
use crate::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExclusionEntry {
    /// Catalog id to suppress.
    pub id: i64,
    /// Human-readable label for the entry, e.g. the product name.
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExclusionsFile {
    pub exclusions: Vec<ExclusionEntry>,
}

/// Fixed set of catalog ids to remove from a consolidated list before render.
#[derive(Debug, Clone, Default)]
pub struct ExclusionList {
    ids: Vec<i64>,
}

impl ExclusionList {
    #[must_use]
    pub fn new(ids: Vec<i64>) -> Self {
        Self { ids }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Removes excluded records from a consolidated list.
    ///
    /// Each configured id removes **at most one** matching record, by a
    /// single index lookup. If the upstream API were to return duplicate
    /// ids, later duplicates survive filtering — an inherited behavior the
    /// domain owner has not asked to change.
    #[must_use]
    pub fn apply(&self, beers: Vec<Beer>) -> Vec<Beer> {
        let mut beers = beers;
        for id in &self.ids {
            if let Some(index) = beers.iter().position(|beer| beer.id == *id) {
                beers.remove(index);
            }
        }
        beers
    }
}

/// Load and validate the exclusion list from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or contains a
/// duplicate id.
pub fn load_exclusions(path: &Path) -> Result<ExclusionList, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ExclusionsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let file: ExclusionsFile = serde_yaml::from_str(&content)?;
    validate_exclusions(&file)?;

    Ok(ExclusionList::new(
        file.exclusions.into_iter().map(|e| e.id).collect(),
    ))
}

fn validate_exclusions(file: &ExclusionsFile) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for entry in &file.exclusions {
        if !seen.insert(entry.id) {
            return Err(ConfigError::Validation(format!(
                "duplicate exclusion id: {}",
                entry.id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beer(id: i64, name: &str) -> Beer {
        Beer {
            id,
            name: name.to_owned(),
            image_thumb_url: None,
            alcohol_content: 520,
            varietal: None,
            style: None,
            tasting_note: None,
        }
    }

    #[test]
    fn apply_removes_excluded_ids() {
        let list = ExclusionList::new(vec![2]);
        let filtered = list.apply(vec![beer(1, "a"), beer(2, "b"), beer(3, "c")]);
        let ids: Vec<i64> = filtered.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn apply_retains_everything_else() {
        let list = ExclusionList::new(vec![517_797]);
        let input = vec![beer(1, "a"), beer(3, "c")];
        assert_eq!(list.apply(input.clone()), input);
    }

    #[test]
    fn apply_is_idempotent() {
        let list = ExclusionList::new(vec![2, 3]);
        let once = list.apply(vec![beer(1, "a"), beer(2, "b"), beer(3, "c"), beer(4, "d")]);
        let twice = list.apply(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn apply_removes_at_most_one_match_per_id() {
        // Single index lookup per configured id: a duplicate record with the
        // same id survives. Inherited behavior, asserted so a change to it is
        // deliberate.
        let list = ExclusionList::new(vec![2]);
        let filtered = list.apply(vec![beer(2, "first"), beer(2, "second")]);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "second");
    }

    #[test]
    fn load_rejects_duplicate_ids() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("exclusions.yaml");
        std::fs::write(
            &path,
            "exclusions:\n  - id: 517797\n    note: Lug Tread\n  - id: 517797\n",
        )
        .unwrap();
        let result = load_exclusions(&path);
        assert!(
            matches!(result, Err(ConfigError::Validation(_))),
            "expected Validation error, got: {result:?}"
        );
    }

    #[test]
    fn load_parses_ids_in_order() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("exclusions.yaml");
        std::fs::write(
            &path,
            "exclusions:\n  - id: 517797\n    note: \"Beau's Lug Tread\"\n  - id: 42\n",
        )
        .unwrap();
        let list = load_exclusions(&path).unwrap();
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = load_exclusions(&dir.path().join("nope.yaml"));
        assert!(
            matches!(result, Err(ConfigError::ExclusionsFileIo { .. })),
            "expected ExclusionsFileIo, got: {result:?}"
        );
    }
}
