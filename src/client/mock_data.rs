use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::seed::seed_projects;

pub const PROJECTS_COLLECTION: &str = "projects";

// Rows are materialized through `serde_json::Value` so the generic client
// surface stays collection-agnostic; anything that does not convert to the
// caller's type is skipped rather than raised.
fn fallback_rows(collection: &str) -> Vec<Value> {
    match collection {
        PROJECTS_COLLECTION => seed_projects()
            .iter()
            .filter_map(|p| serde_json::to_value(p).ok())
            .collect(),
        _ => Vec::new(),
    }
}

/// The full fallback collection, empty for unknown collection names.
pub fn fallback_items<T: DeserializeOwned>(collection: &str) -> Vec<T> {
    fallback_rows(collection)
        .into_iter()
        .filter_map(|row| serde_json::from_value(row).ok())
        .collect()
}

/// Looks up a single fallback record by its `id` field.
pub fn fallback_item<T: DeserializeOwned>(collection: &str, id: &str) -> Option<T> {
    fallback_rows(collection)
        .into_iter()
        .find(|row| row.get("id").and_then(Value::as_str) == Some(id))
        .and_then(|row| serde_json::from_value(row).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::project::Project;

    #[test]
    fn projects_collection_yields_the_seed() {
        let items: Vec<Project> = fallback_items(PROJECTS_COLLECTION);
        assert_eq!(items, seed_projects());
    }

    #[test]
    fn unknown_collection_is_empty() {
        let items: Vec<Project> = fallback_items("testimonials");
        assert!(items.is_empty());
    }

    #[test]
    fn lookup_by_id_finds_the_matching_record() {
        let project: Option<Project> = fallback_item(PROJECTS_COLLECTION, "3");
        assert_eq!(project.unwrap().id, "3");

        let missing: Option<Project> = fallback_item(PROJECTS_COLLECTION, "does-not-exist");
        assert!(missing.is_none());
    }
}
