use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A portfolio project as it travels over the wire. `id` is the only
/// identity field; optional fields are omitted from JSON when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub project_name: String,
    pub short_description: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub detailed_description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub technologies_used: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
}

// Seeded data carries dates in both "2024-01-10" and "10.12.2025" shapes.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d.%m.%Y"];

impl Project {
    pub fn featured(&self) -> bool {
        self.is_featured.unwrap_or(false)
    }

    /// Long-form description, falling back to the short one for display.
    pub fn display_description(&self) -> &str {
        self.detailed_description
            .as_deref()
            .unwrap_or(&self.short_description)
    }

    /// Splits the free-text `technologies_used` field on commas.
    pub fn technologies(&self) -> Vec<&str> {
        self.technologies_used
            .as_deref()
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn completion_date(&self) -> Option<NaiveDate> {
        let raw = self.completion_date.as_deref()?;
        DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
    }
}
