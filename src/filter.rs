//! File table filtering by name and category.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

/// Row attributes used for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRow {
    pub filename: String,
    pub category: String,
}

impl FileRow {
    pub fn new(filename: impl Into<String>, category: impl Into<String>) -> Self {
        Self { filename: filename.into(), category: category.into() }
    }
}

/// Current search term and category selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileFilter {
    search: String,
    category: String,
}

impl FileFilter {
    /// `search` matches filenames case-insensitively; `category` must match
    /// exactly. Either may be empty to match everything.
    #[must_use]
    pub fn new(search: &str, category: &str) -> Self {
        Self { search: search.to_lowercase(), category: category.to_owned() }
    }

    #[must_use]
    pub fn matches(&self, filename: &str, category: &str) -> bool {
        let matches_search = self.search.is_empty() || filename.to_lowercase().contains(&self.search);
        let matches_category = self.category.is_empty() || category == self.category;
        matches_search && matches_category
    }

    #[must_use]
    pub fn matches_row(&self, row: &FileRow) -> bool {
        self.matches(&row.filename, &row.category)
    }
}
