/// Entries of `ordered` containing `query`, ignoring case, in their existing
/// relative order. A blank query keeps everything.
pub fn visible(ordered: &[String], query: &str) -> Vec<String> {
    if query.is_empty() {
        return ordered.to_vec();
    }
    let needle = query.to_lowercase();
    ordered
        .iter()
        .filter(|entry| entry.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// What the picker list shows after ordering and filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisibleChoices {
    Items(Vec<String>),
    NoResults,
}

impl VisibleChoices {
    pub fn from_items(items: Vec<String>) -> Self {
        if items.is_empty() {
            VisibleChoices::NoResults
        } else {
            VisibleChoices::Items(items)
        }
    }

    pub fn items(&self) -> &[String] {
        match self {
            VisibleChoices::Items(items) => items,
            VisibleChoices::NoResults => &[],
        }
    }

    pub fn is_no_results(&self) -> bool {
        matches!(self, VisibleChoices::NoResults)
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }
}
