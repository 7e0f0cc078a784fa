use studydesk_types::{Document, DocumentId};

/// Category shown for documents the backend left uncategorized.
pub const UNCATEGORIZED: &str = "Uncategorized";

#[derive(Debug, Default)]
pub struct DocumentsState {
    pub list: Vec<Document>,
    pub selected: Option<DocumentId>,
    pub category_filter: Option<String>,
}

impl DocumentsState {
    pub fn get(&self, id: DocumentId) -> Option<&Document> {
        self.list.iter().find(|doc| doc.id == id)
    }

    pub fn selected_document(&self) -> Option<&Document> {
        self.selected.and_then(|id| self.get(id))
    }

    /// The list after applying the category filter.
    pub fn visible(&self) -> Vec<&Document> {
        filter_by_category(&self.list, self.category_filter.as_deref())
    }
}

pub fn category_of(document: &Document) -> &str {
    match document.category.as_deref().map(str::trim) {
        Some(category) if !category.is_empty() => category,
        _ => UNCATEGORIZED,
    }
}

/// Distinct categories of `documents`, sorted.
pub fn categories(documents: &[Document]) -> Vec<String> {
    let mut categories: Vec<String> = documents
        .iter()
        .map(|doc| category_of(doc).to_string())
        .collect();
    categories.sort();
    categories.dedup();
    categories
}

/// Documents in `category`, or all of them for `None`.
pub fn filter_by_category<'a>(documents: &'a [Document], category: Option<&str>) -> Vec<&'a Document> {
    documents
        .iter()
        .filter(|doc| category.is_none_or(|wanted| category_of(doc) == wanted))
        .collect()
}
