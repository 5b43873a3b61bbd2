/// One bibliographic record, built from a single API result and projected
/// straight into RIS text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BibRecord {
    pub title: String,
    /// Display order.
    pub authors: Vec<String>,
    pub year: Option<i32>,
    pub doi: Option<String>,
    pub abstract_text: Option<String>,
}

impl BibRecord {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), ..Self::default() }
    }

    pub fn has_abstract(&self) -> bool {
        self.abstract_text.as_deref().map_or(false, |a| !a.is_empty())
    }
}
