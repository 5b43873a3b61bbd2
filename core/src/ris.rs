use crate::BibRecord;
use std::fmt;

/// Reference type emitted for every record.
pub const JOURNAL_TYPE: &str = "JOUR";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RisTag {
    Type,
    Title,
    Author,
    Year,
    Doi,
    Abstract,
    End,
}

impl RisTag {
    pub fn code(self) -> &'static str {
        match self {
            RisTag::Type => "TY",
            RisTag::Title => "TI",
            RisTag::Author => "AU",
            RisTag::Year => "PY",
            RisTag::Doi => "DO",
            RisTag::Abstract => "AB",
            RisTag::End => "ER",
        }
    }
}

impl fmt::Display for RisTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.code()) }
}

fn tagged(tag: RisTag, value: &str) -> String { format!("{tag}  - {value}") }

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Render one record as RIS lines joined by `\n`, ending with `ER  -` and no trailing newline.
///
/// `PY`, `DO` and `AB` are left out when the field is missing, empty or a zero year.
pub fn create_ris_entry(record: &BibRecord) -> String {
    let mut lines = Vec::with_capacity(record.authors.len() + 6);
    lines.push(tagged(RisTag::Type, JOURNAL_TYPE));
    lines.push(tagged(RisTag::Title, &record.title));
    for author in &record.authors {
        lines.push(tagged(RisTag::Author, author));
    }
    if let Some(year) = record.year.filter(|y| *y != 0) {
        lines.push(tagged(RisTag::Year, &year.to_string()));
    }
    if let Some(doi) = non_empty(&record.doi) {
        lines.push(tagged(RisTag::Doi, doi));
    }
    if let Some(text) = non_empty(&record.abstract_text) {
        lines.push(tagged(RisTag::Abstract, text));
    }
    lines.push(format!("{}  -", RisTag::End));
    lines.join("\n")
}
