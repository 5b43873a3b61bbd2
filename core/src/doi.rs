use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RESOLVER_PREFIX: Regex = Regex::new(r"(?i)^https?://(dx\.)?doi\.org/").expect("valid regex");
}

/// Turn `https://doi.org/10.1/x` (or the `dx.` / `http` variants) into `10.1/x`.
/// Anything not starting with `http` is only trimmed.
pub fn strip_doi_prefix(doi: &str) -> String {
    let doi = doi.trim();
    if doi.get(..4).map_or(false, |p| p.eq_ignore_ascii_case("http")) {
        RESOLVER_PREFIX.replace(doi, "").into_owned()
    } else {
        doi.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_resolver_urls() {
        assert_eq!(strip_doi_prefix("https://doi.org/10.1126/science.aaa"), "10.1126/science.aaa");
        assert_eq!(strip_doi_prefix(" HTTP://dx.doi.org/10.1/x "), "10.1/x");
    }

    #[test]
    fn leaves_bare_and_foreign() {
        assert_eq!(strip_doi_prefix("10.1/x"), "10.1/x");
        assert_eq!(strip_doi_prefix("https://example.org/10.1/x"), "https://example.org/10.1/x");
    }
}
