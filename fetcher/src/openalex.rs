use anyhow::{Context, Result};
use reqwest::Client;
use ris_core::{decode_abstract, AbstractIndex, BibRecord};
use serde::Deserialize;
use url::Url;

pub const DEFAULT_API_BASE: &str = "https://api.openalex.org";

/// Title used when a work carries no `display_name`.
pub const NO_TITLE: &str = "No Title";

#[derive(Debug, Default, Deserialize)]
pub struct WorksResponse {
    #[serde(default)]
    pub results: Option<Vec<Work>>,
}

impl WorksResponse {
    /// First result in the API's own relevance order.
    pub fn into_first(self) -> Option<Work> {
        self.results.unwrap_or_default().into_iter().next()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Work {
    pub display_name: Option<String>,
    pub doi: Option<String>,
    pub publication_year: Option<i32>,
    pub authorships: Option<Vec<Authorship>>,
    pub abstract_inverted_index: Option<AbstractIndex>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Authorship {
    pub author: Option<Author>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Author {
    pub display_name: Option<String>,
}

impl Work {
    pub fn into_record(self) -> BibRecord {
        if let Some(index) = &self.abstract_inverted_index {
            if index.dropped_positions() > 0 {
                tracing::warn!(dropped = index.dropped_positions(), "ignored malformed abstract positions");
            }
        }
        let abstract_text = decode_abstract(self.abstract_inverted_index.as_ref());
        let authors = self
            .authorships
            .unwrap_or_default()
            .into_iter()
            .filter_map(|a| a.author.and_then(|au| au.display_name))
            .filter(|name| !name.is_empty())
            .collect();
        BibRecord {
            title: self.display_name.unwrap_or_else(|| NO_TITLE.to_string()),
            authors,
            year: self.publication_year,
            doi: self.doi,
            abstract_text,
        }
    }
}

pub struct OpenAlexClient {
    http: Client,
    works_url: Url,
    mailto: Option<String>,
}

impl OpenAlexClient {
    pub fn new(http: Client, api_base: &str, mailto: Option<String>) -> Result<Self> {
        let works_url = Url::parse(&format!("{}/works", api_base.trim_end_matches('/')))
            .with_context(|| format!("invalid api base url: {api_base}"))?;
        Ok(Self { http, works_url, mailto })
    }

    pub fn search_url(&self, title: &str) -> Url {
        let mut url = self.works_url.clone();
        {
            let mut q = url.query_pairs_mut();
            q.append_pair("search", title);
            if let Some(mail) = &self.mailto {
                q.append_pair("mailto", mail);
            }
        }
        url
    }

    /// One GET against the works search endpoint. Transport errors and non-2xx statuses are returned as-is.
    pub async fn search_works(&self, title: &str) -> Result<WorksResponse> {
        let url = self.search_url(title);
        tracing::debug!(%url, "querying openalex");
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .context("openalex search request failed")?
            .error_for_status()
            .context("openalex search returned an error status")?;
        let body = resp.text().await.context("reading openalex response body")?;
        let works: WorksResponse = serde_json::from_str(&body).context("decoding openalex works response")?;
        tracing::info!(results = works.results.as_ref().map_or(0, Vec::len), "openalex search complete");
        Ok(works)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_url_encodes_title_and_mailto() {
        let client = OpenAlexClient::new(Client::new(), "https://api.openalex.org/", Some("me@example.com".into())).unwrap();
        let url = client.search_url("oil & gas methane");
        assert_eq!(url.path(), "/works");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("search".to_string(), "oil & gas methane".to_string()),
                ("mailto".to_string(), "me@example.com".to_string()),
            ]
        );
    }

    #[test]
    fn extracts_record_fields() {
        let body = r#"{"results": [{
            "display_name": "Paper",
            "doi": "https://doi.org/10.1/x",
            "publication_year": 2019,
            "authorships": [
                {"author": {"display_name": "Ada"}},
                {"author": {}},
                {"author": null},
                {"author": {"display_name": ""}},
                {"author": {"display_name": "Grace"}}
            ],
            "abstract_inverted_index": {"Short": [0], "abstract": [1]}
        }]}"#;
        let work = serde_json::from_str::<WorksResponse>(body).unwrap().into_first().unwrap();
        let rec = work.into_record();
        assert_eq!(rec.title, "Paper");
        assert_eq!(rec.authors, vec!["Ada", "Grace"]);
        assert_eq!(rec.year, Some(2019));
        assert_eq!(rec.doi.as_deref(), Some("https://doi.org/10.1/x"));
        assert_eq!(rec.abstract_text.as_deref(), Some("Short abstract"));
    }

    #[test]
    fn defaults_for_sparse_work() {
        let body = r#"{"results": [{"display_name": null, "doi": null, "abstract_inverted_index": {}}]}"#;
        let rec = serde_json::from_str::<WorksResponse>(body).unwrap().into_first().unwrap().into_record();
        assert_eq!(rec, BibRecord::new(NO_TITLE));
    }

    #[test]
    fn missing_results_is_empty() {
        let works: WorksResponse = serde_json::from_str(r#"{"meta": {"count": 0}}"#).unwrap();
        assert!(works.into_first().is_none());
    }
}
