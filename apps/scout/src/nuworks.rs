//! NUWorks job search client — one fixed paginated query against the
//! career-services API, plus deep-link reconstruction for accepted postings.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::{error, info};

const BASE_URL: &str = "https://northeastern-csm.symplicity.com";
const SEARCH_API_PATH: &str = "/api/v2/jobs";
const SEARCH_UI_PATH: &str = "/students/app/jobs/search";
const AUTHORIZATION: &str = "Basic 389a31571f68ca0e41f75e03d30b3e30";
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

const PER_PAGE: &str = "100";
const SORT_NEWEST_FIRST: &str = "!postdate";
/// Job-type code for co-op positions.
const JOB_TYPE_COOP: &str = "5";
/// Allow-listed industry category codes.
const INDUSTRY_FILTER: &str = "112,147,24,109,83,116,141,142,143,89,105,104,97";
/// Only postings from the last week.
const POSTDATE_WINDOW_DAYS: &str = "7";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("search API returned status {status}: {body}")]
    Api { status: u16, body: String },
}

/// Client for the NUWorks job-search API. The session cookie is taken once at
/// construction; the query itself is fixed.
pub struct NuworksClient {
    client: Client,
    base_url: String,
    cookie: String,
}

impl NuworksClient {
    pub fn new(cookie: String) -> Self {
        Self::with_base_url(BASE_URL, cookie)
    }

    pub fn with_base_url(base_url: impl Into<String>, cookie: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(FETCH_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.into(),
            cookie,
        }
    }

    /// Fetches one page of postings. Returns the full parsed response body on
    /// success, or `None` after logging on any transport or status failure —
    /// errors never cross this boundary.
    pub async fn fetch_jobs(&self) -> Option<Value> {
        info!("Fetching jobs from NUWorks API...");
        match self.fetch().await {
            Ok(body) => {
                let count = body
                    .get("models")
                    .and_then(Value::as_array)
                    .map_or(0, |models| models.len());
                info!("Successfully fetched {count} jobs");
                Some(body)
            }
            Err(e) => {
                error!("Failed to fetch jobs: {e}");
                None
            }
        }
    }

    async fn fetch(&self) -> Result<Value, FetchError> {
        let response = self
            .client
            .get(format!("{}{SEARCH_API_PATH}", self.base_url))
            .query(&[
                ("perPage", PER_PAGE),
                ("page", "0"),
                ("sort", SORT_NEWEST_FIRST),
                ("ocr", "f"),
                ("job_type", JOB_TYPE_COOP),
                ("industry", INDUSTRY_FILTER),
                ("postdate", POSTDATE_WINDOW_DAYS),
                ("json_mode", "read_only"),
                ("enable_translation", "false"),
            ])
            .header("accept", "application/json, text/plain, */*")
            .header("accept-language", "en-US,en;q=0.9,es;q=0.8")
            .header("authorization", AUTHORIZATION)
            .header(
                "sec-ch-ua",
                "\"Chromium\";v=\"140\", \"Not=A?Brand\";v=\"24\", \"Google Chrome\";v=\"140\"",
            )
            .header("sec-ch-ua-mobile", "?0")
            .header("sec-ch-ua-platform", "\"macOS\"")
            .header("sec-fetch-dest", "empty")
            .header("sec-fetch-mode", "cors")
            .header("sec-fetch-site", "same-origin")
            .header("x-requested-system-user", "students")
            .header("Cookie", &self.cookie)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }

    /// Rebuilds the human-navigable deep link for one posting. The search UI
    /// needs the full query context to render, so this re-emits the fetch
    /// parameters in the same order, with `page` pinned to 1 and the posting
    /// id appended as `currentJobId`.
    pub fn job_url(&self, job_id: &str) -> String {
        let params = [
            ("perPage", PER_PAGE),
            ("page", "1"),
            ("sort", SORT_NEWEST_FIRST),
            ("ocr", "f"),
            ("job_type", JOB_TYPE_COOP),
            ("industry", INDUSTRY_FILTER),
            ("postdate", POSTDATE_WINDOW_DAYS),
            ("currentJobId", job_id),
        ];
        let query = params
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}{SEARCH_UI_PATH}?{query}", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_url_reproduces_fixed_query() {
        let client = NuworksClient::new("session=abc".to_string());
        let url = client.job_url("12345");
        assert_eq!(
            url,
            "https://northeastern-csm.symplicity.com/students/app/jobs/search\
             ?perPage=100&page=1&sort=!postdate&ocr=f&job_type=5\
             &industry=112,147,24,109,83,116,141,142,143,89,105,104,97\
             &postdate=7&currentJobId=12345"
        );
    }

    #[test]
    fn test_job_url_page_pinned_to_one() {
        let client = NuworksClient::new("session=abc".to_string());
        let url = client.job_url("9");
        assert!(url.contains("page=1"));
        assert!(!url.contains("page=0"));
        assert!(url.ends_with("currentJobId=9"));
    }

    #[test]
    fn test_job_url_respects_base_override() {
        let client = NuworksClient::with_base_url("http://localhost:9999", "c=1".to_string());
        let url = client.job_url("7");
        assert!(url.starts_with("http://localhost:9999/students/app/jobs/search?"));
    }
}
