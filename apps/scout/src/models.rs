//! Domain types for the job pipeline: the shape of upstream postings and the
//! accepted-jobs output document.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One posting as returned by the search API. Upstream omits fields freely,
/// so every field is optional and read through the placeholder accessors.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobRecord {
    pub job_title: Option<String>,
    /// Company name. The upstream key is `name`.
    #[serde(rename = "name")]
    pub company: Option<String>,
    pub job_desc: Option<String>,
    pub job_id: Option<String>,
}

impl JobRecord {
    pub fn title(&self) -> &str {
        self.job_title.as_deref().unwrap_or("Unknown Title")
    }

    pub fn company(&self) -> &str {
        self.company.as_deref().unwrap_or("Unknown Company")
    }

    pub fn description(&self) -> &str {
        self.job_desc.as_deref().unwrap_or("")
    }

    pub fn id(&self) -> &str {
        self.job_id.as_deref().unwrap_or("")
    }
}

/// Extracts the posting records from a raw search response body.
/// Returns `None` when the `models` key is missing or not an array; entries
/// that are not objects degrade to an all-empty record rather than failing.
pub fn job_records(body: &Value) -> Option<Vec<JobRecord>> {
    let models = body.get("models")?.as_array()?;
    Some(
        models
            .iter()
            .map(|m| serde_json::from_value(m.clone()).unwrap_or_default())
            .collect(),
    )
}

/// A posting that cleared the acceptance threshold, reduced to the fields the
/// output file carries. `score` stays the scorer's literal reply text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredJob {
    pub job_title: String,
    pub company_name: String,
    pub score: String,
    pub url: String,
}

/// The accepted-jobs output document: an ordered list under a single `jobs` key.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GoodJobsFile {
    pub jobs: Vec<ScoredJob>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_job_records_missing_models_key() {
        let body = json!({"total": 0});
        assert!(job_records(&body).is_none());
    }

    #[test]
    fn test_job_records_models_not_an_array() {
        let body = json!({"models": "nope"});
        assert!(job_records(&body).is_none());
    }

    #[test]
    fn test_job_records_parses_full_entries() {
        let body = json!({"models": [
            {"job_title": "SWE Co-op", "name": "Acme", "job_desc": "Build things", "job_id": "42"}
        ]});
        let records = job_records(&body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title(), "SWE Co-op");
        assert_eq!(records[0].company(), "Acme");
        assert_eq!(records[0].description(), "Build things");
        assert_eq!(records[0].id(), "42");
    }

    #[test]
    fn test_missing_fields_fall_back_to_placeholders() {
        let body = json!({"models": [{}]});
        let records = job_records(&body).unwrap();
        assert_eq!(records[0].title(), "Unknown Title");
        assert_eq!(records[0].company(), "Unknown Company");
        assert_eq!(records[0].description(), "");
        assert_eq!(records[0].id(), "");
    }

    #[test]
    fn test_non_object_entry_degrades_to_empty_record() {
        let body = json!({"models": [17]});
        let records = job_records(&body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title(), "Unknown Title");
    }

    #[test]
    fn test_scored_job_serializes_camel_case() {
        let job = ScoredJob {
            job_title: "SWE Co-op".to_string(),
            company_name: "Acme".to_string(),
            score: "80".to_string(),
            url: "https://example.com".to_string(),
        };
        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(value["jobTitle"], "SWE Co-op");
        assert_eq!(value["companyName"], "Acme");
        assert_eq!(value["score"], "80");
        assert_eq!(value["url"], "https://example.com");
    }

    #[test]
    fn test_good_jobs_file_nests_under_jobs_key() {
        let value = serde_json::to_value(GoodJobsFile::default()).unwrap();
        assert_eq!(value, json!({"jobs": []}));
    }
}
