//! HTTP client for the university calendar endpoint.
//!
//! The endpoint is a generic data-list query service: the request names a
//! server-side SQL query and passes its parameters as a JSON string inside
//! a form-encoded body. One POST per year; no pagination.

use std::time::Duration;

use serde_json::{Value, json};
use tracing::debug;

use smucal_core::CalendarArticle;

use crate::error::{CrawlError, CrawlResult};

/// Fixed query endpoint serving board article lists.
const DATA_LIST_URL: &str = "https://www.smu.ac.kr/app/common/selectDataList.do";
/// Server-side query identifier for academic-calendar articles.
const SQL_ID: &str = "jw.Article.selectCalendarArticle";
/// Name of the response model holding the records.
const MODEL_NM: &str = "list";
/// Board carrying the academic calendar.
const BACHELOR_BOARD_NO: &str = "85";

/// Default deadline for one fetch round-trip.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for fetching yearly batches of calendar articles.
#[derive(Debug)]
pub struct CalendarClient {
    http_client: reqwest::Client,
}

impl CalendarClient {
    /// Creates a client with the given per-request timeout.
    pub fn new(timeout: Duration) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to create HTTP client");

        Self { http_client }
    }

    /// Fetches all academic-calendar articles published for one year.
    ///
    /// Issues a single request; there is no retry or backoff. Any
    /// transport, protocol, or schema failure propagates to the caller.
    pub async fn fetch_year(&self, year: i32) -> CrawlResult<Vec<CalendarArticle>> {
        let json_str = json!({
            "year": year.to_string(),
            "bachelorBoardNoList": [BACHELOR_BOARD_NO],
        })
        .to_string();

        let response = self
            .http_client
            .post(DATA_LIST_URL)
            .form(&[
                ("sqlId", SQL_ID),
                ("modelNm", MODEL_NM),
                ("jsonStr", json_str.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CrawlError::protocol(format!(
                "unexpected HTTP status {status}"
            )));
        }

        let body = response.text().await?;
        let articles = parse_response(&body)?;
        debug!(year, count = articles.len(), "fetched calendar articles");
        Ok(articles)
    }
}

impl Default for CalendarClient {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

/// Validates the response envelope and deserializes its records.
///
/// The body must be a JSON object with `success == true` and a `list`
/// array (possibly empty). Every element must carry every article field;
/// one bad record fails the whole batch.
pub fn parse_response(body: &str) -> CrawlResult<Vec<CalendarArticle>> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| CrawlError::protocol(format!("response is not valid JSON: {e}")))?;

    if value.get("success").and_then(Value::as_bool) != Some(true) {
        return Err(CrawlError::protocol("success flag missing or not true"));
    }

    let list = value
        .get("list")
        .and_then(Value::as_array)
        .ok_or_else(|| CrawlError::protocol("list field missing or not an array"))?;

    list.iter()
        .map(|item| {
            serde_json::from_value(item.clone()).map_err(|source| CrawlError::Schema { source })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record(article_no: u64) -> Value {
        json!({
            "boardNo": "85",
            "articleNo": article_no,
            "articleTitle": "수강신청",
            "articleText": "<p>수강신청</p>",
            "createDt": 1672028823000_i64,
            "orderDt": 1672028823000_i64,
            "updateDt": 1674201156000_i64,
            "etcChar4": "2023",
            "etcChar5": "first_term",
            "etcChar6": "2023-02-01",
            "etcChar7": "2023-02-03",
            "etcChar8": "bachelor",
            "etcChar9": "seoul"
        })
    }

    #[test]
    fn parses_records() {
        let body = json!({
            "success": true,
            "list": [sample_record(1), sample_record(2)],
        })
        .to_string();

        let articles = parse_response(&body).unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].article_no, 1);
        assert_eq!(articles[1].article_no, 2);
    }

    #[test]
    fn empty_list_is_valid() {
        let body = json!({"success": true, "list": []}).to_string();
        assert!(parse_response(&body).unwrap().is_empty());
    }

    #[test]
    fn success_false_is_protocol_error() {
        let body = json!({"success": false, "list": []}).to_string();
        let err = parse_response(&body).unwrap_err();
        assert!(matches!(err, CrawlError::Protocol { .. }));
    }

    #[test]
    fn missing_success_flag_is_protocol_error() {
        let body = json!({"list": []}).to_string();
        assert!(matches!(
            parse_response(&body).unwrap_err(),
            CrawlError::Protocol { .. }
        ));
    }

    #[test]
    fn missing_list_is_protocol_error() {
        let body = json!({"success": true}).to_string();
        assert!(matches!(
            parse_response(&body).unwrap_err(),
            CrawlError::Protocol { .. }
        ));
    }

    #[test]
    fn non_array_list_is_protocol_error() {
        let body = json!({"success": true, "list": "nope"}).to_string();
        assert!(matches!(
            parse_response(&body).unwrap_err(),
            CrawlError::Protocol { .. }
        ));
    }

    #[test]
    fn non_json_body_is_protocol_error() {
        assert!(matches!(
            parse_response("<html>maintenance</html>").unwrap_err(),
            CrawlError::Protocol { .. }
        ));
    }

    #[test]
    fn record_missing_field_is_schema_error() {
        let mut record = sample_record(1);
        record.as_object_mut().unwrap().remove("etcChar6");
        let body = json!({"success": true, "list": [record]}).to_string();

        let err = parse_response(&body).unwrap_err();
        match err {
            CrawlError::Schema { source } => {
                assert!(source.to_string().contains("etcChar6"));
            }
            other => panic!("expected Schema, got {other:?}"),
        }
    }
}
