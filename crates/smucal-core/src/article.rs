//! Raw academic-calendar article records.
//!
//! [`CalendarArticle`] mirrors the upstream JSON schema with exact key
//! names. Deserialization fails if any key is absent, so schema drift
//! surfaces as an error instead of a silently defaulted record.

use serde::Deserialize;

/// One academic-calendar announcement as returned by the university
/// endpoint.
///
/// Identity is the article number alone: two records sharing it are the
/// same event regardless of any other field. Code that deduplicates or
/// orders articles must go through [`CalendarArticle::identity`] rather
/// than structural equality.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarArticle {
    /// Board the article is posted on, e.g. "85".
    pub board_no: String,
    /// Globally unique article number.
    pub article_no: u64,
    /// Display title, e.g. "2023-2학기 성적입력".
    pub article_title: String,
    /// Rich-text body; may contain markup.
    pub article_text: String,
    /// Creation time, epoch milliseconds.
    pub create_dt: i64,
    /// Board-UI ordering hint; carried but unused downstream.
    pub order_dt: i64,
    /// Last update time, epoch milliseconds.
    pub update_dt: i64,
    /// Academic year, e.g. "2023".
    pub etc_char4: String,
    /// Term tag, e.g. "second_term".
    pub etc_char5: String,
    /// Start date, `YYYY-MM-DD`.
    pub etc_char6: String,
    /// End date, `YYYY-MM-DD`. May precede the start date upstream.
    pub etc_char7: String,
    /// Academic level tag, e.g. "bachelor".
    pub etc_char8: String,
    /// Campus tag, e.g. "seoul".
    pub etc_char9: String,
}

impl CalendarArticle {
    /// The identity key used for deduplication and ordering.
    pub fn identity(&self) -> u64 {
        self.article_no
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> serde_json::Value {
        serde_json::json!({
            "boardNo": "85",
            "articleNo": 732882,
            "articleTitle": "2023-2학기 성적입력",
            "articleText": "<div class=\"fr-view\"><p>2023-2학기 성적입력</p></div>",
            "createDt": 1672028823000_i64,
            "orderDt": 1672028823000_i64,
            "updateDt": 1674201156000_i64,
            "etcChar4": "2023",
            "etcChar5": "second_term",
            "etcChar6": "2023-12-11",
            "etcChar7": "2024-01-01",
            "etcChar8": "bachelor",
            "etcChar9": "seoul"
        })
    }

    #[test]
    fn deserializes_exact_field_names() {
        let article: CalendarArticle = serde_json::from_value(sample_json()).unwrap();

        assert_eq!(article.board_no, "85");
        assert_eq!(article.article_no, 732882);
        assert_eq!(article.article_title, "2023-2학기 성적입력");
        assert_eq!(article.create_dt, 1672028823000);
        assert_eq!(article.update_dt, 1674201156000);
        assert_eq!(article.etc_char6, "2023-12-11");
        assert_eq!(article.etc_char7, "2024-01-01");
        assert_eq!(article.identity(), 732882);
    }

    #[test]
    fn missing_field_is_an_error() {
        let mut json = sample_json();
        json.as_object_mut().unwrap().remove("articleTitle");

        let err = serde_json::from_value::<CalendarArticle>(json).unwrap_err();
        assert!(err.to_string().contains("articleTitle"));
    }

    #[test]
    fn mismatched_type_is_an_error() {
        let mut json = sample_json();
        json["articleNo"] = serde_json::json!("not a number");

        assert!(serde_json::from_value::<CalendarArticle>(json).is_err());
    }
}
