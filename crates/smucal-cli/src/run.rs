//! End-to-end run: crawl every target year, aggregate, serialize.

use std::collections::BTreeMap;
use std::future::Future;
use std::path::Path;

use chrono::{Datelike, Utc};
use tracing::{error, info, warn};

use smucal_core::{AcademicEvent, build_calendar};
use smucal_crawler::{CalendarClient, DEFAULT_TIMEOUT};

use crate::error::{RunResult, YearError};
use crate::output::{OUTPUT_PATH, write_calendar};
use crate::plan::{Priority, YearTarget, fetch_plan};

/// Runs the full crawl-and-publish pipeline.
///
/// Every target year is attempted regardless of earlier failures. A run
/// that fetched nothing still writes a valid, empty document and
/// succeeds; only the output write can fail the process.
pub async fn run() -> RunResult<()> {
    let client = CalendarClient::new(DEFAULT_TIMEOUT);
    let plan = fetch_plan(Utc::now().year());
    let events = collect_events(&plan, |year| crawl_year(&client, year)).await;

    if events.is_empty() {
        warn!("no events fetched from any target year; writing an empty calendar");
    }

    let calendar = build_calendar(events.values());
    info!(path = OUTPUT_PATH, count = events.len(), "writing calendar document");
    write_calendar(Path::new(OUTPUT_PATH), &calendar)
}

/// Crawls every plan target through `fetch_year` and aggregates the
/// results.
///
/// Each target is isolated: a failure is logged with the severity of the
/// target's priority and the loop moves on to the next year. The map is
/// keyed by the article number, the event identity, so duplicates across
/// years collapse and iteration yields ascending article-number order.
async fn collect_events<F, Fut>(
    plan: &[YearTarget],
    mut fetch_year: F,
) -> BTreeMap<u64, AcademicEvent>
where
    F: FnMut(i32) -> Fut,
    Fut: Future<Output = Result<Vec<AcademicEvent>, YearError>>,
{
    let mut events = BTreeMap::new();

    for target in plan {
        info!(year = target.year, priority = ?target.priority, "start crawling events");
        match fetch_year(target.year).await {
            Ok(batch) => {
                info!(year = target.year, count = batch.len(), "crawled events successfully");
                merge_batch(&mut events, batch);
            }
            Err(e) => match target.priority {
                Priority::Primary => {
                    error!(year = target.year, error = %e, "failed to crawl events");
                }
                Priority::Additional => {
                    warn!(year = target.year, error = %e, "failed to crawl events");
                }
            },
        }
    }

    events
}

/// Fetches and converts one year inside a single fallible scope, so a
/// schema or date-format failure discards that year only.
async fn crawl_year(client: &CalendarClient, year: i32) -> Result<Vec<AcademicEvent>, YearError> {
    let articles = client.fetch_year(year).await?;
    let mut batch = Vec::with_capacity(articles.len());
    for article in &articles {
        batch.push(AcademicEvent::from_article(article)?);
    }
    Ok(batch)
}

/// Inserts a year's events into the aggregate, deduplicating by identity.
fn merge_batch(events: &mut BTreeMap<u64, AcademicEvent>, batch: Vec<AcademicEvent>) {
    for event in batch {
        events.insert(event.article_no, event);
    }
}
