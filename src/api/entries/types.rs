use actix_web::web;
use serde::Deserialize;

use crate::{
    api::parse_saturating,
    errors::AppResult,
    listing::{AccessFilter, PageRequest, MAX_ENTRY_COUNT},
};

#[derive(Debug, Deserialize)]
pub struct FeedPath {
    pub feed_id: String,
}

pub type RqFeedId = web::Path<FeedPath>;

/// Raw listing parameters. Kept as strings so a malformed number becomes a
/// 400 with a field name instead of a generic extractor failure.
#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    pub start: Option<String>,
    pub count: Option<String>,
    pub unread: Option<String>,
}

pub type RqListingQuery = web::Query<ListingQuery>;

impl ListingQuery {
    /// Out-of-range numbers saturate: an oversized `count` becomes the page
    /// maximum and an oversized `start` lies above every entry id.
    pub fn page(&self) -> AppResult<PageRequest> {
        let start = match &self.start {
            Some(raw) => parse_saturating("start", raw)?,
            None => 0,
        };
        let count = match &self.count {
            Some(raw) => parse_saturating("count", raw)?,
            None => MAX_ENTRY_COUNT,
        };
        let start = start.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
        Ok(PageRequest::new(start, count))
    }

    /// Any non-empty value turns the unread filter on, including "0" and "false".
    pub fn access_filter(&self) -> AccessFilter {
        AccessFilter::from_unread_flag(self.unread.as_deref().is_some_and(|v| !v.is_empty()))
    }
}
