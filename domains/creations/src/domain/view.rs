//! Derived views over creation lists: search, type filtering, and stats

use chrono::{DateTime, Datelike, TimeZone};

use crate::domain::entities::{Creation, CreationType, TypeFilter};

/// A creation is trending when its like count is strictly above this
pub const TRENDING_THRESHOLD: usize = 5;

/// Items whose prompt contains `search` (case-insensitive) and whose type passes `filter`
pub fn filtered_view<'a>(
    creations: &'a [Creation],
    search: &str,
    filter: TypeFilter,
) -> Vec<&'a Creation> {
    creations
        .iter()
        .filter(|c| filter.matches(c.kind) && c.prompt_matches(search))
        .collect()
}

/// Stats shown on the personal dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub total: usize,
    pub this_month: usize,
    pub images: usize,
}

impl DashboardStats {
    /// Compute stats relative to `now`.
    ///
    /// "This month" is the calendar month of `now` in its own time zone,
    /// matched on year and month number rather than a rolling window.
    pub fn compute<Tz: TimeZone>(creations: &[Creation], now: &DateTime<Tz>) -> Self {
        let tz = now.timezone();
        let this_month = creations
            .iter()
            .filter(|c| {
                let local = c.created_at.with_timezone(&tz);
                local.year() == now.year() && local.month() == now.month()
            })
            .count();

        Self {
            total: creations.len(),
            this_month,
            images: creations
                .iter()
                .filter(|c| c.kind == CreationType::Image)
                .count(),
        }
    }
}

/// Stats shown on the community gallery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommunityStats {
    pub total: usize,
    pub total_likes: usize,
    pub trending: usize,
}

impl CommunityStats {
    pub fn compute(creations: &[Creation]) -> Self {
        Self {
            total: creations.len(),
            total_likes: creations.iter().map(Creation::like_count).sum(),
            trending: creations
                .iter()
                .filter(|c| c.like_count() > TRENDING_THRESHOLD)
                .count(),
        }
    }
}
