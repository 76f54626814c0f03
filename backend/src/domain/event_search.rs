//! Event search criteria and their validated form.
//!
//! [`EventSearchCriteria`] is the raw, all-optional request. Validation
//! produces an [`EventFilter`] which repositories translate into a query and
//! in-memory adapters evaluate with [`EventFilter::matches`].

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use super::catalog::{CategoryId, EventDto, TagId};

/// Result limit applied when the caller does not supply one.
pub const DEFAULT_SEARCH_LIMIT: u32 = 50;
/// Largest accepted result limit.
pub const MAX_SEARCH_LIMIT: u32 = 200;

/// Raw search request; every filter is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventSearchCriteria {
    pub category_id: Option<CategoryId>,
    /// Events must carry every listed tag.
    pub tag_ids: Vec<TagId>,
    /// Case-insensitive exact city name.
    pub city: Option<String>,
    /// Inclusive lower bound on the UTC start date.
    pub from: Option<NaiveDate>,
    /// Inclusive upper bound on the UTC start date.
    pub to: Option<NaiveDate>,
    pub limit: Option<u32>,
}

/// Problems found while validating [`EventSearchCriteria`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid search criteria: {}", .problems.join("; "))]
pub struct EventSearchError {
    problems: Vec<String>,
}

impl EventSearchError {
    /// One message per rejected criterion.
    pub fn problems(&self) -> &[String] {
        &self.problems
    }
}

impl EventSearchCriteria {
    /// Validate the criteria, reporting every problem at once.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use eventshop::domain::EventSearchCriteria;
    ///
    /// let criteria = EventSearchCriteria {
    ///     from: NaiveDate::from_ymd_opt(2026, 5, 2),
    ///     to: NaiveDate::from_ymd_opt(2026, 5, 1),
    ///     limit: Some(0),
    ///     ..EventSearchCriteria::default()
    /// };
    /// let err = criteria.validate().expect_err("invalid window and limit");
    /// assert_eq!(err.problems().len(), 2);
    /// ```
    pub fn validate(self) -> Result<EventFilter, EventSearchError> {
        let mut problems = Vec::new();

        let city = match self.city {
            Some(city) if city.trim().is_empty() => {
                problems.push("city must not be blank".to_owned());
                None
            }
            Some(city) => Some(city.trim().to_owned()),
            None => None,
        };

        if let (Some(from), Some(to)) = (self.from, self.to) {
            if from > to {
                problems.push(format!("from ({from}) must not be after to ({to})"));
            }
        }

        let limit = self.limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
        if !(1..=MAX_SEARCH_LIMIT).contains(&limit) {
            problems.push(format!(
                "limit must be between 1 and {MAX_SEARCH_LIMIT} (got {limit})"
            ));
        }

        if !problems.is_empty() {
            return Err(EventSearchError { problems });
        }

        let mut tag_ids = self.tag_ids;
        tag_ids.sort_unstable();
        tag_ids.dedup();

        Ok(EventFilter {
            category_id: self.category_id,
            tag_ids,
            city,
            from: self.from,
            to: self.to,
            limit,
        })
    }
}

/// Validated search filter.
///
/// ## Invariants
/// - `tag_ids` is sorted and free of duplicates.
/// - `city`, when present, is trimmed and non-empty.
/// - `from` is not after `to` when both are present.
/// - `limit` lies in `1..=MAX_SEARCH_LIMIT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventFilter {
    category_id: Option<CategoryId>,
    tag_ids: Vec<TagId>,
    city: Option<String>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    limit: u32,
}

impl EventFilter {
    pub fn category_id(&self) -> Option<CategoryId> {
        self.category_id
    }
    pub fn tag_ids(&self) -> &[TagId] {
        &self.tag_ids
    }
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Earliest accepted start instant (midnight UTC of `from`).
    pub fn starts_at_or_after(&self) -> Option<DateTime<Utc>> {
        self.from
            .map(|date| date.and_time(NaiveTime::MIN).and_utc())
    }

    /// Exclusive upper bound on the start instant (midnight UTC after `to`).
    ///
    /// `None` when `to` is absent or is the last representable date.
    pub fn starts_before(&self) -> Option<DateTime<Utc>> {
        self.to
            .and_then(|date| date.succ_opt())
            .map(|date| date.and_time(NaiveTime::MIN).and_utc())
    }

    /// Whether an event projection satisfies the filter, ignoring `limit`.
    ///
    /// Tag matching requires the DTO's tag names to be resolved by the
    /// caller, so this takes the event's tag ids separately.
    pub fn matches(&self, event: &EventDto, event_tag_ids: &[TagId]) -> bool {
        if self
            .category_id
            .is_some_and(|category| category != event.category_id)
        {
            return false;
        }
        if self
            .city
            .as_deref()
            .is_some_and(|city| city.to_lowercase() != event.city_name.to_lowercase())
        {
            return false;
        }
        let start_date = event.start_time.date_naive();
        if self.from.is_some_and(|from| start_date < from) {
            return false;
        }
        if self.to.is_some_and(|to| start_date > to) {
            return false;
        }
        self.tag_ids.iter().all(|tag| event_tag_ids.contains(tag))
    }
}
