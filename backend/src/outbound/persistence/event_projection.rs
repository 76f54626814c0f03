//! Assembles [`EventDto`] projections from event rows.
//!
//! Names, price tiers, and tags are loaded with one batched query per table
//! so a page of events costs a constant number of round trips. Callers run
//! this inside the transaction that loaded the event rows.

use std::collections::HashMap;

use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::domain::{
    Currency, Event, EventDraft, EventDto, EventNames, PriceTierDraft,
};

use super::diesel_helpers::parse_id;
use super::models::{CategoryRow, CityRow, EventRow, PriceTierRow, VenueRow};
use super::schema::{categories, cities, event_tags, price_tiers, tags, venues};

/// Failure while building projections.
#[derive(Debug)]
pub(crate) enum ProjectionError {
    Diesel(diesel::result::Error),
    /// Stored data violates a domain invariant.
    Invalid(String),
}

impl From<diesel::result::Error> for ProjectionError {
    fn from(value: diesel::result::Error) -> Self {
        Self::Diesel(value)
    }
}

#[derive(Default)]
struct EventExtras {
    tiers: Vec<PriceTierRow>,
    tag_ids: Vec<i32>,
    tag_names: Vec<String>,
}

/// Project event rows, preserving their order.
pub(crate) async fn project_events(
    conn: &mut AsyncPgConnection,
    rows: Vec<EventRow>,
) -> Result<Vec<EventDto>, ProjectionError> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let event_ids: Vec<i32> = rows.iter().map(|row| row.id).collect();
    let city_ids: Vec<i32> = rows.iter().map(|row| row.city_id).collect();
    let venue_ids: Vec<i32> = rows.iter().map(|row| row.venue_id).collect();
    let category_ids: Vec<i32> = rows.iter().map(|row| row.category_id).collect();

    let city_names: HashMap<i32, String> = cities::table
        .filter(cities::id.eq_any(city_ids))
        .select(CityRow::as_select())
        .load(conn)
        .await?
        .into_iter()
        .map(|row| (row.id, row.name))
        .collect();
    let venue_names: HashMap<i32, String> = venues::table
        .filter(venues::id.eq_any(venue_ids))
        .select(VenueRow::as_select())
        .load(conn)
        .await?
        .into_iter()
        .map(|row| (row.id, row.name))
        .collect();
    let category_names: HashMap<i32, String> = categories::table
        .filter(categories::id.eq_any(category_ids))
        .select(CategoryRow::as_select())
        .load(conn)
        .await?
        .into_iter()
        .map(|row| (row.id, row.name))
        .collect();

    let mut extras: HashMap<i32, EventExtras> = HashMap::new();
    let tier_rows: Vec<PriceTierRow> = price_tiers::table
        .filter(price_tiers::event_id.eq_any(event_ids.clone()))
        .select(PriceTierRow::as_select())
        .load(conn)
        .await?;
    for tier in tier_rows {
        extras.entry(tier.event_id).or_default().tiers.push(tier);
    }
    let tag_rows: Vec<(i32, i32, String)> = event_tags::table
        .inner_join(tags::table)
        .filter(event_tags::event_id.eq_any(event_ids))
        .select((event_tags::event_id, tags::id, tags::name))
        .load(conn)
        .await?;
    for (event_id, tag_id, name) in tag_rows {
        let entry = extras.entry(event_id).or_default();
        entry.tag_ids.push(tag_id);
        entry.tag_names.push(name);
    }

    rows.into_iter()
        .map(|row| {
            let extra = extras.remove(&row.id).unwrap_or_default();
            let names = EventNames {
                city: lookup(&city_names, row.city_id, "city", row.id)?,
                venue: lookup(&venue_names, row.venue_id, "venue", row.id)?,
                category: lookup(&category_names, row.category_id, "category", row.id)?,
                tags: extra.tag_names,
            };
            let event = row_to_event(row, extra.tiers, extra.tag_ids)
                .map_err(ProjectionError::Invalid)?;
            Ok(EventDto::project(&event, names))
        })
        .collect()
}

fn lookup(
    names: &HashMap<i32, String>,
    id: i32,
    kind: &str,
    event_id: i32,
) -> Result<String, ProjectionError> {
    names.get(&id).cloned().ok_or_else(|| {
        ProjectionError::Invalid(format!("event {event_id} references missing {kind} {id}"))
    })
}

fn row_to_tier(row: PriceTierRow) -> Result<PriceTierDraft, String> {
    Ok(PriceTierDraft {
        id: parse_id(row.id)?,
        event_id: parse_id(row.event_id)?,
        tier_name: row.tier_name,
        price: row.price,
        currency: Currency::new(row.currency).map_err(|err| err.to_string())?,
    })
}

fn row_to_event(
    row: EventRow,
    tiers: Vec<PriceTierRow>,
    tag_ids: Vec<i32>,
) -> Result<Event, String> {
    let draft = EventDraft {
        id: parse_id(row.id)?,
        title: row.title,
        start_time: row.start_time,
        end_time: row.end_time,
        city_id: parse_id(row.city_id)?,
        venue_id: parse_id(row.venue_id)?,
        category_id: parse_id(row.category_id)?,
        tag_ids: tag_ids
            .into_iter()
            .map(parse_id)
            .collect::<Result<Vec<_>, _>>()?,
        price_tiers: tiers
            .into_iter()
            .map(row_to_tier)
            .collect::<Result<Vec<_>, _>>()?,
        metadata: row.metadata,
    };
    Event::new(draft).map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rstest::rstest;
    use serde_json::json;

    fn row() -> EventRow {
        EventRow {
            id: 1,
            title: "Open Air".to_owned(),
            start_time: Utc
                .with_ymd_and_hms(2026, 6, 1, 18, 0, 0)
                .single()
                .expect("valid timestamp"),
            end_time: None,
            city_id: 1,
            venue_id: 1,
            category_id: 1,
            metadata: Some(json!({ "outdoor": true })),
        }
    }

    fn tier(id: i32, event_id: i32, currency: &str) -> PriceTierRow {
        PriceTierRow {
            id,
            event_id,
            tier_name: "General".to_owned(),
            price: "25.00".parse().expect("valid decimal"),
            currency: currency.to_owned(),
        }
    }

    #[rstest]
    fn row_to_event_builds_validated_event() {
        let event = row_to_event(row(), vec![tier(3, 1, "CAD")], vec![7, 2])
            .expect("valid row");
        assert_eq!(event.price_tiers().len(), 1);
        let tag_ids: Vec<i32> = event.tag_ids().iter().map(|id| id.get()).collect();
        assert_eq!(tag_ids, vec![2, 7]);
    }

    #[rstest]
    fn row_to_event_rejects_malformed_currency() {
        let err = row_to_event(row(), vec![tier(3, 1, "cad")], Vec::new())
            .expect_err("invalid currency");
        assert!(err.contains("currency"));
    }

    #[rstest]
    fn row_to_event_rejects_invalid_identifiers() {
        let mut bad = row();
        bad.venue_id = 0;
        assert!(row_to_event(bad, Vec::new(), Vec::new()).is_err());
    }

    #[rstest]
    fn lookup_reports_dangling_references() {
        let names = HashMap::from([(1, "Toronto".to_owned())]);
        assert_eq!(
            lookup(&names, 1, "city", 5).expect("known city"),
            "Toronto"
        );
        assert!(matches!(
            lookup(&names, 2, "city", 5),
            Err(ProjectionError::Invalid(message)) if message.contains("missing city 2")
        ));
    }
}
