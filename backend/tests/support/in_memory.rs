//! In-memory catalogue implementing every repository port.
//!
//! One shared store backs the category, event, and tag ports so writes made
//! through the tag port show up in event projections, as they would in the
//! database.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use eventshop::domain::ports::{
    AttachOutcome, CategoryRepository, CategoryRepositoryError, EventRepository,
    EventRepositoryError, TagRepository, TagRepositoryError,
};
use eventshop::domain::{
    Category, CategoryDraft, CategoryId, CityId, Event, EventDraft, EventDto, EventFilter,
    EventId, EventNames, PriceTierDraft, PriceTierId, Tag, TagId, TagName, VenueId,
};
use rust_decimal::Decimal;

struct EventRecord {
    event: Event,
    city: String,
    venue: String,
}

#[derive(Default)]
struct Store {
    categories: Vec<Category>,
    events: Vec<EventRecord>,
    tags: Vec<Tag>,
    links: BTreeSet<(EventId, TagId)>,
}

impl Store {
    fn project(&self, record: &EventRecord) -> EventDto {
        let event = &record.event;
        let category = self
            .categories
            .iter()
            .find(|category| category.id() == event.category_id())
            .map(|category| category.name().to_owned())
            .unwrap_or_default();
        let tags = self
            .tag_ids_of(event.id())
            .into_iter()
            .filter_map(|tag_id| self.tags.iter().find(|tag| tag.id() == tag_id))
            .map(|tag| tag.name().to_string())
            .collect();
        EventDto::project(
            event,
            EventNames {
                city: record.city.clone(),
                venue: record.venue.clone(),
                category,
                tags,
            },
        )
    }

    fn tag_ids_of(&self, event_id: EventId) -> Vec<TagId> {
        self.links
            .iter()
            .filter(|(linked_event, _)| *linked_event == event_id)
            .map(|(_, tag_id)| *tag_id)
            .collect()
    }

    fn sorted_projections(&self, keep: impl Fn(&EventRecord, &EventDto) -> bool) -> Vec<EventDto> {
        let mut events: Vec<EventDto> = self
            .events
            .iter()
            .filter_map(|record| {
                let dto = self.project(record);
                keep(record, &dto).then_some(dto)
            })
            .collect();
        events.sort_by(|a, b| {
            a.start_time
                .cmp(&b.start_time)
                .then_with(|| a.event_id.cmp(&b.event_id))
        });
        events
    }

    fn has_event(&self, event_id: EventId) -> bool {
        self.events.iter().any(|record| record.event.id() == event_id)
    }

    fn tag_named(&self, name: &TagName) -> Option<&Tag> {
        let wanted = name.normalized();
        self.tags.iter().find(|tag| tag.name().normalized() == wanted)
    }

    fn insert_tag(&mut self, name: &TagName) -> Tag {
        let next = self
            .tags
            .iter()
            .map(|tag| tag.id().get())
            .max()
            .unwrap_or(0)
            + 1;
        let tag = Tag::from_parts(TagId::new(next).expect("positive tag id"), name.clone());
        self.tags.push(tag.clone());
        tag
    }
}

/// Shared in-memory catalogue; clones share state.
#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    store: Arc<Mutex<Store>>,
    offline: Arc<AtomicBool>,
}

const OFFLINE_MESSAGE: &str = "in-memory catalogue is offline";

impl InMemoryCatalog {
    fn store(&self) -> MutexGuard<'_, Store> {
        self.store.lock().expect("catalog store lock")
    }

    /// Make every repository call fail with a connection error.
    pub fn go_offline(&self) {
        self.offline.store(true, Ordering::SeqCst);
    }

    fn is_offline(&self) -> bool {
        self.offline.load(Ordering::SeqCst)
    }

    pub fn add_category(&self, id: i32, name: &str) {
        let category = Category::new(CategoryDraft {
            id: CategoryId::new(id).expect("valid category id"),
            name: name.to_owned(),
            slug: None,
        })
        .expect("valid category");
        self.store().categories.push(category);
    }

    pub fn add_tag(&self, name: &str) -> TagId {
        let name = TagName::new(name).expect("valid tag name");
        self.store().insert_tag(&name).id()
    }

    pub fn add_event(&self, event: SeedEvent) {
        let id = EventId::new(event.id).expect("valid event id");
        let tiers = event
            .tiers
            .iter()
            .enumerate()
            .map(|(index, (name, price))| PriceTierDraft {
                id: PriceTierId::new(event.id * 100 + i32::try_from(index).expect("small index"))
                    .expect("valid tier id"),
                event_id: id,
                tier_name: (*name).to_owned(),
                price: price.parse::<Decimal>().expect("valid price"),
                currency: Default::default(),
            })
            .collect();
        let built = Event::new(EventDraft {
            id,
            title: event.title.to_owned(),
            start_time: event.start_time,
            end_time: None,
            city_id: CityId::new(1).expect("valid city id"),
            venue_id: VenueId::new(1).expect("valid venue id"),
            category_id: CategoryId::new(event.category_id).expect("valid category id"),
            tag_ids: event.tag_ids.clone(),
            price_tiers: tiers,
            metadata: None,
        })
        .expect("valid event");
        let mut store = self.store();
        for tag_id in built.tag_ids() {
            store.links.insert((id, *tag_id));
        }
        store.events.push(EventRecord {
            event: built,
            city: event.city.to_owned(),
            venue: event.venue.to_owned(),
        });
    }

    pub fn tag_count(&self) -> usize {
        self.store().tags.len()
    }
}

/// Seed description of an event.
pub struct SeedEvent {
    pub id: i32,
    pub title: &'static str,
    pub category_id: i32,
    pub city: &'static str,
    pub venue: &'static str,
    pub start_time: DateTime<Utc>,
    pub tag_ids: Vec<TagId>,
    pub tiers: Vec<(&'static str, &'static str)>,
}

/// UTC timestamp helper for seeds.
pub fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .expect("valid timestamp")
}

#[async_trait]
impl CategoryRepository for InMemoryCatalog {
    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, CategoryRepositoryError> {
        if self.is_offline() {
            return Err(CategoryRepositoryError::connection(OFFLINE_MESSAGE));
        }
        Ok(self
            .store()
            .categories
            .iter()
            .find(|category| category.id() == id)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<Category>, CategoryRepositoryError> {
        if self.is_offline() {
            return Err(CategoryRepositoryError::connection(OFFLINE_MESSAGE));
        }
        let mut categories = self.store().categories.clone();
        categories.sort_by(|a, b| a.name().cmp(b.name()).then_with(|| a.id().cmp(&b.id())));
        Ok(categories)
    }
}

#[async_trait]
impl EventRepository for InMemoryCatalog {
    async fn find_by_id(&self, id: EventId) -> Result<Option<EventDto>, EventRepositoryError> {
        if self.is_offline() {
            return Err(EventRepositoryError::connection(OFFLINE_MESSAGE));
        }
        let store = self.store();
        Ok(store
            .events
            .iter()
            .find(|record| record.event.id() == id)
            .map(|record| store.project(record)))
    }

    async fn list_by_category(
        &self,
        category_id: CategoryId,
    ) -> Result<Vec<EventDto>, EventRepositoryError> {
        if self.is_offline() {
            return Err(EventRepositoryError::connection(OFFLINE_MESSAGE));
        }
        Ok(self
            .store()
            .sorted_projections(|record, _| record.event.category_id() == category_id))
    }

    async fn search(&self, filter: &EventFilter) -> Result<Vec<EventDto>, EventRepositoryError> {
        if self.is_offline() {
            return Err(EventRepositoryError::connection(OFFLINE_MESSAGE));
        }
        let store = self.store();
        let mut events = store.sorted_projections(|record, dto| {
            filter.matches(dto, &store.tag_ids_of(record.event.id()))
        });
        events.truncate(usize::try_from(filter.limit()).expect("limit fits usize"));
        Ok(events)
    }

    async fn exists(&self, id: EventId) -> Result<bool, EventRepositoryError> {
        if self.is_offline() {
            return Err(EventRepositoryError::connection(OFFLINE_MESSAGE));
        }
        Ok(self.store().has_event(id))
    }
}

#[async_trait]
impl TagRepository for InMemoryCatalog {
    async fn list_all(&self) -> Result<Vec<Tag>, TagRepositoryError> {
        if self.is_offline() {
            return Err(TagRepositoryError::connection(OFFLINE_MESSAGE));
        }
        let mut tags = self.store().tags.clone();
        tags.sort_by_key(|tag| (tag.name().normalized(), tag.id()));
        Ok(tags)
    }

    async fn find_by_id(&self, id: TagId) -> Result<Option<Tag>, TagRepositoryError> {
        if self.is_offline() {
            return Err(TagRepositoryError::connection(OFFLINE_MESSAGE));
        }
        Ok(self.store().tags.iter().find(|tag| tag.id() == id).cloned())
    }

    async fn create(&self, name: &TagName) -> Result<Tag, TagRepositoryError> {
        if self.is_offline() {
            return Err(TagRepositoryError::connection(OFFLINE_MESSAGE));
        }
        let mut store = self.store();
        if store.tag_named(name).is_some() {
            return Err(TagRepositoryError::duplicate_name(name.as_str()));
        }
        Ok(store.insert_tag(name))
    }

    async fn create_and_attach(
        &self,
        name: &TagName,
        event_id: EventId,
    ) -> Result<Tag, TagRepositoryError> {
        if self.is_offline() {
            return Err(TagRepositoryError::connection(OFFLINE_MESSAGE));
        }
        let mut store = self.store();
        if !store.has_event(event_id) {
            return Err(TagRepositoryError::event_not_found(event_id));
        }
        let tag = match store.tag_named(name).cloned() {
            Some(existing) => existing,
            None => store.insert_tag(name),
        };
        store.links.insert((event_id, tag.id()));
        Ok(tag)
    }

    async fn attach(
        &self,
        tag_id: TagId,
        event_id: EventId,
    ) -> Result<AttachOutcome, TagRepositoryError> {
        if self.is_offline() {
            return Err(TagRepositoryError::connection(OFFLINE_MESSAGE));
        }
        let mut store = self.store();
        if !store.tags.iter().any(|tag| tag.id() == tag_id) {
            return Err(TagRepositoryError::tag_not_found(tag_id));
        }
        if !store.has_event(event_id) {
            return Err(TagRepositoryError::event_not_found(event_id));
        }
        if store.links.insert((event_id, tag_id)) {
            Ok(AttachOutcome::Attached)
        } else {
            Ok(AttachOutcome::AlreadyAttached)
        }
    }

    async fn detach(&self, tag_id: TagId, event_id: EventId) -> Result<bool, TagRepositoryError> {
        if self.is_offline() {
            return Err(TagRepositoryError::connection(OFFLINE_MESSAGE));
        }
        Ok(self.store().links.remove(&(event_id, tag_id)))
    }
}
