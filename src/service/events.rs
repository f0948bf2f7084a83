//! Event operations and event type name resolution

use super::OneLogin;
use crate::api::IdentityApi;
use crate::error::{Error, Result};
use crate::models::{Event, EventType, EventsQuery};
use crate::pagination::paginate_cursor;
use std::collections::HashMap;
use tracing::debug;

/// Event types indexed by name
#[derive(Debug, Clone, Default)]
pub struct EventTypeIndex {
    types: Vec<EventType>,
    ids_by_name: HashMap<String, i64>,
}

impl EventTypeIndex {
    pub fn new(types: Vec<EventType>) -> Self {
        let ids_by_name = types.iter().map(|t| (t.name.clone(), t.id)).collect();
        Self { types, ids_by_name }
    }

    /// Event types in the order the provider listed them
    pub fn types(&self) -> &[EventType] {
        &self.types
    }

    pub fn id_of(&self, name: &str) -> Option<i64> {
        self.ids_by_name.get(name).copied()
    }

    /// Resolve comma-separated names to a comma-separated id list.
    ///
    /// Names are trimmed and empty entries skipped; `None` when no name is
    /// left. Every unknown name is reported in a single error.
    pub fn resolve(&self, names: &str) -> Result<Option<String>> {
        let mut ids = Vec::new();
        let mut unknown = Vec::new();

        for name in names.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            match self.id_of(name) {
                Some(id) => ids.push(id.to_string()),
                None => unknown.push(name.to_string()),
            }
        }

        if !unknown.is_empty() {
            return Err(Error::InvalidEventTypeName { names: unknown });
        }
        Ok((!ids.is_empty()).then(|| ids.join(",")))
    }
}

/// Event filters as given on the command line.
///
/// `event_type` holds names, `event_type_id` holds ids; at most one of them
/// may be set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    pub client_id: Option<String>,
    pub created_at: Option<String>,
    pub directory_id: Option<String>,
    pub event_type: Option<String>,
    pub event_type_id: Option<String>,
    pub resolution: Option<String>,
    pub id: Option<String>,
    pub since: Option<String>,
    pub until: Option<String>,
    pub user_id: Option<String>,
}

impl<A: IdentityApi> OneLogin<A> {
    /// All events matching the query, following cursors to the end
    pub async fn list_events(&self, query: &EventsQuery) -> Result<Vec<Event>> {
        let events = paginate_cursor(|cursor| async move {
            self.api
                .list_events(query, cursor.as_deref(), self.page_size)
                .await
        })
        .await?;
        debug!(count = events.len(), "Fetched events");
        Ok(events)
    }

    /// Every event type, fetched once per service instance
    pub async fn get_event_types(&self) -> Result<&[EventType]> {
        Ok(self.event_type_index().await?.types())
    }

    /// Resolve comma-separated event type names to ids
    pub async fn resolve_event_type_ids(&self, names: &str) -> Result<Option<String>> {
        self.event_type_index().await?.resolve(names)
    }

    /// Turn command line filters into an events query.
    ///
    /// Names and ids for the event type are mutually exclusive; that is
    /// checked before anything is fetched.
    pub async fn build_events_query(&self, filter: EventFilter) -> Result<EventsQuery> {
        let event_type_id = match (filter.event_type, filter.event_type_id) {
            (Some(_), Some(_)) => return Err(Error::mutually_exclusive("--type", "--type-id")),
            (None, ids) => ids,
            (Some(names), None) => self.resolve_event_type_ids(&names).await?,
        };

        Ok(EventsQuery {
            client_id: filter.client_id,
            created_at: filter.created_at,
            directory_id: filter.directory_id,
            event_type_id,
            resolution: filter.resolution,
            id: filter.id,
            since: filter.since,
            until: filter.until,
            user_id: filter.user_id,
        })
    }

    async fn event_type_index(&self) -> Result<&EventTypeIndex> {
        self.event_types
            .get_or_try_init(|| async {
                let types = self.api.list_event_types().await?;
                debug!(count = types.len(), "Cached event types");
                Ok::<_, Error>(EventTypeIndex::new(types))
            })
            .await
    }
}
