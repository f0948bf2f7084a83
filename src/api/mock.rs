//! In-memory [`IdentityApi`] for service and CLI tests

use super::types::IdentityApi;
use crate::error::{Error, Result};
use crate::models::{
    App, AppQuery, Event, EventType, EventsQuery, NewUser, User, UserQuery, UserUpdate,
};
use crate::pagination::CursorPage;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Canned responses plus a log of every call made
#[derive(Default)]
pub(crate) struct MockApi {
    pub users: Vec<User>,
    pub apps: Vec<App>,
    pub app_users: HashMap<i64, Vec<User>>,
    pub event_pages: Vec<Vec<Event>>,
    pub event_types: Vec<EventType>,
    /// Operation that answers with an upstream error
    pub fail_on: Option<&'static str>,
    calls: Mutex<Vec<String>>,
    updates: Mutex<Vec<(i64, UserUpdate)>>,
    created: Mutex<Vec<NewUser>>,
    event_queries: Mutex<Vec<EventsQuery>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(mut self, users: Vec<User>) -> Self {
        self.users = users;
        self
    }

    pub fn with_apps(mut self, apps: Vec<App>) -> Self {
        self.apps = apps;
        self
    }

    pub fn with_app_users(mut self, app_id: i64, users: Vec<User>) -> Self {
        self.app_users.insert(app_id, users);
        self
    }

    pub fn with_event_pages(mut self, pages: Vec<Vec<Event>>) -> Self {
        self.event_pages = pages;
        self
    }

    pub fn with_event_types(mut self, types: Vec<EventType>) -> Self {
        self.event_types = types;
        self
    }

    pub fn failing_on(mut self, operation: &'static str) -> Self {
        self.fail_on = Some(operation);
        self
    }

    /// Every call in order, e.g. `get_users page=1`
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of calls to one operation
    pub fn count(&self, operation: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.split_whitespace().next() == Some(operation))
            .count()
    }

    pub fn updates(&self) -> Vec<(i64, UserUpdate)> {
        self.updates.lock().unwrap().clone()
    }

    pub fn created(&self) -> Vec<NewUser> {
        self.created.lock().unwrap().clone()
    }

    pub fn event_queries(&self) -> Vec<EventsQuery> {
        self.event_queries.lock().unwrap().clone()
    }

    fn record(&self, operation: &'static str, detail: String) -> Result<()> {
        let entry = if detail.is_empty() {
            operation.to_string()
        } else {
            format!("{operation} {detail}")
        };
        self.calls.lock().unwrap().push(entry);

        if self.fail_on == Some(operation) {
            return Err(Error::http_status(500, format!("{operation} failed")));
        }
        Ok(())
    }
}

fn page_of<T: Clone>(items: &[T], page: u32, limit: usize) -> Vec<T> {
    items
        .iter()
        .skip((page as usize - 1) * limit)
        .take(limit)
        .cloned()
        .collect()
}

fn field_matches(filter: &Option<String>, value: &Option<String>) -> bool {
    filter.is_none() || filter == value
}

#[async_trait]
impl IdentityApi for MockApi {
    async fn get_users(&self, query: &UserQuery, page: u32, limit: usize) -> Result<Vec<User>> {
        self.record("get_users", format!("page={page}"))?;
        let found: Vec<User> = self
            .users
            .iter()
            .filter(|u| {
                field_matches(&query.email, &u.email)
                    && field_matches(&query.username, &u.username)
                    && field_matches(&query.firstname, &u.firstname)
                    && field_matches(&query.lastname, &u.lastname)
                    && query
                        .id
                        .as_deref()
                        .map_or(true, |ids| ids.split(',').any(|id| id == u.id.to_string()))
            })
            .cloned()
            .collect();
        Ok(page_of(&found, page, limit))
    }

    async fn update_user(&self, id: i64, update: &UserUpdate) -> Result<User> {
        self.record("update_user", id.to_string())?;
        self.updates.lock().unwrap().push((id, update.clone()));

        let mut user = self
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .unwrap_or(User {
                id,
                ..User::default()
            });
        if let Some(email) = &update.email {
            user.email = Some(email.clone());
        }
        if update.status.is_some() {
            user.status = update.status;
        }
        if update.last_login.is_some() {
            user.last_login = update.last_login;
        }
        Ok(user)
    }

    async fn create_user(&self, user: &NewUser) -> Result<User> {
        self.record("create_user", user.email.clone())?;
        self.created.lock().unwrap().push(user.clone());
        Ok(User {
            id: 1000,
            email: Some(user.email.clone()),
            firstname: Some(user.firstname.clone()),
            lastname: Some(user.lastname.clone()),
            status: Some(0),
            ..User::default()
        })
    }

    async fn get_apps(&self, query: &AppQuery, page: u32, limit: usize) -> Result<Vec<App>> {
        self.record("get_apps", format!("page={page}"))?;
        let found: Vec<App> = self
            .apps
            .iter()
            .filter(|a| field_matches(&query.name, &a.name))
            .cloned()
            .collect();
        Ok(page_of(&found, page, limit))
    }

    async fn get_app_users(&self, app_id: i64, page: u32, limit: usize) -> Result<Vec<User>> {
        self.record("get_app_users", format!("{app_id} page={page}"))?;
        let users = self.app_users.get(&app_id).map(Vec::as_slice).unwrap_or(&[]);
        Ok(page_of(users, page, limit))
    }

    async fn list_events(
        &self,
        query: &EventsQuery,
        cursor: Option<&str>,
        _limit: usize,
    ) -> Result<CursorPage<Event>> {
        self.record("list_events", cursor.unwrap_or("-").to_string())?;
        self.event_queries.lock().unwrap().push(query.clone());

        let index = match cursor {
            None => 0,
            Some(c) => c
                .trim_start_matches("page-")
                .parse::<usize>()
                .map_err(|_| Error::http_status(400, format!("bad cursor {c}")))?,
        };
        let records = self.event_pages.get(index).cloned().unwrap_or_default();
        let next_cursor = (index + 1 < self.event_pages.len()).then(|| format!("page-{}", index + 1));
        Ok(CursorPage::new(records, next_cursor))
    }

    async fn list_event_types(&self) -> Result<Vec<EventType>> {
        self.record("list_event_types", String::new())?;
        Ok(self.event_types.clone())
    }
}
