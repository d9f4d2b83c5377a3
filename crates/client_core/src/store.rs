use shared::api::{MatchCalendar, MatchHistory, Scout, Talent, Team};

use crate::{ClientError, ScoutingClient};

/// Types that can live in a [`ResourceStore`], keyed by their server id.
pub trait Keyed {
    fn key(&self) -> i64;
}

impl Keyed for Talent {
    fn key(&self) -> i64 {
        self.id.0
    }
}

impl Keyed for Team {
    fn key(&self) -> i64 {
        self.id.0
    }
}

impl Keyed for Scout {
    fn key(&self) -> i64 {
        self.id.0
    }
}

impl Keyed for MatchHistory {
    fn key(&self) -> i64 {
        self.id.0
    }
}

impl Keyed for MatchCalendar {
    fn key(&self) -> i64 {
        self.id.0
    }
}

/// A local mirror of one server collection, last fetch wins. There is no
/// cross-collection transactionality; a failed refresh keeps the previous
/// snapshot and records the error.
#[derive(Debug)]
pub struct ResourceStore<T> {
    items: Vec<T>,
    loading: bool,
    last_error: Option<String>,
}

impl<T> Default for ResourceStore<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            last_error: None,
        }
    }
}

impl<T: Keyed> ResourceStore<T> {
    pub fn replace_all(&mut self, items: Vec<T>) {
        self.items = items;
        self.loading = false;
        self.last_error = None;
    }

    pub fn upsert(&mut self, item: T) {
        match self.items.iter_mut().find(|existing| existing.key() == item.key()) {
            Some(existing) => *existing = item,
            None => self.items.push(item),
        }
    }

    pub fn remove(&mut self, key: i64) {
        self.items.retain(|item| item.key() != key);
    }

    pub fn get(&self, key: i64) -> Option<&T> {
        self.items.iter().find(|item| item.key() == key)
    }

    pub fn all(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn begin_fetch(&mut self) {
        self.loading = true;
        self.last_error = None;
    }

    fn fail_fetch(&mut self, message: String) {
        self.loading = false;
        self.last_error = Some(message);
    }
}

/// Aggregated mirrors for every collection the screens render.
#[derive(Debug, Default)]
pub struct ClientStore {
    pub talents: ResourceStore<Talent>,
    pub teams: ResourceStore<Team>,
    pub scouts: ResourceStore<Scout>,
    pub match_history: ResourceStore<MatchHistory>,
    pub calendar: ResourceStore<MatchCalendar>,
}

macro_rules! refresh {
    ($self:ident, $field:ident, $fetch:expr) => {{
        $self.$field.begin_fetch();
        match $fetch.await {
            Ok(items) => {
                $self.$field.replace_all(items);
                Ok(())
            }
            Err(err) => {
                $self.$field.fail_fetch(err.to_string());
                Err(err)
            }
        }
    }};
}

impl ClientStore {
    pub async fn refresh_talents(&mut self, client: &ScoutingClient) -> Result<(), ClientError> {
        refresh!(self, talents, client.list_talents())
    }

    pub async fn refresh_teams(&mut self, client: &ScoutingClient) -> Result<(), ClientError> {
        refresh!(self, teams, client.list_teams())
    }

    pub async fn refresh_scouts(&mut self, client: &ScoutingClient) -> Result<(), ClientError> {
        refresh!(self, scouts, client.list_scouts())
    }

    pub async fn refresh_match_history(
        &mut self,
        client: &ScoutingClient,
    ) -> Result<(), ClientError> {
        refresh!(self, match_history, client.list_match_history())
    }

    pub async fn refresh_calendar(&mut self, client: &ScoutingClient) -> Result<(), ClientError> {
        refresh!(self, calendar, client.list_match_calendar())
    }
}
