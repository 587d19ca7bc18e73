//! In-memory repository used by the service tests

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use top_core::traits::{RepoResult, ResourceRepository};
use top_core::{
    FieldValue, ListFilter, Movie, MovieDraft, Product, ProductDraft, Resource, SortOrder, User,
    UserDraft, Window,
};

type Build<R> = fn(i64, <R as Resource>::Draft, DateTime<Utc>) -> R;
type Touch<R> = fn(&mut R, DateTime<Utc>);

struct State<R> {
    rows: BTreeMap<i64, R>,
    deleted: HashSet<i64>,
    next_id: i64,
    clock: DateTime<Utc>,
}

impl<R> State<R> {
    /// Every write happens one second after the previous one
    fn tick(&mut self) -> DateTime<Utc> {
        self.clock += Duration::seconds(1);
        self.clock
    }

    fn live(&self) -> impl Iterator<Item = &R> {
        self.rows
            .iter()
            .filter(|(id, _)| !self.deleted.contains(*id))
            .map(|(_, row)| row)
    }
}

pub struct MemoryRepository<R: Resource> {
    state: Mutex<State<R>>,
    build: Build<R>,
    touch: Touch<R>,
}

impl<R: Resource> MemoryRepository<R> {
    fn new(build: Build<R>, touch: Touch<R>) -> Self {
        Self {
            state: Mutex::new(State {
                rows: BTreeMap::new(),
                deleted: HashSet::new(),
                next_id: 1,
                clock: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            }),
            build,
            touch,
        }
    }

    fn matches(row: &R, filter: &ListFilter) -> bool {
        if let Some(keyword) = filter.keyword() {
            let needle = keyword.to_lowercase();
            let hit = R::SPEC.search_columns.iter().any(|column| {
                row.field(column)
                    .and_then(|v| v.as_text().map(|t| t.to_lowercase().contains(&needle)))
                    .unwrap_or(false)
            });
            if !hit {
                return false;
            }
        }
        if let (Some(column), Some(expected)) = (R::SPEC.exact_column, filter.exact()) {
            if row.field(column).and_then(|v| v.as_text()) != Some(expected) {
                return false;
            }
        }
        if let Some(threshold) = filter.at_least {
            let value = row.field(threshold.column).and_then(|v| v.as_number());
            if !value.is_some_and(|v| v >= threshold.value) {
                return false;
            }
        }
        true
    }

    fn compare(a: &R, b: &R, order: &SortOrder) -> Ordering {
        for key in order.keys() {
            let ord = match key.column {
                "created_at" => a.created_at().cmp(&b.created_at()),
                "updated_at" => a.updated_at().cmp(&b.updated_at()),
                "id" => a.id().cmp(&b.id()),
                column => match (a.field(column), b.field(column)) {
                    (Some(FieldValue::Number(x)), Some(FieldValue::Number(y))) => {
                        x.partial_cmp(&y).unwrap_or(Ordering::Equal)
                    }
                    (Some(FieldValue::Text(x)), Some(FieldValue::Text(y))) => x.cmp(y),
                    _ => Ordering::Equal,
                },
            };
            let ord = if key.descending { ord.reverse() } else { ord };
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }
}

#[async_trait]
impl<R: Resource> ResourceRepository<R> for MemoryRepository<R> {
    async fn insert(&self, draft: &R::Draft) -> RepoResult<R> {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id;
        state.next_id += 1;
        let now = state.tick();
        let row = (self.build)(id, draft.clone(), now);
        state.rows.insert(id, row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<R>> {
        let state = self.state.lock().unwrap();
        let row = state.live().find(|row| row.id() == id).cloned();
        Ok(row)
    }

    async fn count(&self, filter: &ListFilter) -> RepoResult<i64> {
        let state = self.state.lock().unwrap();
        Ok(state.live().filter(|row| Self::matches(row, filter)).count() as i64)
    }

    async fn find(
        &self,
        filter: &ListFilter,
        order: &SortOrder,
        window: Window,
    ) -> RepoResult<Vec<R>> {
        let state = self.state.lock().unwrap();
        let mut rows: Vec<R> = state
            .live()
            .filter(|row| Self::matches(row, filter))
            .cloned()
            .collect();
        rows.sort_by(|a, b| Self::compare(a, b, order));

        let rows = rows.into_iter().skip(window.offset as usize);
        Ok(match window.limit {
            Some(limit) => rows.take(limit as usize).collect(),
            None => rows.collect(),
        })
    }

    async fn update(&self, record: &R) -> RepoResult<Option<R>> {
        let mut state = self.state.lock().unwrap();
        let id = record.id();
        if !state.rows.contains_key(&id) || state.deleted.contains(&id) {
            return Ok(None);
        }
        let now = state.tick();
        let mut row = record.clone();
        (self.touch)(&mut row, now);
        state.rows.insert(id, row.clone());
        Ok(Some(row))
    }

    async fn delete(&self, id: i64) -> RepoResult<u64> {
        let mut state = self.state.lock().unwrap();
        if !state.rows.contains_key(&id) || state.deleted.contains(&id) {
            return Ok(0);
        }
        if R::SPEC.soft_delete {
            state.deleted.insert(id);
        } else {
            state.rows.remove(&id);
        }
        Ok(1)
    }

    async fn average(&self, column: &'static str) -> RepoResult<f64> {
        let state = self.state.lock().unwrap();
        let values: Vec<f64> = state
            .live()
            .filter_map(|row| row.field(column).and_then(|v| v.as_number()))
            .collect();
        if values.is_empty() {
            return Ok(0.0);
        }
        Ok(values.iter().sum::<f64>() / values.len() as f64)
    }

    async fn group_count(&self, column: &'static str) -> RepoResult<Vec<(String, i64)>> {
        let state = self.state.lock().unwrap();
        let mut groups: BTreeMap<String, i64> = BTreeMap::new();
        for row in state.live() {
            if let Some(text) = row.field(column).and_then(|v| v.as_text()) {
                if !text.is_empty() {
                    *groups.entry(text.to_string()).or_default() += 1;
                }
            }
        }
        Ok(groups.into_iter().collect())
    }
}

impl MemoryRepository<User> {
    pub fn users() -> Self {
        Self::new(
            |id, d: UserDraft, now| User {
                id,
                username: d.username,
                email: d.email,
                phone: d.phone,
                status: d.status,
                created_at: now,
                updated_at: now,
            },
            |row, now| row.updated_at = now,
        )
    }
}

impl MemoryRepository<Product> {
    pub fn products() -> Self {
        Self::new(
            |id, d: ProductDraft, now| Product {
                id,
                name: d.name,
                description: d.description,
                price: d.price,
                stock: d.stock,
                category: d.category,
                status: d.status,
                created_at: now,
                updated_at: now,
            },
            |row, now| row.updated_at = now,
        )
    }
}

impl MemoryRepository<Movie> {
    pub fn movies() -> Self {
        Self::new(
            |id, d: MovieDraft, now| Movie {
                id,
                title: d.title,
                cover: d.cover,
                genre: d.genre,
                director: d.director,
                video_ref: d.video_ref,
                actors: d.actors,
                release_date: d.release_date,
                duration: d.duration,
                language: d.language,
                country: d.country,
                rating: d.rating,
                description: d.description,
                created_at: now,
                updated_at: now,
            },
            |row, now| row.updated_at = now,
        )
    }
}
