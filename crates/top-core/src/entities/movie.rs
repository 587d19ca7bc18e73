//! Movie entity - catalog entry with rating and genre, deleted for good

use chrono::{DateTime, NaiveDate, Utc};

use super::resource::{apply, FieldValue, Resource, ResourceSpec};

/// Catalog movie
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub cover: String,
    pub genre: String,
    pub director: String,
    /// Playback stream reference (m3u8 playlist)
    pub video_ref: String,
    pub actors: String,
    pub release_date: Option<NaiveDate>,
    /// Minutes, non-negative
    pub duration: i32,
    pub language: String,
    pub country: String,
    /// 0.0 ..= 10.0
    pub rating: f32,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a movie
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieDraft {
    pub title: String,
    pub cover: String,
    pub genre: String,
    pub director: String,
    pub video_ref: String,
    pub actors: String,
    pub release_date: Option<NaiveDate>,
    pub duration: i32,
    pub language: String,
    pub country: String,
    pub rating: f32,
    pub description: String,
}

/// Partial update of a movie
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub cover: Option<String>,
    pub genre: Option<String>,
    pub director: Option<String>,
    pub video_ref: Option<String>,
    pub actors: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub duration: Option<i32>,
    pub language: Option<String>,
    pub country: Option<String>,
    pub rating: Option<f32>,
    pub description: Option<String>,
}

impl Movie {
    /// Minimum rating for the top-rated listing
    pub const TOP_RATED_THRESHOLD: f64 = 8.0;
}

impl Resource for Movie {
    type Draft = MovieDraft;
    type Patch = MoviePatch;

    const SPEC: ResourceSpec = ResourceSpec {
        name: "movie",
        table: "movies",
        search_columns: &["title", "director", "actors", "description"],
        exact_column: Some("genre"),
        soft_delete: false,
    };

    fn id(&self) -> i64 {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn merge(&mut self, patch: MoviePatch) {
        apply(&mut self.title, patch.title);
        apply(&mut self.cover, patch.cover);
        apply(&mut self.genre, patch.genre);
        apply(&mut self.director, patch.director);
        apply(&mut self.video_ref, patch.video_ref);
        apply(&mut self.actors, patch.actors);
        apply(&mut self.release_date, patch.release_date.map(Some));
        apply(&mut self.duration, patch.duration);
        apply(&mut self.language, patch.language);
        apply(&mut self.country, patch.country);
        apply(&mut self.rating, patch.rating);
        apply(&mut self.description, patch.description);
    }

    fn field(&self, column: &str) -> Option<FieldValue<'_>> {
        match column {
            "id" => Some(FieldValue::Number(self.id as f64)),
            "title" => Some(FieldValue::Text(&self.title)),
            "genre" => Some(FieldValue::Text(&self.genre)),
            "director" => Some(FieldValue::Text(&self.director)),
            "actors" => Some(FieldValue::Text(&self.actors)),
            "language" => Some(FieldValue::Text(&self.language)),
            "country" => Some(FieldValue::Text(&self.country)),
            "description" => Some(FieldValue::Text(&self.description)),
            "duration" => Some(FieldValue::Number(f64::from(self.duration))),
            "rating" => Some(FieldValue::Number(f64::from(self.rating))),
            _ => None,
        }
    }
}
