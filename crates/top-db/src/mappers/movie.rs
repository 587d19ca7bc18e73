//! Movie entity <-> model mapper
//!
//! The playback reference is stored in the `m3u8` column.

use top_core::entities::{Movie, MovieDraft};

use super::{BindValue, PgResource};
use crate::models::MovieModel;

/// Convert MovieModel to Movie entity
impl From<MovieModel> for Movie {
    fn from(model: MovieModel) -> Self {
        Movie {
            id: model.id,
            title: model.title,
            cover: model.cover,
            genre: model.genre,
            director: model.director,
            video_ref: model.m3u8,
            actors: model.actors,
            release_date: model.release_date,
            duration: model.duration,
            language: model.language,
            country: model.country,
            rating: model.rating,
            description: model.description,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl PgResource for Movie {
    type Model = MovieModel;

    const COLUMNS: &'static str = "id, title, cover, genre, director, m3u8, actors, \
                                   release_date, duration, language, country, rating, \
                                   description, created_at, updated_at";

    const WRITE_COLUMNS: &'static [&'static str] = &[
        "title",
        "cover",
        "genre",
        "director",
        "m3u8",
        "actors",
        "release_date",
        "duration",
        "language",
        "country",
        "rating",
        "description",
    ];

    fn draft_values(draft: &MovieDraft) -> Vec<BindValue> {
        vec![
            BindValue::Text(draft.title.clone()),
            BindValue::Text(draft.cover.clone()),
            BindValue::Text(draft.genre.clone()),
            BindValue::Text(draft.director.clone()),
            BindValue::Text(draft.video_ref.clone()),
            BindValue::Text(draft.actors.clone()),
            BindValue::Date(draft.release_date),
            BindValue::Int(draft.duration),
            BindValue::Text(draft.language.clone()),
            BindValue::Text(draft.country.clone()),
            BindValue::Real(draft.rating),
            BindValue::Text(draft.description.clone()),
        ]
    }

    fn record_values(&self) -> Vec<BindValue> {
        vec![
            BindValue::Text(self.title.clone()),
            BindValue::Text(self.cover.clone()),
            BindValue::Text(self.genre.clone()),
            BindValue::Text(self.director.clone()),
            BindValue::Text(self.video_ref.clone()),
            BindValue::Text(self.actors.clone()),
            BindValue::Date(self.release_date),
            BindValue::Int(self.duration),
            BindValue::Text(self.language.clone()),
            BindValue::Text(self.country.clone()),
            BindValue::Real(self.rating),
            BindValue::Text(self.description.clone()),
        ]
    }
}
