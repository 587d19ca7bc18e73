//! Entity to DTO mappers
//!
//! Implements `From` conversions from request DTOs to domain drafts and
//! patches, and from domain entities to response DTOs.

use top_core::{
    CategoryStats, Movie, MovieDraft, MoviePatch, Product, ProductDraft, ProductPatch, Status,
    User, UserDraft, UserPatch,
};

use super::requests::{
    CreateMovieRequest, CreateProductRequest, CreateUserRequest, UpdateMovieRequest,
    UpdateProductRequest, UpdateUserRequest,
};
use super::responses::{
    GenreCount, MovieResponse, MovieStatsResponse, PageResponse, ProductResponse, UserResponse,
};
use crate::services::Page;

/// Status codes are range-checked by validation; anything else falls back to active
fn status_or_active(code: Option<i16>) -> Status {
    code.and_then(Status::from_code).unwrap_or_default()
}

// ============================================================================
// User Mappers
// ============================================================================

impl From<CreateUserRequest> for UserDraft {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            username: req.username,
            email: req.email,
            phone: req.phone,
            status: status_or_active(req.status),
        }
    }
}

impl From<UpdateUserRequest> for UserPatch {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            username: req.username,
            email: req.email,
            phone: req.phone,
            status: req.status.and_then(Status::from_code),
        }
    }
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            status: user.status.code(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Product Mappers
// ============================================================================

impl From<CreateProductRequest> for ProductDraft {
    fn from(req: CreateProductRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            price: req.price,
            stock: req.stock,
            category: req.category,
            status: status_or_active(req.status),
        }
    }
}

impl From<UpdateProductRequest> for ProductPatch {
    fn from(req: UpdateProductRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            price: req.price,
            stock: req.stock,
            category: req.category,
            status: req.status.and_then(Status::from_code),
        }
    }
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            stock: product.stock,
            category: product.category.clone(),
            status: product.status.code(),
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self::from(&product)
    }
}

// ============================================================================
// Movie Mappers
// ============================================================================

impl From<CreateMovieRequest> for MovieDraft {
    fn from(req: CreateMovieRequest) -> Self {
        Self {
            title: req.title,
            cover: req.cover,
            genre: req.genre,
            director: req.director,
            video_ref: req.m3u8,
            actors: req.actors,
            release_date: req.release_date,
            duration: req.duration,
            language: req.language,
            country: req.country,
            rating: req.rating,
            description: req.description,
        }
    }
}

impl From<UpdateMovieRequest> for MoviePatch {
    fn from(req: UpdateMovieRequest) -> Self {
        Self {
            title: req.title,
            cover: req.cover,
            genre: req.genre,
            director: req.director,
            video_ref: req.m3u8,
            actors: req.actors,
            release_date: req.release_date,
            duration: req.duration,
            language: req.language,
            country: req.country,
            rating: req.rating,
            description: req.description,
        }
    }
}

impl From<&Movie> for MovieResponse {
    fn from(movie: &Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
            poster: movie.cover.clone(),
            genre: movie.genre.clone(),
            director: movie.director.clone(),
            video_url: movie.video_ref.clone(),
            actors: movie.actors.clone(),
            release_date: movie.release_date,
            duration: movie.duration,
            language: movie.language.clone(),
            country: movie.country.clone(),
            rating: movie.rating,
            description: movie.description.clone(),
            created_at: movie.created_at,
            updated_at: movie.updated_at,
        }
    }
}

impl From<Movie> for MovieResponse {
    fn from(movie: Movie) -> Self {
        Self::from(&movie)
    }
}

// ============================================================================
// Listing and Stats Mappers
// ============================================================================

impl<R, T> From<Page<R>> for PageResponse<T>
where
    T: for<'r> From<&'r R>,
{
    fn from(page: Page<R>) -> Self {
        Self {
            list: page.items.iter().map(T::from).collect(),
            total: page.total,
            page: page.page,
            page_size: page.page_size,
        }
    }
}

impl From<CategoryStats> for MovieStatsResponse {
    fn from(stats: CategoryStats) -> Self {
        Self {
            total: stats.total,
            avg_rating: stats.average,
            // BTreeMap iteration keeps genres sorted
            genre_stats: stats
                .per_category
                .into_iter()
                .map(|(genre, count)| GenreCount { genre, count })
                .collect(),
        }
    }
}
