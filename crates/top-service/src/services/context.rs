//! Service context - dependency container for services
//!
//! Holds the connection pool and one repository per managed resource.

use std::sync::Arc;

use top_core::traits::ResourceRepository;
use top_core::{Movie, Product, User};
use top_db::{PgMovieRepository, PgPool, PgProductRepository, PgUserRepository};

use super::movie::MovieService;
use super::resource::ResourceService;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to handlers.
/// Services borrow a repository from it, so constructing one is free.
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn ResourceRepository<User>>,
    product_repo: Arc<dyn ResourceRepository<Product>>,
    movie_repo: Arc<dyn ResourceRepository<Movie>>,
}

impl ServiceContext {
    /// Create a new service context with explicit repositories
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn ResourceRepository<User>>,
        product_repo: Arc<dyn ResourceRepository<Product>>,
        movie_repo: Arc<dyn ResourceRepository<Movie>>,
    ) -> Self {
        Self {
            pool,
            user_repo,
            product_repo,
            movie_repo,
        }
    }

    /// Create a context backed by the PostgreSQL repositories
    pub fn from_pool(pool: PgPool) -> Self {
        Self::new(
            pool.clone(),
            Arc::new(PgUserRepository::new(pool.clone())),
            Arc::new(PgProductRepository::new(pool.clone())),
            Arc::new(PgMovieRepository::new(pool)),
        )
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    pub fn user_repo(&self) -> &dyn ResourceRepository<User> {
        self.user_repo.as_ref()
    }

    pub fn product_repo(&self) -> &dyn ResourceRepository<Product> {
        self.product_repo.as_ref()
    }

    pub fn movie_repo(&self) -> &dyn ResourceRepository<Movie> {
        self.movie_repo.as_ref()
    }

    // === Services ===

    pub fn users(&self) -> ResourceService<'_, User> {
        ResourceService::new(self.user_repo())
    }

    pub fn products(&self) -> ResourceService<'_, Product> {
        ResourceService::new(self.product_repo())
    }

    pub fn movies(&self) -> MovieService<'_> {
        MovieService::new(self.movie_repo())
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .finish()
    }
}
