//! # top-service
//!
//! Application layer containing the resource engine, movie listings and
//! statistics, and the request/response DTOs.

pub mod dto;
pub mod services;

pub use services::{
    MovieService, Page, ResourceService, ServiceContext, ServiceError, ServiceResult,
    StatsService, StatsSpec,
};
