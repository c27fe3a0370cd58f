//! REST API layer for HTTP request/response handling.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Pipeline stages (error boundary, authentication, logging)
//! - [`pipeline`] - Fixed ordering and composition of the stages
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod pipeline;
pub mod routes;
