//! AWS-oriented adapters and handlers for the movie-awards lookup service.
//!
//! This crate owns runtime integration details (the Lambda handler and the
//! DynamoDB store adapter) on top of the contract and outcome primitives in
//! `movie_awards_core`.

pub mod adapters;
pub mod handlers;
