//! AWS-oriented adapters and handlers for the historical record lambdas.
//!
//! This crate owns runtime integration details (Lambda handlers, DynamoDB
//! access and environment configuration). Record contracts live in
//! `record_core`.

pub mod adapters;
pub mod config;
pub mod handlers;

#[cfg(test)]
mod testing;
