//! Atelier — administrative API for tracking furniture manufacturing.
//!
//! The crate is split between [`model`], the JSON DTOs exposed by the REST
//! surface, and [`server`], which holds the HTTP layer, the repositories,
//! and the services built on top of the relational store.

pub mod model;
pub mod server;
