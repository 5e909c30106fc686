mod auth;
mod builds;
mod companies;
mod furniture_models;
mod stats;
