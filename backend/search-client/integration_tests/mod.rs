//! Integration tests for the candidate-search client against mock brand
//! endpoints.

mod helpers;

mod auth;
mod cv;
mod dispatch;
