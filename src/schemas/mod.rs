//! Request / response body types for the HTTP API.

pub mod hello;
