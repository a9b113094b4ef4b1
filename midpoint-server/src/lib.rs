//! Meeting-point server.
//!
//! A web application that answers: "we are starting from these places,
//! which station should we all meet at?"

pub mod cache;
pub mod domain;
pub mod midpoint;
pub mod places;
pub mod transit;
pub mod weighted;
pub mod web;
