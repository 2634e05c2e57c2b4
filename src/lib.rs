//! Slidecast - Lecture Lifecycle Core
//!
//! This crate implements the processing-status state machine for lecture
//! recordings and the notification fan-out that observes it. Persistence,
//! HTTP routing, and the external slide-analysis service are reached through
//! ports and supplied by the embedding application.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
