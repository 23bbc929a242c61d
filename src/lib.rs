//! Event Planner - Three-stage event planning wizard
//!
//! The wizard collects an event profile, asks an external generation service
//! for event concepts and vendor suggestions, and lets the user select and
//! refine them with feedback. The crate also ships the forwarding endpoint
//! that sits between the wizard and the generation service.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
