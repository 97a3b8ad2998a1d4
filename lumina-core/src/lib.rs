//! Lumina Core
//!
//! Shared types for the Lumina video-generation client.
//!
//! This crate contains:
//! - Domain types: Generation requests, job handles, statuses, and results
//! - DTOs: Wire-level payloads exchanged with the generation service

pub mod domain;
pub mod dto;
