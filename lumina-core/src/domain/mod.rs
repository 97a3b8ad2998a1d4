//! Core domain types
//!
//! This module contains the domain structures shared between the client
//! (which drives jobs) and any front-end (which constructs requests and
//! consumes results).

pub mod job;
pub mod request;
pub mod video;

pub use job::{JobHandle, JobOutcome, JobStatus};
pub use request::{
    AspectRatio, GenerationRequest, InvalidRequest, ModelTier, ReferenceImage, Resolution,
    VideoFormat,
};
pub use video::{VideoArtifact, VideoResult};
