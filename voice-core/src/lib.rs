//! Voice Core
//!
//! Core types shared by the Voice Agent binaries.
//!
//! This crate contains:
//! - Configuration: explicit settings objects built from the environment
//! - DTOs: request and response bodies for the VAPI call API
//! - Assistant: inline assistant definitions for design-review calls

pub mod assistant;
pub mod config;
pub mod dto;
