//! framebridge-core - Status translation, frame conversion, and configuration
//!
//! This crate provides the JVM-free half of framebridge:
//! - [`EngineError`] and the [`status`] module for translating native engine
//!   status codes into typed failures
//! - [`pack_grayscale`]/[`render_grayscale`] for converting float sample
//!   frames into packed grayscale pixels
//! - [`BridgeConfig`] for the JSON configuration passed at initialization
//!
//! Everything here is testable without a JVM; the JNI glue lives in
//! `framebridge-jni`.

mod config;
mod error;
mod frame;
pub mod status;

pub use config::BridgeConfig;
pub use error::{EngineError, EngineResult};
pub use frame::{pack_grayscale, render_grayscale};
