//! Configuration types.
//!
//! This module provides:
//! - `AppConfig`: Message, target, logging and sink configuration
//! - `SinkConfig`: Configuration for a single sink
//! - `ConfigFormat`: File formats an `AppConfig` can be loaded from

mod app_config;

pub use app_config::{AppConfig, ConfigFormat, SinkConfig};
