//! Marionette Viewer - viewer-server connection management and the
//! manipulation scene factory
//!
//! This crate orchestrates scene construction against an external viewer
//! server:
//! - [`ViewerManager`] owns the robot handle and the deferred command queue,
//!   and turns a connection into a live client by replaying the queue
//! - [`ManipulationFactory`] specializes the manager for manipulation
//!   scenes mixing several robots and movable objects
//! - [`ViewerConfig`] carries the viewer-server connection parameters

pub mod config;
pub mod factory;
pub mod manager;

pub use config::{load_config, save_config, ConfigError, ViewerConfig};
pub use factory::ManipulationFactory;
pub use manager::ViewerManager;
