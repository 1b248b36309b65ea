//! Marionette Core - model descriptors, robot bodies, and the deferred GUI
//! command queue
//!
//! This crate provides the foundational types for the Marionette system:
//! - Robot and environment descriptors handed to the external model loader
//! - Robot body triples associating visual bodies with their owning robot
//! - Deferred GUI commands and the queue replayed against a viewer client
//! - Seam traits for the external robot model and viewer client

pub mod body;
pub mod client;
pub mod command;
pub mod descriptor;
pub mod model;

pub use body::{robot_name_prefix, RobotBody};
pub use client::ViewerClient;
pub use command::{CommandQueue, GuiCommand};
pub use descriptor::{EnvironmentDescriptor, RobotDescriptor, RootJointType};
pub use model::RobotModel;
