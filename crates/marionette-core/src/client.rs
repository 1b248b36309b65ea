//! Seam to the external viewer client

use crate::body::RobotBody;
use crate::descriptor::{EnvironmentDescriptor, RobotDescriptor};

/// A client handle onto the external viewer server
///
/// Implementations own the transport to the viewer process; this crate only
/// dispatches recorded commands and attaches the robot body list. Transport
/// errors are the implementation's own and propagate unchanged.
pub trait ViewerClient {
    /// Error raised by the underlying viewer transport
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load a robot or movable-object model into the GUI
    fn load_urdf(&mut self, descriptor: &RobotDescriptor, name: &str) -> Result<(), Self::Error>;

    /// Load a set of environment object models into the GUI
    fn load_urdf_objects(
        &mut self,
        descriptor: &EnvironmentDescriptor,
        name: &str,
    ) -> Result<(), Self::Error>;

    /// Attach the robot body list this client should know about
    fn attach_bodies(&mut self, bodies: Vec<RobotBody>);
}
