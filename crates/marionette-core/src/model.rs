//! Seam to the external robot/model loader

use crate::descriptor::{EnvironmentDescriptor, RobotDescriptor};

/// The external robot object holding the physical and kinematic models
///
/// Implementations wrap the motion-planning backend; parsing of the
/// description files and all kinematics live there. Domain errors such as a
/// malformed description or a missing package are the implementation's own
/// and propagate unchanged.
pub trait RobotModel {
    /// Domain error raised by the model backend
    type Error: std::error::Error + Send + Sync + 'static;

    /// Parse and register a robot model under `name`
    fn load_robot_model(
        &mut self,
        name: &str,
        descriptor: &RobotDescriptor,
    ) -> Result<(), Self::Error>;

    /// Parse and register a humanoid robot model under `name`
    fn load_humanoid_model(
        &mut self,
        name: &str,
        descriptor: &RobotDescriptor,
    ) -> Result<(), Self::Error>;

    /// Parse and register a static environment model
    ///
    /// `prefix` ends with `/` and qualifies the names of the contained
    /// objects.
    fn load_environment_model(
        &mut self,
        prefix: &str,
        descriptor: &EnvironmentDescriptor,
    ) -> Result<(), Self::Error>;

    /// Parse and register a movable object model under `name`
    fn load_object_model(
        &mut self,
        name: &str,
        descriptor: &RobotDescriptor,
    ) -> Result<(), Self::Error>;

    /// Merge previously loaded robots into one kinematic structure
    fn build_composite_robot(&mut self, names: &[String]) -> Result<(), Self::Error>;

    /// Names of all joints currently in the model
    fn joint_names(&self) -> Vec<String>;

    /// Name of the link carried by `joint`
    fn link_name(&self, joint: &str) -> Result<String, Self::Error>;

    /// Recompute placements of loaded objects in viewer coordinates
    fn compute_object_positions(&mut self) -> Result<(), Self::Error>;
}
