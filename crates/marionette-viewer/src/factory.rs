//! Viewer factory for manipulation scenes

use marionette_core::{
    robot_name_prefix, EnvironmentDescriptor, GuiCommand, RobotBody, RobotDescriptor, RobotModel,
    ViewerClient,
};
use tracing::debug;

use crate::manager::ViewerManager;

/// Viewer factory specialized for manipulation scenes
///
/// Wraps a [`ViewerManager`] and layers on the model-loading operations for
/// scenes mixing several robots and movable objects. The GUI side of every
/// load is queued until a real client is created.
#[derive(Debug)]
pub struct ManipulationFactory<R: RobotModel> {
    manager: ViewerManager<R>,
    robot_bodies: Vec<RobotBody>,
}

impl<R: RobotModel> ManipulationFactory<R> {
    /// Create a factory around an external robot model
    pub fn new(robot: R) -> Self {
        Self {
            manager: ViewerManager::new(robot),
            robot_bodies: Vec::new(),
        }
    }

    /// Parse and register a robot model, then queue its visual load
    ///
    /// With `gui_only` set, the physical model is assumed registered by a
    /// previous call and only the visual load is queued.
    pub fn load_robot_model(
        &mut self,
        descriptor: &RobotDescriptor,
        name: &str,
        gui_only: bool,
    ) -> Result<(), R::Error> {
        if !gui_only {
            self.manager.robot_mut().load_robot_model(name, descriptor)?;
        }
        self.rebuild_robot_bodies();
        self.record_urdf_load(descriptor, name);
        debug!(robot = %name, package = %descriptor.package_name, "Loaded robot model");
        Ok(())
    }

    /// Parse and register a humanoid robot model, then queue its visual load
    pub fn load_humanoid_model(
        &mut self,
        descriptor: &RobotDescriptor,
        name: &str,
        gui_only: bool,
    ) -> Result<(), R::Error> {
        if !gui_only {
            self.manager
                .robot_mut()
                .load_humanoid_model(name, descriptor)?;
        }
        self.rebuild_robot_bodies();
        self.record_urdf_load(descriptor, name);
        debug!(robot = %name, package = %descriptor.package_name, "Loaded humanoid model");
        Ok(())
    }

    /// Parse and register a static environment model, queue its object
    /// visuals, and compute their initial placements
    ///
    /// The contained objects are registered under the `name/` prefix.
    pub fn load_environment_model(
        &mut self,
        descriptor: &EnvironmentDescriptor,
        name: &str,
        gui_only: bool,
    ) -> Result<(), R::Error> {
        if !gui_only {
            let prefix = format!("{}/", name);
            self.manager
                .robot_mut()
                .load_environment_model(&prefix, descriptor)?;
        }
        self.rebuild_robot_bodies();
        self.manager.record(GuiCommand::LoadUrdfObjects {
            descriptor: descriptor.clone(),
            name: name.to_string(),
        });
        self.manager.robot_mut().compute_object_positions()?;
        debug!(environment = %name, package = %descriptor.package_name, "Loaded environment model");
        Ok(())
    }

    /// Parse and register a movable object model, queue its visual load,
    /// and compute its initial placement
    pub fn load_object_model(
        &mut self,
        descriptor: &RobotDescriptor,
        name: &str,
        gui_only: bool,
    ) -> Result<(), R::Error> {
        if !gui_only {
            self.manager
                .robot_mut()
                .load_object_model(name, descriptor)?;
        }
        self.rebuild_robot_bodies();
        self.record_urdf_load(descriptor, name);
        self.manager.robot_mut().compute_object_positions()?;
        debug!(object = %name, package = %descriptor.package_name, "Loaded object model");
        Ok(())
    }

    /// Merge previously loaded robots into one kinematic structure and
    /// extend the body list with the merged structure's bodies
    ///
    /// The owning robot of each joint is inferred from the joint name via
    /// [`robot_name_prefix`]. No GUI command is recorded; the individual
    /// loads already queued the visuals.
    pub fn build_composite_robot(&mut self, names: &[String]) -> Result<(), R::Error> {
        self.manager.robot_mut().build_composite_robot(names)?;
        for joint in self.manager.robot().joint_names() {
            let prefix = robot_name_prefix(&joint);
            let link = self.manager.robot().link_name(&joint)?;
            self.robot_bodies.push(RobotBody {
                joint,
                prefix,
                link,
            });
        }
        debug!(
            robots = names.len(),
            bodies = self.robot_bodies.len(),
            "Built composite robot"
        );
        Ok(())
    }

    /// Construct or reuse a viewer client, replay queued commands into it,
    /// and attach the current robot body list
    ///
    /// The attached list is a snapshot: mutating the factory afterwards does
    /// not affect a client created earlier.
    pub fn create_real_client<C, F>(
        &mut self,
        existing: Option<C>,
        connect: F,
    ) -> Result<C, C::Error>
    where
        C: ViewerClient,
        F: FnOnce() -> Result<C, C::Error>,
    {
        let mut client = self.manager.create_client(existing, connect)?;
        client.attach_bodies(self.robot_bodies.clone());
        Ok(client)
    }

    /// The external robot model
    pub fn robot(&self) -> &R {
        self.manager.robot()
    }

    /// Mutable access to the external robot model
    pub fn robot_mut(&mut self) -> &mut R {
        self.manager.robot_mut()
    }

    /// Bodies currently associated with loaded robots
    pub fn robot_bodies(&self) -> &[RobotBody] {
        &self.robot_bodies
    }

    /// The underlying connection/queue manager
    pub fn manager(&self) -> &ViewerManager<R> {
        &self.manager
    }

    /// Reset the per-load body snapshot
    ///
    /// Individual loads contribute no bodies in manipulation scenes; the
    /// list is populated by composite assembly.
    fn rebuild_robot_bodies(&mut self) {
        self.robot_bodies.clear();
    }

    fn record_urdf_load(&mut self, descriptor: &RobotDescriptor, name: &str) {
        self.manager.record(GuiCommand::LoadUrdf {
            descriptor: descriptor.clone(),
            name: name.to_string(),
        });
    }
}
