//! Deferred GUI commands and the replay queue
//!
//! Scene construction usually happens before any viewer connection exists.
//! Each load operation records the GUI side of its work as a [`GuiCommand`];
//! the queue is replayed once against the real client when the connection is
//! established.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::client::ViewerClient;
use crate::descriptor::{EnvironmentDescriptor, RobotDescriptor};

/// A GUI operation recorded for later replay against a viewer client
///
/// Each variant carries exactly the arguments needed to repeat the visual
/// load once a client exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuiCommand {
    /// Load a robot or movable-object model into the GUI
    LoadUrdf {
        descriptor: RobotDescriptor,
        name: String,
    },
    /// Load a set of environment object models into the GUI
    LoadUrdfObjects {
        descriptor: EnvironmentDescriptor,
        name: String,
    },
}

impl GuiCommand {
    /// Dispatch this command to the matching client entry point
    pub fn apply<C: ViewerClient>(&self, client: &mut C) -> Result<(), C::Error> {
        match self {
            GuiCommand::LoadUrdf { descriptor, name } => client.load_urdf(descriptor, name),
            GuiCommand::LoadUrdfObjects { descriptor, name } => {
                client.load_urdf_objects(descriptor, name)
            }
        }
    }

    /// Instance name this command loads under
    pub fn name(&self) -> &str {
        match self {
            GuiCommand::LoadUrdf { name, .. } | GuiCommand::LoadUrdfObjects { name, .. } => name,
        }
    }
}

/// Ordered queue of GUI commands awaiting a real viewer client
///
/// Append-only until replay; replay consumes the queue in insertion order.
/// Later commands may reference objects created by earlier ones, so the
/// order is part of the contract.
#[derive(Debug, Clone, Default)]
pub struct CommandQueue {
    commands: Vec<GuiCommand>,
}

impl CommandQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command
    ///
    /// Arguments are not validated here; invalid arguments surface when the
    /// command is replayed.
    pub fn record(&mut self, command: GuiCommand) {
        trace!(name = %command.name(), "Recorded GUI command");
        self.commands.push(command);
    }

    /// Replay all recorded commands against `client` in insertion order
    ///
    /// The queue is consumed. The first failing command aborts the replay
    /// and its error propagates to the caller; nothing is retried.
    pub fn replay<C: ViewerClient>(&mut self, client: &mut C) -> Result<(), C::Error> {
        debug!(commands = self.commands.len(), "Replaying GUI command queue");
        for command in self.commands.drain(..) {
            command.apply(client)?;
        }
        Ok(())
    }

    /// Number of commands currently recorded
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Commands currently recorded, in insertion order
    pub fn commands(&self) -> &[GuiCommand] {
        &self.commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::RobotBody;
    use crate::descriptor::RootJointType;
    use thiserror::Error;

    #[derive(Debug, Error)]
    #[error("viewer refused {0}")]
    struct RefusedError(String);

    /// Records every call so tests can assert order and arguments
    #[derive(Default)]
    struct RecordingClient {
        calls: Vec<String>,
        bodies: Vec<RobotBody>,
        refuse: Option<String>,
    }

    impl ViewerClient for RecordingClient {
        type Error = RefusedError;

        fn load_urdf(
            &mut self,
            descriptor: &RobotDescriptor,
            name: &str,
        ) -> Result<(), RefusedError> {
            if self.refuse.as_deref() == Some(name) {
                return Err(RefusedError(name.to_string()));
            }
            self.calls
                .push(format!("urdf:{}:{}", descriptor.model_name, name));
            Ok(())
        }

        fn load_urdf_objects(
            &mut self,
            descriptor: &EnvironmentDescriptor,
            name: &str,
        ) -> Result<(), RefusedError> {
            if self.refuse.as_deref() == Some(name) {
                return Err(RefusedError(name.to_string()));
            }
            self.calls
                .push(format!("objects:{}:{}", descriptor.model_name, name));
            Ok(())
        }

        fn attach_bodies(&mut self, bodies: Vec<RobotBody>) {
            self.bodies = bodies;
        }
    }

    fn robot_command(model: &str, name: &str) -> GuiCommand {
        GuiCommand::LoadUrdf {
            descriptor: RobotDescriptor::new("pkg", model, RootJointType::Freeflyer),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_replay_preserves_insertion_order() {
        let mut queue = CommandQueue::new();
        queue.record(robot_command("ur5", "arm"));
        queue.record(GuiCommand::LoadUrdfObjects {
            descriptor: EnvironmentDescriptor::new("env_pkg", "kitchen"),
            name: "kitchen".to_string(),
        });
        queue.record(robot_command("box", "box1"));

        let mut client = RecordingClient::default();
        queue.replay(&mut client).unwrap();
        assert_eq!(
            client.calls,
            vec!["urdf:ur5:arm", "objects:kitchen:kitchen", "urdf:box:box1"]
        );
    }

    #[test]
    fn test_replay_consumes_the_queue() {
        let mut queue = CommandQueue::new();
        queue.record(robot_command("ur5", "arm"));

        let mut client = RecordingClient::default();
        queue.replay(&mut client).unwrap();
        assert!(queue.is_empty());

        // a second replay has nothing left to send
        queue.replay(&mut client).unwrap();
        assert_eq!(client.calls.len(), 1);
    }

    #[test]
    fn test_record_then_replay_matches_direct_call() {
        let command = robot_command("ur5", "arm");

        let mut direct = RecordingClient::default();
        command.apply(&mut direct).unwrap();

        let mut queued = RecordingClient::default();
        let mut queue = CommandQueue::new();
        queue.record(command);
        queue.replay(&mut queued).unwrap();

        assert_eq!(direct.calls, queued.calls);
    }

    #[test]
    fn test_replay_failure_propagates() {
        let mut queue = CommandQueue::new();
        queue.record(robot_command("ur5", "arm"));
        queue.record(robot_command("box", "box1"));
        queue.record(robot_command("ball", "ball1"));

        let mut client = RecordingClient {
            refuse: Some("box1".to_string()),
            ..Default::default()
        };
        let err = queue.replay(&mut client).unwrap_err();
        assert_eq!(err.to_string(), "viewer refused box1");
        // commands before the failure were already executed
        assert_eq!(client.calls, vec!["urdf:ur5:arm"]);
    }
}
