//! Base viewer connection and command-queue manager

use marionette_core::{CommandQueue, GuiCommand, RobotModel, ViewerClient};
use tracing::{debug, info};

/// Owns the external robot handle and the deferred GUI command queue
///
/// Scene construction happens against this manager before any viewer
/// connection exists; [`ViewerManager::create_client`] turns a connection
/// into a live client by replaying everything recorded so far. Specialized
/// factories wrap this type rather than extending it.
#[derive(Debug)]
pub struct ViewerManager<R: RobotModel> {
    robot: R,
    queue: CommandQueue,
}

impl<R: RobotModel> ViewerManager<R> {
    /// Create a manager around an external robot model, with an empty queue
    pub fn new(robot: R) -> Self {
        Self {
            robot,
            queue: CommandQueue::new(),
        }
    }

    /// The external robot model
    pub fn robot(&self) -> &R {
        &self.robot
    }

    /// Mutable access to the external robot model
    pub fn robot_mut(&mut self) -> &mut R {
        &mut self.robot
    }

    /// Record a GUI command for later replay
    pub fn record(&mut self, command: GuiCommand) {
        self.queue.record(command);
    }

    /// Commands recorded so far, in insertion order
    pub fn queue(&self) -> &CommandQueue {
        &self.queue
    }

    /// Construct or reuse a viewer client and replay the queue into it
    ///
    /// `existing` short-circuits the connection step; otherwise `connect` is
    /// invoked to establish one. Connection and replay failures propagate
    /// unchanged and nothing is retried.
    pub fn create_client<C, F>(&mut self, existing: Option<C>, connect: F) -> Result<C, C::Error>
    where
        C: ViewerClient,
        F: FnOnce() -> Result<C, C::Error>,
    {
        let mut client = match existing {
            Some(client) => {
                debug!("Reusing existing viewer client");
                client
            }
            None => connect()?,
        };
        info!(
            commands = self.queue.len(),
            "Created viewer client, replaying queued commands"
        );
        self.queue.replay(&mut client)?;
        Ok(client)
    }
}
