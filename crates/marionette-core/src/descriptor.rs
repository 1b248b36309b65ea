//! Descriptors for robot and environment models
//!
//! Opaque value records supplied by the caller: they name a model inside a
//! ROS-style package and are handed unchanged to the external model loader
//! and to the viewer client.

use serde::{Deserialize, Serialize};

/// Kind of root joint anchoring a model in the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RootJointType {
    /// Six degrees of freedom
    Freeflyer,
    /// Translation in the plane plus rotation about the vertical axis
    Planar,
    /// Fixed to the world frame
    Anchor,
}

impl RootJointType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RootJointType::Freeflyer => "freeflyer",
            RootJointType::Planar => "planar",
            RootJointType::Anchor => "anchor",
        }
    }
}

impl std::fmt::Display for RootJointType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Descriptor of a robot or movable-object model
///
/// Carries everything the external loader needs to locate the model: the
/// package containing the description files, the URDF file stem, and the
/// suffixes selecting a model variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotDescriptor {
    /// Package containing the description files
    pub package_name: String,
    /// URDF file stem inside the package
    pub model_name: String,
    /// Suffix appended to the URDF file name
    #[serde(default)]
    pub urdf_suffix: String,
    /// Suffix appended to the SRDF file name
    #[serde(default)]
    pub srdf_suffix: String,
    /// Root joint anchoring the model in the world
    pub root_joint: RootJointType,
}

impl RobotDescriptor {
    /// Create a descriptor with empty variant suffixes
    pub fn new(package_name: &str, model_name: &str, root_joint: RootJointType) -> Self {
        Self {
            package_name: package_name.to_string(),
            model_name: model_name.to_string(),
            urdf_suffix: String::new(),
            srdf_suffix: String::new(),
            root_joint,
        }
    }
}

/// Descriptor of a static environment model
///
/// Environments are anchored to the world frame, so no root joint is
/// carried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentDescriptor {
    /// Package containing the description files
    pub package_name: String,
    /// URDF file stem inside the package
    pub model_name: String,
    /// Suffix appended to the URDF file name
    #[serde(default)]
    pub urdf_suffix: String,
    /// Suffix appended to the SRDF file name
    #[serde(default)]
    pub srdf_suffix: String,
}

impl EnvironmentDescriptor {
    /// Create a descriptor with empty variant suffixes
    pub fn new(package_name: &str, model_name: &str) -> Self {
        Self {
            package_name: package_name.to_string(),
            model_name: model_name.to_string(),
            urdf_suffix: String::new(),
            srdf_suffix: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_joint_as_str() {
        assert_eq!(RootJointType::Freeflyer.as_str(), "freeflyer");
        assert_eq!(RootJointType::Planar.as_str(), "planar");
        assert_eq!(RootJointType::Anchor.as_str(), "anchor");
    }

    #[test]
    fn test_new_descriptor_has_empty_suffixes() {
        let descriptor = RobotDescriptor::new("ur_description", "ur5", RootJointType::Anchor);
        assert_eq!(descriptor.package_name, "ur_description");
        assert_eq!(descriptor.model_name, "ur5");
        assert!(descriptor.urdf_suffix.is_empty());
        assert!(descriptor.srdf_suffix.is_empty());
    }
}
