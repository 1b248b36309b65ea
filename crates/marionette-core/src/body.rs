//! Robot bodies and the joint-name convention linking them to robots

use serde::{Deserialize, Serialize};

/// A visual body belonging to a loaded robot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotBody {
    /// Joint carrying this body
    pub joint: String,
    /// Owning robot's name prefix, including the trailing separator
    pub prefix: String,
    /// Link holding the visual geometry
    pub link: String,
}

/// Derive the owning robot's name prefix from a joint name.
///
/// Joint names are assumed to follow the `robotName/jointName` convention;
/// the prefix is the substring before the first `/`, with the separator
/// re-appended. A name without a separator yields the whole name as prefix.
pub fn robot_name_prefix(joint_name: &str) -> String {
    let stem = match joint_name.find('/') {
        Some(idx) => &joint_name[..idx],
        None => joint_name,
    };
    format!("{}/", stem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_from_qualified_joints() {
        assert_eq!(robot_name_prefix("r1/base"), "r1/");
        assert_eq!(robot_name_prefix("r1/arm"), "r1/");
        assert_eq!(robot_name_prefix("r2/base"), "r2/");
    }

    #[test]
    fn test_prefix_stops_at_first_separator() {
        assert_eq!(robot_name_prefix("arm/left/wrist"), "arm/");
    }

    #[test]
    fn test_prefix_without_separator() {
        assert_eq!(robot_name_prefix("base_joint"), "base_joint/");
    }
}
