//! Resource fields that can be updated in place

use serde::Serialize;

/// Numeric attribute targeted by `update_resource`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceField {
    /// CPU shares (float)
    Cpu,
    /// Memory in MB (float)
    Memory,
    /// Instance count (non-negative integer)
    Instances,
}

impl ResourceField {
    /// Whether values for this field are integral
    pub fn is_count(&self) -> bool {
        matches!(self, ResourceField::Instances)
    }
}

impl std::fmt::Display for ResourceField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceField::Cpu => write!(f, "cpu"),
            ResourceField::Memory => write!(f, "memory"),
            ResourceField::Instances => write!(f, "instances"),
        }
    }
}
