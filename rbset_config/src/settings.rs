use crate::error::{ConfigError, ConfigResult};
use std::fmt;

/// Largest number of nodes a tree arena can address.
///
/// Node ids are `u32` and `u32::MAX` is reserved for the absent-child marker.
pub const MAX_NODES: usize = u32::MAX as usize;

/// What `insert` does when an equal key is already stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Keep the stored key, drop the new one
    #[default]
    Reject,
    /// Overwrite the stored key with the new, equal one
    Replace,
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicatePolicy::Reject => write!(f, "reject"),
            DuplicatePolicy::Replace => write!(f, "replace"),
        }
    }
}

/// Tree behavior settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeSettings {
    /// Equal-key handling on insert
    pub duplicates: DuplicatePolicy,
    /// Nodes to reserve up front
    pub initial_capacity: usize,
    /// Re-check every invariant after each mutation
    pub check_invariants: bool,
}

impl Default for TreeSettings {
    fn default() -> Self {
        Self {
            duplicates: DuplicatePolicy::Reject,
            initial_capacity: 0,
            check_invariants: false,
        }
    }
}

impl TreeSettings {
    /// Check that the settings describe a tree that can actually be built
    pub fn validate(&self) -> ConfigResult<()> {
        if self.initial_capacity >= MAX_NODES {
            return Err(ConfigError::Validation(format!(
                "initial_capacity {} exceeds the node limit of {}",
                self.initial_capacity,
                MAX_NODES - 1
            )));
        }
        Ok(())
    }
}
