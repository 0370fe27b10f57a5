//! Construction-time options for [`UserManager`](crate::UserManager).
//!
//! The registry reads no environment variables. Embedders that keep their
//! settings in a file can deserialize a `ManagerConfig` from it; every field
//! is optional and falls back to its default.

use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ManagerConfig {
    /// Number of users to pre-allocate room for (default: 0)
    pub initial_capacity: usize,
}

impl ManagerConfig {
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_no_preallocation() {
        assert_eq!(ManagerConfig::default().initial_capacity, 0);
    }

    #[test]
    fn builder_sets_capacity() {
        let cfg = ManagerConfig::default().with_initial_capacity(16);
        assert_eq!(cfg.initial_capacity, 16);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: ManagerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, ManagerConfig::default());

        let cfg: ManagerConfig = serde_json::from_str(r#"{"initial_capacity": 8}"#).unwrap();
        assert_eq!(cfg.initial_capacity, 8);
    }
}
