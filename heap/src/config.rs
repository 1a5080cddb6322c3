#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Construction parameters for [`crate::BoundedTopKHeap`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HeapConfig {
    /// Maximum number of retained items, 0 leaves the heap unbounded
    #[cfg_attr(feature = "serde", serde(default))]
    pub capacity: usize,
}

impl HeapConfig {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn is_bounded(&self) -> bool {
        self.capacity > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unbounded() {
        assert!(!HeapConfig::unbounded().is_bounded());
        assert!(HeapConfig::unbounded().capacity(3).is_bounded());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_missing_capacity_deserializes_as_unbounded() {
        let config: HeapConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, HeapConfig::unbounded());
        let config: HeapConfig = serde_json::from_str(r#"{"capacity": 10}"#).unwrap();
        assert_eq!(config.capacity, 10);
    }
}
