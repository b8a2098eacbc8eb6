use crate::queue::DEFAULT_CAPACITY;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct QueueConfig {
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_queue_config() {
        assert_eq!(QueueConfig::default().capacity, 128);
    }

    #[test]
    fn test_queue_config_deserialization() {
        let config: QueueConfig = serde_yaml::from_str("capacity: 5").unwrap();
        assert_eq!(config.capacity, 5);

        let config: QueueConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.capacity, 128);
    }
}
