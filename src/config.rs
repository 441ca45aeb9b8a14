//! Configuration for the scheduling driver.

/// Driver configuration.
#[derive(Clone, Debug)]
pub struct SchedulerConfig {
    /// Priority assigned to task specs that omit one (0-100 scale).
    pub default_priority: i32,
    /// Logging verbosity (see [`crate::logging`]).
    pub verbosity: u8,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            default_priority: 50,
            verbosity: 0,
        }
    }
}
