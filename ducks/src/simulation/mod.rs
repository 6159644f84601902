mod duck_simulator;

pub use duck_simulator::DuckSimulator;

const DEFAULT_MALLARD_COUNT: usize = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct SimulationSettings {
    /// Number of mallards in the second flock.
    pub mallard_count: usize,
    /// Appends an uncounted goose to the first flock.
    pub include_goose: bool,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            mallard_count: DEFAULT_MALLARD_COUNT,
            include_goose: false,
        }
    }
}
