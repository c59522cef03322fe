// Scenario suites for the registry. Shared fixtures live in utils.
pub mod utils;
