//! File persistence configuration

pub struct PersistenceConfig {
    /// Path for saving/loading the dashboard's UI inputs
    pub app_state_path: &'static str,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    app_state_path: ".states.json",
};
