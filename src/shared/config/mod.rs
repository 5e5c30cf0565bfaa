pub mod model;

pub use model::{LoggingConfig, MigrationConfig, Settings, load_settings, load_settings_from};
