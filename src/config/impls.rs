pub mod configuration;
pub mod configuration_error;
pub mod tracker_config;
