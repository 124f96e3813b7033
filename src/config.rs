//! Application configuration

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, DataConfig, ServerConfig};

impl AppConfig {
    /// Load from the default file locations and the environment
    pub fn load(path: Option<&str>) -> anyhow::Result<Self> {
        ConfigLoader::new().load_from_file(path).load_from_env().build()
    }

    /// Renders a commented sample configuration file
    pub fn sample_toml() -> anyhow::Result<String> {
        let toml_content = toml::to_string_pretty(&AppConfig::default())?;

        Ok(format!(
            r#"# agri-qa configuration
#
# Save as agri-qa.toml (or config/agri-qa.toml), or pass --config <path>.
# Every key can be overridden from the environment, e.g.
#   AGRI_QA__SERVER__BIND_ADDR=0.0.0.0:8080
#   AGRI_QA__LOGGING__LEVEL=debug
#
# [data] seed_file = "dataset.json" loads records from a JSON file of the form
#   {{ "agriculture": {{ "<State>": {{ "crops": {{...}}, "districts": {{...}} }} }},
#     "climate": {{ "<State>": {{ "rainfall": {{...}}, "temperature": {{...}} }} }} }}
# When unset, the built-in dataset is used.

{}"#,
            toml_content
        ))
    }
}
