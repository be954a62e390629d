use super::Config;
use crate::error::{ConfigError, Result};
use directories::UserDirs;
use std::fs;
use url::Url;

impl Config {
    /// Loads `~/.boceto/config.toml`, writing a default file on first run.
    /// Environment overrides are applied after the file is read.
    pub fn load_or_init() -> Result<Self> {
        let home = UserDirs::new()
            .map(|u| u.home_dir().to_path_buf())
            .ok_or_else(|| ConfigError::Load("could not find home directory".into()))?;
        let boceto_dir = home.join(".boceto");
        let config_path = boceto_dir.join("config.toml");

        if !boceto_dir.exists() {
            fs::create_dir_all(&boceto_dir).map_err(ConfigError::Io)?;
        }

        let mut config = if config_path.exists() {
            let contents = fs::read_to_string(&config_path).map_err(ConfigError::Io)?;
            let mut config: Config = toml::from_str(&contents).map_err(|e| {
                ConfigError::Load(format!("{}: {e}", config_path.display()))
            })?;
            config.config_path.clone_from(&config_path);
            config
        } else {
            let config = Self { config_path: config_path.clone(), ..Self::default() };
            config.save()?;
            config
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let toml_str = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Load(format!("serialize config: {e}")))?;
        fs::write(&self.config_path, toml_str).map_err(ConfigError::Io)?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(endpoint) = std::env::var("MCP_ENDPOINT")
            && !endpoint.is_empty()
        {
            self.vision.endpoint = endpoint;
        }
        if let Ok(model) = std::env::var("MCP_MODEL")
            && !model.is_empty()
        {
            self.vision.model = model;
        }
        if let Ok(port) = std::env::var("PORT")
            && let Ok(port) = port.parse()
        {
            self.output.port = port;
        }
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if Url::parse(&self.vision.endpoint).is_err() {
            return Err(ConfigError::Validation(format!(
                "vision.endpoint is not a valid URL: {}",
                self.vision.endpoint
            )));
        }
        if self.output.port == 0 {
            return Err(ConfigError::Validation("output.port must be nonzero".into()));
        }
        Ok(())
    }
}
