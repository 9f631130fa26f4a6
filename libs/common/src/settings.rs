//! HTTP listener settings shared by the services
//!
//! Each service loads its bind address through the `config` crate with an
//! environment prefix of its own (`AUTH_PORT`, `API_HOST`, ...).

use anyhow::Result;
use serde::Deserialize;

/// Bind address for a service's HTTP listener
#[derive(Debug, Clone, Deserialize)]
pub struct HttpSettings {
    /// Interface to bind (default: all interfaces)
    pub host: String,
    /// TCP port to listen on
    pub port: u16,
}

impl HttpSettings {
    /// Load settings from the environment under the given prefix
    pub fn load(env_prefix: &str, default_port: u16) -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", i64::from(default_port))?
            .add_source(config::Environment::with_prefix(env_prefix))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// The address string to hand to the TCP listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_defaults_apply_without_env() {
        let settings = HttpSettings::load("PHOTOSHARE_TEST_NOPREFIX", 3210)
            .expect("Failed to load settings");
        assert_eq!(settings.host, "0.0.0.0");
        assert_eq!(settings.port, 3210);
        assert_eq!(settings.bind_addr(), "0.0.0.0:3210");
    }

    #[test]
    #[serial]
    fn test_environment_overrides_defaults() {
        unsafe {
            std::env::set_var("PHOTOSHARE_TEST_PORT", "4321");
        }

        let settings =
            HttpSettings::load("PHOTOSHARE_TEST", 3210).expect("Failed to load settings");
        assert_eq!(settings.port, 4321);

        unsafe {
            std::env::remove_var("PHOTOSHARE_TEST_PORT");
        }
    }
}
