// Settings persisted as RON

use std::fs;
use std::path::{Path, PathBuf};

use ron::ser::PrettyConfig;
use serde::{Deserialize, Serialize};

use crate::error::{LaunchpadError, LaunchpadResult};
use crate::launchpad::{Channel, Layout};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Exact endpoint name of the device, used for both directions
    pub device_name: String,
    /// Name of our MIDI client as other applications see it
    pub client_name: String,
    /// MIDI channel (0-15)
    pub channel: u8,
    pub layout: Layout,
    /// Fixed RNG seed for the random pattern, fresh entropy when absent
    pub seed: Option<u64>,
    /// Inbound events buffered between the MIDI thread and the main loop
    pub event_buffer_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            device_name: "Launchpad S".to_string(),
            client_name: "Launchpad Kit".to_string(),
            channel: 0,
            layout: Layout::XY,
            seed: None,
            event_buffer_capacity: 256,
        }
    }
}

impl Config {
    /// `<config dir>/launchpad_kit/config.ron`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("launchpad_kit").join("config.ron"))
    }

    pub fn from_ron(ron_data: &str) -> LaunchpadResult<Self> {
        let config: Config = ron::from_str(ron_data)
            .map_err(|e| LaunchpadError::Config(format!("Failed to parse RON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_ron(&self) -> LaunchpadResult<String> {
        ron::ser::to_string_pretty(self, PrettyConfig::default())
            .map_err(|e| LaunchpadError::Config(format!("Failed to serialize to RON: {}", e)))
    }

    pub fn load(path: &Path) -> LaunchpadResult<Self> {
        let ron_data = fs::read_to_string(path)?;
        Self::from_ron(&ron_data)
    }

    /// Defaults when the file does not exist yet
    pub fn load_or_default(path: &Path) -> LaunchpadResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> LaunchpadResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_ron()?)?;
        Ok(())
    }

    pub fn channel(&self) -> LaunchpadResult<Channel> {
        Channel::new(self.channel)
    }

    pub fn validate(&self) -> LaunchpadResult<()> {
        self.channel()?;
        if self.device_name.is_empty() {
            return Err(LaunchpadError::Config("device_name is empty".to_string()));
        }
        if self.event_buffer_capacity == 0 {
            return Err(LaunchpadError::Config(
                "event_buffer_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
