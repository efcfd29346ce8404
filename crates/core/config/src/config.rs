use clap::Parser;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

static CONFIG: OnceLock<Arc<Config>> = OnceLock::new();

#[derive(Parser, Debug, Clone)]
#[command(name = "macrod")]
#[command(about = "Runs commands when key or button patterns are typed on an input device", long_about = None)]
#[command(version)]
pub struct Config {
    #[arg(short = 'd', long, env = "MACROD_DEBUG", help = "Enable debug logging")]
    pub debug: bool,

    #[arg(
        short = 'c',
        long,
        env = "MACROD_CONFIG",
        help = "Path to the JSON config file with device and expressions"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        env = "MACROD_DEFAULTS",
        default_value = "/etc/macrod/defaults.conf",
        help = "Config file loaded before --config; skipped when missing"
    )]
    pub defaults: PathBuf,

    #[arg(
        long,
        env = "MACROD_SCHEME",
        default_value = "default",
        help = "Name of the expression scheme to load"
    )]
    pub scheme: String,

    #[arg(
        short = 'i',
        long,
        help = "Pick a device and print the events it produces"
    )]
    pub interactive: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        let _ = dotenv::dotenv();
        let _ = dotenv::from_filename(".env.local");

        Config::parse()
    }

    pub fn new_for_test(config: Option<PathBuf>) -> Self {
        Config {
            debug: false,
            config,
            defaults: PathBuf::from("/nonexistent/macrod/defaults.conf"),
            scheme: "default".to_string(),
            interactive: false,
        }
    }

    pub fn initialize() -> Arc<Config> {
        let config = Arc::new(Config::new());
        CONFIG.set(config.clone()).unwrap_or_else(|_| {
            log::error!("Config already initialized - this should not happen");
        });
        CONFIG.get().cloned().unwrap_or(config)
    }

    pub fn global() -> Arc<Config> {
        CONFIG.get().cloned().unwrap_or_else(|| {
            log::error!("Config not initialized, using default");
            Arc::new(Config::new())
        })
    }

    pub fn set_global_for_test(config: Arc<Config>) -> Result<(), Arc<Config>> {
        CONFIG.set(config)
    }

    /// Files to read, in merge order.
    pub fn config_files(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();

        if self.defaults.exists() {
            files.push(self.defaults.clone());
        } else {
            log::debug!("Defaults file {} not found, skipping", self.defaults.display());
        }

        if let Some(ref path) = self.config {
            files.push(path.clone());
        }

        files
    }
}
