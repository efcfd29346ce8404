use config::Config;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tempfile::NamedTempFile;

/// A config file that lives until the value is dropped.
pub struct ConfigFile {
    file: NamedTempFile,
}

impl ConfigFile {
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

pub fn write_config(content: &str) -> ConfigFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp config file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp config file");

    ConfigFile { file }
}

pub fn initialize_for_test(config_file: &ConfigFile) -> Arc<Config> {
    let config = Arc::new(Config::new_for_test(Some(
        config_file.path().to_path_buf(),
    )));

    let _ = Config::set_global_for_test(config.clone());

    config
}
