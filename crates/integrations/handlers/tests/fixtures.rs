#![allow(dead_code)]

use handlers::HandlerFactory;
use macro_engine::MacroHandler;
use std::collections::HashMap;
use std::path::Path;

pub fn captures(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn pipe_handler(path: &Path, mode: &str, command: &str) -> Box<dyn MacroHandler> {
    let params = HashMap::from([
        ("path".to_string(), path.display().to_string()),
        ("mode".to_string(), mode.to_string()),
    ]);

    HandlerFactory::new("pipe", params)
        .expect("Failed to create pipe factory")
        .build(command)
        .expect("Failed to build pipe handler")
}
