mod init;

pub use init::{init, LOG_ENV};
pub use tracing::{debug, error, info, trace, warn};
