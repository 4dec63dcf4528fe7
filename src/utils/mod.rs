pub mod log_utils;
pub mod url_utils;

pub use log_utils::init_logging;
pub use url_utils::{normalize_competitors, normalize_url, NormalizedUrl};
