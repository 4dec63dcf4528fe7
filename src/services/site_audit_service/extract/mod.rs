pub mod fetch;
pub mod signals;

pub use fetch::{FetchError, FetchedPage, HttpPageFetcher, PageFetcher};
pub use signals::{RegexSignalExtractor, SignalExtractor};
