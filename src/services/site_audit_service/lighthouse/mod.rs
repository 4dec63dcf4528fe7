pub mod pagespeed;

pub use pagespeed::{metrics_from_response, MetricsError, MetricsProvider, NoMetrics, PageSpeedProvider};
