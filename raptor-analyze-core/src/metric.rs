use std::fmt;

/// A website whose page-load times are tracked by raptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MetricName {
    Amazon,
    Facebook,
    Google,
    Youtube,
}

impl MetricName {
    /// Every tracked metric, in report order.
    pub const ALL: [MetricName; 4] = [
        MetricName::Amazon,
        MetricName::Facebook,
        MetricName::Google,
        MetricName::Youtube,
    ];

    /// The identifier searched for inside suite names.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricName::Amazon => "amazon",
            MetricName::Facebook => "facebook",
            MetricName::Google => "google",
            MetricName::Youtube => "youtube",
        }
    }

    /// Whether a suite with this name contributes samples to the metric.
    ///
    /// Matching is by substring, so one suite name can match several metrics.
    pub fn matches(&self, suite_name: &str) -> bool {
        suite_name.contains(self.as_str())
    }

    /// All metrics a suite name contributes to.
    pub fn matching(suite_name: &str) -> impl Iterator<Item = MetricName> + '_ {
        Self::ALL.into_iter().filter(move |m| m.matches(suite_name))
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
