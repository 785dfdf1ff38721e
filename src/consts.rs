/// Sentinel end period meaning "ongoing"
pub(crate) const PRESENT: &str = "present";

/// Application name, used for config paths
pub(crate) const APP_NAME: &str = "folio";
