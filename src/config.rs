use crate::domain::Severity;
use serde::{Deserialize, Serialize};

/// Logger settings a host application can embed in its own configuration.
///
/// Severity tokens are matched exactly (`"WARNING"`, not `"warning"` or `"WARN"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub severity: Severity,
}
