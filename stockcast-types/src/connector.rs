//! Connector identity.

use core::fmt;

/// Identity of a registered connector.
///
/// The orchestrator refuses to register two connectors with the same key and
/// uses it to attribute provider failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectorKey(&'static str);

impl ConnectorKey {
    /// Key for a connector named `name`.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// The connector name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ConnectorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
