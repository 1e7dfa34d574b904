use std::fmt;
use std::sync::Arc;

/// Stable key for a farm record across the subsystem.
/// Keeps the store's identifier text verbatim but avoids repeated owned Strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FarmId(Arc<str>);

impl FarmId {
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(Arc::from(id.as_ref()))
    }

    #[inline] pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for FarmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FarmId {
    fn from(id: &str) -> Self { Self::new(id) }
}

impl From<String> for FarmId {
    fn from(id: String) -> Self { Self::new(id) }
}
