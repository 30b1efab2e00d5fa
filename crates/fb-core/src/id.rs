use lasso::{Spur, ThreadedRodeo};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;
use std::sync::atomic::{AtomicU64, Ordering};

/// Global string interner for field IDs — fast comparisons, low memory.
static INTERNER: LazyLock<ThreadedRodeo> = LazyLock::new(ThreadedRodeo::default);

/// Prefix of every id issued by the builder (`field_<millis>`).
pub const FIELD_ID_PREFIX: &str = "field";

/// A lightweight, interned identifier for placed form fields.
/// Internally a `Spur` index — 4 bytes, Copy, Eq, Hash in O(1).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldId(Spur);

impl FieldId {
    /// Intern a string as a FieldId, or return existing if already interned.
    pub fn intern(s: &str) -> Self {
        FieldId(INTERNER.get_or_intern(s))
    }

    /// The id for `s` if it was ever interned. Never grows the interner, so
    /// it is the way to resolve ids coming from outside the process.
    pub fn lookup(s: &str) -> Option<Self> {
        INTERNER.get(s).map(FieldId)
    }

    /// Resolve back to a string slice.
    pub fn as_str(&self) -> &str {
        INTERNER.resolve(&self.0)
    }

    /// Issue a fresh id from a wall-clock reading in milliseconds.
    ///
    /// Tokens are strictly increasing for the lifetime of the process: a
    /// second call within the same millisecond (or with a clock that went
    /// backwards) takes `last + 1`, so an issued id is never handed out twice.
    pub fn issue(now_millis: u64) -> Self {
        static LAST: AtomicU64 = AtomicU64::new(0);
        let token = match LAST.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |last| {
            Some(now_millis.max(last + 1))
        }) {
            Ok(prev) | Err(prev) => now_millis.max(prev + 1),
        };
        Self::intern(&format!("{FIELD_ID_PREFIX}_{token}"))
    }
}

impl fmt::Debug for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.as_str())
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FieldId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FieldId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(FieldId::intern(&s))
    }
}
