use serde::{Deserialize, Serialize};
use std::fmt;

/// The logical identity of an item
///
/// Two item instances are "the same item" (they group into one aggregate
/// entry and may merge into one stack) only when every field matches.
/// This is stricter than name equality: a gold-quality parsnip and a
/// normal parsnip are different items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemIdentity {
    /// Display name shown in the terminal
    pub name: String,

    /// Host category code (e.g. -16 for building resources)
    pub category: i32,

    /// Quality tier (0 = normal)
    pub quality: u8,

    /// Type-specific discriminator (sprite index, qualified id, ...)
    pub discriminator: String,
}

impl ItemIdentity {
    pub fn new(
        name: impl Into<String>,
        category: i32,
        quality: u8,
        discriminator: impl Into<String>,
    ) -> Self {
        ItemIdentity {
            name: name.into(),
            category,
            quality,
            discriminator: discriminator.into(),
        }
    }

    /// Same identity with a different quality tier
    pub fn with_quality(&self, quality: u8) -> Self {
        ItemIdentity {
            quality,
            ..self.clone()
        }
    }
}

impl fmt::Display for ItemIdentity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.quality == 0 {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} (q{})", self.name, self.quality)
        }
    }
}
