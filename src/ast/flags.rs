//! Module defining declaration options.

use bitflags::bitflags;

bitflags! {
    /// Bit-flags containing modifier keywords attached to a variable
    /// declaration.
    #[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
    pub struct DeclFlags: u8 {
        /// The declared variable may be sampled by the simulation recorder.
        const RECORDABLE = 0b_0000_0001;
        /// The declaration is an alias, recomputed from its defining
        /// expression instead of holding state.
        const ALIAS = 0b_0000_0010;
    }
}

impl DeclFlags {
    /// No flags.
    pub const NONE: Self = Self::empty();

    /// The keyword prefix these flags render to, in canonical order.
    ///
    /// Returns an empty string when no flag is set.
    #[must_use]
    pub fn keywords(self) -> &'static str {
        match (self.contains(Self::RECORDABLE), self.contains(Self::ALIAS)) {
            (true, true) => "recordable alias ",
            (true, false) => "recordable ",
            (false, true) => "alias ",
            (false, false) => "",
        }
    }
}

impl std::fmt::Debug for DeclFlags {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", &self.0)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DeclFlags {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.bits())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DeclFlags {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bits = u8::deserialize(deserializer)?;
        Self::from_bits(bits).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid declaration flag bits: {bits:#04b}"))
        })
    }
}
