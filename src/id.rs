//! Identifier values and the generators that produce them.
//!
//! An identifier is an opaque 128-bit value. The only generator in this crate
//! is [`nameid()`], which derives identifiers deterministically from a
//! `(namespace, name)` pair; fresh random identifiers are out of scope here
//! and should come from whatever entity store assigns them.

pub mod nameid;

use std::borrow::Borrow;
use std::fmt::Display;
use std::fmt::LowerHex;
use std::fmt::UpperHex;
use std::hash::Hash;
use std::num::NonZero;
use std::ops::Deref;

use hex::FromHex;

pub use nameid::dcc_namespace;
pub use nameid::nameid;

/// The length of a 128bit identifier in bytes.
pub const ID_LEN: usize = 16;

/// A 16 byte identifier in its canonical byte order, i.e. the order in which
/// the bytes appear in the hexadecimal rendering, most significant first.
pub type RawId = [u8; ID_LEN];

/// A unique 128 bit identifier.
/// As we do not allow for all zero `nil` IDs,
/// `Option<Id>` benefits from Option niche optimizations.
/// The nil identifier doubles as the absent namespace in [`nameid()`],
/// which is why it is unrepresentable here.
///
/// Note that it has an alignment of 1, and can be referenced as a `[u8; 16]` [RawId].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(C, packed(1))]
pub struct Id {
    inner: NonZero<u128>,
}

impl Id {
    /// Creates a new `Id` from a [RawId] 16 byte array.
    /// Returns `None` if the array is nil (all zero bytes).
    pub const fn new(id: RawId) -> Option<Self> {
        unsafe { std::mem::transmute::<RawId, Option<Id>>(id) }
    }

    /// Parses a hexadecimal identifier string into an `Id`.
    ///
    /// Returns `None` if the input is not valid hexadecimal or represents the
    /// nil identifier (all zero bytes).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let raw = <RawId as FromHex>::from_hex(hex).ok()?;
        Id::new(raw)
    }
}

impl PartialOrd for Id {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Id {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        let s: &RawId = self;
        let o: &RawId = other;
        Ord::cmp(s, o)
    }
}

impl Hash for Id {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        let s: &RawId = self;
        Hash::hash(s, state);
    }
}

impl Deref for Id {
    type Target = RawId;

    fn deref(&self) -> &Self::Target {
        unsafe { std::mem::transmute::<&Id, &RawId>(self) }
    }
}

impl Borrow<RawId> for Id {
    fn borrow(&self) -> &RawId {
        self
    }
}

impl AsRef<RawId> for Id {
    fn as_ref(&self) -> &RawId {
        self
    }
}

impl AsRef<[u8]> for Id {
    fn as_ref(&self) -> &[u8] {
        &self[..]
    }
}

impl From<Id> for RawId {
    fn from(id: Id) -> Self {
        *id
    }
}

impl Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Id({self:X})")
    }
}

impl LowerHex for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for byte in &self[..] {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl UpperHex for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for byte in &self[..] {
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}

// The canonical hyphenated text rendering is delegated to the `uuid` crate;
// an `Id` converts losslessly in both directions, except for the nil UUID
// which has no `Id` representation.

impl From<Id> for uuid::Uuid {
    fn from(id: Id) -> Self {
        uuid::Uuid::from_bytes(*id)
    }
}

/// Error returned when converting the nil UUID (all zero bytes) into an
/// [`Id`], which cannot represent it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NilUuidError;

impl TryFrom<uuid::Uuid> for Id {
    type Error = NilUuidError;

    fn try_from(id: uuid::Uuid) -> Result<Self, NilUuidError> {
        let bytes = id.into_bytes();
        Id::new(bytes).ok_or(NilUuidError)
    }
}

impl std::fmt::Display for NilUuidError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "the nil UUID (all zero bytes) has no Id representation")
    }
}

impl std::error::Error for NilUuidError {}

#[doc(hidden)]
pub use hex_literal::hex as _hex_literal_hex;

/// Creates an `Id` from a hex string literal.
///
/// # Example
/// ```
/// use dccid::id::id_hex;
/// let id = id_hex!("3C6831E398645D058C575C3E0F767FA2");
/// ```
#[macro_export]
macro_rules! id_hex {
    ( $data:expr ) => {
        $crate::id::Id::new($crate::id::_hex_literal_hex!($data)).unwrap()
    };
}

pub use id_hex;

#[cfg(feature = "proptest")]
pub struct IdValueTree(RawId);

/// A proptest strategy producing uniformly random [RawId]s.
/// Wrap the output in [`Id::new`] to obtain the `Option<Id>` shape the
/// [`nameid()`] generator takes as its namespace.
#[cfg(feature = "proptest")]
#[derive(Debug)]
pub struct RandomId();

#[cfg(feature = "proptest")]
impl proptest::strategy::Strategy for RandomId {
    type Tree = IdValueTree;
    type Value = RawId;

    fn new_tree(
        &self,
        runner: &mut proptest::prelude::prop::test_runner::TestRunner,
    ) -> proptest::prelude::prop::strategy::NewTree<Self> {
        use proptest::prelude::RngCore;

        let rng = runner.rng();
        let mut id = [0; 16];
        rng.fill_bytes(&mut id[..]);

        Ok(IdValueTree(id))
    }
}

#[cfg(feature = "proptest")]
impl proptest::strategy::ValueTree for IdValueTree {
    type Value = RawId;

    fn simplify(&mut self) -> bool {
        false
    }
    fn complicate(&mut self) -> bool {
        false
    }
    fn current(&self) -> RawId {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_formatting() {
        let id: Id = id_hex!("3C6831E398645D058C575C3E0F767FA2");
        assert_eq!(format!("{id:x}"), "3c6831e398645d058c575c3e0f767fa2");
        assert_eq!(format!("{id:X}"), "3C6831E398645D058C575C3E0F767FA2");
    }

    #[test]
    fn from_hex_rejects_nil() {
        assert_eq!(Id::from_hex("00000000000000000000000000000000"), None);
        assert!(Id::from_hex("3C6831E398645D058C575C3E0F767FA2").is_some());
        assert_eq!(Id::from_hex("not hex"), None);
    }

    #[test]
    fn uuid_round_trip() {
        let id: Id = id_hex!("74738FF5536759589AEE98FFFDCD1876");
        let uuid: uuid::Uuid = id.into();
        assert_eq!(uuid.to_string(), "74738ff5-5367-5958-9aee-98fffdcd1876");
        assert_eq!(Id::try_from(uuid), Ok(id));
    }

    #[test]
    fn nil_uuid_rejected() {
        assert_eq!(Id::try_from(uuid::Uuid::nil()), Err(NilUuidError));
    }
}
