//! Name-based deterministic identifiers.
//!
//! A nameid is derived by hashing a namespace identifier and a name with
//! SHA-1, keeping the first 16 bytes of the digest, and stamping the
//! version-5/variant-`10` tag into the bit fields reserved for them. The
//! same `(namespace, name)` pair always yields the same identifier, across
//! processes, machines and time.
//!
//! The hash input is independent of host byte order: the namespace
//! contributes its 16 bytes in canonical order (most significant byte of
//! the high half first), or 16 zero bytes when absent. Absent and nil
//! namespaces are the same thing, which is why the nil identifier is
//! unrepresentable as an [`Id`] and absence is spelled `None`.
//!
//! The scheme is fixed to SHA-1. Substituting another hash would silently
//! change every derived identifier, so it is not configurable.

use std::sync::OnceLock;

use digest::Digest;
use sha1::Sha1;

use crate::id::Id;
use crate::id::RawId;
use crate::id::ID_LEN;

/// Version nibble stamped into every derived identifier,
/// marking it as name-based and hash-derived.
const VERSION: u64 = 5;

/// Derives the identifier for `name` within `namespace`.
///
/// A `&str` name contributes its UTF-8 bytes unaltered, so deriving from a
/// string and from its encoded bytes is the same operation. An empty name
/// is a legitimate input and derives its own identifier.
///
/// ```
/// use dccid::id::{dcc_namespace, nameid};
///
/// let donor = nameid(Some(dcc_namespace()), "DO222843");
/// assert_eq!(donor, nameid(Some(dcc_namespace()), "DO222843".as_bytes()));
/// ```
pub fn nameid(namespace: Option<Id>, name: impl AsRef<[u8]>) -> Id {
    derive::<Sha1>(namespace, name.as_ref())
}

/// The identifier of the `org.icgc.dcc` domain itself, derived in the
/// absent namespace. All domain-specific namespaces chain off this root.
///
/// The value is deterministic; the cache only avoids rehashing it.
pub fn dcc_namespace() -> Id {
    static ROOT: OnceLock<Id> = OnceLock::new();
    *ROOT.get_or_init(|| nameid(None, "org.icgc.dcc"))
}

fn derive<H: Digest>(namespace: Option<Id>, name: &[u8]) -> Id {
    let mut hasher = H::new();
    match namespace {
        Some(ns) => hasher.update(&ns[..]),
        None => hasher.update([0; ID_LEN]),
    }
    hasher.update(name);
    let digest = hasher.finalize();

    let mut raw: RawId = [0; ID_LEN];
    raw.copy_from_slice(&digest[..ID_LEN]);

    // The two halves are read and written as explicit big-endian u64s so the
    // bit positions below line up with the canonical byte order regardless of
    // the host platform.
    let mut high = u64::from_be_bytes(raw[0..8].try_into().unwrap());
    let mut low = u64::from_be_bytes(raw[8..16].try_into().unwrap());

    high = (high & !0xF000) | (VERSION << 12);
    low = (low & !(0x3 << 62)) | (0x2 << 62);

    raw[0..8].copy_from_slice(&high.to_be_bytes());
    raw[8..16].copy_from_slice(&low.to_be_bytes());

    Id::new(raw).expect("variant bits make the id non-nil")
}
