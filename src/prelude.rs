//! This module re-exports the most commonly used items from the `dccid`
//! crate. It is intended to be glob imported as `use dccid::prelude::*;`.

pub use crate::id::dcc_namespace;
pub use crate::id::nameid;
pub use crate::id::Id;
pub use crate::id::NilUuidError;
pub use crate::id::RawId;
pub use crate::id::ID_LEN;
pub use crate::id_hex;
