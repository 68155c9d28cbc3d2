//! Contains containers which are used by the matrix and the bounding procedures.
mod key_value_heap;
mod keyed_vec;

use fnv::FnvBuildHasher;
pub(crate) use key_value_heap::*;
pub use keyed_vec::*;

/// [`std::collections::HashSet`] that defaults to a deterministic hasher.
#[allow(clippy::disallowed_types, reason = "this is how we define our HashSet")]
pub type HashSet<K, Hasher = FnvBuildHasher> = std::collections::HashSet<K, Hasher>;
