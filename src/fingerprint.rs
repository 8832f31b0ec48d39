use sha2::{Digest, Sha256};

use crate::taxonomy::Classified;

/// SHA256 over the ordered, length-prefixed item ids of a collection.
///
/// Two collections share a fingerprint only if they list the same ids in the
/// same order, which is what paging by index depends on.
pub fn collection_fingerprint<T: Classified>(items: &[T]) -> String {
    let mut hasher = Sha256::new();
    for item in items {
        let id = item.id().as_bytes();
        hasher.update((id.len() as u64).to_le_bytes());
        hasher.update(id);
    }
    hex::encode(hasher.finalize())
}
