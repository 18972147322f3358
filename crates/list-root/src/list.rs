//! Lists whose root can be derived.
use alloy_primitives::Bytes;
use alloy_rlp::Encodable;

/// An ordered sequence of items committed to by its trie root.
pub trait DerivableList {
    /// Number of items.
    fn item_count(&self) -> usize;

    /// Bytes committed for the item at `index`. `index` is always below
    /// [`DerivableList::item_count`].
    fn encoded_item(&self, index: usize) -> Bytes;
}

impl<T: AsRef<[u8]>> DerivableList for [T] {
    #[inline]
    fn item_count(&self) -> usize {
        self.len()
    }

    fn encoded_item(&self, index: usize) -> Bytes {
        Bytes::copy_from_slice(self[index].as_ref())
    }
}

impl<T: AsRef<[u8]>, const N: usize> DerivableList for [T; N] {
    #[inline]
    fn item_count(&self) -> usize {
        N
    }

    fn encoded_item(&self, index: usize) -> Bytes {
        self[..].encoded_item(index)
    }
}

impl<T: AsRef<[u8]>> DerivableList for Vec<T> {
    #[inline]
    fn item_count(&self) -> usize {
        self.len()
    }

    fn encoded_item(&self, index: usize) -> Bytes {
        self[..].encoded_item(index)
    }
}

/// A list of structured items, each committed by its RLP encoding.
///
/// This is how transaction and receipt lists are committed: the trie value is the encoded
/// item rather than raw bytes.
#[derive(Debug, Clone, Copy)]
pub struct RlpList<'a, T>(pub &'a [T]);

impl<T: Encodable> DerivableList for RlpList<'_, T> {
    #[inline]
    fn item_count(&self) -> usize {
        self.0.len()
    }

    fn encoded_item(&self, index: usize) -> Bytes {
        Bytes::from(alloy_rlp::encode(&self.0[index]))
    }
}
