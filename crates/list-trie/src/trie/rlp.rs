//! Implementation of a trie node rlp decoding.
//! Decoded nodes keep their children as [`NodeRef`]s, resolving them is up to the caller.
use super::nodes::{INLINE_THRESHOLD, NodeRef};
use alloy_primitives::{B256, Bytes};
use alloy_rlp::{Decodable, EMPTY_LIST_CODE, EMPTY_STRING_CODE, Header, PayloadView};
use alloy_trie::Nibbles;

/// A single decoded node whose children are not resolved yet.
#[derive(Debug)]
pub(super) enum RawNode {
    Leaf {
        path: Nibbles,
        value: Bytes,
    },
    Extension {
        path: Nibbles,
        child: NodeRef,
    },
    Branch {
        children: [Option<NodeRef>; 16],
        value: Option<Bytes>,
    },
}

impl RawNode {
    pub(super) fn decode(encoded: &[u8]) -> alloy_rlp::Result<Self> {
        let mut buf = encoded;
        let node = match Header::decode_raw(&mut buf)? {
            PayloadView::String(_) => {
                return Err(alloy_rlp::Error::Custom("trie node is not a list"));
            }
            PayloadView::List(items) => match items.as_slice() {
                [encoded_path, item] => {
                    let (path, is_leaf) = decode_path(&mut &encoded_path[..])?;
                    if is_leaf {
                        Self::Leaf {
                            path,
                            value: Bytes::decode(&mut &item[..])?,
                        }
                    } else {
                        if path.is_empty() {
                            return Err(alloy_rlp::Error::Custom("extension with an empty path"));
                        }
                        let child = decode_child(item)?
                            .ok_or(alloy_rlp::Error::Custom("extension without a child"))?;
                        Self::Extension { path, child }
                    }
                }
                [slots @ .., value] if slots.len() == 16 => {
                    let mut children: [Option<NodeRef>; 16] = Default::default();
                    for (child, slot) in children.iter_mut().zip(slots) {
                        *child = decode_child(slot)?;
                    }
                    let value = if value[..] == [EMPTY_STRING_CODE] {
                        None
                    } else {
                        Some(Bytes::decode(&mut &value[..])?)
                    };
                    Self::Branch { children, value }
                }
                _ => return Err(alloy_rlp::Error::Custom("invalid trie node list length")),
            },
        };
        if !buf.is_empty() {
            return Err(alloy_rlp::Error::UnexpectedLength);
        }
        Ok(node)
    }
}

// Decodes a child slot of a branch or extension: empty, embedded node or 32-byte digest.
fn decode_child(item: &[u8]) -> alloy_rlp::Result<Option<NodeRef>> {
    match item.first() {
        Some(&EMPTY_STRING_CODE) if item.len() == 1 => Ok(None),
        Some(&code) if code >= EMPTY_LIST_CODE => {
            if item.len() >= INLINE_THRESHOLD {
                return Err(alloy_rlp::Error::Custom("embedded node exceeds 31 bytes"));
            }
            Ok(Some(NodeRef::Inline(item.to_vec())))
        }
        _ => {
            let digest = Header::decode_bytes(&mut &item[..], false)?;
            if digest.len() != 32 {
                return Err(alloy_rlp::Error::Custom("child digest is not 32 bytes"));
            }
            Ok(Some(NodeRef::Digest(B256::from_slice(digest))))
        }
    }
}

#[inline]
fn decode_path(buf: &mut &[u8]) -> alloy_rlp::Result<(Nibbles, bool)> {
    let path = Nibbles::unpack(Header::decode_bytes(buf, false)?);
    if path.len() < 2 {
        return Err(alloy_rlp::Error::InputTooShort);
    }
    let (is_leaf, odd_nibbles) = match path.at(0) {
        0b0000 => (false, false),
        0b0001 => (false, true),
        0b0010 => (true, false),
        0b0011 => (true, true),
        _ => return Err(alloy_rlp::Error::Custom("node is not an extension or leaf")),
    };
    if !odd_nibbles && path.at(1) != 0 {
        return Err(alloy_rlp::Error::Custom("non-zero padding nibble in path"));
    }
    let path = if odd_nibbles {
        path.slice(1..)
    } else {
        path.slice(2..)
    };
    Ok((path, is_leaf))
}

// Encodes list header for known payload length. Reserves memory.
#[inline]
pub(super) fn encode_list_header(payload_length: usize) -> Vec<u8> {
    debug_assert!(payload_length > 1);
    let header = Header {
        list: true,
        payload_length,
    };
    let mut out = Vec::with_capacity(header.length() + payload_length);
    header.encode(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::hex;

    #[test]
    fn decodes_leaf() {
        // ["0x2080", "a"]: a leaf with the even path [8, 0]
        let RawNode::Leaf { path, value } = RawNode::decode(&hex!("c482208061")).unwrap() else {
            panic!("expected a leaf");
        };
        assert_eq!(path, Nibbles::from_nibbles([8_u8, 0]));
        assert_eq!(value, Bytes::from_static(b"a"));
    }

    #[test]
    fn decodes_branch_with_embedded_children() {
        let mut encoded = hex!("d5c23162").to_vec();
        encoded.extend([EMPTY_STRING_CODE; 7]);
        encoded.extend(hex!("c23061"));
        encoded.extend([EMPTY_STRING_CODE; 8]);

        let RawNode::Branch { children, value } = RawNode::decode(&encoded).unwrap() else {
            panic!("expected a branch");
        };
        assert_eq!(value, None);
        assert_eq!(children[0], Some(NodeRef::Inline(hex!("c23162").to_vec())));
        assert_eq!(children[8], Some(NodeRef::Inline(hex!("c23061").to_vec())));
        assert_eq!(children.iter().flatten().count(), 2);
    }

    #[test]
    fn rejects_malformed_nodes() {
        // a string instead of a list
        assert!(RawNode::decode(&hex!("8180")).is_err());
        // a list of three items
        assert!(RawNode::decode(&hex!("c3010203")).is_err());
        // an unknown path flag
        assert!(RawNode::decode(&hex!("c482408061")).is_err());
        // trailing bytes
        assert!(RawNode::decode(&hex!("c48220806100")).is_err());
        // an extension child that is neither a list nor a digest
        assert!(RawNode::decode(&hex!("c582001281ff")).is_err());
    }
}
