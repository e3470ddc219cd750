//! The record encoded for every generated DAG node.
//!
//! A [`DagNode`] carries the generator's sequence number as a decimal string
//! and, for internal nodes, the ordered identifiers of its children. The
//! encoded bytes are what gets digested, so the encoding must be stable:
//! fields are written in declaration order and `links` is left out entirely
//! when a node has no children. `{"seq":"1"}` and `{"seq":"1","links":[]}`
//! are different records with different identifiers.
//!
//! The encoding is JSON via `serde_json`, not CBOR: identifiers are not
//! interchangeable with those of DAG-CBOR tooling.

use serde::{Deserialize, Serialize};

use mfx_types::ObjectId;

use crate::error::{GenError, GenResult};

/// A node in a generated Merkle tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DagNode {
    /// Decimal string of the generator counter at encoding time.
    pub seq: String,
    /// Child identifiers in generation order; absent for leaves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<ObjectId>>,
}

impl DagNode {
    /// A node with no links field.
    pub fn leaf(seq: u64) -> Self {
        Self {
            seq: seq.to_string(),
            links: None,
        }
    }

    /// A node linking to `links`. An empty list produces a leaf.
    pub fn with_links(seq: u64, links: Vec<ObjectId>) -> Self {
        if links.is_empty() {
            return Self::leaf(seq);
        }
        Self {
            seq: seq.to_string(),
            links: Some(links),
        }
    }

    /// Returns `true` if the record carries no links field.
    pub fn is_leaf(&self) -> bool {
        self.links.is_none()
    }

    /// Child identifiers, empty for leaves.
    pub fn links(&self) -> &[ObjectId] {
        self.links.as_deref().unwrap_or(&[])
    }

    /// Canonical encoded form.
    pub fn encode(&self) -> GenResult<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| GenError::Encoding(e.to_string()))
    }

    /// Decode bytes previously produced by [`encode`](Self::encode).
    pub fn decode(id: ObjectId, data: &[u8]) -> GenResult<Self> {
        serde_json::from_slice(data).map_err(|e| GenError::Decode {
            id,
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_encoding_omits_links() {
        let bytes = DagNode::leaf(1).encode().unwrap();
        assert_eq!(bytes, br#"{"seq":"1"}"#);
    }

    #[test]
    fn empty_links_become_a_leaf() {
        let node = DagNode::with_links(4, Vec::new());
        assert!(node.is_leaf());
        assert_eq!(node, DagNode::leaf(4));
    }

    #[test]
    fn internal_node_keeps_link_order() {
        let a = ObjectId::from_hash([0xa; 32]);
        let b = ObjectId::from_hash([0xb; 32]);
        let node = DagNode::with_links(3, vec![b, a]);
        assert!(!node.is_leaf());
        assert_eq!(node.links(), &[b, a]);
        assert_ne!(
            node.encode().unwrap(),
            DagNode::with_links(3, vec![a, b]).encode().unwrap()
        );
    }

    #[test]
    fn absent_and_empty_links_encode_differently() {
        let absent = DagNode::leaf(1);
        let empty = DagNode {
            seq: "1".into(),
            links: Some(Vec::new()),
        };
        assert_ne!(absent.encode().unwrap(), empty.encode().unwrap());
    }

    #[test]
    fn encoding_is_stable() {
        let node = DagNode::with_links(9, vec![ObjectId::from_hash([0xc; 32])]);
        assert_eq!(node.encode().unwrap(), node.clone().encode().unwrap());
    }

    #[test]
    fn decode_reverses_encode() {
        let node = DagNode::with_links(12, vec![ObjectId::from_hash([0xd; 32])]);
        let bytes = node.encode().unwrap();
        let decoded = DagNode::decode(ObjectId::null(), &bytes).unwrap();
        assert_eq!(decoded, node);
        assert_eq!(decoded.encode().unwrap(), bytes);
    }

    #[test]
    fn decode_rejects_unknown_fields() {
        let err = DagNode::decode(ObjectId::null(), br#"{"seq":"1","extra":true}"#).unwrap_err();
        assert!(matches!(err, GenError::Decode { .. }));
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(DagNode::decode(ObjectId::null(), b"\x00\x01").is_err());
    }
}
