//! Element handles
//!
//! Every element the runtime touches is addressed by a [`NodeId`]. Hosts
//! keep their own element storage keyed by these ids, so the animation and
//! motion layers never hold platform objects directly.

use slotmap::new_key_type;

new_key_type! {
    /// Handle to an element owned by a host document
    pub struct NodeId;
}

impl NodeId {
    /// Convert to raw u64 (for logging and JS interop)
    pub fn to_raw(self) -> u64 {
        self.0.as_ffi()
    }

    /// Reconstruct from raw u64
    ///
    /// The raw value must have been created by `to_raw()` on a live id.
    pub fn from_raw(raw: u64) -> Self {
        NodeId::from(slotmap::KeyData::from_ffi(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    #[test]
    fn test_raw_round_trip() {
        let mut nodes: SlotMap<NodeId, &str> = SlotMap::with_key();
        let id = nodes.insert("hero");
        assert_eq!(NodeId::from_raw(id.to_raw()), id);
        assert_eq!(nodes[NodeId::from_raw(id.to_raw())], "hero");
    }
}
