//! Edge nodes and their arena storage.
//!
//! Every node represents one edge of the trie: a run of bytes shared by all
//! keys descending through it. Nodes live in an index-addressed arena; freed
//! slots are threaded onto a free list and reused by later allocations, so
//! heavy insert/remove churn does not grow the backing vector.

/// Index of a node slot inside the arena.
pub(crate) type NodeId = u32;

/// One edge of the trie.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    /// Byte run for this edge; always at least one byte long.
    pub label: Vec<u8>,
    /// Set iff a stored key ends exactly at the end of this edge.
    pub terminal: bool,
    /// Next alternative edge at the same branching level.
    pub sibling: Option<NodeId>,
    /// First edge one level deeper, reached after consuming `label`.
    pub child: Option<NodeId>,
}

impl Node {
    /// Create a leaf edge holding `label`, marked terminal.
    pub fn leaf(label: Vec<u8>) -> Self {
        debug_assert!(!label.is_empty(), "edge labels must hold at least one byte");
        Self {
            label,
            terminal: true,
            sibling: None,
            child: None,
        }
    }
}

/// A slot in the node arena: occupied, or vacant and linking to the next
/// vacant slot.
#[derive(Debug, Clone)]
enum Slot {
    Occupied(Node),
    Vacant(Option<NodeId>),
}

/// Slot-based node storage with an explicit free list.
///
/// Allocation pops the free list before growing the slot vector; freeing a
/// node pushes its slot back. Accessing a vacant slot means a structural
/// link survived its target, which is an internal invariant breach and
/// panics rather than returning an error.
#[derive(Debug, Default)]
pub(crate) struct NodeArena {
    slots: Vec<Slot>,
    free_head: Option<NodeId>,
    occupied: usize,
}

impl NodeArena {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            occupied: 0,
        }
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.occupied
    }

    /// Store `node`, reusing a vacant slot when one exists.
    pub fn alloc(&mut self, node: Node) -> NodeId {
        self.occupied += 1;
        match self.free_head {
            Some(id) => {
                self.free_head = match self.slots[id as usize] {
                    Slot::Vacant(next) => next,
                    Slot::Occupied(_) => {
                        panic!("radix tree corruption: free list points at occupied slot {}", id)
                    }
                };
                self.slots[id as usize] = Slot::Occupied(node);
                id
            }
            None => {
                debug_assert!(self.slots.len() < NodeId::MAX as usize);
                let id = self.slots.len() as NodeId;
                self.slots.push(Slot::Occupied(node));
                id
            }
        }
    }

    /// Remove the node at `id`, returning it and recycling the slot.
    pub fn free(&mut self, id: NodeId) -> Node {
        let slot = std::mem::replace(
            &mut self.slots[id as usize],
            Slot::Vacant(self.free_head),
        );
        match slot {
            Slot::Occupied(node) => {
                self.free_head = Some(id);
                self.occupied -= 1;
                node
            }
            Slot::Vacant(_) => panic!("radix tree corruption: double free of node slot {}", id),
        }
    }

    pub fn get(&self, id: NodeId) -> &Node {
        match &self.slots[id as usize] {
            Slot::Occupied(node) => node,
            Slot::Vacant(_) => panic!("radix tree corruption: dangling link to node slot {}", id),
        }
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut Node {
        match &mut self.slots[id as usize] {
            Slot::Occupied(node) => node,
            Slot::Vacant(_) => panic!("radix tree corruption: dangling link to node slot {}", id),
        }
    }

    /// Drop every node but keep the slot allocation for reuse.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.occupied = 0;
    }
}
