use std::collections::HashMap;
use std::fmt;

/// Slot of a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

impl NodeId {
    pub(crate) const ROOT: NodeId = NodeId(0);
}

/// Binds one item to one keyword of the name it was stored under.
#[derive(Debug, Clone)]
pub(crate) struct Association<T> {
    pub(crate) item: T,
    /// Position of the keyword within the item's own name.
    pub(crate) keyword_index: usize,
    /// Number of keywords the item's name tokenized into.
    pub(crate) keyword_count: usize,
}

#[derive(Debug, Clone)]
struct Node<T> {
    label: Option<char>,
    children: HashMap<char, NodeId>,
    associations: Vec<Association<T>>,
    parent: Option<NodeId>,
}

impl<T> Node<T> {
    fn new(label: Option<char>, parent: Option<NodeId>) -> Self {
        Self {
            label,
            children: HashMap::new(),
            associations: Vec::new(),
            parent,
        }
    }

    /// Neither branches nor carries data; must not stay attached.
    fn is_dead(&self) -> bool {
        self.children.is_empty() && self.associations.is_empty()
    }

    fn reset(&mut self) {
        self.label = None;
        self.children.clear();
        self.associations.clear();
        self.parent = None;
    }
}

/// Character-keyed node graph stored in a `Vec`.
///
/// Children are referenced by [`NodeId`] and every node but the root keeps its
/// parent's id, so pruning is a walk over indices rather than over owned
/// pointers. Slots of pruned nodes go to a free list and are reused.
///
/// Every reachable non-root node either has two or more children or carries
/// at least one association. `prune` restores this after an association is
/// removed.
#[derive(Debug, Clone)]
pub(crate) struct Graph<T> {
    nodes: Vec<Node<T>>,
    free_list: Vec<usize>,
}

impl<T> Graph<T> {
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![Node::new(None, None)],
            free_list: Vec::new(),
        }
    }

    /// Walks `keyword` from the root, creating missing nodes, and attaches
    /// `association` to the node that spells the whole keyword.
    pub(crate) fn insert(&mut self, keyword: &str, association: Association<T>) {
        let mut current = NodeId::ROOT;

        for ch in keyword.chars() {
            current = match self.node(current).children.get(&ch) {
                Some(&child) => child,
                None => {
                    let child = self.allocate(ch, current);
                    self.node_mut(current).children.insert(ch, child);
                    child
                }
            };
        }

        self.node_mut(current).associations.push(association);
    }

    /// Returns the node reached after consuming every character of `text`.
    ///
    /// Search treats the result as the root of every keyword starting with
    /// `text`; removal treats it as the node of exactly `text` and checks the
    /// associations held there.
    pub(crate) fn locate(&self, text: &str) -> Option<NodeId> {
        let mut current = NodeId::ROOT;
        for ch in text.chars() {
            current = *self.node(current).children.get(&ch)?;
        }
        Some(current)
    }

    /// Every association at `id` and below it.
    pub(crate) fn associations_below(&self, id: NodeId) -> Associations<'_, T> {
        Associations {
            graph: self,
            stack: vec![id],
            current: Default::default(),
        }
    }

    /// Removes one association of `item` held at `id`. Returns false when
    /// the node holds none.
    pub(crate) fn remove_association(&mut self, id: NodeId, item: &T) -> bool
    where
        T: PartialEq,
    {
        let associations = &mut self.node_mut(id).associations;
        match associations.iter().position(|a| &a.item == item) {
            Some(position) => {
                associations.swap_remove(position);
                true
            }
            None => false,
        }
    }

    /// Detaches the dead chain ending at `id`, if `id` is dead.
    ///
    /// Climbs while the parent has this chain as its only child and holds no
    /// associations, stopping at the first ancestor that branches, carries
    /// data, or is the root. The edge from that ancestor into the chain is
    /// cut and the chain's slots are freed. Returns the number of nodes freed.
    pub(crate) fn prune(&mut self, id: NodeId) -> usize {
        if id == NodeId::ROOT || !self.node(id).is_dead() {
            return 0;
        }

        let mut top = id;
        while let Some(parent) = self.node(top).parent {
            let node = self.node(parent);
            if parent == NodeId::ROOT || node.children.len() != 1 || !node.associations.is_empty()
            {
                break;
            }
            top = parent;
        }

        let (Some(anchor), Some(label)) = (self.node(top).parent, self.node(top).label) else {
            return 0;
        };
        self.node_mut(anchor).children.remove(&label);

        let mut freed = 0;
        let mut next = Some(top);
        while let Some(current) = next {
            next = self.node(current).children.values().next().copied();
            self.recycle(current);
            freed += 1;
        }
        freed
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.node(NodeId::ROOT).children.is_empty()
    }

    /// Live nodes, not counting the root.
    pub(crate) fn node_count(&self) -> usize {
        self.nodes.len() - self.free_list.len() - 1
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.truncate(1);
        self.nodes[0].reset();
        self.free_list.clear();
    }

    fn node(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        &mut self.nodes[id.0]
    }

    fn sorted_children(&self, id: NodeId) -> Vec<NodeId> {
        let mut entries: Vec<(char, NodeId)> = self
            .node(id)
            .children
            .iter()
            .map(|(&ch, &child)| (ch, child))
            .collect();
        entries.sort_by_key(|&(ch, _)| ch);
        entries.into_iter().map(|(_, child)| child).collect()
    }

    fn allocate(&mut self, label: char, parent: NodeId) -> NodeId {
        let node = Node::new(Some(label), Some(parent));
        if let Some(slot) = self.free_list.pop() {
            self.nodes[slot] = node;
            NodeId(slot)
        } else {
            self.nodes.push(node);
            NodeId(self.nodes.len() - 1)
        }
    }

    fn recycle(&mut self, id: NodeId) {
        self.node_mut(id).reset();
        self.free_list.push(id.0);
    }

    /// Writes each subtree as `label`, then the only child's rendering or
    /// `{a,b,...}` when branching.
    ///
    /// Uses an explicit stack; keywords can be far longer than the call stack
    /// is deep.
    fn write_children(&self, children: &[NodeId], f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = Vec::new();
        push_children(&mut stack, children);

        while let Some(step) = stack.pop() {
            let mut id = match step {
                Render::Node(id) => id,
                Render::Comma => {
                    f.write_str(",")?;
                    continue;
                }
                Render::Close => {
                    f.write_str("}")?;
                    continue;
                }
            };

            loop {
                if let Some(label) = self.node(id).label {
                    write!(f, "{label}")?;
                }
                match self.sorted_children(id).as_slice() {
                    [] => break,
                    [only] => id = *only,
                    children => {
                        f.write_str("{")?;
                        stack.push(Render::Close);
                        push_children(&mut stack, children);
                        break;
                    }
                }
            }
        }
        Ok(())
    }
}

/// Pending output while rendering.
enum Render {
    Node(NodeId),
    Comma,
    Close,
}

/// Queues `children` so they pop in order, separated by commas.
fn push_children(stack: &mut Vec<Render>, children: &[NodeId]) {
    for (i, &child) in children.iter().enumerate().rev() {
        stack.push(Render::Node(child));
        if i > 0 {
            stack.push(Render::Comma);
        }
    }
}

/// Renders the trie shape as `root{...}` with children sorted by character.
impl<T> fmt::Display for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("root{")?;
        self.write_children(&self.sorted_children(NodeId::ROOT), f)?;
        f.write_str("}")
    }
}

/// Depth-first iterator returned by [`Graph::associations_below`].
pub(crate) struct Associations<'a, T> {
    graph: &'a Graph<T>,
    stack: Vec<NodeId>,
    current: std::slice::Iter<'a, Association<T>>,
}

impl<'a, T> Iterator for Associations<'a, T> {
    type Item = &'a Association<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(association) = self.current.next() {
                return Some(association);
            }
            let node = self.graph.node(self.stack.pop()?);
            self.stack.extend(node.children.values().copied());
            self.current = node.associations.iter();
        }
    }
}
