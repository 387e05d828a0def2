use crate::cst::{Child, Node, NodeId, SourceFile};
use crate::Token;
use std::fmt;
use triomphe::Arc;

/// Node storage. Nodes are kept in allocation order (children before their
/// parent) with a parallel parent table, so back-pointers never form owning
/// cycles and node identity survives tree surgery.
#[derive(Debug, Clone, Default)]
pub(crate) struct Arena {
    nodes: Vec<Node>,
    parents: Vec<Option<NodeId>>,
}

impl Arena {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Store a node and claim each of its node children. Children must be
    /// orphans at this point; a node adopted twice would break the
    /// single-parent invariant.
    pub(crate) fn alloc(&mut self, node: impl Into<Node>) -> NodeId {
        let node = node.into();
        let id = NodeId(self.nodes.len() as u32);
        let parents = &mut self.parents;
        node.for_each_child(&mut |child| {
            if let Child::Node(child) = child {
                debug_assert!(
                    parents[child.index()].is_none(),
                    "node {child:?} adopted by two parents"
                );
                parents[child.index()] = Some(id);
            }
        });
        self.nodes.push(node);
        self.parents.push(None);
        id
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    pub(crate) fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parents[id.index()]
    }

    /// Release a node from its parent ahead of re-wrapping. Only used while
    /// the old parent is still under construction.
    pub(crate) fn detach(&mut self, id: NodeId) {
        self.parents[id.index()] = None;
    }

    pub(crate) fn reparent(&mut self, child: NodeId, new_parent: NodeId) {
        debug_assert!(
            self.parents[child.index()].is_none(),
            "reparent of a node that already has a parent"
        );
        self.parents[child.index()] = Some(new_parent);
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }
}

/// The parse result: a tree that covers its source byte for byte, malformed
/// input included. Errors surface as missing and skipped tokens in the tree
/// rather than as a result type.
///
/// The tree holds a shared copy of the source so offsets resolve without the
/// caller keeping the input alive; cloning the tree does not copy the text.
#[derive(Clone)]
pub struct SyntaxTree {
    source: Arc<String>,
    arena: Arena,
    root: NodeId,
}

impl SyntaxTree {
    pub(crate) fn new(source: Arc<String>, arena: Arena, root: NodeId) -> Self {
        Self {
            source,
            arena,
            root,
        }
    }

    pub fn source(&self) -> &str {
        self.source.as_str()
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The root node, typed.
    pub fn source_file(&self) -> &SourceFile {
        match self.node(self.root) {
            Node::SourceFile(file) => file,
            _ => unreachable!("the parser only roots trees at a source file"),
        }
    }

    pub fn node(&self, id: NodeId) -> &Node {
        self.arena.node(id)
    }

    /// `None` only for the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena.parent(id)
    }

    /// Direct children in source order.
    pub fn children(&self, id: NodeId) -> Vec<Child> {
        let mut children = Vec::new();
        self.node(id).for_each_child(&mut |child| children.push(child));
        children
    }

    /// Significant text of a token.
    pub fn text(&self, token: &Token) -> &str {
        token.text(self.source.as_str())
    }

    /// Token text including its leading trivia.
    pub fn full_text(&self, token: &Token) -> &str {
        token.full_text(self.source.as_str())
    }

    /// All leaves of the tree in pre-order. Concatenating their full text
    /// reproduces the source exactly.
    pub fn tokens(&self) -> Vec<Token> {
        self.tokens_of(self.root)
    }

    /// Leaves under one node in pre-order.
    pub fn tokens_of(&self, id: NodeId) -> Vec<Token> {
        let mut tokens = Vec::new();
        self.collect_tokens(id, &mut tokens);
        tokens
    }

    fn collect_tokens(&self, id: NodeId, out: &mut Vec<Token>) {
        self.node(id).for_each_child(&mut |child| match child {
            Child::Token(token) => out.push(token),
            Child::Node(node) => self.collect_tokens(node, out),
        });
    }

    pub(crate) fn node_count(&self) -> usize {
        self.arena.len()
    }

    fn span(&self, id: NodeId) -> (u32, u32) {
        let tokens = self.tokens_of(id);
        match (tokens.first(), tokens.last()) {
            (Some(first), Some(last)) => (first.start, last.end()),
            _ => (0, 0),
        }
    }
}

impl fmt::Debug for SyntaxTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn print(
            tree: &SyntaxTree,
            f: &mut fmt::Formatter<'_>,
            indent: usize,
            child: Child,
        ) -> fmt::Result {
            write!(f, "{:indent$}", "", indent = indent)?;
            match child {
                Child::Node(id) => {
                    let (start, end) = tree.span(id);
                    writeln!(f, "{:?}@{}..{}", tree.node(id).kind(), start, end)?;
                    for child in tree.children(id) {
                        print(tree, f, indent + 2, child)?;
                    }
                    Ok(())
                }
                Child::Token(token) => {
                    let marker = if token.is_missing() {
                        " (missing)"
                    } else if token.is_skipped() {
                        " (skipped)"
                    } else {
                        ""
                    };
                    writeln!(
                        f,
                        "{:?}@{}..{} {:?}{}",
                        token.kind,
                        token.start,
                        token.end(),
                        tree.text(&token),
                        marker
                    )
                }
            }
        }

        print(self, f, 0, Child::Node(self.root))
    }
}
