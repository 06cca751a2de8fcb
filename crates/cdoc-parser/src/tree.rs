//! The parsed tree handed to the rest of cdoc: plain owned values.

use std::path::Path;
use std::sync::Arc;

use cdoc_core::{DeclKind, Declaration, SourcePosition};

/// What a [`TreeNode`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    TranslationUnit,
    Variable,
    Function,
    Namespace,
    Other,
}

/// One node of the syntax tree.
///
/// `name` is the spelled identifier for variables, functions and named
/// namespaces, and empty otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub kind: NodeKind,
    pub name: String,
    pub position: SourcePosition,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// The node as a [`Declaration`], if it is a variable or function.
    #[must_use]
    pub fn declaration(&self) -> Option<Declaration> {
        let kind = match self.kind {
            NodeKind::Variable => DeclKind::Variable,
            NodeKind::Function => DeclKind::Function,
            _ => return None,
        };
        Some(Declaration::new(&self.name, self.position.clone(), kind))
    }

    /// Pre-order traversal of this node and all its descendants.
    pub fn iter(&self) -> impl Iterator<Item = &Self> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }
}

/// A parsed source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTree {
    root: TreeNode,
}

impl SyntaxTree {
    #[must_use]
    pub const fn new(root: TreeNode) -> Self {
        Self { root }
    }

    /// A tree with nothing in it, used when a file cannot be parsed at all.
    #[must_use]
    pub fn empty(file: Arc<Path>) -> Self {
        Self::new(TreeNode {
            kind: NodeKind::TranslationUnit,
            name: String::new(),
            position: SourcePosition::new(file, 1, 1),
            children: Vec::new(),
        })
    }

    #[must_use]
    pub const fn root(&self) -> &TreeNode {
        &self.root
    }

    #[must_use]
    pub fn file(&self) -> &Path {
        &self.root.position.file
    }

    /// Every node once, parents before children, in source order.
    pub fn iter(&self) -> impl Iterator<Item = &TreeNode> {
        self.root.iter()
    }
}
