//! Selection of the declarations that doc comments attach to.

use cdoc_core::Declaration;

use crate::tree::{NodeKind, SyntaxTree, TreeNode};

/// Variables and functions declared directly at file scope, sorted by position.
///
/// When the file scope holds exactly one namespace, that namespace is
/// searched instead of the file scope. Anything nested deeper (a namespace
/// inside a namespace, `extern "C"` blocks, class members) and everything
/// under several top-level namespaces is not supported and is not returned.
#[must_use]
pub fn global_declarations(tree: &SyntaxTree) -> Vec<Declaration> {
    let root = tree.root();
    let mut namespaces = root
        .children
        .iter()
        .filter(|child| child.kind == NodeKind::Namespace);
    let scope = match (namespaces.next(), namespaces.next()) {
        (Some(namespace), None) => namespace,
        _ => root,
    };

    let mut decls: Vec<Declaration> = scope
        .children
        .iter()
        .filter_map(TreeNode::declaration)
        .collect();
    decls.sort_by_key(|decl| decl.position.line_col());
    decls
}
