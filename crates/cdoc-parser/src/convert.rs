//! Conversion of an ast-grep tree into a [`SyntaxTree`].
//!
//! Mirrors what a compiler front end reports after preprocessing:
//! conditional-compilation blocks are transparent, every declarator of a
//! `declaration` becomes its own node, and `namespace a::b` becomes two
//! nested namespaces.

use std::path::Path;
use std::sync::Arc;

use ast_grep_core::{Doc, Node};
use cdoc_core::{LineIndex, SourcePosition};

use crate::tree::{NodeKind, SyntaxTree, TreeNode};

/// Node kinds whose children belong to the enclosing scope.
const TRANSPARENT_KINDS: &[&str] = &[
    "preproc_if",
    "preproc_ifdef",
    "preproc_elif",
    "preproc_elifdef",
    "preproc_else",
    "ERROR",
];

/// Node kinds that hold a name directly.
const NAME_KINDS: &[&str] = &[
    "identifier",
    "field_identifier",
    "qualified_identifier",
    "operator_name",
    "destructor_name",
];

/// Declarator wrappers searched for the declared name.
const DECLARATOR_KINDS: &[&str] = &[
    "init_declarator",
    "function_declarator",
    "pointer_declarator",
    "reference_declarator",
    "array_declarator",
    "parenthesized_declarator",
    "attributed_declarator",
];

pub(crate) struct Converter {
    file: Arc<Path>,
    index: LineIndex,
    first_error: Option<usize>,
}

impl Converter {
    pub(crate) fn new(file: Arc<Path>, source: &str) -> Self {
        Self {
            file,
            index: LineIndex::new(source),
            first_error: None,
        }
    }

    /// Line and column of the first syntax error seen, if any.
    pub(crate) fn first_error(&self) -> Option<(u32, u32)> {
        self.first_error.map(|offset| self.index.line_col(offset))
    }

    pub(crate) fn translation_unit<D: Doc>(&mut self, root: &Node<D>) -> SyntaxTree {
        SyntaxTree::new(TreeNode {
            kind: NodeKind::TranslationUnit,
            name: String::new(),
            position: self.position(root),
            children: self.children(root),
        })
    }

    fn position<D: Doc>(&self, node: &Node<D>) -> SourcePosition {
        self.index.position(&self.file, node.range().start)
    }

    fn children<D: Doc>(&mut self, node: &Node<D>) -> Vec<TreeNode> {
        let mut converted = Vec::new();
        for child in node.children().filter(Node::is_named) {
            converted.extend(self.convert(&child));
        }
        converted
    }

    fn convert<D: Doc>(&mut self, node: &Node<D>) -> Vec<TreeNode> {
        let kind = node.kind();
        if kind.as_ref() == "ERROR" {
            let start = node.range().start;
            self.first_error = Some(self.first_error.map_or(start, |seen| seen.min(start)));
        }
        match kind.as_ref() {
            k if TRANSPARENT_KINDS.contains(&k) => self.children(node),
            "function_definition" => vec![self.function_definition(node)],
            "declaration" => self.declaration(node),
            "namespace_definition" => vec![self.namespace(node)],
            _ => vec![self.wrap(NodeKind::Other, String::new(), node)],
        }
    }

    /// A node of `kind` whose children are converted recursively.
    fn wrap<D: Doc>(&mut self, kind: NodeKind, name: String, node: &Node<D>) -> TreeNode {
        TreeNode {
            kind,
            name,
            position: self.position(node),
            children: self.children(node),
        }
    }

    fn function_definition<D: Doc>(&mut self, node: &Node<D>) -> TreeNode {
        let name = node
            .children()
            .find(|c| is_declarator(c))
            .map(|declarator| declarator_name(&declarator))
            .unwrap_or_default();
        // `A::f` is an out-of-class method body, not a free function.
        let kind = if name.is_empty() || name.contains("::") {
            NodeKind::Other
        } else {
            NodeKind::Function
        };
        self.wrap(kind, name, node)
    }

    fn declaration<D: Doc>(&mut self, node: &Node<D>) -> Vec<TreeNode> {
        let declarators: Vec<_> = node
            .children()
            .filter(|c| is_declarator(c) || c.kind().as_ref() == "identifier")
            .collect();
        if declarators.is_empty() {
            return vec![self.wrap(NodeKind::Other, String::new(), node)];
        }

        // Every declarator sits at the declaration's first token, not its name.
        let position = self.position(node);
        declarators
            .iter()
            .map(|declarator| {
                let name = declarator_name(declarator);
                let kind = if name.is_empty() || name.contains("::") {
                    NodeKind::Other
                } else if is_function_declarator(declarator) {
                    NodeKind::Function
                } else {
                    NodeKind::Variable
                };
                TreeNode {
                    kind,
                    name,
                    position: position.clone(),
                    children: self.children(declarator),
                }
            })
            .collect()
    }

    fn namespace<D: Doc>(&mut self, node: &Node<D>) -> TreeNode {
        let name = node
            .field("name")
            .map(|n| n.text().to_string())
            .unwrap_or_default();
        let position = self.position(node);
        let children = node
            .field("body")
            .map(|body| self.children(&body))
            .unwrap_or_default();

        // `namespace a::b { ... }` is `namespace a { namespace b { ... } }`.
        let mut segments: Vec<&str> = name.split("::").map(str::trim).collect();
        let innermost = segments.pop().unwrap_or_default();
        let mut namespace = TreeNode {
            kind: NodeKind::Namespace,
            name: innermost.to_string(),
            position: position.clone(),
            children,
        };
        for outer in segments.into_iter().rev() {
            namespace = TreeNode {
                kind: NodeKind::Namespace,
                name: outer.to_string(),
                position: position.clone(),
                children: vec![namespace],
            };
        }
        namespace
    }
}

fn is_declarator<D: Doc>(node: &Node<D>) -> bool {
    DECLARATOR_KINDS.contains(&node.kind().as_ref())
}

/// The name declared by a declarator, searching through pointer, array,
/// init and parenthesized wrappers.
fn declarator_name<D: Doc>(node: &Node<D>) -> String {
    if NAME_KINDS.contains(&node.kind().as_ref()) {
        return node.text().to_string();
    }
    for child in node.children() {
        let kind = child.kind();
        if NAME_KINDS.contains(&kind.as_ref()) {
            return child.text().to_string();
        }
        if DECLARATOR_KINDS.contains(&kind.as_ref()) {
            let name = declarator_name(&child);
            if !name.is_empty() {
                return name;
            }
        }
    }
    String::new()
}

/// A declarator that declares a function (prototype) rather than a variable.
/// `int (*fp)(int)` is a variable holding a function pointer.
fn is_function_declarator<D: Doc>(node: &Node<D>) -> bool {
    match node.kind().as_ref() {
        "function_declarator" => !node
            .children()
            .any(|c| c.kind().as_ref() == "parenthesized_declarator"),
        "pointer_declarator" | "reference_declarator" | "attributed_declarator" => {
            node.children().any(|c| is_function_declarator(&c))
        }
        _ => false,
    }
}
