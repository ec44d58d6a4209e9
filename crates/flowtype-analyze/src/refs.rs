//! Utilities for working with name references in expressions and definitions.
//!
//! [`get_references`] walks the AST depth-first, left to right, and yields
//! every referenced name in order, duplicates included. Only structural
//! edges are followed (never resolved bindings), so the walk terminates on
//! any finite tree.

use indexmap::IndexSet;

use crate::ast::{Definition, Expression, Node};

/// Iterate over every name referenced by `node`.
///
/// The iterator is lazy and owns only a stack of pending nodes. Calling this
/// again, or cloning the iterator before advancing it, replays the same
/// sequence.
pub fn get_references<'a>(node: impl Into<Node<'a>>) -> References<'a> {
    References {
        stack: vec![node.into()],
        function_bodies: false,
    }
}

/// Collect distinct reference names, in first-seen order.
pub fn ref_names<'a>(node: impl Into<Node<'a>>) -> IndexSet<String> {
    get_references(node).map(str::to_owned).collect()
}

/// Check if the node references the given name.
pub fn contains_ref<'a>(node: impl Into<Node<'a>>, name: &str) -> bool {
    get_references(node).any(|r| r == name)
}

/// Pull iterator over the names referenced by a node.
#[derive(Clone, Debug)]
pub struct References<'a> {
    /// Pending nodes; the top is visited next.
    stack: Vec<Node<'a>>,
    function_bodies: bool,
}

impl<'a> References<'a> {
    /// Also descend into function bodies, after their parameters.
    pub fn with_function_bodies(mut self) -> Self {
        self.function_bodies = true;
        self
    }

    fn push_expressions<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = &'a Expression>,
        I::IntoIter: DoubleEndedIterator,
    {
        self.stack
            .extend(items.into_iter().rev().map(Node::Expression));
    }

    /// Schedule the children of `expr`; returns the name it references itself.
    fn expand_expression(&mut self, expr: &'a Expression) -> Option<&'a str> {
        match expr {
            Expression::Literal(_) => None,
            Expression::Named(named) => {
                self.push_expressions(named.fields.iter().map(|f| &f.ty));
                Some(&named.name)
            }
            Expression::Intersection(e) => {
                self.push_expressions(&e.items);
                None
            }
            Expression::Union(e) => {
                self.push_expressions(&e.items);
                None
            }
            Expression::FieldAccess(e) => {
                self.stack.push(Node::Expression(&e.of));
                None
            }
            Expression::BuiltinFunction(e) => {
                self.push_expressions(&e.args);
                None
            }
            Expression::Match(e) => {
                for arm in e.arms.iter().rev() {
                    self.stack.push(Node::Expression(&arm.to));
                    self.stack.push(Node::Expression(&arm.pattern));
                }
                self.stack.push(Node::Expression(&e.of));
                None
            }
            Expression::Scope(e) => {
                self.stack.push(Node::Expression(&e.expression));
                self.stack
                    .extend(e.definitions.iter().rev().map(Node::Definition));
                None
            }
        }
    }

    fn expand_definition(&mut self, def: &'a Definition) {
        match def {
            Definition::Variable(d) => self.stack.push(Node::Expression(&d.value)),
            Definition::Struct(d) => self.push_expressions(d.fields.iter().map(|f| &f.ty)),
            Definition::Function(d) => {
                if self.function_bodies {
                    self.stack.push(Node::Expression(&d.value));
                }
                self.push_expressions(d.parameters.iter().map(|p| &p.ty));
            }
        }
    }
}

impl<'a> Iterator for References<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match node {
                Node::Expression(expr) => {
                    if let Some(name) = self.expand_expression(expr) {
                        return Some(name);
                    }
                }
                Node::Definition(def) => self.expand_definition(def),
            }
        }
        None
    }
}

impl std::iter::FusedIterator for References<'_> {}
