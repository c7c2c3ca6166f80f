//! Type-class nodes: structures, interfaces, classes, and singletons.
//!
//! A type-class aggregates four member buckets (fields, properties,
//! methods, and operator-overload methods) behind one combined
//! namespace. Member names must be unique across all four buckets, and
//! the combined `members` list records declaration order across buckets,
//! which is the order used for iteration and printing.

use indexmap::IndexMap;

use crate::SrcPos;

use super::ast::{Ast, Child, ChildList, DeclId, Node, NodeRef, TyclId};
use super::decls::Decl;

/// A type-class node.
#[derive(Debug)]
pub struct Tycl {
    pub pos: SrcPos,
    pub name: String,
    pub exports: bool,
    pub kind: TyclKind,
    pub fields: IndexMap<String, DeclId>,
    pub properties: IndexMap<String, DeclId>,
    pub methods: IndexMap<String, DeclId>,
    pub operators: IndexMap<String, DeclId>,
    /// Combined member names across all four buckets, in declaration
    /// order. The authoritative iteration order.
    pub members: Vec<String>,
}

/// The concrete kind of a type-class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TyclKind {
    Structure,
    Interface,
    Class { base: Option<TyclId> },
    Singleton,
}

impl Tycl {
    /// A new type-class with empty member buckets.
    pub fn new(pos: SrcPos, name: impl Into<String>, exports: bool, kind: TyclKind) -> Self {
        Tycl {
            pos,
            name: name.into(),
            exports,
            kind,
            fields: IndexMap::new(),
            properties: IndexMap::new(),
            methods: IndexMap::new(),
            operators: IndexMap::new(),
            members: Vec::new(),
        }
    }

    /// Whether `name` is a member of this type-class, in any bucket.
    pub fn contains(&self, name: &str) -> bool {
        self.members.iter().any(|m| m == name)
    }

    /// Looks up a member by name across all four buckets.
    pub fn get(&self, name: &str) -> Option<DeclId> {
        self.fields
            .get(name)
            .or_else(|| self.properties.get(name))
            .or_else(|| self.methods.get(name))
            .or_else(|| self.operators.get(name))
            .copied()
    }

    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            TyclKind::Structure => "StructureTycl",
            TyclKind::Interface => "InterfaceTycl",
            TyclKind::Class { .. } => "ClassTycl",
            TyclKind::Singleton => "SingletonTycl",
        }
    }
}

impl Ast {
    /// Registers a member declaration into a type-class.
    ///
    /// Fails without mutation when the member's name is already taken in
    /// the combined namespace, or when the declaration is not a field,
    /// property, or method. Methods with the operator flag go into the
    /// operator bucket.
    pub fn declare_member(&mut self, tycl: TyclId, member: DeclId) -> bool {
        enum Bucket {
            Field,
            Property,
            Method,
            Operator,
        }

        let (name, bucket) = match self.decl(member) {
            Decl::Field(f) => (f.name.clone(), Bucket::Field),
            Decl::Property(p) => (p.name.clone(), Bucket::Property),
            Decl::Method(m) => {
                if m.is_operator {
                    (m.name.clone(), Bucket::Operator)
                } else {
                    (m.name.clone(), Bucket::Method)
                }
            }
            _ => return false,
        };

        let t = self.tycl_mut(tycl);
        if t.contains(&name) {
            return false;
        }

        let bucket = match bucket {
            Bucket::Field => &mut t.fields,
            Bucket::Property => &mut t.properties,
            Bucket::Method => &mut t.methods,
            Bucket::Operator => &mut t.operators,
        };
        bucket.insert(name.clone(), member);
        t.members.push(name);
        true
    }
}

impl Node for Tycl {
    fn pos(&self) -> &SrcPos {
        &self.pos
    }

    fn title(&self, ast: &Ast) -> String {
        let exp = if self.exports { "[exp] " } else { "" };
        match self.kind {
            TyclKind::Class { base: Some(base) } => format!(
                "{exp}{} :: {} (Base: {})",
                self.kind_name(),
                self.name,
                ast.tycl(base).name
            ),
            _ => format!("{exp}{} :: {}", self.kind_name(), self.name),
        }
    }

    fn children(&self, _ast: &Ast) -> Vec<Child> {
        let mut children = ChildList::new();
        for name in &self.members {
            if let Some(&id) = self.fields.get(name) {
                children.push(NodeRef::Decl(id), "field");
            } else if let Some(&id) = self.properties.get(name) {
                children.push(NodeRef::Decl(id), "property");
            } else if let Some(&id) = self.methods.get(name) {
                children.push(NodeRef::Decl(id), "method");
            } else if let Some(&id) = self.operators.get(name) {
                children.push(NodeRef::Decl(id), "operator overload");
            }
        }
        children.finish()
    }
}
