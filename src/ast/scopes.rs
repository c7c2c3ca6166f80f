//! Scope nodes and lexical symbol resolution.
//!
//! Scopes form a tree rooted at a module scope: each scope holds the id
//! of its immediately enclosing scope, and name/label lookups walk that
//! chain outward. A scope owns two disjoint namespaces, a declarations
//! map and a labels map, both insertion-ordered since their iteration
//! order feeds deterministic diagnostics and the later layout pass.
//! Scopes never copy or merge declaration maps; lookup walks the chain
//! at O(depth) per call.

use indexmap::IndexMap;

use crate::SrcPos;

use super::ast::{Ast, Child, ChildList, Node, NodeRef, ScopeId, StmtId, SymbolRef};

/// A scope node.
#[derive(Debug)]
pub struct Scope {
    pub pos: SrcPos,
    pub kind: ScopeKind,
    /// The immediately enclosing scope; `None` only for a module scope.
    pub enclosing: Option<ScopeId>,
    pub declarations: IndexMap<String, SymbolRef>,
    pub labels: IndexMap<String, StmtId>,
    /// Ordered statement list. Always empty for module scopes, which are
    /// not executable.
    pub statements: Vec<StmtId>,
}

/// The concrete kind of a scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    Module,
    Function,
    Method,
    Property,
    Loop,
    Case,
    Try,
    Basic,
}

impl ScopeKind {
    /// Whether scopes of this kind carry statements.
    pub fn is_executable(&self) -> bool {
        !matches!(self, ScopeKind::Module)
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            ScopeKind::Module => "ModuleScope",
            ScopeKind::Function => "FunctionScope",
            ScopeKind::Method => "MethodScope",
            ScopeKind::Property => "PropertyScope",
            ScopeKind::Loop => "LoopScope",
            ScopeKind::Case => "CaseScope",
            ScopeKind::Try => "TryScope",
            ScopeKind::Basic => "BasicScope",
        }
    }
}

impl Scope {
    /// A new, empty scope nested in `enclosing`.
    pub fn new(pos: SrcPos, kind: ScopeKind, enclosing: Option<ScopeId>) -> Self {
        Scope {
            pos,
            kind,
            enclosing,
            declarations: IndexMap::new(),
            labels: IndexMap::new(),
            statements: Vec::new(),
        }
    }
}

impl Ast {
    /// Whether `name` is declared in `scope` itself. No chain walk.
    pub fn has_declared(&self, scope: ScopeId, name: &str) -> bool {
        self.scope(scope).declarations.contains_key(name)
    }

    /// Whether `name` is declared in `scope` or any enclosing scope.
    pub fn name_exists(&self, scope: ScopeId, name: &str) -> bool {
        self.get_name(scope, name).is_some()
    }

    /// The nearest declaration of `name`, walking from `scope` outward.
    /// Inner declarations shadow outer ones of the same name.
    pub fn get_name(&self, scope: ScopeId, name: &str) -> Option<SymbolRef> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let s = self.scope(id);
            if let Some(&symbol) = s.declarations.get(name) {
                return Some(symbol);
            }
            current = s.enclosing;
        }
        None
    }

    /// Registers `symbol` in `scope`'s own declarations map.
    ///
    /// Fails without mutation when the symbol is unnamed (pointer/array
    /// type nodes) or when the name is already declared in this scope.
    /// Shadowing an outer scope's declaration is always permitted.
    /// Insertion order is preserved and observable.
    pub fn declare(&mut self, scope: ScopeId, symbol: SymbolRef) -> bool {
        let Some(name) = symbol.name(self).map(str::to_owned) else {
            return false;
        };
        let s = self.scope_mut(scope);
        if s.declarations.contains_key(&name) {
            return false;
        }
        s.declarations.insert(name, symbol);
        true
    }

    /// The nearest scope (including `scope` itself) whose kind is one of
    /// `kinds`, walking outward; `None` when the root is reached without
    /// a match. This is how a later pass checks that `break`, `continue`
    /// or `return` sit inside a syntactically valid construct.
    pub fn find_scope(&self, scope: ScopeId, kinds: &[ScopeKind]) -> Option<ScopeId> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let s = self.scope(id);
            if kinds.contains(&s.kind) {
                return Some(id);
            }
            current = s.enclosing;
        }
        None
    }

    /// Whether `label` is defined in `scope` or any enclosing scope. The
    /// label namespace is disjoint from declarations.
    pub fn has_label(&self, scope: ScopeId, label: &str) -> bool {
        self.get_label(scope, label).is_some()
    }

    /// Registers `label` in `scope`, targeting `target`. Fails without
    /// mutation when the label is already defined in this scope.
    pub fn define_label(&mut self, scope: ScopeId, label: &str, target: StmtId) -> bool {
        let s = self.scope_mut(scope);
        if s.labels.contains_key(label) {
            return false;
        }
        s.labels.insert(label.to_string(), target);
        true
    }

    /// The statement targeted by the nearest definition of `label`,
    /// walking from `scope` outward.
    pub fn get_label(&self, scope: ScopeId, label: &str) -> Option<StmtId> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let s = self.scope(id);
            if let Some(&target) = s.labels.get(label) {
                return Some(target);
            }
            current = s.enclosing;
        }
        None
    }

    /// Appends a statement to an executable scope. Fails without
    /// mutation on module scopes.
    pub fn add_statement(&mut self, scope: ScopeId, stmt: StmtId) -> bool {
        let s = self.scope_mut(scope);
        if !s.kind.is_executable() {
            return false;
        }
        s.statements.push(stmt);
        true
    }
}

impl Node for Scope {
    fn pos(&self) -> &SrcPos {
        &self.pos
    }

    fn title(&self, _ast: &Ast) -> String {
        self.kind.kind_name().to_string()
    }

    fn children(&self, _ast: &Ast) -> Vec<Child> {
        let mut children = ChildList::new();
        for symbol in self.declarations.values() {
            children.push(symbol.node(), "declaration");
        }
        for stmt in &self.statements {
            children.push(NodeRef::Stmt(*stmt), "statement");
        }
        children.finish()
    }
}
