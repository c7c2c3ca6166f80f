//! Core AST definitions: the node arena, typed node ids, and the shared
//! node capability used for traversal and printing.
//!
//! Every node of a compilation lives in one [`Ast`] arena, one vector per
//! node family. Nodes refer to each other with copyable typed ids; the
//! distinction between an owning reference (statements, expressions,
//! templates, each stored by exactly one parent) and a shared one (types
//! and type-classes, referenced freely) is a convention over those ids.

use std::borrow::Cow;

use crate::assembly::assembly::Module;
use crate::{SrcPos, MK_NODE_ID};

use super::decls::{Decl, Templ};
use super::expressions::Expr;
use super::scopes::Scope;
use super::statements::Stmt;
use super::tycls::Tycl;
use super::types::Type;

MK_NODE_ID!(
    /// Id of a declaration node.
    DeclId
);
MK_NODE_ID!(
    /// Id of a type node.
    TypeId
);
MK_NODE_ID!(
    /// Id of a type-class node.
    TyclId
);
MK_NODE_ID!(
    /// Id of a scope node.
    ScopeId
);
MK_NODE_ID!(
    /// Id of a statement node.
    StmtId
);
MK_NODE_ID!(
    /// Id of an expression node.
    ExprId
);
MK_NODE_ID!(
    /// Id of a template node.
    TemplId
);
MK_NODE_ID!(
    /// Id of a module node.
    ModuleId
);

/// Family-tagged reference to any node in the arena.
///
/// Used wherever a node has to be handled uniformly regardless of its
/// family: traversal, printing, and the values of scope symbol tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRef {
    Decl(DeclId),
    Type(TypeId),
    Tycl(TyclId),
    Scope(ScopeId),
    Stmt(StmtId),
    Expr(ExprId),
    Templ(TemplId),
    Module(ModuleId),
}

impl NodeRef {
    pub fn pos<'a>(&self, ast: &'a Ast) -> &'a SrcPos {
        match self {
            NodeRef::Decl(id) => ast.decl(*id).pos(),
            NodeRef::Type(id) => ast.ty(*id).pos(),
            NodeRef::Tycl(id) => ast.tycl(*id).pos(),
            NodeRef::Scope(id) => ast.scope(*id).pos(),
            NodeRef::Stmt(id) => ast.stmt(*id).pos(),
            NodeRef::Expr(id) => ast.expr(*id).pos(),
            NodeRef::Templ(id) => ast.templ(*id).pos(),
            NodeRef::Module(id) => ast.module(*id).pos(),
        }
    }

    pub fn title(&self, ast: &Ast) -> String {
        match self {
            NodeRef::Decl(id) => ast.decl(*id).title(ast),
            NodeRef::Type(id) => ast.ty(*id).title(ast),
            NodeRef::Tycl(id) => ast.tycl(*id).title(ast),
            NodeRef::Scope(id) => ast.scope(*id).title(ast),
            NodeRef::Stmt(id) => ast.stmt(*id).title(ast),
            NodeRef::Expr(id) => ast.expr(*id).title(ast),
            NodeRef::Templ(id) => ast.templ(*id).title(ast),
            NodeRef::Module(id) => ast.module(*id).title(ast),
        }
    }

    pub fn children(&self, ast: &Ast) -> Vec<Child> {
        match self {
            NodeRef::Decl(id) => ast.decl(*id).children(ast),
            NodeRef::Type(id) => ast.ty(*id).children(ast),
            NodeRef::Tycl(id) => ast.tycl(*id).children(ast),
            NodeRef::Scope(id) => ast.scope(*id).children(ast),
            NodeRef::Stmt(id) => ast.stmt(*id).children(ast),
            NodeRef::Expr(id) => ast.expr(*id).children(ast),
            NodeRef::Templ(id) => ast.templ(*id).children(ast),
            NodeRef::Module(id) => ast.module(*id).children(ast),
        }
    }
}

/// Shared, non-owning reference to the declared type of a declaration or
/// the base/parameter/result type of another type. Either a plain type
/// node or a type-class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeRef {
    Type(TypeId),
    Tycl(TyclId),
}

impl TypeRef {
    /// The referenced type's name; `None` for unnamed type nodes
    /// (pointers, arrays).
    pub fn name<'a>(&self, ast: &'a Ast) -> Option<&'a str> {
        match self {
            TypeRef::Type(id) => ast.ty(*id).name(),
            TypeRef::Tycl(id) => Some(ast.tycl(*id).name.as_str()),
        }
    }

    /// The referenced type's name for display purposes.
    pub fn display_name<'a>(&self, ast: &'a Ast) -> &'a str {
        self.name(ast).unwrap_or("<anon>")
    }

    pub fn node(&self) -> NodeRef {
        match self {
            TypeRef::Type(id) => NodeRef::Type(*id),
            TypeRef::Tycl(id) => NodeRef::Tycl(*id),
        }
    }
}

/// Value of a scope symbol table entry: a plain declaration, a type-class,
/// or a named type node (enum, alias, exception types).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolRef {
    Decl(DeclId),
    Tycl(TyclId),
    Type(TypeId),
}

impl SymbolRef {
    /// The declared name of this symbol; `None` for unnamed type nodes,
    /// which cannot be entered into a scope.
    pub fn name<'a>(&self, ast: &'a Ast) -> Option<&'a str> {
        match self {
            SymbolRef::Decl(id) => Some(ast.decl(*id).name()),
            SymbolRef::Tycl(id) => Some(ast.tycl(*id).name.as_str()),
            SymbolRef::Type(id) => ast.ty(*id).name(),
        }
    }

    pub fn node(&self) -> NodeRef {
        match self {
            SymbolRef::Decl(id) => NodeRef::Decl(*id),
            SymbolRef::Tycl(id) => NodeRef::Tycl(*id),
            SymbolRef::Type(id) => NodeRef::Type(*id),
        }
    }
}

/// One entry of a node's child list.
#[derive(Debug, Clone)]
pub struct Child {
    pub node: NodeRef,
    /// Semantic role of the child under its parent, rendered as an
    /// `as <role>` suffix by the printer.
    pub role: Option<Cow<'static, str>>,
    /// Whether this is the last child of its parent.
    pub last: bool,
}

/// Builder for child lists; `finish` marks the final entry as last.
#[derive(Debug, Default)]
pub struct ChildList {
    children: Vec<Child>,
}

impl ChildList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: NodeRef, role: impl Into<Cow<'static, str>>) {
        self.children.push(Child {
            node,
            role: Some(role.into()),
            last: false,
        });
    }

    pub fn push_unlabelled(&mut self, node: NodeRef) {
        self.children.push(Child {
            node,
            role: None,
            last: false,
        });
    }

    pub fn finish(mut self) -> Vec<Child> {
        if let Some(last) = self.children.last_mut() {
            last.last = true;
        }
        self.children
    }
}

/// Shared capability of every node kind.
///
/// - `pos`: the opaque source position recorded at construction
/// - `title`: a pure, deterministic one-line description derived only
///   from the node's own fields
/// - `children`: the fixed, ordered child list used for traversal and
///   printing, never for evaluation
pub trait Node {
    fn pos(&self) -> &SrcPos;
    fn title(&self, ast: &Ast) -> String;
    fn children(&self, ast: &Ast) -> Vec<Child>;
}

/// The node arena of one compilation.
///
/// The external parser allocates nodes bottom-up with the `alloc_*`
/// methods and wires them together through the returned ids. Nodes are
/// never removed individually; the whole arena is dropped at the end of
/// compilation.
#[derive(Debug, Default)]
pub struct Ast {
    decls: Vec<Decl>,
    types: Vec<Type>,
    tycls: Vec<Tycl>,
    scopes: Vec<Scope>,
    stmts: Vec<Stmt>,
    exprs: Vec<Expr>,
    templs: Vec<Templ>,
    modules: Vec<Module>,
}

impl Ast {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc_decl(&mut self, decl: Decl) -> DeclId {
        self.decls.push(decl);
        DeclId(self.decls.len() - 1)
    }

    pub fn decl(&self, id: DeclId) -> &Decl {
        &self.decls[id.0]
    }

    pub fn decl_mut(&mut self, id: DeclId) -> &mut Decl {
        &mut self.decls[id.0]
    }

    pub fn alloc_type(&mut self, ty: Type) -> TypeId {
        self.types.push(ty);
        TypeId(self.types.len() - 1)
    }

    pub fn ty(&self, id: TypeId) -> &Type {
        &self.types[id.0]
    }

    pub fn ty_mut(&mut self, id: TypeId) -> &mut Type {
        &mut self.types[id.0]
    }

    pub fn alloc_tycl(&mut self, tycl: Tycl) -> TyclId {
        self.tycls.push(tycl);
        TyclId(self.tycls.len() - 1)
    }

    pub fn tycl(&self, id: TyclId) -> &Tycl {
        &self.tycls[id.0]
    }

    pub fn tycl_mut(&mut self, id: TyclId) -> &mut Tycl {
        &mut self.tycls[id.0]
    }

    pub fn alloc_scope(&mut self, scope: Scope) -> ScopeId {
        self.scopes.push(scope);
        ScopeId(self.scopes.len() - 1)
    }

    pub fn scope(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.0]
    }

    pub fn scope_mut(&mut self, id: ScopeId) -> &mut Scope {
        &mut self.scopes[id.0]
    }

    pub fn alloc_stmt(&mut self, stmt: Stmt) -> StmtId {
        self.stmts.push(stmt);
        StmtId(self.stmts.len() - 1)
    }

    pub fn stmt(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.0]
    }

    pub fn stmt_mut(&mut self, id: StmtId) -> &mut Stmt {
        &mut self.stmts[id.0]
    }

    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        self.exprs.push(expr);
        ExprId(self.exprs.len() - 1)
    }

    pub fn expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.0]
    }

    pub fn expr_mut(&mut self, id: ExprId) -> &mut Expr {
        &mut self.exprs[id.0]
    }

    pub fn alloc_templ(&mut self, templ: Templ) -> TemplId {
        self.templs.push(templ);
        TemplId(self.templs.len() - 1)
    }

    pub fn templ(&self, id: TemplId) -> &Templ {
        &self.templs[id.0]
    }

    pub fn templ_mut(&mut self, id: TemplId) -> &mut Templ {
        &mut self.templs[id.0]
    }

    pub fn alloc_module(&mut self, module: Module) -> ModuleId {
        self.modules.push(module);
        ModuleId(self.modules.len() - 1)
    }

    pub fn module(&self, id: ModuleId) -> &Module {
        &self.modules[id.0]
    }

    pub fn module_mut(&mut self, id: ModuleId) -> &mut Module {
        &mut self.modules[id.0]
    }
}
