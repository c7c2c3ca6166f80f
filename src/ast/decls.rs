//! Declaration nodes of the AST.
//!
//! A declaration binds a name to storage, a constant, a callable, or a
//! type-class member. Declarations are registered into scopes (plain
//! declarations) or type-classes (fields, properties, methods) by the
//! parser; storage-bearing kinds carry a [`DeclSlot`] recording their
//! declaration order for the later layout pass.

use indexmap::IndexMap;

use crate::{DeclSlot, SrcPos};

use super::ast::{
    Ast, Child, ChildList, DeclId, ExprId, Node, NodeRef, ScopeId, StmtId, TemplId, TyclId, TypeRef,
};

/// A declaration node.
#[derive(Debug)]
pub enum Decl {
    Var(VarDecl),
    Const(ConstDecl),
    Enum(EnumDecl),
    Function(FunctionDecl),
    Param(ParamDecl),
    Field(FieldDecl),
    Property(PropertyDecl),
    Method(MethodDecl),
}

/// Variable declaration with an optional initializer.
#[derive(Debug)]
pub struct VarDecl {
    pub pos: SrcPos,
    pub name: String,
    pub ty: TypeRef,
    pub exports: bool,
    pub value: Option<ExprId>,
    pub slot: DeclSlot,
}

/// Constant declaration; the value expression is required.
#[derive(Debug)]
pub struct ConstDecl {
    pub pos: SrcPos,
    pub name: String,
    pub ty: TypeRef,
    pub exports: bool,
    pub value: ExprId,
}

/// Enumerator constant of an enum type. Exports follow the enum type's
/// export flag.
#[derive(Debug)]
pub struct EnumDecl {
    pub pos: SrcPos,
    pub name: String,
    pub ty: TypeRef,
    pub exports: bool,
    pub value: ExprId,
}

/// Function declaration owning its parameter map and body scope.
///
/// `defined` and `template` start out unset; the external resolution pass
/// flips `defined` when it sees the function's definition and attaches a
/// template for generic functions.
#[derive(Debug)]
pub struct FunctionDecl {
    pub pos: SrcPos,
    pub name: String,
    pub ty: TypeRef,
    pub exports: bool,
    pub slot: DeclSlot,
    pub params: IndexMap<String, DeclId>,
    pub scope: ScopeId,
    pub defined: bool,
    pub template: Option<TemplId>,
}

/// Parameter declaration with an optional default value.
#[derive(Debug)]
pub struct ParamDecl {
    pub pos: SrcPos,
    pub name: String,
    pub ty: TypeRef,
    pub exports: bool,
    pub slot: DeclSlot,
    pub has_default: bool,
    pub default_value: Option<ExprId>,
}

/// Field member of a type-class.
#[derive(Debug)]
pub struct FieldDecl {
    pub pos: SrcPos,
    pub name: String,
    pub ty: TypeRef,
    pub exports: bool,
    pub owner: TyclId,
    pub slot: DeclSlot,
    pub has_default: bool,
    pub default_value: Option<ExprId>,
}

/// Property member of a type-class; the getter and setter statements are
/// attached after construction and either may be absent.
#[derive(Debug)]
pub struct PropertyDecl {
    pub pos: SrcPos,
    pub name: String,
    pub ty: TypeRef,
    pub exports: bool,
    pub owner: TyclId,
    pub getter: Option<StmtId>,
    pub setter: Option<StmtId>,
}

/// Method member of a type-class; `is_operator` files it into the
/// operator-overload bucket of its owner.
#[derive(Debug)]
pub struct MethodDecl {
    pub pos: SrcPos,
    pub name: String,
    pub ty: TypeRef,
    pub exports: bool,
    pub owner: TyclId,
    pub slot: DeclSlot,
    pub params: IndexMap<String, DeclId>,
    pub scope: ScopeId,
    pub is_operator: bool,
    pub defined: bool,
}

impl Decl {
    pub fn name(&self) -> &str {
        match self {
            Decl::Var(d) => &d.name,
            Decl::Const(d) => &d.name,
            Decl::Enum(d) => &d.name,
            Decl::Function(d) => &d.name,
            Decl::Param(d) => &d.name,
            Decl::Field(d) => &d.name,
            Decl::Property(d) => &d.name,
            Decl::Method(d) => &d.name,
        }
    }

    pub fn ty(&self) -> TypeRef {
        match self {
            Decl::Var(d) => d.ty,
            Decl::Const(d) => d.ty,
            Decl::Enum(d) => d.ty,
            Decl::Function(d) => d.ty,
            Decl::Param(d) => d.ty,
            Decl::Field(d) => d.ty,
            Decl::Property(d) => d.ty,
            Decl::Method(d) => d.ty,
        }
    }

    pub fn exports(&self) -> bool {
        match self {
            Decl::Var(d) => d.exports,
            Decl::Const(d) => d.exports,
            Decl::Enum(d) => d.exports,
            Decl::Function(d) => d.exports,
            Decl::Param(d) => d.exports,
            Decl::Field(d) => d.exports,
            Decl::Property(d) => d.exports,
            Decl::Method(d) => d.exports,
        }
    }

    /// The declaration slot, for storage-bearing kinds.
    pub fn slot(&self) -> Option<DeclSlot> {
        match self {
            Decl::Var(d) => Some(d.slot),
            Decl::Function(d) => Some(d.slot),
            Decl::Param(d) => Some(d.slot),
            Decl::Field(d) => Some(d.slot),
            Decl::Method(d) => Some(d.slot),
            Decl::Const(_) | Decl::Enum(_) | Decl::Property(_) => None,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Decl::Var(_) => "VarDecl",
            Decl::Const(_) => "ConstDecl",
            Decl::Enum(_) => "EnumDecl",
            Decl::Function(_) => "FunctionDecl",
            Decl::Param(_) => "ParamDecl",
            Decl::Field(_) => "FieldDecl",
            Decl::Property(_) => "PropertyDecl",
            Decl::Method(_) => "MethodDecl",
        }
    }

    pub fn as_function(&self) -> Option<&FunctionDecl> {
        match self {
            Decl::Function(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_function_mut(&mut self) -> Option<&mut FunctionDecl> {
        match self {
            Decl::Function(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_method(&self) -> Option<&MethodDecl> {
        match self {
            Decl::Method(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_method_mut(&mut self) -> Option<&mut MethodDecl> {
        match self {
            Decl::Method(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_property_mut(&mut self) -> Option<&mut PropertyDecl> {
        match self {
            Decl::Property(d) => Some(d),
            _ => None,
        }
    }

    fn exp_prefix(&self) -> &'static str {
        if self.exports() {
            "[exp] "
        } else {
            ""
        }
    }
}

impl Node for Decl {
    fn pos(&self) -> &SrcPos {
        match self {
            Decl::Var(d) => &d.pos,
            Decl::Const(d) => &d.pos,
            Decl::Enum(d) => &d.pos,
            Decl::Function(d) => &d.pos,
            Decl::Param(d) => &d.pos,
            Decl::Field(d) => &d.pos,
            Decl::Property(d) => &d.pos,
            Decl::Method(d) => &d.pos,
        }
    }

    fn title(&self, ast: &Ast) -> String {
        let exp = self.exp_prefix();
        let kind = self.kind_name();
        let name = self.name();
        let ty = self.ty().display_name(ast);
        match self {
            Decl::Var(d) => format!("{exp}{kind} :: {name} : {ty} (Offs: {})", d.slot.index),
            Decl::Const(_) => format!("{exp}{kind} :: {name} : {ty}"),
            Decl::Enum(_) => format!("{exp}{kind} :: {name} : {ty}"),
            Decl::Function(d) => {
                format!("{exp}{kind} :: {name} : {ty} (Params: {})", d.params.len())
            }
            Decl::Param(d) => format!("{kind} :: {name} : {ty} (Offs: {})", d.slot.index),
            Decl::Field(d) => format!("{kind} :: {name} : {ty} (Offs: {})", d.slot.index),
            Decl::Property(_) => format!("{exp}{kind} :: {name} : {ty}"),
            Decl::Method(d) => format!("{kind} :: {name} : {ty} (Params: {})", d.params.len()),
        }
    }

    fn children(&self, _ast: &Ast) -> Vec<Child> {
        let mut children = ChildList::new();
        match self {
            Decl::Var(d) => {
                if let Some(value) = d.value {
                    children.push(NodeRef::Expr(value), "value");
                }
            }
            Decl::Const(d) => children.push(NodeRef::Expr(d.value), "value"),
            Decl::Enum(d) => children.push(NodeRef::Expr(d.value), "value"),
            Decl::Function(d) => {
                if let Some(template) = d.template {
                    children.push(NodeRef::Templ(template), "template");
                }
                for (i, param) in d.params.values().enumerate() {
                    children.push(NodeRef::Decl(*param), format!("param {i}"));
                }
                children.push(NodeRef::Scope(d.scope), "body");
            }
            Decl::Param(d) => {
                if d.has_default {
                    if let Some(value) = d.default_value {
                        children.push(NodeRef::Expr(value), "default value");
                    }
                }
            }
            Decl::Field(d) => {
                if d.has_default {
                    if let Some(value) = d.default_value {
                        children.push(NodeRef::Expr(value), "default value");
                    }
                }
            }
            Decl::Property(d) => {
                if let Some(getter) = d.getter {
                    children.push(NodeRef::Stmt(getter), "getter");
                }
                if let Some(setter) = d.setter {
                    children.push(NodeRef::Stmt(setter), "setter");
                }
            }
            Decl::Method(d) => {
                for (i, param) in d.params.values().enumerate() {
                    children.push(NodeRef::Decl(*param), format!("param {i}"));
                }
                children.push(NodeRef::Scope(d.scope), "body");
            }
        }
        children.finish()
    }
}

/// Template data of a generic function, attached to a [`FunctionDecl`]
/// by the external resolution pass.
#[derive(Debug)]
pub struct Templ {
    pub pos: SrcPos,
    /// Declared type parameter names, in declaration order.
    pub typenames: Vec<String>,
    /// Size expressions keyed by type parameter name.
    pub sizes: IndexMap<String, ExprId>,
    /// The type-class the template specializes over, once known.
    pub subject: Option<TyclId>,
}

impl Node for Templ {
    fn pos(&self) -> &SrcPos {
        &self.pos
    }

    fn title(&self, _ast: &Ast) -> String {
        format!("Templ :: <{}>", self.typenames.join(", "))
    }

    fn children(&self, _ast: &Ast) -> Vec<Child> {
        Vec::new()
    }
}
