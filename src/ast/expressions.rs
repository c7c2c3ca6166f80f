//! Expression nodes of the AST.
//!
//! Expressions own their sub-expressions; no expression node is shared
//! between two parents. Name references are tagged with the kind of
//! symbol they refer to, set by the parser once it knows what the name
//! resolves to syntactically.

use std::fmt;

use crate::SrcPos;

use super::ast::{Ast, Child, ChildList, ExprId, Node, NodeRef, TypeId};

/// An expression node.
#[derive(Debug)]
pub enum Expr {
    Literal(LiteralExpr),
    Name(NameExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    Ternary(TernaryExpr),
    DirectCall(DirectCallExpr),
    IndirectCall(IndirectCallExpr),
    Index(IndexExpr),
    Member(MemberExpr),
    Aggregate(AggregateExpr),
    LValue(LValueExpr),
}

/// A literal constant value.
#[derive(Debug, Clone, PartialEq)]
pub enum LitValue {
    Int(i64),
    Float(f64),
    Str(String),
}

impl fmt::Display for LitValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LitValue::Int(v) => write!(f, "{v}"),
            LitValue::Float(v) => write!(f, "{v}"),
            LitValue::Str(v) => write!(f, "{v:?}"),
        }
    }
}

/// Literal expression carrying its value and literal type.
#[derive(Debug)]
pub struct LiteralExpr {
    pub pos: SrcPos,
    pub value: LitValue,
    pub ty: TypeId,
}

/// The kind of symbol a name expression refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Var,
    Const,
    Param,
    Function,
    Field,
    Property,
    Enum,
    Struct,
    Class,
    Exception,
}

impl NameKind {
    pub fn kind_name(&self) -> &'static str {
        match self {
            NameKind::Var => "VarNameExpr",
            NameKind::Const => "ConstNameExpr",
            NameKind::Param => "ParamNameExpr",
            NameKind::Function => "FunctionNameExpr",
            NameKind::Field => "FieldNameExpr",
            NameKind::Property => "PropertyNameExpr",
            NameKind::Enum => "EnumNameExpr",
            NameKind::Struct => "StructNameExpr",
            NameKind::Class => "ClassNameExpr",
            NameKind::Exception => "ExceptionNameExpr",
        }
    }
}

/// Reference to a declared symbol by name.
#[derive(Debug)]
pub struct NameExpr {
    pub pos: SrcPos,
    pub kind: NameKind,
    pub name: String,
}

/// The kind of a unary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryKind {
    Incr { is_post: bool },
    Decr { is_post: bool },
    Negate,
    Reference,
    Dereference,
    Unpack,
}

/// Unary operator applied to one operand.
#[derive(Debug)]
pub struct UnaryExpr {
    pub pos: SrcPos,
    pub kind: UnaryKind,
    pub operand: ExprId,
}

/// The family of a binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryKind {
    Mult,
    Add,
    Compare,
    And,
    Or,
}

/// Binary operator with its concrete operator token and in-place flag.
#[derive(Debug)]
pub struct BinaryExpr {
    pub pos: SrcPos,
    pub kind: BinaryKind,
    pub op: String,
    pub is_inplace: bool,
    pub left: ExprId,
    pub right: ExprId,
}

/// Conditional expression.
#[derive(Debug)]
pub struct TernaryExpr {
    pub pos: SrcPos,
    pub cond: ExprId,
    pub then_expr: ExprId,
    pub else_expr: ExprId,
}

/// Call of a function known by name.
#[derive(Debug)]
pub struct DirectCallExpr {
    pub pos: SrcPos,
    /// The callee; a function name expression.
    pub callee: ExprId,
    pub args: Vec<ExprId>,
}

/// Call through an arbitrary callable expression.
#[derive(Debug)]
pub struct IndirectCallExpr {
    pub pos: SrcPos,
    pub callee: ExprId,
    pub args: Vec<ExprId>,
}

/// Indexing of a base expression.
#[derive(Debug)]
pub struct IndexExpr {
    pub pos: SrcPos,
    pub base: ExprId,
    pub index: ExprId,
}

/// Member access on a base expression; the member is a name expression.
#[derive(Debug)]
pub struct MemberExpr {
    pub pos: SrcPos,
    pub base: ExprId,
    pub member: ExprId,
}

/// Aggregate initializer: `{ expr, expr, ... }`.
#[derive(Debug)]
pub struct AggregateExpr {
    pub pos: SrcPos,
    pub elements: Vec<ExprId>,
}

/// Marks an expression used as an assignment target.
#[derive(Debug)]
pub struct LValueExpr {
    pub pos: SrcPos,
    pub target: ExprId,
}

impl Expr {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::Literal(_) => "LiteralExpr",
            Expr::Name(e) => e.kind.kind_name(),
            Expr::Unary(e) => match e.kind {
                UnaryKind::Incr { .. } => "IncrUnaryExpr",
                UnaryKind::Decr { .. } => "DecrUnaryExpr",
                UnaryKind::Negate => "NegateUnaryExpr",
                UnaryKind::Reference => "ReferenceUnaryExpr",
                UnaryKind::Dereference => "DereferenceUnaryExpr",
                UnaryKind::Unpack => "UnpackUnaryExpr",
            },
            Expr::Binary(e) => match e.kind {
                BinaryKind::Mult => "MultBinaryExpr",
                BinaryKind::Add => "AddBinaryExpr",
                BinaryKind::Compare => "CompareBinaryExpr",
                BinaryKind::And => "AndBinaryExpr",
                BinaryKind::Or => "OrBinaryExpr",
            },
            Expr::Ternary(_) => "TernaryExpr",
            Expr::DirectCall(_) => "DirectCallExpr",
            Expr::IndirectCall(_) => "IndirectCallExpr",
            Expr::Index(_) => "IndexExpr",
            Expr::Member(_) => "MemberExpr",
            Expr::Aggregate(_) => "AggregateExpr",
            Expr::LValue(_) => "LValueExpr",
        }
    }

    /// The referenced name, for name expressions.
    pub fn name(&self) -> Option<&str> {
        match self {
            Expr::Name(e) => Some(&e.name),
            _ => None,
        }
    }
}

impl Node for Expr {
    fn pos(&self) -> &SrcPos {
        match self {
            Expr::Literal(e) => &e.pos,
            Expr::Name(e) => &e.pos,
            Expr::Unary(e) => &e.pos,
            Expr::Binary(e) => &e.pos,
            Expr::Ternary(e) => &e.pos,
            Expr::DirectCall(e) => &e.pos,
            Expr::IndirectCall(e) => &e.pos,
            Expr::Index(e) => &e.pos,
            Expr::Member(e) => &e.pos,
            Expr::Aggregate(e) => &e.pos,
            Expr::LValue(e) => &e.pos,
        }
    }

    fn title(&self, ast: &Ast) -> String {
        let kind = self.kind_name();
        match self {
            Expr::Literal(e) => format!(
                "{kind} :: {} : {}",
                e.value,
                ast.ty(e.ty).name().unwrap_or("<anon>")
            ),
            Expr::Name(e) => format!("{kind} :: {}", e.name),
            Expr::Unary(e) => match e.kind {
                UnaryKind::Incr { is_post } => {
                    if is_post {
                        format!("{kind} :: (expr)++")
                    } else {
                        format!("{kind} :: ++(expr)")
                    }
                }
                UnaryKind::Decr { is_post } => {
                    if is_post {
                        format!("{kind} :: (expr)--")
                    } else {
                        format!("{kind} :: --(expr)")
                    }
                }
                UnaryKind::Negate => format!("{kind} :: ~(expr)"),
                UnaryKind::Reference => format!("{kind} :: &(expr)"),
                UnaryKind::Dereference => format!("{kind} :: *(expr)"),
                UnaryKind::Unpack => kind.to_string(),
            },
            Expr::Binary(e) => {
                if e.is_inplace {
                    format!("{kind} :: (expr) {}= (expr)", e.op)
                } else {
                    format!("{kind} :: (expr) {} (expr)", e.op)
                }
            }
            Expr::Ternary(_) => format!("{kind} :: (expr) ? (expr) : (expr)"),
            Expr::DirectCall(e) => {
                let callee = ast.expr(e.callee).name().unwrap_or("(expr)");
                format!("{kind} :: {callee}(...) (Args: {})", e.args.len())
            }
            Expr::IndirectCall(e) => format!("{kind} :: (expr)(...) (Args: {})", e.args.len()),
            Expr::Index(_) => format!("{kind} :: (expr)[(expr)]"),
            Expr::Member(e) => {
                let member = ast.expr(e.member).name().unwrap_or("(expr)");
                format!("{kind} :: (expr).{member}")
            }
            Expr::Aggregate(_) => format!("{kind} :: {{(expr), ...}}"),
            Expr::LValue(_) => format!("{kind} :: (expr)"),
        }
    }

    fn children(&self, _ast: &Ast) -> Vec<Child> {
        let mut children = ChildList::new();
        match self {
            Expr::Literal(_) | Expr::Name(_) => {}
            Expr::Unary(e) => children.push(NodeRef::Expr(e.operand), "operand"),
            Expr::Binary(e) => {
                children.push(NodeRef::Expr(e.left), "left operand");
                children.push(NodeRef::Expr(e.right), "right operand");
            }
            Expr::Ternary(e) => {
                children.push(NodeRef::Expr(e.cond), "ternary condition");
                children.push(NodeRef::Expr(e.then_expr), "then expression");
                children.push(NodeRef::Expr(e.else_expr), "else expression");
            }
            Expr::DirectCall(e) => {
                for arg in &e.args {
                    children.push(NodeRef::Expr(*arg), "call argument expression");
                }
            }
            Expr::IndirectCall(e) => {
                children.push(NodeRef::Expr(e.callee), "callable expression");
                for arg in &e.args {
                    children.push(NodeRef::Expr(*arg), "call argument expression");
                }
            }
            Expr::Index(e) => {
                children.push(NodeRef::Expr(e.base), "base expression");
                children.push(NodeRef::Expr(e.index), "index expression");
            }
            Expr::Member(e) => children.push(NodeRef::Expr(e.base), "base expression"),
            Expr::Aggregate(e) => {
                for element in &e.elements {
                    children.push(NodeRef::Expr(*element), "aggregate element expression");
                }
            }
            Expr::LValue(e) => children.push(NodeRef::Expr(e.target), "L-value expression"),
        }
        children.finish()
    }
}
