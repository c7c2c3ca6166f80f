//! Statement nodes of the AST.
//!
//! Statements own their child statements, expressions, and scopes; no
//! statement node is shared between two parents. Loop and switch
//! statements carry an optional label used by labeled `break`/`continue`.

use crate::SrcPos;

use super::ast::{Ast, Child, ChildList, DeclId, ExprId, Node, NodeRef, ScopeId, StmtId};
use super::expressions::Expr;

/// A statement node.
#[derive(Debug)]
pub enum Stmt {
    Assignment(AssignmentStmt),
    Expression(ExpressionStmt),
    Getter(GetterStmt),
    Setter(SetterStmt),
    IfThen(IfThenStmt),
    IfElse(IfElseStmt),
    While(WhileStmt),
    DoWhile(DoWhileStmt),
    DoUntil(DoUntilStmt),
    Repeat(RepeatStmt),
    For(ForStmt),
    ForEach(ForEachStmt),
    Switch(SwitchStmt),
    Case(CaseStmt),
    Try(TryStmt),
    ExceptClause(ExceptClauseStmt),
    Raise(RaiseStmt),
    Import(ImportStmt),
    Break(BreakStmt),
    Continue(ContinueStmt),
    Return(ReturnStmt),
}

/// Assignment of a value to an l-value target.
#[derive(Debug)]
pub struct AssignmentStmt {
    pub pos: SrcPos,
    pub target: ExprId,
    pub value: ExprId,
}

/// Expression evaluated for its effect (a call or an in/decrement).
#[derive(Debug)]
pub struct ExpressionStmt {
    pub pos: SrcPos,
    pub expr: ExprId,
}

/// Property getter body.
#[derive(Debug)]
pub struct GetterStmt {
    pub pos: SrcPos,
    pub scope: ScopeId,
}

/// Property setter body.
#[derive(Debug)]
pub struct SetterStmt {
    pub pos: SrcPos,
    pub scope: ScopeId,
}

/// Conditional without an else branch.
#[derive(Debug)]
pub struct IfThenStmt {
    pub pos: SrcPos,
    pub cond: ExprId,
    pub then_scope: ScopeId,
}

/// Conditional with both branches present.
#[derive(Debug)]
pub struct IfElseStmt {
    pub pos: SrcPos,
    pub cond: ExprId,
    pub then_scope: ScopeId,
    pub else_scope: ScopeId,
}

/// Pre-tested loop.
#[derive(Debug)]
pub struct WhileStmt {
    pub pos: SrcPos,
    pub cond: ExprId,
    pub scope: ScopeId,
    pub label: Option<String>,
}

/// Post-tested loop that continues while the condition holds.
#[derive(Debug)]
pub struct DoWhileStmt {
    pub pos: SrcPos,
    pub cond: ExprId,
    pub scope: ScopeId,
    pub label: Option<String>,
}

/// Post-tested loop that continues until the condition holds.
#[derive(Debug)]
pub struct DoUntilStmt {
    pub pos: SrcPos,
    pub cond: ExprId,
    pub scope: ScopeId,
    pub label: Option<String>,
}

/// Counted loop with a single counter declaration, stop expression, and
/// step assignment.
#[derive(Debug)]
pub struct RepeatStmt {
    pub pos: SrcPos,
    pub init: DeclId,
    pub stop: ExprId,
    pub step: StmtId,
    pub scope: ScopeId,
    pub label: Option<String>,
}

/// General for loop with any number of init declarations, stop
/// expressions, and step statements.
#[derive(Debug)]
pub struct ForStmt {
    pub pos: SrcPos,
    pub inits: Vec<DeclId>,
    pub stops: Vec<ExprId>,
    pub steps: Vec<StmtId>,
    pub scope: ScopeId,
    pub label: Option<String>,
}

/// Iteration over the elements of a container expression.
#[derive(Debug)]
pub struct ForEachStmt {
    pub pos: SrcPos,
    pub element: DeclId,
    pub container: ExprId,
    pub scope: ScopeId,
    pub label: Option<String>,
}

/// Multi-way branch over a name expression.
#[derive(Debug)]
pub struct SwitchStmt {
    pub pos: SrcPos,
    pub target: ExprId,
    pub cases: Vec<StmtId>,
    pub label: Option<String>,
}

/// One arm of a switch; `is_default` marks the fallback arm.
#[derive(Debug)]
pub struct CaseStmt {
    pub pos: SrcPos,
    pub values: Vec<ExprId>,
    pub scope: ScopeId,
    pub is_default: bool,
}

/// Protected block with its except clauses.
#[derive(Debug)]
pub struct TryStmt {
    pub pos: SrcPos,
    pub clauses: Vec<StmtId>,
    pub scope: ScopeId,
}

/// One except clause: the exception names it catches and its handler
/// scope.
#[derive(Debug)]
pub struct ExceptClauseStmt {
    pub pos: SrcPos,
    pub catches: Vec<ExprId>,
    pub scope: ScopeId,
}

/// Raises an exception by name.
#[derive(Debug)]
pub struct RaiseStmt {
    pub pos: SrcPos,
    pub exception: ExprId,
}

/// Module import marker; the imported module is wired up in the
/// assembly container by the build driver.
#[derive(Debug)]
pub struct ImportStmt {
    pub pos: SrcPos,
}

/// Break out of the innermost (or labeled) loop or switch.
#[derive(Debug)]
pub struct BreakStmt {
    pub pos: SrcPos,
    pub label: Option<String>,
}

/// Continue the innermost (or labeled) loop.
#[derive(Debug)]
pub struct ContinueStmt {
    pub pos: SrcPos,
    pub label: Option<String>,
}

/// Return from the enclosing function or method, with an optional value.
#[derive(Debug)]
pub struct ReturnStmt {
    pub pos: SrcPos,
    pub value: Option<ExprId>,
}

impl Stmt {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Stmt::Assignment(_) => "AssignmentStmt",
            Stmt::Expression(_) => "ExpressionStmt",
            Stmt::Getter(_) => "GetterStmt",
            Stmt::Setter(_) => "SetterStmt",
            Stmt::IfThen(_) => "IfThenStmt",
            Stmt::IfElse(_) => "IfElseStmt",
            Stmt::While(_) => "WhileStmt",
            Stmt::DoWhile(_) => "DoWhileStmt",
            Stmt::DoUntil(_) => "DoUntilStmt",
            Stmt::Repeat(_) => "RepeatStmt",
            Stmt::For(_) => "ForStmt",
            Stmt::ForEach(_) => "ForEachStmt",
            Stmt::Switch(_) => "SwitchStmt",
            Stmt::Case(_) => "CaseStmt",
            Stmt::Try(_) => "TryStmt",
            Stmt::ExceptClause(_) => "ExceptClauseStmt",
            Stmt::Raise(_) => "RaiseStmt",
            Stmt::Import(_) => "ImportStmt",
            Stmt::Break(_) => "BreakStmt",
            Stmt::Continue(_) => "ContinueStmt",
            Stmt::Return(_) => "ReturnStmt",
        }
    }

    /// The loop/switch label, for kinds that carry one.
    pub fn label(&self) -> Option<&str> {
        match self {
            Stmt::While(s) => s.label.as_deref(),
            Stmt::DoWhile(s) => s.label.as_deref(),
            Stmt::DoUntil(s) => s.label.as_deref(),
            Stmt::Repeat(s) => s.label.as_deref(),
            Stmt::For(s) => s.label.as_deref(),
            Stmt::ForEach(s) => s.label.as_deref(),
            Stmt::Switch(s) => s.label.as_deref(),
            _ => None,
        }
    }
}

fn labelled(kind: &str, label: Option<&str>) -> String {
    match label {
        Some(label) => format!("{kind} :: (Label: {label})"),
        None => kind.to_string(),
    }
}

impl Node for Stmt {
    fn pos(&self) -> &SrcPos {
        match self {
            Stmt::Assignment(s) => &s.pos,
            Stmt::Expression(s) => &s.pos,
            Stmt::Getter(s) => &s.pos,
            Stmt::Setter(s) => &s.pos,
            Stmt::IfThen(s) => &s.pos,
            Stmt::IfElse(s) => &s.pos,
            Stmt::While(s) => &s.pos,
            Stmt::DoWhile(s) => &s.pos,
            Stmt::DoUntil(s) => &s.pos,
            Stmt::Repeat(s) => &s.pos,
            Stmt::For(s) => &s.pos,
            Stmt::ForEach(s) => &s.pos,
            Stmt::Switch(s) => &s.pos,
            Stmt::Case(s) => &s.pos,
            Stmt::Try(s) => &s.pos,
            Stmt::ExceptClause(s) => &s.pos,
            Stmt::Raise(s) => &s.pos,
            Stmt::Import(s) => &s.pos,
            Stmt::Break(s) => &s.pos,
            Stmt::Continue(s) => &s.pos,
            Stmt::Return(s) => &s.pos,
        }
    }

    fn title(&self, ast: &Ast) -> String {
        let kind = self.kind_name();
        match self {
            Stmt::While(_)
            | Stmt::DoWhile(_)
            | Stmt::DoUntil(_)
            | Stmt::Repeat(_)
            | Stmt::For(_)
            | Stmt::ForEach(_) => labelled(kind, self.label()),
            Stmt::Switch(s) => {
                let target = match ast.expr(s.target) {
                    Expr::Name(n) => n.name.as_str(),
                    _ => "(expr)",
                };
                match &s.label {
                    Some(label) => format!("{kind} :: {target} (Label: {label})"),
                    None => format!("{kind} :: {target}"),
                }
            }
            Stmt::Case(s) => {
                if s.is_default {
                    format!("{kind} :: default")
                } else {
                    kind.to_string()
                }
            }
            Stmt::Break(s) => labelled(kind, s.label.as_deref()),
            Stmt::Continue(s) => labelled(kind, s.label.as_deref()),
            _ => kind.to_string(),
        }
    }

    fn children(&self, _ast: &Ast) -> Vec<Child> {
        let mut children = ChildList::new();
        match self {
            Stmt::Assignment(s) => {
                children.push(NodeRef::Expr(s.target), "target");
                children.push(NodeRef::Expr(s.value), "value");
            }
            Stmt::Expression(s) => children.push(NodeRef::Expr(s.expr), "expression"),
            Stmt::Getter(s) => children.push(NodeRef::Scope(s.scope), "statement body"),
            Stmt::Setter(s) => children.push(NodeRef::Scope(s.scope), "statement body"),
            Stmt::IfThen(s) => {
                children.push(NodeRef::Expr(s.cond), "condition");
                children.push(NodeRef::Scope(s.then_scope), "then scope");
            }
            Stmt::IfElse(s) => {
                children.push(NodeRef::Expr(s.cond), "condition");
                children.push(NodeRef::Scope(s.then_scope), "then scope");
                children.push(NodeRef::Scope(s.else_scope), "else scope");
            }
            Stmt::While(s) => {
                children.push(NodeRef::Expr(s.cond), "condition");
                children.push(NodeRef::Scope(s.scope), "loop scope");
            }
            Stmt::DoWhile(s) => {
                children.push(NodeRef::Expr(s.cond), "condition");
                children.push(NodeRef::Scope(s.scope), "loop scope");
            }
            Stmt::DoUntil(s) => {
                children.push(NodeRef::Expr(s.cond), "condition");
                children.push(NodeRef::Scope(s.scope), "loop scope");
            }
            Stmt::Repeat(s) => {
                children.push(NodeRef::Decl(s.init), "loop init");
                children.push(NodeRef::Expr(s.stop), "counter expression");
                children.push(NodeRef::Stmt(s.step), "loop step");
                children.push(NodeRef::Scope(s.scope), "loop scope");
            }
            Stmt::For(s) => {
                for init in &s.inits {
                    children.push(NodeRef::Decl(*init), "loop init");
                }
                for stop in &s.stops {
                    children.push(NodeRef::Expr(*stop), "loop condition");
                }
                for step in &s.steps {
                    children.push(NodeRef::Stmt(*step), "loop step");
                }
                children.push(NodeRef::Scope(s.scope), "loop scope");
            }
            Stmt::ForEach(s) => {
                children.push(NodeRef::Decl(s.element), "loop item");
                children.push(NodeRef::Expr(s.container), "loop container");
                children.push(NodeRef::Scope(s.scope), "loop scope");
            }
            Stmt::Switch(s) => {
                children.push(NodeRef::Expr(s.target), "target");
                for case in &s.cases {
                    children.push(NodeRef::Stmt(*case), "case");
                }
            }
            Stmt::Case(s) => {
                for value in &s.values {
                    children.push(NodeRef::Expr(*value), "target");
                }
                children.push(NodeRef::Scope(s.scope), "case scope");
            }
            Stmt::Try(s) => {
                for clause in &s.clauses {
                    children.push_unlabelled(NodeRef::Stmt(*clause));
                }
                children.push(NodeRef::Scope(s.scope), "try scope");
            }
            Stmt::ExceptClause(s) => {
                for exception in &s.catches {
                    children.push(NodeRef::Expr(*exception), "exception");
                }
                children.push(NodeRef::Scope(s.scope), "rescue scope");
            }
            Stmt::Raise(s) => children.push(NodeRef::Expr(s.exception), "exception"),
            Stmt::Import(_) => {}
            Stmt::Break(_) => {}
            Stmt::Continue(_) => {}
            Stmt::Return(s) => {
                if let Some(value) = s.value {
                    children.push(NodeRef::Expr(value), "return value");
                }
            }
        }
        children.finish()
    }
}
