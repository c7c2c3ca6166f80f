//! Unit tests for the AST module.
//!
//! Covers the node taxonomy (titles, child lists), the scope chain with
//! symbol and label resolution, and the type-class member registry.

use crate::ast::ast::{Ast, Node, NodeRef, SymbolRef, TypeId, TypeRef};
use crate::ast::decls::{Decl, FieldDecl, MethodDecl, PropertyDecl, VarDecl};
use crate::ast::expressions::{BinaryExpr, BinaryKind, Expr, LitValue, LiteralExpr, NameExpr, NameKind};
use crate::ast::scopes::{Scope, ScopeKind};
use crate::ast::statements::{Stmt, WhileStmt};
use crate::ast::tycls::{Tycl, TyclKind};
use crate::ast::types::{EnumType, PointerType, Type};
use crate::{DeclSlot, SrcPos};

use super::ast::{DeclId, ScopeId, TyclId};

fn i32_type(ast: &mut Ast) -> TypeId {
    ast.alloc_primitive(SrcPos::null(), "i32").unwrap()
}

fn var_decl(ast: &mut Ast, name: &str, ty: TypeId, index: usize) -> DeclId {
    ast.alloc_decl(Decl::Var(VarDecl {
        pos: SrcPos::null(),
        name: name.to_string(),
        ty: TypeRef::Type(ty),
        exports: false,
        value: None,
        slot: DeclSlot::new(index),
    }))
}

fn module_scope(ast: &mut Ast) -> ScopeId {
    ast.alloc_scope(Scope::new(SrcPos::null(), ScopeKind::Module, None))
}

fn field_decl(ast: &mut Ast, name: &str, ty: TypeId, owner: TyclId, index: usize) -> DeclId {
    ast.alloc_decl(Decl::Field(FieldDecl {
        pos: SrcPos::null(),
        name: name.to_string(),
        ty: TypeRef::Type(ty),
        exports: false,
        owner,
        slot: DeclSlot::new(index),
        has_default: false,
        default_value: None,
    }))
}

fn method_decl(
    ast: &mut Ast,
    name: &str,
    ty: TypeId,
    owner: TyclId,
    is_operator: bool,
) -> DeclId {
    let scope = ast.alloc_scope(Scope::new(SrcPos::null(), ScopeKind::Method, None));
    ast.alloc_decl(Decl::Method(MethodDecl {
        pos: SrcPos::null(),
        name: name.to_string(),
        ty: TypeRef::Type(ty),
        exports: false,
        owner,
        slot: DeclSlot::new(0),
        params: indexmap::IndexMap::new(),
        scope,
        is_operator,
        defined: false,
    }))
}

#[test]
fn test_same_scope_redeclaration_fails() {
    let mut ast = Ast::new();
    let i32 = i32_type(&mut ast);
    let scope = module_scope(&mut ast);

    let first = var_decl(&mut ast, "x", i32, 0);
    let second = var_decl(&mut ast, "x", i32, 1);

    assert!(ast.declare(scope, SymbolRef::Decl(first)));
    assert!(!ast.declare(scope, SymbolRef::Decl(second)));

    // The first declaration stays in place and the count grew by one.
    assert_eq!(ast.scope(scope).declarations.len(), 1);
    assert_eq!(ast.get_name(scope, "x"), Some(SymbolRef::Decl(first)));
}

#[test]
fn test_outer_declaration_visible_from_inner_scope() {
    let mut ast = Ast::new();
    let i32 = i32_type(&mut ast);
    let outer = module_scope(&mut ast);
    let inner = ast.alloc_scope(Scope::new(SrcPos::null(), ScopeKind::Basic, Some(outer)));

    let n = var_decl(&mut ast, "n", i32, 0);
    assert!(ast.declare(outer, SymbolRef::Decl(n)));

    assert!(ast.name_exists(inner, "n"));
    assert!(!ast.has_declared(inner, "n"));
    assert_eq!(ast.get_name(inner, "n"), Some(SymbolRef::Decl(n)));
}

#[test]
fn test_inner_declaration_shadows_outer() {
    let mut ast = Ast::new();
    let i32 = i32_type(&mut ast);
    let outer = module_scope(&mut ast);
    let inner = ast.alloc_scope(Scope::new(SrcPos::null(), ScopeKind::Basic, Some(outer)));

    let outer_n = var_decl(&mut ast, "n", i32, 0);
    let inner_n = var_decl(&mut ast, "n", i32, 0);
    assert!(ast.declare(outer, SymbolRef::Decl(outer_n)));
    assert!(ast.declare(inner, SymbolRef::Decl(inner_n)));

    assert_eq!(ast.get_name(inner, "n"), Some(SymbolRef::Decl(inner_n)));
    assert_eq!(ast.get_name(outer, "n"), Some(SymbolRef::Decl(outer_n)));
}

#[test]
fn test_declare_accepts_tycls_and_named_types() {
    let mut ast = Ast::new();
    let i32 = i32_type(&mut ast);
    let scope = module_scope(&mut ast);

    let point = ast.alloc_tycl(Tycl::new(SrcPos::null(), "Point", false, TyclKind::Structure));
    let color = ast.alloc_type(Type::Enum(EnumType {
        pos: SrcPos::null(),
        name: "Color".to_string(),
        base: TypeRef::Type(i32),
        is_flagset: false,
        exports: false,
    }));

    assert!(ast.declare(scope, SymbolRef::Tycl(point)));
    assert!(ast.declare(scope, SymbolRef::Type(color)));
    assert_eq!(ast.get_name(scope, "Point"), Some(SymbolRef::Tycl(point)));
    assert_eq!(ast.get_name(scope, "Color"), Some(SymbolRef::Type(color)));
}

#[test]
fn test_declare_rejects_unnamed_type() {
    let mut ast = Ast::new();
    let i32 = i32_type(&mut ast);
    let scope = module_scope(&mut ast);

    let ptr = ast.alloc_type(Type::Pointer(PointerType {
        pos: SrcPos::null(),
        base: TypeRef::Type(i32),
    }));

    assert!(!ast.declare(scope, SymbolRef::Type(ptr)));
    assert!(ast.scope(scope).declarations.is_empty());
}

#[test]
fn test_find_scope_nearest_matching_kind() {
    let mut ast = Ast::new();
    let module = module_scope(&mut ast);
    let function = ast.alloc_scope(Scope::new(SrcPos::null(), ScopeKind::Function, Some(module)));
    let lp = ast.alloc_scope(Scope::new(SrcPos::null(), ScopeKind::Loop, Some(function)));
    let tr = ast.alloc_scope(Scope::new(SrcPos::null(), ScopeKind::Try, Some(lp)));

    assert_eq!(ast.find_scope(tr, &[ScopeKind::Loop]), Some(lp));
    assert_eq!(ast.find_scope(tr, &[ScopeKind::Function]), Some(function));
    assert_eq!(
        ast.find_scope(tr, &[ScopeKind::Loop, ScopeKind::Function]),
        Some(lp)
    );
    assert_eq!(ast.find_scope(tr, &[ScopeKind::Try]), Some(tr));
    assert_eq!(ast.find_scope(tr, &[ScopeKind::Case]), None);
}

#[test]
fn test_labels_are_disjoint_from_declarations() {
    let mut ast = Ast::new();
    let i32 = i32_type(&mut ast);
    let module = module_scope(&mut ast);
    let lp = ast.alloc_scope(Scope::new(SrcPos::null(), ScopeKind::Loop, Some(module)));

    let cond = ast.alloc_expr(Expr::Literal(LiteralExpr {
        pos: SrcPos::null(),
        value: LitValue::Int(1),
        ty: i32,
    }));
    let while_stmt = ast.alloc_stmt(Stmt::While(WhileStmt {
        pos: SrcPos::null(),
        cond,
        scope: lp,
        label: Some("outer".to_string()),
    }));

    let outer_var = var_decl(&mut ast, "outer", i32, 0);
    assert!(ast.declare(module, SymbolRef::Decl(outer_var)));
    assert!(ast.define_label(module, "outer", while_stmt));

    // Same name, two namespaces, no interference.
    assert!(ast.has_label(lp, "outer"));
    assert_eq!(ast.get_label(lp, "outer"), Some(while_stmt));
    assert_eq!(ast.get_name(lp, "outer"), Some(SymbolRef::Decl(outer_var)));

    // Same-scope label redefinition fails.
    assert!(!ast.define_label(module, "outer", while_stmt));
}

#[test]
fn test_module_scope_refuses_statements() {
    let mut ast = Ast::new();
    let i32 = i32_type(&mut ast);
    let module = module_scope(&mut ast);
    let basic = ast.alloc_scope(Scope::new(SrcPos::null(), ScopeKind::Basic, Some(module)));

    let expr = ast.alloc_expr(Expr::Literal(LiteralExpr {
        pos: SrcPos::null(),
        value: LitValue::Int(0),
        ty: i32,
    }));
    let stmt = ast.alloc_stmt(Stmt::Expression(crate::ast::statements::ExpressionStmt {
        pos: SrcPos::null(),
        expr,
    }));

    assert!(!ast.add_statement(module, stmt));
    assert!(ast.scope(module).statements.is_empty());
    assert!(ast.add_statement(basic, stmt));
    assert_eq!(ast.scope(basic).statements.len(), 1);
}

#[test]
fn test_tycl_member_namespace_is_combined() {
    let mut ast = Ast::new();
    let i32 = i32_type(&mut ast);
    let tycl = ast.alloc_tycl(Tycl::new(SrcPos::null(), "Point", false, TyclKind::Structure));

    let field_x = field_decl(&mut ast, "x", i32, tycl, 0);
    let method_x = method_decl(&mut ast, "x", i32, tycl, false);

    assert!(ast.declare_member(tycl, field_x));
    // A method may not reuse a field's name.
    assert!(!ast.declare_member(tycl, method_x));
    assert_eq!(ast.tycl(tycl).members, vec!["x".to_string()]);
    assert_eq!(ast.tycl(tycl).get("x"), Some(field_x));
}

#[test]
fn test_tycl_members_keep_declaration_order() {
    let mut ast = Ast::new();
    let i32 = i32_type(&mut ast);
    let tycl = ast.alloc_tycl(Tycl::new(SrcPos::null(), "Vec2", false, TyclKind::Class {
        base: None,
    }));

    let prop = ast.alloc_decl(Decl::Property(PropertyDecl {
        pos: SrcPos::null(),
        name: "length".to_string(),
        ty: TypeRef::Type(i32),
        exports: false,
        owner: tycl,
        getter: None,
        setter: None,
    }));
    let op_add = method_decl(&mut ast, "op+", i32, tycl, true);

    assert!(ast.declare_member(tycl, prop));
    assert!(ast.declare_member(tycl, op_add));

    let t = ast.tycl(tycl);
    assert_eq!(t.members, vec!["length".to_string(), "op+".to_string()]);
    assert_eq!(t.properties.get("length"), Some(&prop));
    assert_eq!(t.operators.get("op+"), Some(&op_add));
    assert!(t.methods.is_empty());
}

#[test]
fn test_tycl_rejects_non_member_declarations() {
    let mut ast = Ast::new();
    let i32 = i32_type(&mut ast);
    let tycl = ast.alloc_tycl(Tycl::new(SrcPos::null(), "Point", false, TyclKind::Structure));

    let var = var_decl(&mut ast, "x", i32, 0);
    assert!(!ast.declare_member(tycl, var));
    assert!(ast.tycl(tycl).members.is_empty());
}

#[test]
fn test_primitive_lookup() {
    let mut ast = Ast::new();

    let i32_id = ast.alloc_primitive(SrcPos::null(), "i32").unwrap();
    match ast.ty(i32_id) {
        Type::Integer(t) => {
            assert_eq!(t.bytesize, 4);
            assert!(t.signed);
        }
        other => panic!("expected integer type, got {other:?}"),
    }

    let u8_id = ast.alloc_primitive(SrcPos::null(), "u8").unwrap();
    match ast.ty(u8_id) {
        Type::Integer(t) => {
            assert_eq!(t.bytesize, 1);
            assert!(!t.signed);
        }
        other => panic!("expected integer type, got {other:?}"),
    }

    assert!(ast.alloc_primitive(SrcPos::null(), "bogus").is_none());
}

#[test]
fn test_decl_titles() {
    let mut ast = Ast::new();
    let i32 = i32_type(&mut ast);
    let a = var_decl(&mut ast, "a", i32, 0);
    insta::assert_snapshot!(ast.decl(a).title(&ast), @"VarDecl :: a : i32 (Offs: 0)");

    let value = ast.alloc_expr(Expr::Literal(LiteralExpr {
        pos: SrcPos::null(),
        value: LitValue::Int(64),
        ty: i32,
    }));
    let max = ast.alloc_decl(Decl::Const(crate::ast::decls::ConstDecl {
        pos: SrcPos::null(),
        name: "MAX".to_string(),
        ty: TypeRef::Type(i32),
        exports: true,
        value,
    }));
    insta::assert_snapshot!(ast.decl(max).title(&ast), @"[exp] ConstDecl :: MAX : i32");
}

#[test]
fn test_expr_titles() {
    let mut ast = Ast::new();
    let i32 = i32_type(&mut ast);

    let b = ast.alloc_expr(Expr::Name(NameExpr {
        pos: SrcPos::null(),
        kind: NameKind::Var,
        name: "b".to_string(),
    }));
    insta::assert_snapshot!(ast.expr(b).title(&ast), @"VarNameExpr :: b");

    let one = ast.alloc_expr(Expr::Literal(LiteralExpr {
        pos: SrcPos::null(),
        value: LitValue::Int(1),
        ty: i32,
    }));
    insta::assert_snapshot!(ast.expr(one).title(&ast), @"LiteralExpr :: 1 : i32");

    let add = ast.alloc_expr(Expr::Binary(BinaryExpr {
        pos: SrcPos::null(),
        kind: BinaryKind::Add,
        op: "+".to_string(),
        is_inplace: false,
        left: b,
        right: one,
    }));
    insta::assert_snapshot!(ast.expr(add).title(&ast), @"AddBinaryExpr :: (expr) + (expr)");

    let add_inplace = ast.alloc_expr(Expr::Binary(BinaryExpr {
        pos: SrcPos::null(),
        kind: BinaryKind::Add,
        op: "+".to_string(),
        is_inplace: true,
        left: b,
        right: one,
    }));
    insta::assert_snapshot!(
        ast.expr(add_inplace).title(&ast),
        @"AddBinaryExpr :: (expr) += (expr)"
    );
}

#[test]
fn test_type_titles() {
    let mut ast = Ast::new();
    let i32 = i32_type(&mut ast);
    insta::assert_snapshot!(ast.ty(i32).title(&ast), @"IntegerType :: i32");

    let flags = ast.alloc_type(Type::Enum(EnumType {
        pos: SrcPos::null(),
        name: "Mode".to_string(),
        base: TypeRef::Type(i32),
        is_flagset: true,
        exports: true,
    }));
    insta::assert_snapshot!(ast.ty(flags).title(&ast), @"[exp] EnumType :: Mode (Base: i32, flags)");

    let ptr = ast.alloc_type(Type::Pointer(PointerType {
        pos: SrcPos::null(),
        base: TypeRef::Type(i32),
    }));
    insta::assert_snapshot!(ast.ty(ptr).title(&ast), @"PointerType (Base: i32)");
}

#[test]
fn test_stmt_titles() {
    let mut ast = Ast::new();
    let i32 = i32_type(&mut ast);
    let module = module_scope(&mut ast);
    let lp = ast.alloc_scope(Scope::new(SrcPos::null(), ScopeKind::Loop, Some(module)));

    let cond = ast.alloc_expr(Expr::Literal(LiteralExpr {
        pos: SrcPos::null(),
        value: LitValue::Int(1),
        ty: i32,
    }));
    let labelled = ast.alloc_stmt(Stmt::While(WhileStmt {
        pos: SrcPos::null(),
        cond,
        scope: lp,
        label: Some("outer".to_string()),
    }));
    insta::assert_snapshot!(ast.stmt(labelled).title(&ast), @"WhileStmt :: (Label: outer)");

    let cond = ast.alloc_expr(Expr::Literal(LiteralExpr {
        pos: SrcPos::null(),
        value: LitValue::Int(0),
        ty: i32,
    }));
    let inner = ast.alloc_scope(Scope::new(SrcPos::null(), ScopeKind::Loop, Some(lp)));
    let unlabelled = ast.alloc_stmt(Stmt::While(WhileStmt {
        pos: SrcPos::null(),
        cond,
        scope: inner,
        label: None,
    }));
    insta::assert_snapshot!(ast.stmt(unlabelled).title(&ast), @"WhileStmt");
}

#[test]
fn test_function_decl_child_order() {
    let mut ast = Ast::new();
    let i32 = i32_type(&mut ast);
    let module = module_scope(&mut ast);
    let body = ast.alloc_scope(Scope::new(SrcPos::null(), ScopeKind::Function, Some(module)));

    let p0 = ast.alloc_decl(Decl::Param(crate::ast::decls::ParamDecl {
        pos: SrcPos::null(),
        name: "a".to_string(),
        ty: TypeRef::Type(i32),
        exports: false,
        slot: DeclSlot::new(0),
        has_default: false,
        default_value: None,
    }));
    let mut params = indexmap::IndexMap::new();
    params.insert("a".to_string(), p0);

    let f = ast.alloc_decl(Decl::Function(crate::ast::decls::FunctionDecl {
        pos: SrcPos::null(),
        name: "f".to_string(),
        ty: TypeRef::Type(i32),
        exports: false,
        slot: DeclSlot::new(0),
        params,
        scope: body,
        defined: false,
        template: None,
    }));

    let children = ast.decl(f).children(&ast);
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].node, NodeRef::Decl(p0));
    assert_eq!(children[0].role.as_deref(), Some("param 0"));
    assert!(!children[0].last);
    assert_eq!(children[1].node, NodeRef::Scope(body));
    assert_eq!(children[1].role.as_deref(), Some("body"));
    assert!(children[1].last);
}
