//! Type nodes of the AST.
//!
//! Type nodes describe the shapes values can take: primitives, enums,
//! call signatures, pointers, arrays, aliases, and exception types. They
//! are allocated once by the parser and then shared; a declaration or
//! another type refers to a type node without owning it. Composite types
//! built from user type-classes are represented separately (see the
//! `tycls` module); a [`TypeRef`] covers both.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::SrcPos;

use super::ast::{Ast, Child, ChildList, ExprId, Node, TypeId, TypeRef};

lazy_static! {
    /// Built-in primitive types by name.
    pub static ref PRIMITIVE_LOOKUP: HashMap<&'static str, PrimitiveKind> = {
        let mut map = HashMap::new();
        map.insert("i8", PrimitiveKind::Integer { bytesize: 1, signed: true });
        map.insert("i16", PrimitiveKind::Integer { bytesize: 2, signed: true });
        map.insert("i32", PrimitiveKind::Integer { bytesize: 4, signed: true });
        map.insert("i64", PrimitiveKind::Integer { bytesize: 8, signed: true });
        map.insert("u8", PrimitiveKind::Integer { bytesize: 1, signed: false });
        map.insert("u16", PrimitiveKind::Integer { bytesize: 2, signed: false });
        map.insert("u32", PrimitiveKind::Integer { bytesize: 4, signed: false });
        map.insert("u64", PrimitiveKind::Integer { bytesize: 8, signed: false });
        map.insert("f32", PrimitiveKind::Float { bytesize: 4 });
        map.insert("f64", PrimitiveKind::Float { bytesize: 8 });
        map.insert("str", PrimitiveKind::Str);
        map
    };
}

/// Shape of a built-in primitive type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    Integer { bytesize: usize, signed: bool },
    Float { bytesize: usize },
    Str,
}

impl Ast {
    /// Allocates the type node for a built-in primitive name, or `None`
    /// when the name is not a primitive.
    pub fn alloc_primitive(&mut self, pos: SrcPos, name: &str) -> Option<TypeId> {
        let ty = match PRIMITIVE_LOOKUP.get(name)? {
            PrimitiveKind::Integer { bytesize, signed } => Type::Integer(IntegerType {
                pos,
                name: name.to_string(),
                bytesize: *bytesize,
                signed: *signed,
            }),
            PrimitiveKind::Float { bytesize } => Type::Float(FloatType {
                pos,
                name: name.to_string(),
                bytesize: *bytesize,
            }),
            PrimitiveKind::Str => Type::Str(StringType {
                pos,
                name: name.to_string(),
            }),
        };
        Some(self.alloc_type(ty))
    }
}

/// A type node.
#[derive(Debug)]
pub enum Type {
    Integer(IntegerType),
    Float(FloatType),
    Str(StringType),
    Enum(EnumType),
    Signature(SignatureType),
    Pointer(PointerType),
    Array(ArrayType),
    Alias(AliasType),
    Exception(ExceptionType),
}

/// Signed or unsigned machine integer.
#[derive(Debug)]
pub struct IntegerType {
    pub pos: SrcPos,
    pub name: String,
    pub bytesize: usize,
    pub signed: bool,
}

/// Floating point number.
#[derive(Debug)]
pub struct FloatType {
    pub pos: SrcPos,
    pub name: String,
    pub bytesize: usize,
}

/// Built-in string type.
#[derive(Debug)]
pub struct StringType {
    pub pos: SrcPos,
    pub name: String,
}

/// Enumeration over an integer base type; `is_flagset` marks bit-flag
/// enums whose enumerators combine with bitwise operators.
#[derive(Debug)]
pub struct EnumType {
    pub pos: SrcPos,
    pub name: String,
    pub base: TypeRef,
    pub is_flagset: bool,
    pub exports: bool,
}

/// Call signature: ordered parameter types and a result type.
#[derive(Debug)]
pub struct SignatureType {
    pub pos: SrcPos,
    pub name: String,
    pub param_types: Vec<TypeRef>,
    pub result: TypeRef,
    pub exports: bool,
}

/// Pointer to a base type. Unnamed.
#[derive(Debug)]
pub struct PointerType {
    pub pos: SrcPos,
    pub base: TypeRef,
}

/// Array of a base type, with an optional length expression. Unnamed.
#[derive(Debug)]
pub struct ArrayType {
    pub pos: SrcPos,
    pub base: TypeRef,
    pub size_expr: Option<ExprId>,
}

/// Named alias for another type.
#[derive(Debug)]
pub struct AliasType {
    pub pos: SrcPos,
    pub name: String,
    pub base: TypeRef,
    pub exports: bool,
}

/// Exception type, optionally derived from a base exception type.
#[derive(Debug)]
pub struct ExceptionType {
    pub pos: SrcPos,
    pub name: String,
    pub base: Option<TypeId>,
    pub exports: bool,
}

impl Type {
    /// The type's declared name; `None` for unnamed kinds (pointers,
    /// arrays), which can only be reached through the node that uses them.
    pub fn name(&self) -> Option<&str> {
        match self {
            Type::Integer(t) => Some(&t.name),
            Type::Float(t) => Some(&t.name),
            Type::Str(t) => Some(&t.name),
            Type::Enum(t) => Some(&t.name),
            Type::Signature(t) => Some(&t.name),
            Type::Pointer(_) => None,
            Type::Array(_) => None,
            Type::Alias(t) => Some(&t.name),
            Type::Exception(t) => Some(&t.name),
        }
    }

    pub fn exports(&self) -> bool {
        match self {
            Type::Integer(_) | Type::Float(_) | Type::Str(_) => false,
            Type::Enum(t) => t.exports,
            Type::Signature(t) => t.exports,
            Type::Pointer(_) | Type::Array(_) => false,
            Type::Alias(t) => t.exports,
            Type::Exception(t) => t.exports,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Type::Integer(_) => "IntegerType",
            Type::Float(_) => "FloatType",
            Type::Str(_) => "StringType",
            Type::Enum(_) => "EnumType",
            Type::Signature(_) => "SignatureType",
            Type::Pointer(_) => "PointerType",
            Type::Array(_) => "ArrayType",
            Type::Alias(_) => "AliasType",
            Type::Exception(_) => "ExceptionType",
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

impl Node for Type {
    fn pos(&self) -> &SrcPos {
        match self {
            Type::Integer(t) => &t.pos,
            Type::Float(t) => &t.pos,
            Type::Str(t) => &t.pos,
            Type::Enum(t) => &t.pos,
            Type::Signature(t) => &t.pos,
            Type::Pointer(t) => &t.pos,
            Type::Array(t) => &t.pos,
            Type::Alias(t) => &t.pos,
            Type::Exception(t) => &t.pos,
        }
    }

    fn title(&self, ast: &Ast) -> String {
        let exp = self.exp_prefix();
        let kind = self.kind_name();
        match self {
            Type::Integer(t) => format!("{exp}{kind} :: {}", t.name),
            Type::Float(t) => format!("{exp}{kind} :: {}", t.name),
            Type::Str(t) => format!("{exp}{kind} :: {}", t.name),
            Type::Enum(t) => {
                let base = t.base.display_name(ast);
                if t.is_flagset {
                    format!("{exp}{kind} :: {} (Base: {base}, flags)", t.name)
                } else {
                    format!("{exp}{kind} :: {} (Base: {base})", t.name)
                }
            }
            Type::Signature(t) => format!(
                "{exp}{kind} :: {} : {} (Params: {})",
                t.name,
                t.result.display_name(ast),
                t.param_types.len()
            ),
            Type::Pointer(t) => format!("{kind} (Base: {})", t.base.display_name(ast)),
            Type::Array(t) => format!("{kind} (Base: {})", t.base.display_name(ast)),
            Type::Alias(t) => {
                format!("{exp}{kind} :: {} (Base: {})", t.name, t.base.display_name(ast))
            }
            Type::Exception(t) => match t.base {
                Some(base) => format!(
                    "{exp}{kind} :: {} (Base: {})",
                    t.name,
                    ast.ty(base).name().unwrap_or("<anon>")
                ),
                None => format!("{exp}{kind} :: {}", t.name),
            },
        }
    }

    fn children(&self, _ast: &Ast) -> Vec<Child> {
        let mut children = ChildList::new();
        if let Type::Array(t) = self {
            if let Some(size) = t.size_expr {
                children.push(super::ast::NodeRef::Expr(size), "length");
            }
        }
        children.finish()
    }
}
