//! AST layer of the Keel compiler front end.
//!
//! This crate holds the in-memory representation of a parsed Keel program:
//! the node taxonomy, the lexical scope chain with symbol resolution, the
//! type-class member registry, the assembly/module container, and the
//! diagnostic tree printer. Lexing, parsing, semantic analysis beyond
//! duplicate-name rejection, layout, and code generation all live in other
//! crates that consume this one.

#![allow(clippy::module_inception)]

use std::rc::Rc;

pub mod assembly;
pub mod ast;
pub mod errors;
pub mod macros;
pub mod printer;

/// Opaque source position attached to every node.
///
/// Carries a byte offset and the originating file name. This crate never
/// interprets either field; they are recorded at construction and handed
/// back to the diagnostic reporter that owns the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SrcPos(pub u32, pub Rc<String>);

impl SrcPos {
    /// Placeholder position for synthesized nodes.
    pub fn null() -> Self {
        SrcPos(0, Rc::new(String::from("<null>")))
    }
}

/// Declaration slot of a storage-bearing declaration.
///
/// `index` is the zero-based order of declaration within the owning scope
/// or type-class; `size` is the nominal slot size consumed by the layout
/// pass. Both are fixed at construction and never renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeclSlot {
    pub index: usize,
    pub size: usize,
}

impl DeclSlot {
    /// A slot at `index` with the default size of 1.
    pub fn new(index: usize) -> Self {
        DeclSlot { index, size: 1 }
    }
}
