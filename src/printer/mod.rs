//! Diagnostic tree printer.
//!
//! Renders any node subtree as an indented ASCII tree, one line per node,
//! for diagnostic dumps and snapshot tests. The rendering is a pure
//! function of the tree: dumping the same unmutated subtree twice yields
//! byte-identical output.

pub mod printer;
