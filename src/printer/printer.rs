use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::ast::ast::{Ast, NodeRef};
use crate::errors::errors::AstError;

/// Branch glyph of a root node.
const ROOT_LEAF: &str = " *─ ";
/// Branch glyph of a non-last child.
const TEE_LEAF: &str = " ├─ ";
/// Branch glyph of a last child.
const CORNER_LEAF: &str = " └─ ";
/// Indentation segment below a non-last child.
const BAR_EXT: &str = " │  ";
/// Indentation segment below a last child.
const BLANK_EXT: &str = "    ";

/// Renders the subtree under `root` as a list of text lines.
///
/// Depth-first pre-order; one line per node, composed of the indentation
/// prefix, the branch glyph, the node title, and an `as <role>` suffix
/// when the parent supplied a role for the child. `role` labels the root
/// line itself and defaults to "AST root".
pub fn render_tree(ast: &Ast, root: NodeRef, role: Option<&str>) -> Vec<String> {
    let mut lines = Vec::new();
    render_node(
        ast,
        root,
        false,
        "",
        Some(role.unwrap_or("AST root")),
        true,
        &mut lines,
    );
    lines
}

fn render_node(
    ast: &Ast,
    node: NodeRef,
    has_parent: bool,
    depth: &str,
    role: Option<&str>,
    is_last: bool,
    out: &mut Vec<String>,
) {
    let leaf = if !has_parent {
        ROOT_LEAF
    } else if is_last {
        CORNER_LEAF
    } else {
        TEE_LEAF
    };

    let mut line = format!("{depth}{leaf}{}", node.title(ast));
    if let Some(role) = role {
        line.push_str(" as ");
        line.push_str(role);
    }
    out.push(line);

    let child_depth = format!("{depth}{}", if is_last { BLANK_EXT } else { BAR_EXT });
    for child in node.children(ast) {
        render_node(
            ast,
            child.node,
            true,
            &child_depth,
            child.role.as_deref(),
            child.last,
            out,
        );
    }
}

/// Dumps the subtree under `root` to `destination`, or to stdout when no
/// destination is given.
///
/// The file variant overwrites, writes UTF-8, terminates the dump with a
/// newline, and releases the file handle on every exit path. A failed
/// write surfaces immediately as [`AstError::DumpIo`].
pub fn print_tree(
    ast: &Ast,
    root: NodeRef,
    role: Option<&str>,
    destination: Option<&Path>,
) -> Result<(), AstError> {
    let mut text = render_tree(ast, root, role).join("\n");
    text.push('\n');

    match destination {
        Some(path) => {
            let mut file = File::create(path)?;
            file.write_all(text.as_bytes())?;
        }
        None => {
            io::stdout().write_all(text.as_bytes())?;
        }
    }
    Ok(())
}
