use indexmap::IndexMap;

use crate::ast::ast::{Ast, Child, ChildList, ModuleId, Node, NodeRef, ScopeId};
use crate::errors::errors::AstError;
use crate::SrcPos;

/// Resolution state of a module, stored here and driven entirely by the
/// external resolution pass (which uses it to detect circular module
/// dependencies). No transitions are enforced in this layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResolveState {
    #[default]
    Unvisited,
    Resolving,
    Resolved,
}

/// One module of the assembly: its source file name, resolution state,
/// and module scope (attached once parsed).
#[derive(Debug)]
pub struct Module {
    pub pos: SrcPos,
    pub fname: String,
    pub state: ResolveState,
    pub scope: Option<ScopeId>,
}

impl Module {
    pub fn new(fname: impl Into<String>, scope: Option<ScopeId>) -> Self {
        Module {
            pos: SrcPos::null(),
            fname: fname.into(),
            state: ResolveState::Unvisited,
            scope,
        }
    }
}

impl Node for Module {
    fn pos(&self) -> &SrcPos {
        &self.pos
    }

    fn title(&self, _ast: &Ast) -> String {
        format!("Module :: {}", self.fname)
    }

    fn children(&self, _ast: &Ast) -> Vec<Child> {
        let mut children = ChildList::new();
        if let Some(scope) = self.scope {
            children.push(NodeRef::Scope(scope), "module scope");
        }
        children.finish()
    }
}

/// Top-level container of a compilation: all modules by name, plus the
/// path configuration read by the external build driver. Iteration over
/// modules follows insertion order.
#[derive(Debug, Default)]
pub struct Assembly {
    modules: IndexMap<String, ModuleId>,
    pub src_dir: String,
    pub dst_dir: String,
}

impl Assembly {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the module registered under `name`.
    pub fn set_module(&mut self, name: impl Into<String>, module: ModuleId) {
        self.modules.insert(name.into(), module);
    }

    /// The module registered under `name`.
    pub fn get_module(&self, name: &str) -> Result<ModuleId, AstError> {
        self.modules
            .get(name)
            .copied()
            .ok_or_else(|| AstError::ModuleNotFound {
                module: name.to_string(),
            })
    }

    /// Removes and returns the module registered under `name`, keeping
    /// the insertion order of the remaining entries.
    pub fn remove_module(&mut self, name: &str) -> Result<ModuleId, AstError> {
        self.modules
            .shift_remove(name)
            .ok_or_else(|| AstError::ModuleNotFound {
                module: name.to_string(),
            })
    }

    pub fn contains_module(&self, name: &str) -> bool {
        self.modules.contains_key(name)
    }

    /// Module names in insertion order.
    pub fn module_names(&self) -> impl Iterator<Item = &str> {
        self.modules.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
