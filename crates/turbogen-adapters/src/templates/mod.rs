//! Template providers.

pub mod builtin;
pub mod memory;

pub use builtin::BuiltinTemplates;
pub use memory::MemoryTemplates;
