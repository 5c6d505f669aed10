//! Source file parsers.
//!
//! - `jsx`: JavaScript/TypeScript/JSX parser (uses swc for AST generation)

pub mod jsx;
