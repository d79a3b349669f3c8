//! Minimal TypeScript syntax tree and a printer for it.
//!
//! Only the constructs the action generators emit are modelled. The printer
//! reproduces the layout of the TypeScript compiler's own printer so that
//! output matches what existing projects already check in.

pub mod ast;
pub mod printer;

pub use ast::{
    ArrowFunction, Expr, ObjectLiteral, ObjectProperty, Parameter, PropertySignature, Statement,
    TypeNode,
};
pub use printer::{print_statement, Printer};
