//! Generate TypeScript action creators from declarative action group files.
//!
//! ```ignore
//! use actgen_core::{codegen, schema::DataRoot};
//!
//! let root = DataRoot::load(Path::new("actions/post.yaml"))?;
//! for file in codegen::render_root(&root) {
//!     println!("{}:\n{}", file.path.display(), file.content);
//! }
//! ```

pub mod codegen;
pub mod discover;
pub mod error;
pub mod generate;
pub mod io;
pub mod naming;
pub mod schema;
pub mod ts;

pub use error::{ActgenError, Result};
