//! A small symbolic calculus engine.
//!
//! Source text is tokenized against a [`Ctxt`] (which decides whether a name is a function, a
//! constant, or a free variable), parsed into an immutable shared tree, and then transformed:
//! [`Expr::differentiate`] builds symbolic derivatives, [`Expr::simplify`] folds the result
//! into a plainer shape, and [`Expr::evaluate`] produces a number.
//!
//! Failures travel in-band as [`Expr::Error`] nodes rather than as `Result`s; every pass hands
//! an error back unchanged, so the first problem found is the one reported, no matter how many
//! transformations run after it.
//!
//! ```
//! use symdiff::ctxt::Ctxt;
//! use symdiff::parser::Parser;
//!
//! let ctxt = Ctxt::default();
//! let ast = Parser::from_source("x^3", &ctxt).parse_full();
//! let derivative = ast.differentiate("x").simplify();
//! assert_eq!(derivative.to_string(), "3(x^2)");
//! ```

pub mod ast;
pub mod consts;
pub mod ctxt;
pub mod error;
pub mod funcs;
pub mod parser;
pub mod tokenizer;

mod derivative;
mod eval;
mod simplify;

pub use ast::{BinOp, Expr, Node};
pub use ctxt::Ctxt;
pub use funcs::Func;
