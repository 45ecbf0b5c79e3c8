//! # YOLOL chip machine
//!
//! A virtual machine for YOLOL, the line-numbered scripting language that
//! runs on programmable chips. A chip holds a short program; every tick the
//! host calls [`step`](mach::Runtime::step) and exactly one line executes.
//!
//! Names starting with `:` are fields of the device the chip is installed
//! in, everything else is a local of the machine.
//!
//! ```
//! use yolol::lang::{ast::*, Ident, Line};
//! use yolol::mach::{FieldMap, Runtime};
//!
//! // :lamp = 1
//! let line = Line::new(vec![Statement::Assign(
//!     Ident::new(":lamp"),
//!     AssignOp::Assign,
//!     Expression::Number("1".into()),
//! )]);
//! let mut chip = Runtime::new(FieldMap::new(), vec![line]);
//! chip.step();
//! assert_eq!(chip.get_var(":lamp"), Some(1.into()));
//! assert!(chip.vars().is_empty());
//! ```
//!
//! Parsing source text, scheduling ticks and owning the world the devices
//! live in are left to the host.

pub mod lang;
pub mod mach;
pub mod term;
