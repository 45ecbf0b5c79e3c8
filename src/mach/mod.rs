/*!
## Rust Machine Module

This Rust module is the virtual machine that steps a YOLOL chip program
one line at a time.

*/

mod config;
mod device;
mod eval;
mod exec;
mod function;
mod halt;
mod log;
mod operation;
mod program;
mod runtime;
mod val;
mod var;

pub use config::Config;
pub use config::JUMP_CEILING;
pub use device::Device;
pub use device::Field;
pub use device::FieldMap;
pub use function::Function;
pub use halt::Halt;
pub use log::ErrorLog;
pub use operation::Operation;
pub use program::Program;
pub use runtime::Runtime;
pub use val::Val;
pub use var::Var;

#[cfg(test)]
mod tests;
