use super::{Config, Device, ErrorLog, Halt, Program, Val, Var};
use crate::error;
use crate::lang::{Error, Ident};
use std::rc::Rc;

/// ## Chip machine
///
/// Executes one program line per [`step`](Runtime::step) against the
/// locals it owns and the fields of the device it was built for.
pub struct Runtime<D: Device> {
    pub(super) device: D,
    pub(super) program: Rc<Program>,
    pub(super) config: Config,
    pub(super) vars: Var,
    pub(super) log: ErrorLog,
    pub(super) pc: usize,
    pub(super) current: usize,
}

impl<D: Device> Runtime<D> {
    pub fn new<P: Into<Program>>(device: D, lines: P) -> Runtime<D> {
        Runtime::with_config(device, lines, Config::default())
    }

    pub fn with_config<P: Into<Program>>(device: D, lines: P, config: Config) -> Runtime<D> {
        Runtime {
            device,
            program: Rc::new(lines.into()),
            config,
            vars: Var::new(),
            log: ErrorLog::new(),
            pc: 1,
            current: 1,
        }
    }

    /// Runs the line under the program counter, then advances it.
    ///
    /// Nothing escapes: errors of every kind end up in the error log.
    pub fn step(&mut self) {
        let count = self.program.len();
        if count == 0 {
            return;
        }
        let number = self.pc;
        let span = tracing::trace_span!("step", line = number);
        let _enter = span.enter();

        self.current = number;
        self.log.reset(number);
        let program = Rc::clone(&self.program);
        let outcome = match program.line(number) {
            Some(line) if line.is_executable() => self.exec_block(line.statements()),
            Some(line) => {
                tracing::trace!(errors = line.errors().len(), "skipping unparsable line");
                Ok(())
            }
            None => Ok(()),
        };
        if let Err(halt) = outcome {
            self.halted(number, halt);
        }
        self.pc = self.pc % count + 1;
    }

    fn halted(&mut self, number: usize, halt: Halt) {
        match halt {
            Halt::Error(error) => {
                tracing::debug!(line = number, %error, "line halted");
                self.log.push(number, error);
            }
            Halt::Internal(internal) => {
                tracing::warn!(line = number, error = %internal, "internal failure");
                self.log.push(number, error!(InternalError; internal.to_string()));
            }
        }
    }

    /// Line number that the next `step()` executes.
    pub fn pc(&self) -> usize {
        self.pc
    }

    /// Moves the program counter, clamped to the program.
    pub fn jump(&mut self, line: usize) {
        self.pc = line.max(1).min(self.program.len().max(1));
    }

    pub fn line_count(&self) -> usize {
        self.program.len()
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn errors(&self, line: usize) -> &[Error] {
        self.log.line(line)
    }

    pub fn error_log(&self) -> &ErrorLog {
        &self.log
    }

    /// Reads a local or, with the sigil, a device field.
    /// `None` means the device holds conflicting values.
    pub fn get_var(&self, name: &str) -> Option<Val> {
        self.vars.fetch(&self.device, &Ident::new(name))
    }

    pub fn set_var<V: Into<Val>>(&mut self, name: &str, value: V) {
        self.vars
            .store(&mut self.device, &Ident::new(name), value.into())
    }

    pub fn vars(&self) -> &Var {
        &self.vars
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    pub fn into_device(self) -> D {
        self.device
    }
}
