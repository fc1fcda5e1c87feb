use std::{collections::HashMap, io::Write};

use crate::interpreter::value::core::Value;

/// Name of the outermost frame, which holds top level variables.
pub const GLOBAL_FRAME: &str = "<main>";

/// The storage contract the evaluator uses for variables.
///
/// The evaluator never inspects how variables are kept. It defines them,
/// reads them back, opens a fresh frame for every user function call and
/// closes it again when the call completes.
pub trait VariableStore {
    /// Binds `name` to `value` in the innermost frame.
    fn define_variable(&mut self, name: &str, value: Value);

    /// Looks up `name`, returning `None` if it is not visible.
    fn get_variable(&self, name: &str) -> Option<Value>;

    /// Opens a new frame for a call of `function`.
    fn push_frame(&mut self, function: &str);

    /// Closes the innermost frame. The global frame is never removed.
    fn pop_frame(&mut self);

    /// Writes the active frames to `out`, innermost first.
    ///
    /// # Errors
    /// Returns any error produced by `out`.
    fn print_stack_trace(&self, out: &mut dyn Write) -> std::io::Result<()>;

    /// Writes every frame together with the variables it holds.
    ///
    /// # Errors
    /// Returns any error produced by `out`.
    fn print_variable_stack(&self, out: &mut dyn Write) -> std::io::Result<()>;
}

/// A single activation record.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    /// The function this frame belongs to.
    pub name:      String,
    /// Variables defined while the frame was innermost.
    pub variables: HashMap<String, Value>,
}

impl Frame {
    fn named(name: &str) -> Self {
        Self { name:      name.to_string(),
               variables: HashMap::new(), }
    }
}

/// The default [`VariableStore`]: a stack of frames over a global frame.
///
/// Definitions always go into the innermost frame, so a parameter or local
/// assignment shadows a global of the same name. Lookups see the innermost
/// frame and the global frame, but not the frames of callers in between.
///
/// # Example
/// ```
/// use solar::interpreter::{stack::{Stack, VariableStore}, value::core::Value};
///
/// let mut stack = Stack::new();
/// stack.define_variable("x", Value::Integer(1));
///
/// stack.push_frame("f");
/// stack.define_variable("x", Value::Integer(2));
/// assert_eq!(stack.get_variable("x"), Some(Value::Integer(2)));
///
/// stack.pop_frame();
/// assert_eq!(stack.get_variable("x"), Some(Value::Integer(1)));
/// ```
#[derive(Debug, Clone)]
pub struct Stack {
    frames: Vec<Frame>,
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}

impl Stack {
    /// Creates a stack holding only the global frame.
    #[must_use]
    pub fn new() -> Self {
        Self { frames: vec![Frame::named(GLOBAL_FRAME)] }
    }
}

impl VariableStore for Stack {
    fn define_variable(&mut self, name: &str, value: Value) {
        if let Some(frame) = self.frames.last_mut() {
            frame.variables.insert(name.to_string(), value);
        }
    }

    fn get_variable(&self, name: &str) -> Option<Value> {
        let innermost = self.frames.last()?;
        if let Some(value) = innermost.variables.get(name) {
            return Some(value.clone());
        }
        self.frames.first()?.variables.get(name).cloned()
    }

    fn push_frame(&mut self, function: &str) {
        self.frames.push(Frame::named(function));
    }

    fn pop_frame(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
    }

    fn print_stack_trace(&self, out: &mut dyn Write) -> std::io::Result<()> {
        for frame in self.frames.iter().rev() {
            writeln!(out, "    at {}", frame.name)?;
        }
        Ok(())
    }

    fn print_variable_stack(&self, out: &mut dyn Write) -> std::io::Result<()> {
        for frame in self.frames.iter().rev() {
            writeln!(out, "{}", frame.name)?;

            let mut names = frame.variables.keys().collect::<Vec<_>>();
            names.sort();
            for name in names {
                writeln!(out, "    {name} = {}", frame.variables[name])?;
            }
        }
        Ok(())
    }
}
