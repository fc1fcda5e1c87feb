use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{FunctionDecl, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{CallFrame, Context, EvalResult, MAX_CALL_DEPTH},
            function::builtin,
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the context, a slice of evaluated argument values and
/// the line number of the call. Builtins act through side effects only.
pub type NativeFn = fn(&mut Context, &[Value], usize) -> EvalResult<()>;

/// Specifies the allowed number of arguments for a function.
///
/// - `Exact(n)` means the function must receive exactly `n` arguments.
/// - `OneOf(slice)` means the function accepts any count listed in `slice`.
/// - `Variadic` accepts any number of arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    OneOf(&'static [usize]),
    Variadic,
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    ///
    /// # Example
    /// ```
    /// use solar::interpreter::evaluator::function::core::Arity;
    ///
    /// assert!(Arity::OneOf(&[0, 1]).check(1));
    /// assert!(!Arity::Exact(2).check(3));
    /// assert!(Arity::Variadic.check(0));
    /// ```
    #[must_use]
    pub fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::OneOf(arr) => arr.contains(&n),
            Self::Variadic => true,
        }
    }

    /// Describes the accepted counts for error messages, e.g. `0 or 1`.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Exact(m) => m.to_string(),
            Self::OneOf(arr) => arr.iter()
                                   .map(ToString::to_string)
                                   .collect::<Vec<_>>()
                                   .join(" or "),
            Self::Variadic => "any number of".to_string(),
        }
    }
}

/// What runs when a function is invoked.
#[derive(Clone)]
pub enum FunctionBody {
    /// A builtin implemented in Rust.
    Native(NativeFn),
    /// A user-declared statement sequence.
    User(Rc<[Statement]>),
}

/// A registered function.
#[derive(Clone)]
pub struct Function {
    /// The unique name the function is registered under.
    pub name:   String,
    /// Parameter names bound positionally on invocation. Empty for builtins.
    pub params: Vec<String>,
    /// The accepted argument counts.
    pub arity:  Arity,
    /// The function body.
    pub body:   FunctionBody,
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table the context is populated from),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  NativeFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "println"            => { arity: Arity::Variadic, func: builtin::println },
    "exit"               => { arity: Arity::OneOf(&[0, 1]), func: builtin::exit },
    "printStackTrace"    => { arity: Arity::Exact(0), func: builtin::print_stack_trace },
    "printVariableTrace" => { arity: Arity::Exact(0), func: builtin::print_variable_trace },
}

/// Inserts every builtin into a fresh function table.
pub(crate) fn register_builtins(functions: &mut HashMap<String, Function>) {
    for def in BUILTIN_TABLE {
        functions.insert(def.name.to_string(),
                         Function { name:   def.name.to_string(),
                                    params: Vec::new(),
                                    arity:  def.arity,
                                    body:   FunctionBody::Native(def.func), });
    }
}

impl Context {
    /// Registers a user function.
    ///
    /// The body is checked for function declarations at any depth, including
    /// inside `if` and `while` blocks; functions may only be declared outside
    /// other functions. The body does not run until the function is invoked.
    ///
    /// # Errors
    /// - `DuplicateFunction` if the name is already registered, builtins
    ///   included.
    /// - `NestedFunctionDeclaration` if the body declares another function.
    pub fn declare_function(&mut self, decl: &FunctionDecl) -> EvalResult<()> {
        if self.functions.contains_key(&decl.name) {
            return Err(RuntimeError::DuplicateFunction { name: decl.name.clone(),
                                                         line: decl.line, });
        }

        if let Some(inner) = find_nested_declaration(&decl.body) {
            return Err(RuntimeError::NestedFunctionDeclaration { name:      inner.name.clone(),
                                                                 enclosing: decl.name.clone(),
                                                                 line:      inner.line, });
        }

        tracing::debug!(name = %decl.name, params = decl.params.len(), "declare function");

        self.functions.insert(decl.name.clone(),
                              Function { name:   decl.name.clone(),
                                         params: decl.params.clone(),
                                         arity:  Arity::Exact(decl.params.len()),
                                         body:   FunctionBody::User(decl.body.clone().into()), });
        Ok(())
    }

    /// Invokes a function by name.
    ///
    /// Builtins receive the arguments directly. User functions get a new
    /// variable frame with the parameters bound positionally and a new call
    /// frame; both are removed again when the body completes, whether or not
    /// it succeeded.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `args`: Evaluated argument values.
    /// - `line`: Line number of the call, for error reporting.
    ///
    /// # Returns
    /// The value of the executed `return`, or `None` if the body ended
    /// without one, used a bare `return`, or the function is a builtin.
    ///
    /// # Errors
    /// - `UndefinedFunction` if no function is registered under `name`.
    /// - `ArgumentCountMismatch` if `args` does not fit the function's arity.
    /// - `RecursionLimit` if [`MAX_CALL_DEPTH`] user calls are already active.
    /// - Any error raised by the body.
    #[tracing::instrument(level = "debug", skip(self, args), fields(argc = args.len()))]
    pub fn invoke(&mut self,
                  name: &str,
                  args: Vec<Value>,
                  line: usize)
                  -> EvalResult<Option<Value>> {
        let Some(function) = self.functions.get(name).cloned() else {
            return Err(RuntimeError::UndefinedFunction { name: name.to_string(),
                                                         line });
        };

        if !function.arity.check(args.len()) {
            return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                             expected: function.arity.describe(),
                                                             found: args.len(),
                                                             line });
        }

        match &function.body {
            FunctionBody::Native(func) => {
                func(self, &args, line)?;
                Ok(None)
            },
            FunctionBody::User(body) => self.call_user_function(&function, body, args, line),
        }
    }

    /// Runs a user function body in fresh frames and collects its result.
    fn call_user_function(&mut self,
                          function: &Function,
                          body: &[Statement],
                          args: Vec<Value>,
                          line: usize)
                          -> EvalResult<Option<Value>> {
        if self.control.frames.len() >= MAX_CALL_DEPTH {
            return Err(RuntimeError::RecursionLimit { name: function.name.clone(),
                                                      depth: MAX_CALL_DEPTH,
                                                      line });
        }

        self.stack.push_frame(&function.name);
        for (param, arg) in function.params.iter().zip(args) {
            self.stack.define_variable(param, arg);
        }
        self.control.frames.push(CallFrame::new(&function.name));
        tracing::trace!(depth = self.control.frames.len(), "enter");

        let outcome = self.execute(body);

        let frame = self.control.frames.pop();
        self.stack.pop_frame();
        outcome?;

        Ok(frame.and_then(|frame| frame.return_value))
    }
}

/// Finds the first function declaration anywhere inside `body`.
fn find_nested_declaration(body: &[Statement]) -> Option<&FunctionDecl> {
    body.iter().find_map(|statement| match statement {
        Statement::FunctionDecl(decl) => Some(decl),
        Statement::IfElse { then_branch,
                            else_branch,
                            .. } => {
            find_nested_declaration(then_branch).or_else(|| {
                else_branch.as_deref().and_then(find_nested_declaration)
            })
        },
        Statement::While { body, .. } => find_nested_declaration(body),
        _ => None,
    })
}
