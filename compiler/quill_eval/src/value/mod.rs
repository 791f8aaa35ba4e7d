//! Runtime values and the built-in types they belong to.

use std::fmt;
use std::rc::Rc;

/// A runtime value.
///
/// Cheap to clone: strings share their buffer.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub enum Value {
    /// `nothing`, and the result of a `match` where no case applied.
    #[default]
    Nothing,
    Bool(bool),
    Int(i64),
    Str(Rc<str>),
}

impl Value {
    /// Create a string value.
    pub fn string(s: impl Into<Rc<str>>) -> Self {
        Value::Str(s.into())
    }

    /// Name of the value's built-in type, as written in type tests.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nothing => BuiltinType::Nothing.name(),
            Value::Bool(_) => BuiltinType::Bool.name(),
            Value::Int(_) => BuiltinType::Int.name(),
            Value::Str(_) => BuiltinType::String.name(),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nothing => write!(f, "Nothing"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Str(s) => write!(f, "Str({:?})", &**s),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nothing => write!(f, "nothing"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Str(s) => write!(f, "\"{}\"", &**s),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

/// Types a type-test pattern can name.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BuiltinType {
    Int,
    Bool,
    String,
    Nothing,
    /// Every value is an `Any`.
    Any,
}

impl BuiltinType {
    /// Resolve a type name. Type names are case sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Int" => Some(BuiltinType::Int),
            "Bool" => Some(BuiltinType::Bool),
            "String" => Some(BuiltinType::String),
            "Nothing" => Some(BuiltinType::Nothing),
            "Any" => Some(BuiltinType::Any),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BuiltinType::Int => "Int",
            BuiltinType::Bool => "Bool",
            BuiltinType::String => "String",
            BuiltinType::Nothing => "Nothing",
            BuiltinType::Any => "Any",
        }
    }

    /// Is `value` an instance of this type?
    pub fn is_instance(self, value: &Value) -> bool {
        matches!(
            (self, value),
            (BuiltinType::Any, _)
                | (BuiltinType::Int, Value::Int(_))
                | (BuiltinType::Bool, Value::Bool(_))
                | (BuiltinType::String, Value::Str(_))
                | (BuiltinType::Nothing, Value::Nothing)
        )
    }
}
