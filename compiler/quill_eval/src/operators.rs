//! Binary and unary operator evaluation.

use quill_ir::{BinaryOp, UnaryOp};

use crate::errors::{binary_type_mismatch, integer_overflow, invalid_binary_op, type_mismatch};
use crate::{EvalResult, Value};

/// Apply a binary operator to two evaluated operands.
///
/// Equality is structural and defined between any two values; values of
/// different types are simply unequal. Arithmetic is checked.
pub fn evaluate_binary(op: BinaryOp, left: Value, right: Value) -> EvalResult {
    match op {
        BinaryOp::Eq => Ok(Value::Bool(left == right)),
        BinaryOp::NotEq => Ok(Value::Bool(left != right)),
        BinaryOp::Add => match (left, right) {
            (Value::Int(a), Value::Int(b)) => a
                .checked_add(b)
                .map(Value::Int)
                .ok_or_else(|| integer_overflow("addition")),
            (Value::Str(a), Value::Str(b)) => {
                let mut joined = String::with_capacity(a.len().saturating_add(b.len()));
                joined.push_str(&a);
                joined.push_str(&b);
                Ok(Value::string(joined))
            }
            (left, right) => Err(mismatch(op, &left, &right)),
        },
        BinaryOp::Sub => match (left, right) {
            (Value::Int(a), Value::Int(b)) => a
                .checked_sub(b)
                .map(Value::Int)
                .ok_or_else(|| integer_overflow("subtraction")),
            (left, right) => Err(mismatch(op, &left, &right)),
        },
    }
}

/// Apply a unary operator to an evaluated operand.
pub fn evaluate_unary(op: UnaryOp, operand: Value) -> EvalResult {
    match (op, operand) {
        (UnaryOp::Neg, Value::Int(n)) => n
            .checked_neg()
            .map(Value::Int)
            .ok_or_else(|| integer_overflow("negation")),
        (UnaryOp::Neg, other) => Err(type_mismatch("Int", other.type_name())),
    }
}

/// Same-typed operands the operator does not support, or operands of two
/// different types.
#[cold]
fn mismatch(op: BinaryOp, left: &Value, right: &Value) -> crate::EvalError {
    if left.type_name() == right.type_name() {
        invalid_binary_op(left.type_name(), op)
    } else {
        binary_type_mismatch(left.type_name(), right.type_name())
    }
}
