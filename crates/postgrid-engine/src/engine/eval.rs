//! Postfix expression evaluation.
//!
//! Each cell is evaluated by a single stack machine: literals and references
//! push, `++`/`--` pop one operand, the four binary operators pop two.
//! References push a deferred operand that is resolved against the result
//! table only when popped, which is safe because cells are evaluated in
//! dependency-first order.

use super::cell_ref::{CellRef, Grid};
use super::error::{EngineError, Result};
use super::token::{self, Op};

/// A stack operand: a parsed literal, or a reference whose value lives in the
/// result table.
#[derive(Clone, Copy, Debug)]
enum Operand {
    Literal(f32),
    Deferred(usize),
}

impl Operand {
    fn resolve(self, results: &[f32]) -> f32 {
        match self {
            Operand::Literal(v) => v,
            Operand::Deferred(index) => results[index],
        }
    }
}

/// Evaluate one cell's token list to a single value.
///
/// `results` must already hold final values for every cell this expression
/// references; the orchestrator guarantees that by evaluating in the
/// dependency-first order the topological sort produces.
pub fn eval_cell(grid: &Grid, tokens: &[String], results: &[f32]) -> Result<f32> {
    let mut stack: Vec<Operand> = Vec::new();

    for tok in tokens {
        if token::is_reference(tok) {
            let index = CellRef::parse(tok)?.to_index(grid)?;
            stack.push(Operand::Deferred(index));
        } else if token::is_literal(tok) {
            let value = token::parse_literal(tok).ok_or_else(|| invalid(tokens))?;
            stack.push(Operand::Literal(value));
        } else {
            let op: Op = tok
                .parse()
                .map_err(|_| EngineError::UnknownOperator(tok.clone()))?;
            let b = stack.pop().ok_or_else(|| invalid(tokens))?.resolve(results);
            let value = match op {
                Op::Incr => b + 1.0,
                Op::Decr => b - 1.0,
                Op::Add | Op::Sub | Op::Mul | Op::Div => {
                    let a = stack.pop().ok_or_else(|| invalid(tokens))?.resolve(results);
                    match op {
                        Op::Add => a + b,
                        Op::Sub => a - b,
                        Op::Mul => a * b,
                        // IEEE-754 semantics: division by zero is inf or NaN,
                        // never an error.
                        _ => a / b,
                    }
                }
            };
            stack.push(Operand::Literal(value));
        }
    }

    let result = stack.pop().ok_or_else(|| invalid(tokens))?.resolve(results);
    if !stack.is_empty() {
        return Err(invalid(tokens));
    }
    Ok(result)
}

fn invalid(tokens: &[String]) -> EngineError {
    EngineError::InvalidExpression(tokens.join(" "))
}
