//! Formula evaluation.
//!
//! Formulas are folded strictly left to right: there is no operator
//! precedence, so `10-2*3` is `(10-2)*3 = 24`. The accumulator starts at `0`
//! and the first operand replaces it; each later operand is combined with the
//! most recent operator.

use tracing::debug;

use super::aggregate::aggregate;
use super::format::coerce_number;
use super::grid::GridStore;
use super::lexer::{Operator, Token, tokenize};
use crate::error::{FormulaError, FormulaResult};

/// Evaluate a formula body (marker already stripped) against `store`.
///
/// Division by zero follows IEEE-754: `5/0` is `inf`, `0/0` is `NaN`.
pub fn evaluate(store: &GridStore, formula: &str) -> FormulaResult<f64> {
    let result = tokenize(formula).and_then(|tokens| evaluate_tokens(store, &tokens));
    match &result {
        Ok(value) => debug!(formula, value, "evaluated formula"),
        Err(err) => debug!(formula, %err, "formula evaluation failed"),
    }
    result
}

/// Fold a token sequence into a single value.
///
/// An aggregate function takes everything after it as its one argument, which
/// must be a single range (`sum A1:B3`). So a formula holds at most one
/// aggregate and it is always the last term: `2 * sum A1:A3` works,
/// `sum A1:A3 * 2` is a `MalformedRange`.
pub fn evaluate_tokens(store: &GridStore, tokens: &[Token]) -> FormulaResult<f64> {
    if tokens.is_empty() {
        return Err(FormulaError::EmptyFormula);
    }

    let mut result = 0.0;
    let mut pending: Option<Operator> = None;

    for (i, token) in tokens.iter().enumerate() {
        match *token {
            Token::Cell(cell) => {
                let value = coerce_number(store.get_ref(&cell));
                result = combine(result, value, pending);
            }
            Token::Number(value) => {
                result = combine(result, value, pending);
            }
            Token::Operator(op) => pending = Some(op),
            Token::Function(kind) => {
                let range = match &tokens[i + 1..] {
                    [Token::Range(range)] => range,
                    rest => {
                        return Err(FormulaError::MalformedRange(format!(
                            "{} expects a single range argument, got '{}'",
                            kind.name(),
                            join_tokens(rest)
                        )));
                    }
                };
                let value = aggregate(store, kind, range);
                return Ok(combine(result, value, pending));
            }
            Token::Range(range) => {
                return Err(FormulaError::MalformedRange(format!(
                    "range {} used outside an aggregate function",
                    range
                )));
            }
        }
    }

    Ok(result)
}

/// Apply `op` to the running result; with no operator the operand replaces it.
pub fn combine(result: f64, operand: f64, op: Option<Operator>) -> f64 {
    match op {
        Some(op) => op.apply(result, operand),
        None => operand,
    }
}

fn join_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
