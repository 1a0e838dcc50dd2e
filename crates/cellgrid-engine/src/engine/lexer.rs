//! Formula tokenizer.
//!
//! A single regex scan over the formula body (marker already stripped). The
//! scan recognizes, in priority order:
//!
//! - a range marker `:<CELL>`
//! - a cell reference `[A-Za-z]+[0-9]+` (lowercase letters are then
//!   rejected by [`CellRef::parse`])
//! - an integer literal
//! - an operator `+ - * /`
//! - a keyword `sum | average | max | min` (any case)
//!
//! Anything else (whitespace, parentheses, commas, dots) is skipped. There is
//! no unary minus: a leading `-` is an ordinary operator token.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;
use tracing::trace;

use super::aggregate::Aggregate;
use super::cell_ref::{CellRange, CellRef};
use crate::error::{FormulaError, FormulaResult};

/// Binary arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    fn from_char(c: char) -> Option<Operator> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Sub => lhs - rhs,
            Operator::Mul => lhs * rhs,
            Operator::Div => lhs / rhs,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }
}

/// One lexical unit of a formula.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token {
    Number(f64),
    Cell(CellRef),
    Operator(Operator),
    Function(Aggregate),
    /// `<CELL>:<CELL>`, only meaningful as an aggregate argument.
    Range(CellRange),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Cell(cell) => write!(f, "{}", cell),
            Token::Operator(op) => write!(f, "{}", op.symbol()),
            Token::Function(kind) => write!(f, "{}", kind.name()),
            Token::Range(range) => write!(f, "{}", range),
        }
    }
}

/// Token pattern. Group order follows scan priority.
///
/// - group 1: range marker target (`B1` in `:B1`)
/// - group 2: cell reference
/// - group 3: integer literal
/// - group 4: operator
/// - group 5: keyword
fn token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i):([a-z]+[0-9]+)|([a-z]+[0-9]+)|([0-9]+)|([-+*/])|(sum|average|max|min)")
            .expect("formula token regex must compile")
    })
}

/// Split a formula body into tokens.
///
/// A cell reference directly followed by a range marker becomes one
/// [`Token::Range`]. A range marker with no cell before it is a
/// `MalformedRange`; a cell label that does not decode is a
/// `MalformedReference`. No tokens at all is returned as an empty vector.
pub fn tokenize(formula: &str) -> FormulaResult<Vec<Token>> {
    let mut tokens: Vec<Token> = Vec::new();

    for caps in token_re().captures_iter(formula) {
        if let Some(end) = caps.get(1) {
            let end = CellRef::parse(end.as_str())?;
            match tokens.pop() {
                Some(Token::Cell(start)) => tokens.push(Token::Range(CellRange::new(start, end))),
                _ => {
                    return Err(FormulaError::MalformedRange(format!(
                        "range end :{} has no start cell",
                        end
                    )));
                }
            }
        } else if let Some(cell) = caps.get(2) {
            tokens.push(Token::Cell(CellRef::parse(cell.as_str())?));
        } else if let Some(digits) = caps.get(3) {
            let value = digits
                .as_str()
                .parse::<f64>()
                .map_err(|_| FormulaError::MalformedReference(digits.as_str().to_string()))?;
            tokens.push(Token::Number(value));
        } else if let Some(op) = caps.get(4) {
            if let Some(op) = op.as_str().chars().next().and_then(Operator::from_char) {
                tokens.push(Token::Operator(op));
            }
        } else if let Some(keyword) = caps.get(5) {
            if let Some(kind) = Aggregate::from_keyword(keyword.as_str()) {
                tokens.push(Token::Function(kind));
            }
        }
    }

    trace!(formula, count = tokens.len(), "tokenized formula");
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cell(label: &str) -> CellRef {
        CellRef::parse(label).unwrap()
    }

    #[test]
    fn test_tokenize_arithmetic() {
        assert_eq!(
            tokenize("10-2*3").unwrap(),
            vec![
                Token::Number(10.0),
                Token::Operator(Operator::Sub),
                Token::Number(2.0),
                Token::Operator(Operator::Mul),
                Token::Number(3.0),
            ]
        );
    }

    #[test]
    fn test_tokenize_cells_and_whitespace() {
        assert_eq!(
            tokenize(" A1 +  B12 ").unwrap(),
            vec![
                Token::Cell(cell("A1")),
                Token::Operator(Operator::Add),
                Token::Cell(cell("B12")),
            ]
        );
    }

    #[test]
    fn test_tokenize_function_and_range() {
        let expected = vec![
            Token::Function(Aggregate::Sum),
            Token::Range(CellRange::new(cell("A1"), cell("B3"))),
        ];
        assert_eq!(tokenize("sum A1:B3").unwrap(), expected);
        assert_eq!(tokenize("SUM(A1:B3)").unwrap(), expected);
        assert_eq!(tokenize("Sum( A1 :B3 )").unwrap(), expected);
    }

    #[test]
    fn test_tokenize_keywords_any_case() {
        let kinds: Vec<Token> = tokenize("sum AVERAGE Max mIn").unwrap();
        assert_eq!(
            kinds,
            vec![
                Token::Function(Aggregate::Sum),
                Token::Function(Aggregate::Average),
                Token::Function(Aggregate::Max),
                Token::Function(Aggregate::Min),
            ]
        );
    }

    #[test]
    fn test_tokenize_leading_minus_is_operator() {
        assert_eq!(
            tokenize("-5").unwrap(),
            vec![Token::Operator(Operator::Sub), Token::Number(5.0)]
        );
    }

    #[test]
    fn test_tokenize_malformed_cell_text_is_not_a_cell() {
        let tokens = tokenize("1A+2").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Number(1.0),
                Token::Operator(Operator::Add),
                Token::Number(2.0),
            ]
        );
        assert!(!tokens.iter().any(|t| matches!(t, Token::Cell(_))));
    }

    #[test]
    fn test_tokenize_lowercase_reference_is_malformed() {
        assert_eq!(
            tokenize("b12 + 1"),
            Err(FormulaError::MalformedReference("b12".to_string()))
        );
        assert_eq!(
            tokenize("sum A1:b2"),
            Err(FormulaError::MalformedReference("b2".to_string()))
        );
    }

    #[test]
    fn test_tokenize_row_zero_is_malformed_reference() {
        assert_eq!(
            tokenize("A0+1"),
            Err(FormulaError::MalformedReference("A0".to_string()))
        );
    }

    #[test]
    fn test_tokenize_stray_range_marker() {
        assert!(matches!(
            tokenize("sum :B2"),
            Err(FormulaError::MalformedRange(_))
        ));
        assert!(matches!(
            tokenize("5:B2"),
            Err(FormulaError::MalformedRange(_))
        ));
    }

    #[test]
    fn test_tokenize_nothing_recognizable() {
        assert_eq!(tokenize("").unwrap(), vec![]);
        assert_eq!(tokenize("  ( ) , . ").unwrap(), vec![]);
    }

    #[test]
    fn test_decimal_point_splits_literals() {
        assert_eq!(
            tokenize("2.5").unwrap(),
            vec![Token::Number(2.0), Token::Number(5.0)]
        );
    }
}
