//! Разбор строки в [`Expression`].
//!
//! Порядок проверок:
//!
//! ```text
//! 1. ровно три токена            -> MalformedExpression
//! 2. левый операнд               -> UnrecognizedNumber | OutOfRange
//! 3. оператор                    -> UnrecognizedOperator
//! 4. правый операнд              -> UnrecognizedNumber | OutOfRange
//! 5. одинаковая запись операндов -> MixedNotation
//! ```
//!
//! Первая же ошибка прерывает разбор.
//!
//! # Примеры
//!
//! ```
//! use roman_calculator::parser::parse;
//!
//! let expr = parse("VI divide II").unwrap();
//! assert_eq!(expr.evaluate().unwrap().to_string(), "VI / II = III");
//!
//! assert!(parse("V + 3").is_err());
//! ```

use std::ops::RangeInclusive;

use thiserror::Error;
use tracing::debug;

use crate::expression::{BinaryOp, Expression, Operand};
use crate::numeral::roman_value;
use crate::token::{Notation, SpannedToken, TokenError, tokenize};

/// Допустимые значения операндов.
pub const OPERAND_RANGE: RangeInclusive<i64> = 1..=10;

/// Ошибки, возникающие при разборе выражения.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Ошибка, переданная от токенизатора.
    #[error("{0}")]
    Token(#[from] TokenError),

    /// Арабское число вне диапазона 1..=10.
    #[error("калькулятор умеет работать только с числами от 1 до 10, получено {value}")]
    OutOfRange {
        /// Разобранное значение.
        value: i64,
        /// Позиция числа.
        pos: usize,
    },

    /// Неизвестный оператор.
    #[error("некорректный оператор: {text}")]
    UnrecognizedOperator {
        /// Текст оператора.
        text: String,
        /// Позиция оператора.
        pos: usize,
    },

    /// Один операнд римский, другой арабский.
    #[error("нельзя смешивать арабские и римские числа ({left} и {right})")]
    MixedNotation {
        /// Запись левого операнда.
        left: Notation,
        /// Запись правого операнда.
        right: Notation,
        /// Позиция правого операнда.
        pos: usize,
    },
}

impl ParseError {
    /// Возвращает позицию ошибки, если она известна.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Token(te) => Some(te.pos),
            Self::OutOfRange { pos, .. }
            | Self::UnrecognizedOperator { pos, .. }
            | Self::MixedNotation { pos, .. } => Some(*pos),
        }
    }
}

/// Разбирает числовой токен в операнд.
///
/// # Ошибки
///
/// - [`ParseError::Token`] с `UnrecognizedNumber`, если токен не число.
/// - [`ParseError::OutOfRange`] для арабского числа вне 1..=10.
pub fn parse_operand(token: SpannedToken<'_>) -> Result<Operand<'_>, ParseError> {
    let notation = token.classify()?;

    let value = match notation {
        Notation::Arabic => token.text.parse().ok(),
        Notation::Roman => roman_value(token.text),
        Notation::Invalid => None,
    }
    .ok_or_else(|| token.unrecognized())?;

    if !OPERAND_RANGE.contains(&value) {
        return Err(ParseError::OutOfRange {
            value,
            pos: token.pos,
        });
    }

    debug!(text = token.text, %notation, value, "операнд разобран");
    Ok(Operand::new(token.text, notation, value))
}

/// Разбирает оператор по таблице синонимов.
///
/// # Ошибки
///
/// [`ParseError::UnrecognizedOperator`], если оператор неизвестен.
pub fn parse_operator(token: SpannedToken<'_>) -> Result<BinaryOp, ParseError> {
    BinaryOp::from_alias(token.text).ok_or_else(|| ParseError::UnrecognizedOperator {
        text: token.text.to_owned(),
        pos: token.pos,
    })
}

/// Разбирает обрезанную строку в выражение.
///
/// # Ошибки
///
/// Возвращает [`ParseError`] при первой найденной ошибке.
///
/// # Примеры
///
/// ```
/// use roman_calculator::parser::{ParseError, parse};
///
/// assert_eq!(parse("2 multiply 5").unwrap().evaluate().unwrap().value, 10);
/// assert!(matches!(parse("0 + 1"), Err(ParseError::OutOfRange { value: 0, .. })));
/// ```
pub fn parse(line: &str) -> Result<Expression<'_>, ParseError> {
    let [left, op, right] = tokenize(line)?;

    let left = parse_operand(left)?;
    let op = parse_operator(op)?;
    let right_pos = right.pos;
    let right = parse_operand(right)?;

    if left.notation != right.notation {
        return Err(ParseError::MixedNotation {
            left: left.notation,
            right: right.notation,
            pos: right_pos,
        });
    }

    Ok(Expression::new(left, op, right))
}
