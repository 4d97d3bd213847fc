//! Выражение из двух операндов и оператора, его вычисление и вывод.
//!
//! # Примеры
//!
//! ```
//! use roman_calculator::expression::{BinaryOp, Expression, Operand};
//! use roman_calculator::token::Notation;
//!
//! let e = Expression::new(
//!     Operand::new("III", Notation::Roman, 3),
//!     BinaryOp::Add,
//!     Operand::new("IV", Notation::Roman, 4),
//! );
//! assert_eq!(e.evaluate().unwrap().to_string(), "III + IV = VII");
//! ```

use std::fmt::{self, Display};

use thiserror::Error;

use crate::numeral::{RomanRangeError, to_roman};
use crate::token::Notation;

/// Ошибки при вычислении выражения.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// Деление на ноль.
    #[error("деление на ноль")]
    DivisionByZero,
    /// Целочисленное переполнение.
    #[error("переполнение")]
    Overflow,
    /// Римский результат вне диапазона 1..=1000.
    #[error("{0}")]
    RomanRange(#[from] RomanRangeError),
}

/// Бинарные операции.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// Сложение.
    Add,
    /// Вычитание.
    Sub,
    /// Умножение.
    Mul,
    /// Целочисленное деление.
    Div,
}

impl BinaryOp {
    /// Находит операцию по символу или словесному синониму.
    ///
    /// Регистр учитывается: `"plus"` подходит, `"Plus"` нет.
    #[must_use]
    pub fn from_alias(text: &str) -> Option<Self> {
        match text {
            "+" | "plus" => Some(Self::Add),
            "-" | "minus" => Some(Self::Sub),
            "*" | "multiply" => Some(Self::Mul),
            "/" | "divide" => Some(Self::Div),
            _ => None,
        }
    }

    /// Канонический символ операции.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Применить бинарную операцию к операндам.
    ///
    /// Деление отбрасывает дробную часть (округление к нулю).
    ///
    /// # Ошибки
    ///
    /// - [`EvalError::DivisionByZero`] при делении на ноль.
    /// - [`EvalError::Overflow`] при переполнении.
    pub fn apply(self, left: i64, right: i64) -> Result<i64, EvalError> {
        match self {
            Self::Add => left.checked_add(right).ok_or(EvalError::Overflow),
            Self::Sub => left.checked_sub(right).ok_or(EvalError::Overflow),
            Self::Mul => left.checked_mul(right).ok_or(EvalError::Overflow),
            Self::Div => {
                if right == 0 {
                    Err(EvalError::DivisionByZero)
                } else {
                    left.checked_div(right).ok_or(EvalError::Overflow)
                }
            }
        }
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Разобранный операнд: исходный текст, запись и значение.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operand<'a> {
    /// Текст как он введён.
    pub text: &'a str,
    /// Запись числа.
    pub notation: Notation,
    /// Значение.
    pub value: i64,
}

impl<'a> Operand<'a> {
    /// Создаёт операнд.
    #[must_use]
    pub const fn new(text: &'a str, notation: Notation, value: i64) -> Self {
        Self {
            text,
            notation,
            value,
        }
    }
}

/// Выражение `левый оператор правый`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expression<'a> {
    /// Левый операнд.
    pub left: Operand<'a>,
    /// Операция.
    pub op: BinaryOp,
    /// Правый операнд.
    pub right: Operand<'a>,
}

impl<'a> Expression<'a> {
    /// Создать выражение.
    #[must_use]
    pub const fn new(left: Operand<'a>, op: BinaryOp, right: Operand<'a>) -> Self {
        Self { left, op, right }
    }

    /// Оба операнда записаны римскими цифрами.
    #[must_use]
    pub fn is_roman(&self) -> bool {
        self.left.notation == Notation::Roman && self.right.notation == Notation::Roman
    }

    /// Вычислить значение выражения.
    ///
    /// Для римских операндов результат сразу переводится в римскую запись.
    ///
    /// # Ошибки
    ///
    /// - [`EvalError::DivisionByZero`] при делении на ноль.
    /// - [`EvalError::Overflow`] при переполнении.
    /// - [`EvalError::RomanRange`], если римский результат меньше 1 или больше 1000.
    pub fn evaluate(&self) -> Result<Evaluation<'a>, EvalError> {
        let value = self.op.apply(self.left.value, self.right.value)?;
        let roman = if self.is_roman() {
            Some(to_roman(value)?)
        } else {
            None
        };

        Ok(Evaluation {
            expression: *self,
            value,
            roman,
        })
    }
}

/// Результат вычисления.
///
/// [`Display`] даёт строку для вывода: `III + IV = VII` или `3 * 3 = 9`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation<'a> {
    /// Вычисленное выражение.
    pub expression: Expression<'a>,
    /// Целое значение результата.
    pub value: i64,
    /// Римская запись результата, если операнды римские.
    pub roman: Option<String>,
}

impl Display for Evaluation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Expression { left, op, right } = &self.expression;
        match &self.roman {
            Some(roman) => write!(f, "{} {op} {} = {roman}", left.text, right.text),
            None => write!(f, "{} {op} {} = {}", left.value, right.value, self.value),
        }
    }
}
