//! Токенизатор строки вида `<число> <оператор> <число>`.
//!
//! Строка делится по одиночным пробелам, у каждого токена запоминается
//! позиция. Для числовых токенов определяется запись: арабская или римская.
//!
//! # Пример
//!
//! ```
//! use roman_calculator::token::{Notation, tokenize};
//!
//! let [left, op, right] = tokenize("III plus 4").unwrap();
//! assert_eq!(op.text, "plus");
//! assert_eq!(left.notation(), Notation::Roman);
//! assert_eq!(right.notation(), Notation::Arabic);
//! ```

use std::fmt::Display;

use thiserror::Error;

use crate::numeral::roman_value;

/// Число токенов в выражении.
pub const EXPRESSION_LEN: usize = 3;

/// Запись числа.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    /// Десятичное целое: `7`, `+3`, `-2`.
    Arabic,
    /// Римское число из набора I..X.
    Roman,
    /// Ни то, ни другое.
    Invalid,
}

impl Display for Notation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Arabic => f.write_str("арабское"),
            Self::Roman => f.write_str("римское"),
            Self::Invalid => f.write_str("некорректное"),
        }
    }
}

/// Токен с позицией в исходной строке.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct SpannedToken<'a> {
    /// Текст токена как он введён.
    pub text: &'a str,
    /// Позиция начала токена (в байтах от начала строки).
    pub pos: usize,
}

impl<'a> SpannedToken<'a> {
    /// Создаёт новый токен с позицией.
    pub const fn new(text: &'a str, pos: usize) -> Self {
        Self { text, pos }
    }

    /// Определяет запись токена как числа.
    ///
    /// Сначала пробуется десятичное целое, затем римское число без учёта
    /// регистра.
    #[must_use]
    pub fn notation(&self) -> Notation {
        if self.text.parse::<i64>().is_ok() {
            Notation::Arabic
        } else if roman_value(self.text).is_some() {
            Notation::Roman
        } else {
            Notation::Invalid
        }
    }

    /// То же, что [`notation`](Self::notation), но некорректная запись
    /// превращается в ошибку.
    ///
    /// # Ошибки
    ///
    /// [`TokenErrorKind::UnrecognizedNumber`], если токен не число.
    pub fn classify(&self) -> Result<Notation, TokenError> {
        match self.notation() {
            Notation::Invalid => Err(self.unrecognized()),
            notation => Ok(notation),
        }
    }

    pub(crate) fn unrecognized(&self) -> TokenError {
        TokenError::new(
            self.pos,
            TokenErrorKind::UnrecognizedNumber(self.text.to_owned()),
        )
    }
}

/// Ошибка токенизации.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
#[error("{kind}")]
pub struct TokenError {
    /// Позиция ошибки в исходной строке.
    pub pos: usize,
    /// Тип ошибки.
    pub kind: TokenErrorKind,
}

impl TokenError {
    const fn new(pos: usize, kind: TokenErrorKind) -> Self {
        Self { pos, kind }
    }
}

/// Тип ошибки токенизации.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum TokenErrorKind {
    /// Токенов не три.
    MalformedExpression {
        /// Сколько токенов получилось.
        count: usize,
    },
    /// Токен не является ни арабским, ни римским числом.
    UnrecognizedNumber(String),
}

impl Display for TokenErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedExpression { count } => write!(
                f,
                "некорректное выражение (частей: {count}). \
                 Используйте формат: число оператор число"
            ),
            Self::UnrecognizedNumber(text) => {
                write!(f, "некорректное арабское или римское число: {text}")
            }
        }
    }
}

/// Итератор по токенам, разделённым одиночными пробелами.
///
/// Два пробела подряд дают пустой токен, пустая строка даёт один пустой токен.
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
    done: bool,
}

impl<'a> Tokenizer<'a> {
    /// Создаёт новый токенизатор для входной строки.
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            done: false,
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = SpannedToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let start_pos = self.pos;
        let text = match self.input.split_once(' ') {
            Some((text, rest)) => {
                self.input = rest;
                self.pos += text.len() + 1;
                text
            }
            None => {
                self.done = true;
                self.input
            }
        };

        Some(SpannedToken::new(text, start_pos))
    }
}

/// Делит обрезанную строку ровно на три токена.
///
/// Запись чисел здесь не проверяется: это делает [`SpannedToken::classify`]
/// при разборе каждого операнда по порядку.
///
/// # Ошибки
///
/// [`TokenErrorKind::MalformedExpression`], если токенов не три. Позиция
/// указывает на первый лишний токен или на конец строки.
pub fn tokenize(line: &str) -> Result<[SpannedToken<'_>; EXPRESSION_LEN], TokenError> {
    let tokens: Vec<_> = Tokenizer::new(line).collect();

    let [left, op, right] = tokens[..] else {
        let pos = tokens
            .get(EXPRESSION_LEN)
            .map_or(line.len(), |extra| extra.pos);
        return Err(TokenError::new(
            pos,
            TokenErrorKind::MalformedExpression {
                count: tokens.len(),
            },
        ));
    };

    Ok([left, op, right])
}
