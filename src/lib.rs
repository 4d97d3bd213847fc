//! # roman_calculator
//!
//! Консольный калькулятор выражений вида `<число> <оператор> <число>`.
//!
//! Поддерживает:
//! - Арабские числа от 1 до 10
//! - Римские числа от I до X (регистр не важен)
//! - Операции `+`, `-`, `*`, `/` и их синонимы `plus`, `minus`, `multiply`, `divide`
//!
//! Обе части выражения должны быть записаны одинаково. Для римских операндов
//! результат выводится римскими цифрами.
//!
//! # Пример использования
//!
//! ```
//! use roman_calculator::evaluate;
//!
//! assert_eq!(evaluate("III + IV").unwrap().to_string(), "III + IV = VII");
//! assert_eq!(evaluate("3 * 3").unwrap().to_string(), "3 * 3 = 9");
//! ```

pub mod expression;
pub mod numeral;
pub mod parser;
pub mod token;

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::expression::Evaluation;

/// Приветствие при запуске.
pub const BANNER: &str = "Добро пожаловать в калькулятор!";

/// Приглашение к вводу.
pub const PROMPT: &str = "Введите выражение: ";

/// Общий тип ошибки калькулятора.
#[derive(Debug, thiserror::Error)]
pub enum CalcError {
    /// Ошибка разбора выражения.
    #[error("{0}")]
    Parse(#[from] parser::ParseError),

    /// Ошибка вычисления (деление на ноль, римский результат вне диапазона).
    #[error("{0}")]
    Eval(#[from] expression::EvalError),
}

impl CalcError {
    /// Возвращает позицию ошибки в исходной строке, если она известна.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Parse(pe) => pe.position(),
            Self::Eval(_) => None,
        }
    }
}

/// Режим консоли.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Приветствие, приглашение, результат.
    #[default]
    Interactive,
    /// Только строка результата.
    Quiet,
}

/// Вычисляет строковое выражение и возвращает результат.
///
/// Пробелы по краям строки отбрасываются.
///
/// # Ошибки
///
/// Возвращает [`CalcError`] при ошибках парсинга или вычисления.
///
/// # Примеры
///
/// ```
/// use roman_calculator::evaluate;
///
/// assert_eq!(evaluate("X divide II").unwrap().to_string(), "X / II = V");
/// assert_eq!(evaluate(" 7 - 9 ").unwrap().value, -2);
/// assert!(evaluate("V + 3").is_err());
/// assert!(evaluate("I - I").is_err());
/// ```
pub fn evaluate(input: &str) -> Result<Evaluation<'_>, CalcError> {
    let expr = parser::parse(input.trim())?;
    debug!(?expr, "выражение разобрано");
    let result = expr.evaluate()?;
    Ok(result)
}

/// Вычисляет одну строку и пишет ответ в `output`.
///
/// Ошибка калькулятора выводится как текст, а не возвращается.
///
/// # Ошибки
///
/// Возвращает [`io::Error`] при ошибках записи.
pub fn respond<W: Write>(line: &str, mut output: W) -> io::Result<()> {
    let input = line.trim();

    match evaluate(input) {
        Ok(result) => {
            debug!(value = result.value, "выражение вычислено");
            writeln!(output, "{result}")?;
        }
        Err(e) => {
            debug!(error = ?e, input, "выражение отклонено");
            print_error_with_context(&mut output, input, &e)?;
        }
    }

    output.flush()
}

/// Запускает калькулятор: одна строка на входе, одна строка на выходе.
///
/// Конец ввода считается пустой строкой. Байты, не являющиеся UTF-8,
/// заменяются на `U+FFFD` и дают обычную ошибку разбора.
///
/// # Ошибки
///
/// Возвращает [`io::Error`] при ошибках чтения/записи.
pub fn run<R: BufRead, W: Write>(mut input: R, mut output: W, mode: Mode) -> io::Result<()> {
    if mode == Mode::Interactive {
        writeln!(output, "{BANNER}")?;
        write!(output, "{PROMPT}")?;
        output.flush()?;
    }

    let mut buf = Vec::new();
    let read = input.read_until(b'\n', &mut buf)?;
    if read == 0 {
        debug!("ввод закончился до первой строки");
    }

    let line = String::from_utf8_lossy(&buf);
    respond(&line, output)
}

/// Выводит ошибку с указанием позиции в исходной строке.
fn print_error_with_context<W: Write>(
    output: &mut W,
    input: &str,
    error: &CalcError,
) -> io::Result<()> {
    if let Some(pos) = error.position() {
        // Показываем исходную строку и указатель на ошибку
        writeln!(output, "  {input}")?;
        let column = input[..pos].chars().count();
        writeln!(output, "  {}^", " ".repeat(column))?;
    }
    writeln!(output, "Ошибка: {error}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet(input: &str) -> String {
        let mut out = Vec::new();
        run(input.as_bytes(), &mut out, Mode::Quiet).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn evaluate_simple() {
        assert_eq!(evaluate("1 + 2").unwrap().value, 3);
        assert_eq!(evaluate("10 - 3").unwrap().value, 7);
        assert_eq!(evaluate("4 * 5").unwrap().value, 20);
        assert_eq!(evaluate("10 / 3").unwrap().value, 3);
    }

    #[test]
    fn evaluate_trims_input() {
        assert_eq!(evaluate("  II + II\n").unwrap().to_string(), "II + II = IV");
    }

    #[test]
    fn evaluate_errors() {
        assert!(matches!(evaluate("V - X"), Err(CalcError::Eval(_))));
        assert!(matches!(evaluate("1 +"), Err(CalcError::Parse(_))));
        assert!(matches!(evaluate(""), Err(CalcError::Parse(_))));
    }

    #[test]
    fn error_has_position() {
        let err = evaluate("1 @ 2").unwrap_err();
        assert_eq!(err.position(), Some(2));

        let err = evaluate("V + 3").unwrap_err();
        assert_eq!(err.position(), Some(4));

        // Ошибка вычисления не имеет позиции
        let err = evaluate("I - V").unwrap_err();
        assert_eq!(err.position(), None);
    }

    #[test]
    fn run_interactive_prints_banner_and_prompt() {
        let mut out = Vec::new();
        run("III + IV\n".as_bytes(), &mut out, Mode::Interactive).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("{BANNER}\n{PROMPT}III + IV = VII\n")
        );
    }

    #[test]
    fn run_quiet_prints_only_result() {
        assert_eq!(quiet("3 * 3\n"), "3 * 3 = 9\n");
    }

    #[test]
    fn run_reads_single_line() {
        assert_eq!(quiet("1 + 1\n2 + 2\n"), "1 + 1 = 2\n");
    }

    #[test]
    fn run_error_with_caret() {
        assert_eq!(
            quiet("1 % 2\n"),
            "  1 % 2\n    ^\nОшибка: некорректный оператор: %\n"
        );
    }

    #[test]
    fn run_eval_error_without_caret() {
        assert_eq!(
            quiet("I - II\n"),
            "Ошибка: результат -1 нельзя записать римскими цифрами (допустимо от 1 до 1000)\n"
        );
    }

    #[test]
    fn run_end_of_input_is_malformed() {
        let out = quiet("");
        assert!(out.ends_with(
            "Ошибка: некорректное выражение (частей: 1). \
             Используйте формат: число оператор число\n"
        ));
    }

    #[test]
    fn run_invalid_utf8_is_unrecognized_number() {
        let mut out = Vec::new();
        run(&b"\xff + 1\n"[..], &mut out, Mode::Quiet).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(
            out.ends_with("Ошибка: некорректное арабское или римское число: \u{FFFD}\n"),
            "{out}"
        );
    }

    #[test]
    fn caret_counts_chars_not_bytes() {
        assert_eq!(
            quiet("жж ж ж ж\n"),
            "  жж ж ж ж\n         ^\n\
             Ошибка: некорректное выражение (частей: 5). \
             Используйте формат: число оператор число\n"
        );
    }
}
