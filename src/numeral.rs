//! Римские числа: закрытый набор от I до X и обратное преобразование.
//!
//! # Примеры
//!
//! ```
//! use roman_calculator::numeral::{roman_value, to_roman};
//!
//! assert_eq!(roman_value("iv"), Some(4));
//! assert_eq!(roman_value("XI"), None);
//! assert_eq!(to_roman(944).unwrap(), "CMXLIV");
//! ```

use thiserror::Error;

/// Наибольшее значение, которое умеет выводить [`to_roman`].
pub const MAX_ROMAN: i64 = 1000;

/// Допустимые римские числа на входе.
const ROMAN_NUMERALS: [(&str, i64); 10] = [
    ("I", 1),
    ("II", 2),
    ("III", 3),
    ("IV", 4),
    ("V", 5),
    ("VI", 6),
    ("VII", 7),
    ("VIII", 8),
    ("IX", 9),
    ("X", 10),
];

/// Пары «значение — символ» для жадного вывода, по убыванию.
const ROMAN_DIGITS: [(i64, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Результат нельзя записать римскими цифрами.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("результат {value} нельзя записать римскими цифрами (допустимо от 1 до 1000)")]
pub struct RomanRangeError {
    /// Значение, которое не удалось преобразовать.
    pub value: i64,
}

/// Возвращает значение римского числа из набора I..X.
///
/// Регистр не важен: `"vii"` распознаётся как `VII`. Всё, что не входит
/// в набор (`"XI"`, `"IIII"`), даёт `None`.
#[must_use]
pub fn roman_value(token: &str) -> Option<i64> {
    let upper = token.to_ascii_uppercase();
    ROMAN_NUMERALS
        .iter()
        .find(|(numeral, _)| *numeral == upper)
        .map(|&(_, value)| value)
}

/// Записывает число римскими цифрами.
///
/// # Ошибки
///
/// Возвращает [`RomanRangeError`], если `value` вне диапазона `1..=1000`.
pub fn to_roman(value: i64) -> Result<String, RomanRangeError> {
    if !(1..=MAX_ROMAN).contains(&value) {
        return Err(RomanRangeError { value });
    }

    let mut rest = value;
    let mut out = String::new();
    for &(digit, symbol) in &ROMAN_DIGITS {
        while rest >= digit {
            out.push_str(symbol);
            rest -= digit;
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_closed_set() {
        for (expected, numeral) in ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X"]
            .iter()
            .enumerate()
        {
            assert_eq!(roman_value(numeral), Some(expected as i64 + 1), "{numeral}");
        }
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(roman_value("ix"), Some(9));
        assert_eq!(roman_value("Vii"), Some(7));
    }

    #[test]
    fn lookup_rejects_outside_set() {
        assert_eq!(roman_value("XI"), None);
        assert_eq!(roman_value("IIII"), None);
        assert_eq!(roman_value("VX"), None);
        assert_eq!(roman_value(""), None);
        assert_eq!(roman_value("5"), None);
    }

    #[test]
    fn render_small_values_round_trip() {
        for &(numeral, value) in &ROMAN_NUMERALS {
            assert_eq!(to_roman(value).unwrap(), numeral);
        }
    }

    #[test]
    fn render_results_of_roman_arithmetic() {
        assert_eq!(to_roman(14).unwrap(), "XIV");
        assert_eq!(to_roman(40).unwrap(), "XL");
        assert_eq!(to_roman(49).unwrap(), "XLIX");
        assert_eq!(to_roman(90).unwrap(), "XC");
        assert_eq!(to_roman(100).unwrap(), "C");
    }

    #[test]
    fn render_upper_bound() {
        assert_eq!(to_roman(999).unwrap(), "CMXCIX");
        assert_eq!(to_roman(1000).unwrap(), "M");
    }

    #[test]
    fn render_out_of_range() {
        assert_eq!(to_roman(0), Err(RomanRangeError { value: 0 }));
        assert_eq!(to_roman(-3), Err(RomanRangeError { value: -3 }));
        assert_eq!(to_roman(1001), Err(RomanRangeError { value: 1001 }));
    }
}
