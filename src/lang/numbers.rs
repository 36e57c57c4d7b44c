//! Spelling whole numbers out in English.

use crate::error::{Error, Result};

const ONES: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Spells a non-negative number in English words.
///
/// 4316 becomes "four thousand, three hundred and sixteen". Scales run up
/// to the trillions, which covers the whole of `i64`.
pub fn int_to_english(number: i64) -> Result<String> {
    if number < 0 {
        return Err(Error::NegativeNumber(number));
    }
    Ok(spell(number))
}

fn spell(number: i64) -> String {
    if number < 20 {
        ONES[number as usize].to_string()
    } else if number < 100 {
        let tens = TENS[(number / 10) as usize];
        if number % 10 == 0 {
            tens.to_string()
        } else {
            format!("{}-{}", tens, ONES[(number % 10) as usize])
        }
    } else if number < 1_000 {
        let hundreds = format!("{} hundred", spell(number / 100));
        if number % 100 == 0 {
            hundreds
        } else {
            format!("{} and {}", hundreds, spell(number % 100))
        }
    } else if number < 1_000_000 {
        spell_scaled(number, 1_000, "thousand")
    } else if number < 1_000_000_000 {
        spell_scaled(number, 1_000_000, "million")
    } else if number < 1_000_000_000_000 {
        spell_scaled(number, 1_000_000_000, "billion")
    } else {
        spell_scaled(number, 1_000_000_000_000, "trillion")
    }
}

fn spell_scaled(number: i64, unit: i64, word: &str) -> String {
    let head = format!("{} {}", spell(number / unit), word);
    if number % unit == 0 {
        head
    } else {
        format!("{}, {}", head, spell(number % unit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spell_out(number: i64) -> String {
        int_to_english(number).expect("non-negative numbers spell out")
    }

    #[test]
    fn test_small_numbers() {
        assert_eq!(spell_out(0), "zero");
        assert_eq!(spell_out(7), "seven");
        assert_eq!(spell_out(13), "thirteen");
        assert_eq!(spell_out(19), "nineteen");
    }

    #[test]
    fn test_tens_are_hyphenated() {
        assert_eq!(spell_out(20), "twenty");
        assert_eq!(spell_out(21), "twenty-one");
        assert_eq!(spell_out(64), "sixty-four");
        assert_eq!(spell_out(99), "ninety-nine");
    }

    #[test]
    fn test_hundreds_use_and() {
        assert_eq!(spell_out(100), "one hundred");
        assert_eq!(spell_out(101), "one hundred and one");
        assert_eq!(spell_out(118), "one hundred and eighteen");
        assert_eq!(spell_out(999), "nine hundred and ninety-nine");
    }

    #[test]
    fn test_scales_join_with_commas() {
        assert_eq!(spell_out(1_000), "one thousand");
        assert_eq!(spell_out(1_000_000), "one million");
        assert_eq!(spell_out(1_100), "one thousand, one hundred");
        assert_eq!(
            spell_out(4_316),
            "four thousand, three hundred and sixteen"
        );
        assert_eq!(
            spell_out(1_234_567),
            "one million, two hundred and thirty-four thousand, five hundred and sixty-seven"
        );
        assert_eq!(spell_out(2_000_000_000), "two billion");
        assert_eq!(spell_out(3_000_000_000_000), "three trillion");
    }

    #[test]
    fn test_negative_numbers_are_rejected() {
        assert!(matches!(
            int_to_english(-1),
            Err(Error::NegativeNumber(-1))
        ));
    }
}
