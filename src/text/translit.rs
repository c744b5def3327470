// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! ASCII approximations for characters NFKD can't decompose.
//!
//! Input is expected to be lowercased and NFKD-decomposed already, so only
//! lowercase forms and base letters appear here. Uppercase-only symbols are
//! covered by the caller's final ASCII lowercase pass.

/// Closest ASCII spelling of `c`, or `None` when there is no sensible one.
pub fn transliterate(c: char) -> Option<&'static str> {
    let folded = match c {
        // Latin letters without a canonical decomposition
        'æ' => "ae",
        'œ' => "oe",
        'ß' | 'ẞ' => "ss",
        'ø' => "o",
        'đ' | 'ð' => "d",
        'þ' => "th",
        'ł' => "l",
        'ħ' => "h",
        'ı' => "i",
        'ĳ' => "ij",
        'ŋ' => "ng",
        'ŧ' => "t",
        'ƒ' => "f",
        'ɐ' => "a",
        'ə' => "e",

        // Punctuation and symbols
        '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{201B}' | '\u{2032}' | '\u{02BC}' => "'",
        '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{201F}' | '\u{2033}' | '«' | '»' => "\"",
        '\u{2010}' | '\u{2011}' | '\u{2012}' | '\u{2013}' | '\u{2014}' | '\u{2015}' | '\u{2212}' => "-",
        '\u{2026}' => "...",
        '\u{2022}' | '·' => "*",
        '×' => "x",
        '÷' => "/",
        '€' => "EUR",
        '£' => "GBP",
        '¥' => "JPY",
        '©' => "(c)",
        '®' => "(r)",
        '°' => "deg",
        '±' => "+-",
        '¿' => "?",
        '¡' => "!",
        '\u{00A0}' | '\u{2009}' | '\u{200A}' | '\u{202F}' => " ",
        '→' => "->",
        '←' => "<-",
        '≠' => "!=",
        '≤' => "<=",
        '≥' => ">=",
        '∞' => "inf",
        'π' => "p",

        // Greek (base letters; tonos/dialytika were stripped as combining marks)
        'α' => "a",
        'β' => "b",
        'γ' => "g",
        'δ' => "d",
        'ε' => "e",
        'ζ' => "z",
        'η' => "e",
        'θ' => "th",
        'ι' => "i",
        'κ' => "k",
        'λ' => "l",
        'μ' | 'µ' => "m",
        'ν' => "n",
        'ξ' => "x",
        'ο' => "o",
        'ρ' => "r",
        'σ' | 'ς' => "s",
        'τ' => "t",
        'υ' => "u",
        'φ' => "ph",
        'χ' => "kh",
        'ψ' => "ps",
        'ω' => "o",

        // Cyrillic
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' | 'ё' | 'э' => "e",
        'ж' => "zh",
        'з' => "z",
        'и' | 'й' | 'і' => "i",
        'ї' => "yi",
        'є' => "ye",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "kh",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "shch",
        'ъ' | 'ь' => "",
        'ы' => "y",
        'ю' => "iu",
        'я' => "ia",

        _ => return None,
    };
    Some(folded)
}
