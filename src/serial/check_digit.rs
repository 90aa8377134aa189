use crate::error::{ContainerError, Result};

/// Letter values for A..Z. Multiples of 11 are skipped.
const LETTER_VALUES: [u32; 26] = [
    10, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 23, 24, // A..M
    25, 26, 27, 28, 29, 30, 31, 32, 34, 35, 36, 37, 38, // N..Z
];

/// Number of leading characters covered by the check digit.
pub const CHECK_WINDOW: usize = 10;

/// Calculate the ISO 6346 check digit for the first ten characters of `code`.
///
/// Letters are case-insensitive. Each character value is weighted by
/// `2^position`, summed, and reduced mod 11; a remainder of 10 maps to 0.
/// Characters after the tenth are ignored.
pub fn calculate_check_digit(code: &str) -> Result<u8> {
    let mut sum: u32 = 0;
    let mut seen = 0;

    for (position, ch) in code.chars().take(CHECK_WINDOW).enumerate() {
        sum += char_value(ch, position)? << position;
        seen += 1;
    }

    if seen < CHECK_WINDOW {
        return Err(ContainerError::CheckWindowTooShort(seen));
    }

    let remainder = sum % 11;
    Ok(if remainder == 10 { 0 } else { remainder as u8 })
}

fn char_value(ch: char, position: usize) -> Result<u32> {
    if ch.is_ascii_alphabetic() {
        let index = (ch.to_ascii_uppercase() as u8 - b'A') as usize;
        return Ok(LETTER_VALUES[index]);
    }
    ch.to_digit(10).ok_or(ContainerError::InvalidCharacter { ch, position })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_serials() {
        assert_eq!(calculate_check_digit("TCLU702457"), Ok(4));
        assert_eq!(calculate_check_digit("FFAU250424"), Ok(0));
        assert_eq!(calculate_check_digit("TXGU420566"), Ok(6));
        assert_eq!(calculate_check_digit("CSQU305438"), Ok(3));
    }

    #[test]
    fn test_lowercase_letters() {
        assert_eq!(
            calculate_check_digit("tclu702457"),
            calculate_check_digit("TCLU702457")
        );
    }

    #[test]
    fn test_remainder_ten_maps_to_zero() {
        // APZU000000 sums to 472, and 472 % 11 == 10.
        assert_eq!(calculate_check_digit("APZU000000"), Ok(0));
    }

    #[test]
    fn test_ignores_trailing_characters() {
        assert_eq!(calculate_check_digit("TCLU7024574"), Ok(4));
    }

    #[test]
    fn test_invalid_character_anywhere() {
        let base = "TCLU702457";
        for position in 0..CHECK_WINDOW {
            let mut chars: Vec<char> = base.chars().collect();
            chars[position] = '-';
            let code: String = chars.into_iter().collect();
            assert_eq!(
                calculate_check_digit(&code),
                Err(ContainerError::InvalidCharacter { ch: '-', position })
            );
        }
    }

    #[test]
    fn test_non_ascii_rejected() {
        assert!(matches!(
            calculate_check_digit("TCLÜ702457"),
            Err(ContainerError::InvalidCharacter { position: 3, .. })
        ));
        // Arabic-Indic digit four
        assert!(calculate_check_digit("TCLU70245\u{0664}").is_err());
    }

    #[test]
    fn test_short_input() {
        assert_eq!(
            calculate_check_digit("TCLU"),
            Err(ContainerError::CheckWindowTooShort(4))
        );
        assert_eq!(
            calculate_check_digit(""),
            Err(ContainerError::CheckWindowTooShort(0))
        );
    }

    #[test]
    fn test_deterministic() {
        let first = calculate_check_digit("MSCU123456");
        for _ in 0..5 {
            assert_eq!(calculate_check_digit("MSCU123456"), first);
        }
    }
}
