use crate::core::conversion::unpack;
use crate::error::ColorFormatError;
use crate::Float;

/// Parse a 24-bit color in hexadecimal format.
///
/// The string must have exactly six hexadecimal digits, optionally preceded by
/// a single `#`. Letters may be upper or lower case. This function neither
/// trims white space nor accepts the three-digit short form.
pub(crate) fn parse_hex(s: &str) -> Result<[u8; 3], ColorFormatError> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if digits.len() != 6 {
        return Err(ColorFormatError::UnexpectedCharacters);
    } else if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        // from_str_radix() also accepts a leading plus sign.
        return Err(ColorFormatError::MalformedHex);
    }

    let value = u32::from_str_radix(digits, 16).map_err(|_| ColorFormatError::MalformedHex)?;
    Ok(unpack(value))
}

/// Format the 24-bit color as six lower-case hexadecimal digits without `#`.
pub(crate) fn format_hex(rgb: &[u8; 3]) -> String {
    let [r, g, b] = *rgb;
    format!("{:02x}{:02x}{:02x}", r, g, b)
}

// --------------------------------------------------------------------------------------------------------------------

/// Format the Lab coordinates as a string.
///
/// This function formats the given cooordinates as a CSS `lab()` function with
/// space-separated arguments. It respects the formatter's precision, defaulting
/// to 5 digits past the decimal, and omits trailing zeros.
pub(crate) fn format_lab(
    coordinates: &[Float; 3],
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    f.write_str("lab(")?;

    let factor = (10.0 as Float).powi(f.precision().unwrap_or(5) as i32);
    for (index, coordinate) in coordinates.iter().enumerate() {
        if coordinate.is_nan() {
            f.write_str("none")?;
        } else {
            // Rounding instead of a format precision avoids trailing zeros.
            let rounded = (coordinate * factor).round() / factor;
            if rounded.fract() == 0.0 {
                f.write_fmt(format_args!("{:.0}", rounded))?;
            } else {
                f.write_fmt(format_args!("{}", rounded))?;
            }
        }

        if index < 2 {
            f.write_str(" ")?;
        }
    }

    f.write_str(")")
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{format_hex, parse_hex, ColorFormatError};

    #[test]
    fn test_parse_hex() -> Result<(), ColorFormatError> {
        assert_eq!(parse_hex("#112233")?, [0x11_u8, 0x22, 0x33]);
        assert_eq!(parse_hex("112233")?, [0x11_u8, 0x22, 0x33]);
        assert_eq!(parse_hex("#FfA0c9")?, [0xff_u8, 0xa0, 0xc9]);

        assert_eq!(parse_hex(""), Err(ColorFormatError::UnexpectedCharacters));
        assert_eq!(parse_hex("#"), Err(ColorFormatError::UnexpectedCharacters));
        assert_eq!(parse_hex("#123"), Err(ColorFormatError::UnexpectedCharacters));
        assert_eq!(
            parse_hex("#1122334"),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert_eq!(
            parse_hex("##112233"),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert_eq!(
            parse_hex(" #112233"),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert_eq!(parse_hex("#GGGGGG"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse_hex("+fffff"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse_hex("#ééé"), Err(ColorFormatError::MalformedHex));
        assert_eq!(
            parse_hex("not-a-color"),
            Err(ColorFormatError::UnexpectedCharacters)
        );

        Ok(())
    }

    #[test]
    fn test_format_hex() {
        assert_eq!(format_hex(&[0x3b, 0x82, 0xf6]), "3b82f6");
        assert_eq!(format_hex(&[0, 0, 0]), "000000");
    }
}
