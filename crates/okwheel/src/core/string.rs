use crate::error::ColorFormatError;

/// Parse a 24-bit color in hashed hexadecimal format. If successful, this
/// function returns the three coordinates as unsigned bytes. It transparently
/// handles single-digit coordinates and either case.
pub(crate) fn parse_hashed(s: &str) -> Result<[u8; 3], ColorFormatError> {
    if !s.starts_with('#') {
        return Err(ColorFormatError::UnknownFormat);
    } else if s.len() != 4 && s.len() != 7 {
        return Err(ColorFormatError::UnexpectedCharacters);
    }

    fn parse_coordinate(s: &str, index: usize) -> Result<u8, ColorFormatError> {
        let factor = s.len() / 3;
        let t = s
            .get(1 + factor * index..1 + factor * (index + 1))
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        if !t.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorFormatError::MalformedHex);
        }
        let n = u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)?;

        Ok(if factor == 1 { 16 * n + n } else { n })
    }

    let c1 = parse_coordinate(s, 0)?;
    let c2 = parse_coordinate(s, 1)?;
    let c3 = parse_coordinate(s, 2)?;
    Ok([c1, c2, c3])
}

/// Format the 24-bit color in uppercase hashed hexadecimal format, e.g.,
/// `#1A2B3C`.
pub(crate) fn format_hashed(
    coordinates: &[u8; 3],
    f: &mut core::fmt::Formatter<'_>,
) -> core::fmt::Result {
    let [r, g, b] = *coordinates;
    write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
}

/// Format the one-line summary of a picked color.
///
/// The summary lists the Oklch coordinates with 3, 3, and 1 digits past the
/// decimal as well as the 24-bit coordinates and their hashed hexadecimal
/// form, e.g., `L=0.700  C=0.210  H=0.0°  RGB=(255,87,153) #FF5799`.
#[allow(non_snake_case)]
pub(crate) fn format_summary(L: f64, C: f64, h: f64, coordinates: &[u8; 3], hex: &str) -> String {
    let [r, g, b] = *coordinates;
    format!(
        "L={:.3}  C={:.3}  H={:.1}°  RGB=({},{},{}) {}",
        L, C, h, r, g, b, hex
    )
}

#[cfg(test)]
mod test {
    use super::{format_summary, parse_hashed};
    use crate::error::ColorFormatError;

    #[test]
    fn test_parse_hashed() -> Result<(), ColorFormatError> {
        assert_eq!(parse_hashed("#123")?, [0x11, 0x22, 0x33], "short form");
        assert_eq!(parse_hashed("#F65d87")?, [0xf6, 0x5d, 0x87], "mixed case");
        assert_eq!(
            parse_hashed("123456"),
            Err(ColorFormatError::UnknownFormat),
            "missing hash"
        );
        assert_eq!(
            parse_hashed("#12345"),
            Err(ColorFormatError::UnexpectedCharacters),
            "wrong length"
        );
        assert_eq!(
            parse_hashed("#efg"),
            Err(ColorFormatError::MalformedHex),
            "not hexadecimal"
        );
        assert_eq!(
            parse_hashed("#+f0000"),
            Err(ColorFormatError::MalformedHex),
            "sign is not a digit"
        );
        assert_eq!(
            parse_hashed("#+00"),
            Err(ColorFormatError::MalformedHex),
            "sign is not a digit"
        );
        assert_eq!(
            parse_hashed("#💩00"),
            Err(ColorFormatError::UnexpectedCharacters),
            "not at character boundary"
        );
        Ok(())
    }

    #[test]
    fn test_format_summary() {
        assert_eq!(
            format_summary(0.7, 0.12345, 359.96, &[1, 2, 255], "#0102FF"),
            "L=0.700  C=0.123  H=360.0°  RGB=(1,2,255) #0102FF",
            "summary formats all quantities"
        );
    }
}
