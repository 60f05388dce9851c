use crate::error::EntryError;

/// Display precision for a spinner value.
///
/// Zero decimal places means integer display: the value is truncated toward
/// zero, never rounded. Otherwise exactly `decimal_places` fractional digits
/// are printed with standard rounding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NumberFormat {
    decimal_places: u32,
}

impl NumberFormat {
    pub const MAX_DECIMAL_PLACES: u32 = 6;

    pub fn new(decimal_places: u32) -> Self {
        let decimal_places = if decimal_places > Self::MAX_DECIMAL_PLACES {
            log::warn!(
                "spinner decimal places {decimal_places} too large, using {}",
                Self::MAX_DECIMAL_PLACES
            );
            Self::MAX_DECIMAL_PLACES
        } else {
            decimal_places
        };
        Self { decimal_places }
    }

    pub fn decimal_places(&self) -> u32 {
        self.decimal_places
    }

    pub fn is_integer(&self) -> bool {
        self.decimal_places == 0
    }

    pub fn format(&self, value: f64) -> String {
        if self.is_integer() {
            // `as` truncates toward zero and saturates out-of-range values.
            format!("{}", value as i64)
        } else {
            format!("{:.*}", self.decimal_places as usize, value)
        }
    }

    /// Parses text typed by the user. Integer formats only accept integer
    /// syntax; float formats accept anything `f64` parses except NaN and
    /// infinities.
    pub fn parse(&self, text: &str) -> Result<f64, EntryError> {
        let text = text.trim();
        if self.is_integer() {
            return text
                .parse::<i64>()
                .map(|v| v as f64)
                .map_err(|_| EntryError::NotANumber);
        }
        match text.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(EntryError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_format_truncates() {
        let f = NumberFormat::new(0);
        assert_eq!(f.format(3.99), "3");
        assert_eq!(f.format(-3.99), "-3");
        assert_eq!(f.format(10.0), "10");
    }

    #[test]
    fn float_format_rounds() {
        let f = NumberFormat::new(2);
        assert_eq!(f.format(3.996), "4.00");
        assert_eq!(f.format(1.234), "1.23");
        // 3.995 is stored as 3.99499999..., so it rounds down
        assert_eq!(f.format(3.995), "3.99");
        assert_eq!(NumberFormat::new(1).format(-1.0), "-1.0");
    }

    #[test]
    fn precision_is_capped() {
        let f = NumberFormat::new(9);
        assert_eq!(f.decimal_places(), NumberFormat::MAX_DECIMAL_PLACES);
        assert_eq!(f.format(0.5), "0.500000");
    }

    #[test]
    fn parse_respects_mode() {
        let int = NumberFormat::new(0);
        assert_eq!(int.parse("5"), Ok(5.0));
        assert_eq!(int.parse(" -1 "), Ok(-1.0));
        assert_eq!(int.parse("5.5"), Err(EntryError::NotANumber));
        assert_eq!(int.parse("5a"), Err(EntryError::NotANumber));

        let float = NumberFormat::new(2);
        assert_eq!(float.parse("5.5"), Ok(5.5));
        assert_eq!(float.parse("1e11"), Ok(1e11));
        assert_eq!(float.parse(""), Err(EntryError::NotANumber));
        assert_eq!(float.parse("5.5b"), Err(EntryError::NotANumber));
        assert_eq!(float.parse("inf"), Err(EntryError::NotANumber));
        assert_eq!(float.parse("NaN"), Err(EntryError::NotANumber));
    }
}
