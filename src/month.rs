//! Parsing of the `month` query parameter shared by the aggregate endpoints.

use serde::Deserialize;

use crate::Error;

/// The raw `month` query parameter.
///
/// The value is kept as text so that malformed input reaches
/// [MonthParam::parse] instead of being rejected by the extractor with an
/// unhelpful response.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct MonthParam {
    month: Option<String>,
}

impl MonthParam {
    /// Parse the parameter as a calendar month.
    ///
    /// # Errors
    /// Returns [Error::InvalidMonth] when the parameter is absent, not an
    /// integer, or outside 1-12. Callers turn this into a 400 response
    /// without touching the store.
    pub(crate) fn parse(&self) -> Result<u8, Error> {
        self.month
            .as_deref()
            .and_then(|raw| raw.trim().parse::<u8>().ok())
            .filter(|month| (1..=12).contains(month))
            .ok_or(Error::InvalidMonth)
    }
}

#[cfg(test)]
mod month_param_tests {
    use crate::Error;

    use super::MonthParam;

    fn param(month: &str) -> MonthParam {
        MonthParam {
            month: Some(month.to_string()),
        }
    }

    #[test]
    fn accepts_months_in_range() {
        for month in 1..=12u8 {
            let got = param(&month.to_string()).parse();

            assert_eq!(got, Ok(month));
        }
    }

    #[test]
    fn accepts_surrounding_whitespace() {
        assert_eq!(param(" 3 ").parse(), Ok(3));
    }

    #[test]
    fn rejects_months_out_of_range() {
        assert_eq!(param("0").parse(), Err(Error::InvalidMonth));
        assert_eq!(param("13").parse(), Err(Error::InvalidMonth));
    }

    #[test]
    fn rejects_non_integer_months() {
        assert_eq!(param("march").parse(), Err(Error::InvalidMonth));
        assert_eq!(param("3.5").parse(), Err(Error::InvalidMonth));
        assert_eq!(param("").parse(), Err(Error::InvalidMonth));
    }

    #[test]
    fn rejects_absent_month() {
        let absent = MonthParam { month: None };

        assert_eq!(absent.parse(), Err(Error::InvalidMonth));
    }
}
