use core::fmt::{Display, Write as _};
use heapless::String;

/// Configuration error type covering misconfigured table fields and
/// query construction failures.
#[derive(Debug, Clone)]
pub enum ConfigError {
    // Enum decoding errors
    InvalidUnits,
    InvalidMode,

    // Field invariant violations
    InvalidCountryCode,
    InvalidLanguageCode,
    ForecastPeriodsOutOfRange,
    ZeroPageWidth,

    // Operator never filled in the template
    PlaceholderWifiCredentials,
    PlaceholderApiKey,

    // Query builder errors
    QueryTooLong,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut msg: String<64> = String::new();
        match self {
            ConfigError::InvalidUnits => write!(msg, "units must be 'M' or 'I'"),
            ConfigError::InvalidMode => write!(msg, "mode must be 'F' or 'B'"),
            ConfigError::InvalidCountryCode => {
                write!(msg, "country must be a two-letter ISO-3166-1 code")
            }
            ConfigError::InvalidLanguageCode => {
                write!(msg, "language must be a two-letter code")
            }
            ConfigError::ForecastPeriodsOutOfRange => {
                write!(msg, "forecast periods must be 1..=32 (96h at 3h steps)")
            }
            ConfigError::ZeroPageWidth => write!(msg, "page width must be positive"),
            ConfigError::PlaceholderWifiCredentials => {
                write!(msg, "Wifi SSID/password still set to placeholder")
            }
            ConfigError::PlaceholderApiKey => {
                write!(msg, "OWM API key still set to placeholder")
            }
            ConfigError::QueryTooLong => write!(msg, "query exceeds buffer capacity"),
        }?;
        write!(f, "{}", msg)
    }
}
