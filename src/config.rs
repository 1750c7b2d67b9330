use core::str::FromStr;

use log::info;

use crate::error::ConfigError;

// Placeholder values shipped in the table. The display cannot authenticate
// until the operator replaces them.
pub const PLACEHOLDER_SSID: &str = "your-SSID";
pub const PLACEHOLDER_PASSWORD: &str = "your-PASSWORD";
pub const PLACEHOLDER_APIKEY: &str = "your_OWM-API-Key";

// 3-hour forecast granularity over a 96-hour window
pub const MAX_FORECAST_PERIODS: u8 = 32;

/// Unit system for displayed measurements.
///
/// Encoded as `"M"` / `"I"` in the settings surface; the OWM query string
/// takes the lowercase long form (see [`Units::owm_query_value`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Units {
    Metric,
    Imperial,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Metric => "M",
            Units::Imperial => "I",
        }
    }

    /// Value of the `units` parameter in an OWM request.
    pub fn owm_query_value(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }
}

impl FromStr for Units {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M" => Ok(Units::Metric),
            "I" => Ok(Units::Imperial),
            _ => Err(ConfigError::InvalidUnits),
        }
    }
}

/// Where the renderer applies colour: `"F"` highlights foreground (text),
/// `"B"` highlights background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Foreground,
    Background,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Foreground => "F",
            Mode::Background => "B",
        }
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "F" => Ok(Mode::Foreground),
            "B" => Ok(Mode::Background),
            _ => Err(ConfigError::InvalidMode),
        }
    }
}

/// The settings table read by the weather display at startup.
///
/// One flat record, fixed for the life of the process. The table performs no
/// validation on its own; call [`Settings::validate`] before using it.
pub struct Settings {
    // Wifi credentials
    pub ssid: &'static str,
    pub password: &'static str,

    /// API key from a free developer account at https://openweathermap.org/
    pub apikey: &'static str,
    /// Weather provider hostname
    pub wxserver: &'static str,

    /// Home city, per http://bulk.openweathermap.org/sample/
    pub city: &'static str,
    /// ISO-3166-1 two-letter country code
    pub country: &'static str,
    /// Two-letter response language code; OWM only translates the
    /// weather description
    pub language: &'static str,
    pub units: Units,

    pub mode: Mode,
    /// Rendered page width in pixels
    pub page_width: u16,
    /// Number of 3-hour forecast periods to request, maximum 96 hours
    pub forecast_periods: u8,

    /// POSIX TZ rule, see
    /// https://github.com/nayarsystems/posix_tz_db/blob/master/zones.csv
    pub timezone: &'static str,
    /// NTP host; pool.ntp.org picks the closest available servers
    pub ntp_server: &'static str,
}

pub const SETTINGS: Settings = Settings {
    ssid: PLACEHOLDER_SSID,
    password: PLACEHOLDER_PASSWORD,
    apikey: PLACEHOLDER_APIKEY,
    wxserver: "api.openweathermap.org",
    city: "MELKSHAM",
    country: "GB",
    language: "EN",
    units: Units::Metric,
    mode: Mode::Foreground,
    page_width: 1024,
    forecast_periods: 9,
    timezone: "GMT0BST,M3.5.0/01,M10.5.0/02",
    ntp_server: "pool.ntp.org",
};

fn is_two_letter_code(s: &str) -> bool {
    s.len() == 2 && s.bytes().all(|b| b.is_ascii_alphabetic())
}

impl Settings {
    /// Check the machine-verifiable invariants of the table.
    ///
    /// Returns the first violation found. A table that still carries the
    /// shipped placeholder credentials is reported as unconfigured.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ssid == PLACEHOLDER_SSID || self.password == PLACEHOLDER_PASSWORD {
            return Err(ConfigError::PlaceholderWifiCredentials);
        }
        if self.apikey == PLACEHOLDER_APIKEY {
            return Err(ConfigError::PlaceholderApiKey);
        }
        if !is_two_letter_code(self.country) {
            return Err(ConfigError::InvalidCountryCode);
        }
        if !is_two_letter_code(self.language) {
            return Err(ConfigError::InvalidLanguageCode);
        }
        if self.forecast_periods == 0 || self.forecast_periods > MAX_FORECAST_PERIODS {
            return Err(ConfigError::ForecastPeriodsOutOfRange);
        }
        if self.page_width == 0 {
            return Err(ConfigError::ZeroPageWidth);
        }
        Ok(())
    }

    /// Log the non-secret fields at startup. The Wifi password and API key
    /// are never logged.
    pub fn log(&self) {
        info!("Wifi network SSID: {}", self.ssid);
        info!("Weather server: {}", self.wxserver);
        info!(
            "Location: {},{} lang {} units {}",
            self.city,
            self.country,
            self.language,
            self.units.as_str()
        );
        info!(
            "Render: mode {} page width {}px, {} forecast periods",
            self.mode.as_str(),
            self.page_width,
            self.forecast_periods
        );
        info!("Timezone: {}", self.timezone);
        info!("NTP server: {}", self.ntp_server);
    }
}
