use core::fmt::Write as _;

use heapless::String;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::config::Settings;
use crate::error::ConfigError;

const FORECAST_ENDPOINT: &str = "/data/2.5/forecast";

const QUERY_ENCODE_SET: &AsciiSet = &CONTROLS
    // common separators / punctuation / reserved characters:
    .add(b' ')
    .add(b'!')
    .add(b'"')
    .add(b'#')
    .add(b'$')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'+')
    .add(b',')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}')
    .add(b'~');

pub fn url_encode_component<const N: usize>(component: &str) -> Result<String<N>, ConfigError> {
    let mut buf = String::new();
    write!(buf, "{}", utf8_percent_encode(component, QUERY_ENCODE_SET))
        .map_err(|_| ConfigError::QueryTooLong)?;
    Ok(buf)
}

/// Build the OWM forecast request path for the given settings.
///
/// This is the path the HTTP client sends to `settings.wxserver`; the
/// transport itself lives in the consuming program. Operator-supplied
/// components are percent-encoded according to RFC 3986 for characters
/// outside the unreserved set (ALPHA / DIGIT / "-" / "." / "_" / "~").
///
/// Returns a heapless string so it works in `no_std` contexts.
pub fn build_forecast_query<const N: usize>(
    settings: &Settings,
) -> Result<String<N>, ConfigError> {
    let city_enc: String<N> = url_encode_component(settings.city)?;
    let country_enc: String<8> = url_encode_component(settings.country)?;
    let apikey_enc: String<N> = url_encode_component(settings.apikey)?;
    let lang_enc: String<8> = url_encode_component(settings.language)?;

    let mut query: String<N> = String::new();
    write!(
        query,
        "{}?q={},{}&APPID={}&mode=json&units={}&lang={}&cnt={}",
        FORECAST_ENDPOINT,
        city_enc,
        country_enc,
        apikey_enc,
        settings.units.owm_query_value(),
        lang_enc,
        settings.forecast_periods,
    )
    .map_err(|_| ConfigError::QueryTooLong)?;
    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SETTINGS, Units};

    #[test]
    fn test_forecast_query_shape() {
        let settings = Settings {
            apikey: "deadbeef",
            ..SETTINGS
        };
        let query: String<256> = build_forecast_query(&settings).unwrap();
        assert_eq!(
            query.as_str(),
            "/data/2.5/forecast?q=MELKSHAM,GB&APPID=deadbeef&mode=json&units=metric&lang=EN&cnt=9"
        );
    }

    #[test]
    fn test_imperial_units_in_query() {
        let settings = Settings {
            apikey: "deadbeef",
            units: Units::Imperial,
            ..SETTINGS
        };
        let query: String<256> = build_forecast_query(&settings).unwrap();
        assert!(query.contains("&units=imperial&"));
    }

    #[test]
    fn test_city_with_spaces_is_encoded() {
        let settings = Settings {
            city: "MILTON KEYNES",
            apikey: "deadbeef",
            ..SETTINGS
        };
        let query: String<256> = build_forecast_query(&settings).unwrap();
        assert!(query.contains("q=MILTON%20KEYNES,GB"));
    }

    #[test]
    fn test_encode_component_passes_unreserved() {
        let enc: String<64> = url_encode_component("pool.ntp.org").unwrap();
        assert_eq!(enc.as_str(), "pool.ntp.org");
    }

    #[test]
    fn test_query_too_long_is_an_error_not_a_panic() {
        let settings = Settings {
            apikey: "deadbeef",
            ..SETTINGS
        };
        let result: Result<String<16>, _> = build_forecast_query(&settings);
        assert!(matches!(result, Err(ConfigError::QueryTooLong)));
    }
}
