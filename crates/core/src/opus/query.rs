//! Query URL construction for the OPUS image endpoint.

use crate::orbit::Instrument;

/// Build the metadata query URL for one instrument and time window.
///
/// Timestamps are inserted verbatim; OPUS reports malformed ones itself.
pub fn build_query_url(base_url: &str, instrument: Instrument, start: &str, finish: &str) -> String {
    format!(
        "{}?instrument=Cassini+{}&time1={}&time2={}",
        base_url,
        instrument.acronym(),
        start,
        finish
    )
}

/// Raw value of query parameter `name`, or `None` when absent.
pub fn query_param<'a>(url: &'a str, name: &str) -> Option<&'a str> {
    let (_, query) = url.split_once('?')?;
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name).then_some(value)
    })
}

/// Instrument named by a query URL built with [`build_query_url`].
pub fn instrument_from_query(url: &str) -> Option<Instrument> {
    let value = query_param(url, "instrument")?;
    Instrument::from_acronym(value.strip_prefix("Cassini+")?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://tools.pds-rings.seti.org/opus/api/images/small.json";

    #[test]
    fn test_build_query_url() {
        let url = build_query_url(
            BASE,
            Instrument::Iss,
            "2005-01-01T00:00:00.0",
            "2005-01-02T00:00:00.0",
        );
        assert_eq!(
            url,
            "https://tools.pds-rings.seti.org/opus/api/images/small.json?instrument=Cassini+ISS&time1=2005-01-01T00:00:00.0&time2=2005-01-02T00:00:00.0"
        );
    }

    #[test]
    fn test_malformed_timestamps_pass_through() {
        let url = build_query_url(BASE, Instrument::Vims, "not a date", "");
        assert!(url.ends_with("instrument=Cassini+VIMS&time1=not a date&time2="));
    }

    #[test]
    fn test_query_param() {
        let url = build_query_url(BASE, Instrument::Uvis, "t1", "t2");
        assert_eq!(query_param(&url, "time1"), Some("t1"));
        assert_eq!(query_param(&url, "time2"), Some("t2"));
        assert_eq!(query_param(&url, "missing"), None);
        assert_eq!(query_param("http://no-query", "time1"), None);
    }

    #[test]
    fn test_instrument_from_query() {
        for instrument in Instrument::ALL {
            let url = build_query_url(BASE, instrument, "a", "b");
            assert_eq!(instrument_from_query(&url), Some(instrument));
        }
        assert_eq!(instrument_from_query("http://x?instrument=Voyager+ISS"), None);
    }
}
