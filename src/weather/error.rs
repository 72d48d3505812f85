use thiserror::Error;

/// Error taxonomy for the weather pipeline. `UnknownCity` doubles as the
/// user-facing not-found message, so every surface that displays it shows
/// the same literal text.
#[derive(Error, Debug)]
pub enum WeatherError {
    /// The geocoder returned no hit for the queried name.
    #[error("Acest oraș nu există: {0}")]
    UnknownCity(String),

    /// Network-level failure after retries were exhausted.
    #[error("Request failed: {0}")]
    Transport(String),

    /// The service answered with something we cannot decode.
    #[error("Failed to parse Open-Meteo response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Response-cache store failure.
    #[error("Cache error: {0}")]
    Cache(String),

    /// The response is missing a data group the caller asked for.
    #[error("Response is missing the {0} data group")]
    MissingGroup(&'static str),
}

impl From<reqwest_middleware::Error> for WeatherError {
    fn from(err: reqwest_middleware::Error) -> Self {
        WeatherError::Transport(err.to_string())
    }
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        WeatherError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_city_displays_the_literal_message() {
        let err = WeatherError::UnknownCity("Xyzzyplace123".to_string());
        assert_eq!(err.to_string(), "Acest oraș nu există: Xyzzyplace123");
    }
}
