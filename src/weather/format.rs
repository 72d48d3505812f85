//! Report formatting in the application's display language (Romanian),
//! with fixed label order and literal phrases.

use super::models::{CurrentConditions, DailySeries, ForecastResponse, HourlySeries, Location};

/// The current-conditions labels, in render order. The third label carries
/// the spelling the application has always shown.
pub const CURRENT_LABELS: [&str; 12] = [
    "temperatura actuala",
    "umiditatea",
    "temeperatura resimtita",
    "is_day",
    "precipitatii",
    "ploi",
    "averse",
    "caderi de zapada",
    "acoperirea norilor",
    "presiunea la nivelul marii",
    "presiunea la suprafata",
    "viteza vantului",
];

/// Translate the day/night flag to its display phrase.
pub fn day_flag(is_day: u8) -> &'static str {
    if is_day != 0 { "este zi" } else { "este noapte" }
}

/// The location header lines shown above every current-conditions report.
pub fn location_header(response: &ForecastResponse) -> String {
    let mut result = format!(
        "Coordonatele sunt: {}°N {}°E\n",
        response.latitude, response.longitude
    );
    result += &format!(
        "Altitudinea fata de nivelul marii {} m asl\n",
        response.elevation
    );
    result += &format!(
        "Fusul orar {} {}\n",
        response.timezone, response.timezone_abbreviation
    );
    result += &format!(
        "Ora locală este cu {} de secunde înaintea timpului mediu Greenwich (GMT)\n",
        response.utc_offset_seconds
    );
    result
}

/// The twelve fixed-order labeled lines of the current-conditions report.
pub fn current_report(current: &CurrentConditions) -> String {
    let mut result = String::new();
    let mut line = |label: &str, value: String| {
        result += &format!(" {label}: {value}\n");
    };

    line(CURRENT_LABELS[0], format!("{:.2}", current.temperature));
    line(CURRENT_LABELS[1], current.relative_humidity.to_string());
    line(CURRENT_LABELS[2], format!("{:.2}", current.apparent_temperature));
    line(CURRENT_LABELS[3], day_flag(current.is_day).to_string());
    line(CURRENT_LABELS[4], current.precipitation.to_string());
    line(CURRENT_LABELS[5], current.rain.to_string());
    line(CURRENT_LABELS[6], current.showers.to_string());
    line(CURRENT_LABELS[7], current.snowfall.to_string());
    line(CURRENT_LABELS[8], current.cloud_cover.to_string());
    line(CURRENT_LABELS[9], current.pressure_msl.to_string());
    line(CURRENT_LABELS[10], current.surface_pressure.to_string());
    line(CURRENT_LABELS[11], format!("{:.2}", current.wind_speed));

    result
}

/// Details text for a resolved location.
pub fn location_details(location: &Location) -> String {
    let display = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());
    let mut result = format!("Localitatea: {}\n", location.name);
    result += &format!("Tara: {}\n", display(&location.country));
    result += &format!("Regiunea: {}\n", display(&location.region));
    result += &format!(
        "Coordonatele sunt: {}°N {}°E\n",
        location.latitude, location.longitude
    );
    if let Some(elevation) = location.elevation {
        result += &format!("Altitudinea fata de nivelul marii {elevation} m asl\n");
    }
    result += &format!(
        "Fusul orar {}\n",
        location.timezone.clone().unwrap_or_else(|| "-".to_string())
    );
    if let Some(population) = location.population {
        result += &format!("Populatia: {population}\n");
    }
    result
}

/// Tabular dump of the hourly series: one row per timestamp, one column
/// per variable, fixed-width.
pub fn hourly_table(hourly: &HourlySeries) -> String {
    let rows = hourly.time.len();
    let numeric = |values: &Option<Vec<f32>>| numeric_column(values.as_deref(), rows);

    let columns = vec![
        ("date".to_string(), hourly.time.clone()),
        ("temperature_2m".to_string(), numeric(&hourly.temperature)),
        ("relative_humidity_2m".to_string(), numeric(&hourly.relative_humidity)),
        ("dew_point_2m".to_string(), numeric(&hourly.dew_point)),
        ("apparent_temperature".to_string(), numeric(&hourly.apparent_temperature)),
        ("precipitation_probability".to_string(), numeric(&hourly.precipitation_probability)),
        ("precipitation".to_string(), numeric(&hourly.precipitation)),
        ("rain".to_string(), numeric(&hourly.rain)),
        ("showers".to_string(), numeric(&hourly.showers)),
        ("snowfall".to_string(), numeric(&hourly.snowfall)),
        ("snow_depth".to_string(), numeric(&hourly.snow_depth)),
        ("cloud_cover".to_string(), numeric(&hourly.cloud_cover)),
        ("visibility".to_string(), numeric(&hourly.visibility)),
        ("wind_speed_10m".to_string(), numeric(&hourly.wind_speed)),
        ("wind_direction_10m".to_string(), numeric(&hourly.wind_direction)),
        ("soil_temperature_0cm".to_string(), numeric(&hourly.soil_temperature)),
    ];
    render_table(&columns, rows)
}

/// Tabular dump of the daily series.
pub fn daily_table(daily: &DailySeries) -> String {
    let rows = daily.time.len();
    let numeric = |values: &Option<Vec<Option<f32>>>| nullable_column(values.as_deref(), rows);
    let textual = |values: &Option<Vec<String>>| text_column(values.as_deref(), rows);

    let columns = vec![
        ("date".to_string(), daily.time.clone()),
        ("weather_code".to_string(), numeric(&daily.weather_code)),
        ("temperature_2m_max".to_string(), numeric(&daily.temperature_max)),
        ("temperature_2m_min".to_string(), numeric(&daily.temperature_min)),
        ("apparent_temperature_max".to_string(), numeric(&daily.apparent_temperature_max)),
        ("apparent_temperature_min".to_string(), numeric(&daily.apparent_temperature_min)),
        ("sunrise".to_string(), textual(&daily.sunrise)),
        ("sunset".to_string(), textual(&daily.sunset)),
        ("daylight_duration".to_string(), numeric(&daily.daylight_duration)),
        ("sunshine_duration".to_string(), numeric(&daily.sunshine_duration)),
        ("uv_index_max".to_string(), numeric(&daily.uv_index_max)),
        ("uv_index_clear_sky_max".to_string(), numeric(&daily.uv_index_clear_sky_max)),
        ("precipitation_sum".to_string(), numeric(&daily.precipitation_sum)),
        ("rain_sum".to_string(), numeric(&daily.rain_sum)),
        ("showers_sum".to_string(), numeric(&daily.showers_sum)),
        ("snowfall_sum".to_string(), numeric(&daily.snowfall_sum)),
        ("precipitation_hours".to_string(), numeric(&daily.precipitation_hours)),
        ("precipitation_probability_max".to_string(), numeric(&daily.precipitation_probability_max)),
        ("wind_speed_10m_max".to_string(), numeric(&daily.wind_speed_max)),
        ("wind_gusts_10m_max".to_string(), numeric(&daily.wind_gusts_max)),
        ("wind_direction_10m_dominant".to_string(), numeric(&daily.wind_direction_dominant)),
        ("shortwave_radiation_sum".to_string(), numeric(&daily.shortwave_radiation_sum)),
        ("et0_fao_evapotranspiration".to_string(), numeric(&daily.et0_fao_evapotranspiration)),
    ];
    render_table(&columns, rows)
}

fn numeric_column(values: Option<&[f32]>, rows: usize) -> Vec<String> {
    (0..rows)
        .map(|i| match values.and_then(|v| v.get(i)) {
            Some(v) => format!("{v:.2}"),
            None => "NaN".to_string(),
        })
        .collect()
}

fn nullable_column(values: Option<&[Option<f32>]>, rows: usize) -> Vec<String> {
    (0..rows)
        .map(|i| match values.and_then(|v| v.get(i)).copied().flatten() {
            Some(v) => format!("{v:.2}"),
            None => "NaN".to_string(),
        })
        .collect()
}

fn text_column(values: Option<&[String]>, rows: usize) -> Vec<String> {
    (0..rows)
        .map(|i| {
            values
                .and_then(|v| v.get(i))
                .cloned()
                .unwrap_or_else(|| "NaN".to_string())
        })
        .collect()
}

/// Right-aligned fixed-width rendering: header row, then one row per index.
fn render_table(columns: &[(String, Vec<String>)], rows: usize) -> String {
    let index_width = rows.saturating_sub(1).to_string().len();
    let widths: Vec<usize> = columns
        .iter()
        .map(|(header, values)| {
            values
                .iter()
                .map(String::len)
                .chain(std::iter::once(header.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    out += &" ".repeat(index_width);
    for ((header, _), width) in columns.iter().zip(&widths) {
        out += &format!("  {header:>width$}");
    }
    out.push('\n');

    for row in 0..rows {
        out += &format!("{row:>index_width$}");
        for ((_, values), width) in columns.iter().zip(&widths) {
            out += &format!("  {:>width$}", values[row]);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_current() -> CurrentConditions {
        CurrentConditions {
            time: "2026-08-07T12:00".to_string(),
            temperature: 21.456,
            relative_humidity: 63.0,
            apparent_temperature: 20.111,
            is_day: 1,
            precipitation: 0.0,
            rain: 0.0,
            showers: 0.0,
            snowfall: 0.0,
            cloud_cover: 40.0,
            pressure_msl: 1013.2,
            surface_pressure: 1008.7,
            wind_speed: 11.239,
        }
    }

    #[test]
    fn current_report_has_each_label_exactly_once() {
        let report = current_report(&sample_current());
        for label in CURRENT_LABELS {
            let needle = format!(" {label}:");
            assert_eq!(
                report.matches(&needle).count(),
                1,
                "label {label:?} should appear exactly once"
            );
        }
        assert_eq!(report.lines().count(), CURRENT_LABELS.len());
    }

    #[test]
    fn temperatures_and_wind_speed_are_rounded_to_two_decimals() {
        let report = current_report(&sample_current());
        assert!(report.contains(" temperatura actuala: 21.46\n"));
        assert!(report.contains(" temeperatura resimtita: 20.11\n"));
        assert!(report.contains(" viteza vantului: 11.24\n"));
    }

    #[test]
    fn day_flag_phrases() {
        assert_eq!(day_flag(1), "este zi");
        assert_eq!(day_flag(0), "este noapte");
        let mut night = sample_current();
        night.is_day = 0;
        assert!(current_report(&night).contains(" is_day: este noapte\n"));
    }

    #[test]
    fn hourly_table_has_header_and_one_row_per_timestamp() {
        let hourly = HourlySeries {
            time: vec!["2026-08-07T00:00".to_string(), "2026-08-07T01:00".to_string()],
            temperature: Some(vec![17.3, 16.9]),
            relative_humidity: None,
            dew_point: None,
            apparent_temperature: None,
            precipitation_probability: None,
            precipitation: None,
            rain: None,
            showers: None,
            snowfall: None,
            snow_depth: None,
            cloud_cover: None,
            visibility: None,
            wind_speed: None,
            wind_direction: None,
            soil_temperature: None,
        };
        let table = hourly_table(&hourly);
        assert_eq!(table.lines().count(), 3);
        let header = table.lines().next().unwrap();
        assert!(header.contains("temperature_2m"));
        assert!(header.contains("soil_temperature_0cm"));
        assert!(table.contains("17.30"));
        assert!(table.contains("NaN"));
    }
}
