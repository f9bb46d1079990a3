use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use crate::errors::AggregateError;
use crate::manager_openweather::models::{ForecastSample, WeatherTag};

pub const NOT_AVAILABLE: &str = "N/A";
pub const DEFAULT_ICON: &str = "01d";

const MAX_DAYS: usize = 5;
const CHART_POINTS: usize = 8;

/// One day of forecast summarized from its 3-hour samples
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyAggregate {
    pub date: NaiveDate,
    pub min_temp: f64,
    pub max_temp: f64,
    pub description: String,
    pub icon: String,
    pub humidity: i32,
    pub wind_speed: f64,
}

/// Parallel series for charting, index i in each vector describes the same sample
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub temperatures: Vec<f64>,
    pub humidity: Vec<f64>,
    pub wind_speed: Vec<f64>,
}

/// Groups forecast samples by calendar date and summarizes each day
///
/// Dates are kept in the order they are first encountered and only the first five
/// distinct dates are returned, regardless of whether they are the earliest ones.
///
/// # Arguments
///
/// * 'samples' - forecast samples, normally in chronological order
pub fn group_by_day(samples: &[ForecastSample]) -> Result<Vec<DailyAggregate>, AggregateError> {
    let mut days: Vec<(NaiveDate, Vec<&ForecastSample>)> = Vec::new();

    for sample in samples {
        let date = parse_dt_txt(&sample.dt_txt)?.date();
        match days.iter_mut().find(|(d, _)| *d == date) {
            Some((_, items)) => items.push(sample),
            None => days.push((date, vec![sample])),
        }
    }

    Ok(days.into_iter()
        .take(MAX_DAYS)
        .map(|(date, items)| aggregate_day(date, &items))
        .collect())
}

/// Builds chart series from the first 24 hours (8 samples) of a forecast
///
/// Fewer samples give shorter series, no samples give empty series.
///
/// # Arguments
///
/// * 'samples' - forecast samples in chronological order
pub fn build_chart_series(samples: &[ForecastSample]) -> Result<ChartSeries, AggregateError> {
    let mut series = ChartSeries::default();

    for sample in samples.iter().take(CHART_POINTS) {
        let time = parse_dt_txt(&sample.dt_txt)?;
        series.labels.push(time.format("%H:%M").to_string());
        series.temperatures.push(sample.main.temp);
        series.humidity.push(sample.main.humidity as f64);
        series.wind_speed.push(sample.wind.speed);
    }

    Ok(series)
}

fn aggregate_day(date: NaiveDate, items: &[&ForecastSample]) -> DailyAggregate {
    let count = items.len().max(1) as f64;

    let min_temp = items.iter().map(|s| s.main.temp_min).fold(f64::INFINITY, f64::min);
    let max_temp = items.iter().map(|s| s.main.temp_max).fold(f64::NEG_INFINITY, f64::max);
    let humidity = (items.iter().map(|s| s.main.humidity as f64).sum::<f64>() / count) as i32;
    let wind_speed = items.iter().map(|s| s.wind.speed).sum::<f64>() / count;

    let (description, icon) = match prevailing_weather(items) {
        Some(tag) => (tag.description.clone(), tag.icon.clone()),
        None => (NOT_AVAILABLE.to_string(), DEFAULT_ICON.to_string()),
    };

    DailyAggregate { date, min_temp, max_temp, description, icon, humidity, wind_speed }
}

/// Returns the first tag of the most frequent weather category, first encountered wins ties
///
fn prevailing_weather<'a>(items: &[&'a ForecastSample]) -> Option<&'a WeatherTag> {
    let mut counts: Vec<(&str, usize, &WeatherTag)> = Vec::new();

    for tag in items.iter().flat_map(|s| s.weather.iter()) {
        match counts.iter_mut().find(|(main, _, _)| *main == tag.main) {
            Some(entry) => entry.1 += 1,
            None => counts.push((&tag.main, 1, tag)),
        }
    }

    counts.into_iter()
        .fold(None, |best: Option<(&str, usize, &WeatherTag)>, c| match best {
            Some(b) if b.1 >= c.1 => Some(b),
            _ => Some(c),
        })
        .map(|(_, _, tag)| tag)
}

fn parse_dt_txt(dt_txt: &str) -> Result<NaiveDateTime, AggregateError> {
    Ok(NaiveDateTime::parse_from_str(dt_txt, "%Y-%m-%d %H:%M:%S")?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manager_openweather::models::{Main, Wind};

    fn tag(main: &str, description: &str, icon: &str) -> WeatherTag {
        WeatherTag { main: main.to_string(), description: description.to_string(), icon: icon.to_string(), ..Default::default() }
    }

    fn sample(dt_txt: &str, temp_min: f64, temp_max: f64, humidity: i32, wind: f64, weather: Vec<WeatherTag>) -> ForecastSample {
        ForecastSample {
            main: Main { temp: (temp_min + temp_max) / 2.0, temp_min, temp_max, humidity, ..Default::default() },
            wind: Wind { speed: wind, deg: 180 },
            weather,
            dt_txt: dt_txt.to_string(),
            ..Default::default()
        }
    }

    fn clear(dt_txt: &str) -> ForecastSample {
        sample(dt_txt, 10.0, 20.0, 50, 2.0, vec![tag("Clear", "clear sky", "01d")])
    }

    #[test]
    fn test_group_by_day_empty() {
        assert!(group_by_day(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_group_by_day_first_five_dates() {
        let samples = vec![
            clear("2024-06-12 09:00:00"),
            clear("2024-06-10 09:00:00"),
            clear("2024-06-10 12:00:00"),
            clear("2024-06-11 09:00:00"),
            clear("2024-06-16 09:00:00"),
            clear("2024-06-13 09:00:00"),
            clear("2024-06-14 09:00:00"),
            clear("2024-06-15 09:00:00"),
        ];

        let days = group_by_day(&samples).unwrap();
        let dates: Vec<String> = days.iter().map(|d| d.date.to_string()).collect();

        assert_eq!(dates, vec!["2024-06-12", "2024-06-10", "2024-06-11", "2024-06-16", "2024-06-13"]);
    }

    #[test]
    fn test_min_max_and_averages() {
        let samples = vec![
            sample("2024-06-10 06:00:00", 10.0, 20.0, 80, 2.0, vec![tag("Clear", "clear sky", "01d")]),
            sample("2024-06-10 09:00:00", 12.0, 22.0, 71, 3.0, vec![tag("Clear", "clear sky", "01d")]),
            sample("2024-06-10 12:00:00", 9.0, 19.0, 70, 5.5, vec![tag("Clear", "clear sky", "01d")]),
        ];

        let days = group_by_day(&samples).unwrap();

        assert_eq!(days.len(), 1);
        assert_eq!(days[0].min_temp, 9.0);
        assert_eq!(days[0].max_temp, 22.0);
        assert_eq!(days[0].humidity, 73);
        assert!((days[0].wind_speed - 3.5).abs() < 0.0001);
    }

    #[test]
    fn test_prevailing_weather() {
        let samples = vec![
            sample("2024-06-10 00:00:00", 10.0, 12.0, 90, 4.0, vec![tag("Clouds", "overcast clouds", "04n")]),
            sample("2024-06-10 03:00:00", 10.0, 12.0, 90, 4.0, vec![tag("Rain", "light rain", "10n")]),
            sample("2024-06-10 06:00:00", 10.0, 12.0, 90, 4.0, vec![tag("Clouds", "broken clouds", "04d")]),
            sample("2024-06-10 09:00:00", 10.0, 12.0, 90, 4.0, vec![tag("Rain", "moderate rain", "10d")]),
            sample("2024-06-10 12:00:00", 10.0, 12.0, 90, 4.0, vec![tag("Rain", "light rain", "10d")]),
        ];

        let days = group_by_day(&samples).unwrap();

        assert_eq!(days[0].description, "light rain");
        assert_eq!(days[0].icon, "10n");
    }

    #[test]
    fn test_prevailing_weather_tie_goes_to_first() {
        let samples = vec![
            sample("2024-06-10 00:00:00", 10.0, 12.0, 90, 4.0, vec![tag("Snow", "light snow", "13n")]),
            sample("2024-06-10 03:00:00", 10.0, 12.0, 90, 4.0, vec![tag("Clouds", "few clouds", "02n")]),
        ];

        let days = group_by_day(&samples).unwrap();

        assert_eq!(days[0].description, "light snow");
    }

    #[test]
    fn test_day_without_weather_tags() {
        let samples = vec![sample("2024-06-10 00:00:00", 1.0, 2.0, 50, 1.0, vec![])];

        let days = group_by_day(&samples).unwrap();

        assert_eq!(days[0].description, NOT_AVAILABLE);
        assert_eq!(days[0].icon, DEFAULT_ICON);
    }

    #[test]
    fn test_group_by_day_bad_timestamp() {
        let samples = vec![clear("10/06/2024 09:00")];
        assert!(group_by_day(&samples).is_err());
    }

    #[test]
    fn test_chart_series_short_input() {
        let samples = vec![
            clear("2024-06-10 09:00:00"),
            clear("2024-06-10 12:00:00"),
            clear("2024-06-10 15:00:00"),
        ];

        let series = build_chart_series(&samples).unwrap();

        assert_eq!(series.labels, vec!["09:00", "12:00", "15:00"]);
        assert_eq!(series.temperatures.len(), 3);
        assert_eq!(series.humidity, vec![50.0, 50.0, 50.0]);
        assert_eq!(series.wind_speed.len(), 3);
    }

    #[test]
    fn test_chart_series_takes_first_eight() {
        let samples: Vec<ForecastSample> = (0..10)
            .map(|i| {
                let dt_txt = format!("2024-06-{:02} {:02}:00:00", 10 + (i * 3) / 24, (i * 3) % 24);
                sample(&dt_txt, i as f64, i as f64, 40 + i, 1.0, vec![])
            })
            .collect();

        let series = build_chart_series(&samples).unwrap();

        assert_eq!(series.labels.len(), 8);
        assert_eq!(series.labels[0], "00:00");
        assert_eq!(series.labels[7], "21:00");
        assert_eq!(series.temperatures[7], 7.0);
        assert_eq!(series.humidity[7], 47.0);
    }

    #[test]
    fn test_chart_series_empty() {
        let series = build_chart_series(&[]).unwrap();
        assert_eq!(series, ChartSeries::default());
    }

    #[test]
    fn test_chart_series_serialized_names() {
        let json = serde_json::to_value(ChartSeries::default()).unwrap();
        assert!(json.get("windSpeed").is_some());
        assert!(json.get("labels").is_some());
    }
}
