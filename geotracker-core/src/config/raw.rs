use duration_str::deserialize_option_duration;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_CONFIG_FILE: &str = include_str!("geotracker.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub map: Option<Map>,
    pub geolocation: Option<Geolocation>,
    pub search: Option<Search>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Clone, Copy, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Map {
    pub container_id: Option<String>,
    pub default_location: Option<Coordinate>,
    pub default_zoom: Option<f64>,
    pub tile_url: Option<String>,
    pub attribution: Option<String>,
    pub max_zoom: Option<f64>,
    pub accuracy_radius: Option<f64>,
}

impl Default for Map {
    fn default() -> Self {
        Config::default().map.expect("Map configuration")
    }
}

impl Map {
    /// Fill the missing values with those of `other`.
    pub fn or(self, other: Self) -> Self {
        Self {
            container_id: self.container_id.or(other.container_id),
            default_location: self.default_location.or(other.default_location),
            default_zoom: self.default_zoom.or(other.default_zoom),
            tile_url: self.tile_url.or(other.tile_url),
            attribution: self.attribution.or(other.attribution),
            max_zoom: self.max_zoom.or(other.max_zoom),
            accuracy_radius: self.accuracy_radius.or(other.accuracy_radius),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geolocation {
    pub high_accuracy: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub timeout: Option<Duration>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub maximum_age: Option<Duration>,
}

impl Default for Geolocation {
    fn default() -> Self {
        Config::default()
            .geolocation
            .expect("Geolocation configuration")
    }
}

impl Geolocation {
    pub fn or(self, other: Self) -> Self {
        Self {
            high_accuracy: self.high_accuracy.or(other.high_accuracy),
            timeout: self.timeout.or(other.timeout),
            maximum_age: self.maximum_age.or(other.maximum_age),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Search {
    pub url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub debounce: Option<Duration>,
    pub max_results: Option<usize>,
}

impl Default for Search {
    fn default() -> Self {
        Config::default().search.expect("Search configuration")
    }
}

impl Search {
    pub fn or(self, other: Self) -> Self {
        Self {
            url: self.url.or(other.url),
            debounce: self.debounce.or(other.debounce),
            max_results: self.max_results.or(other.max_results),
        }
    }
}
