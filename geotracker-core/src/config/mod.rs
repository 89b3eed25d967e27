use anyhow::{anyhow, Result};
use std::time::Duration;

use geotracker_entities::geo::Position;

mod raw;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub map: MapSettings,
    pub geolocation: GeolocationOptions,
    pub search: SearchSettings,
}

impl Config {
    /// Load the configuration from a TOML document.
    ///
    /// Missing sections or values are taken from the built-in defaults.
    pub fn try_load_from_str_or_default(toml_string: Option<&str>) -> Result<Self> {
        let raw_config = match toml_string {
            Some(cfg_string) => toml::from_str(cfg_string)?,
            None => {
                log::debug!("No custom configuration found => load default configuration.");
                raw::Config::default()
            }
        };
        Self::try_from(raw_config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::try_from(raw::Config::default()).expect("Default configuration")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapSettings {
    /// DOM id of the element hosting the map.
    pub container_id: String,
    /// Fallback position if the device position is unknown.
    pub default_location: Position,
    pub default_zoom: f64,
    /// Tile URL template, e.g. `https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png`.
    pub tile_url: String,
    pub attribution: String,
    pub max_zoom: f64,
    /// Radius of the accuracy circle in meters.
    pub accuracy_radius: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeolocationOptions {
    pub high_accuracy: bool,
    pub timeout: Duration,
    /// Maximum age of a cached position, zero forces a fresh fix.
    pub maximum_age: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchSettings {
    pub url: String,
    pub debounce: Duration,
    pub max_results: usize,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            map,
            geolocation,
            search,
        } = from;

        let raw::Map {
            container_id,
            default_location,
            default_zoom,
            tile_url,
            attribution,
            max_zoom,
            accuracy_radius,
        } = map.map_or_else(raw::Map::default, |m| m.or(raw::Map::default()));

        let default_location = default_location
            .map(|raw::Coordinate { lat, lng }| Position::new(lat, lng))
            .ok_or_else(|| anyhow!("Missing default location"))?;
        if !default_location.is_valid() {
            return Err(anyhow!(
                "Invalid default location: {}, {}",
                default_location.lat,
                default_location.lng
            ));
        }
        let max_zoom = max_zoom.ok_or_else(|| anyhow!("Missing max. zoom"))?;
        let default_zoom = default_zoom.ok_or_else(|| anyhow!("Missing default zoom"))?;
        if !max_zoom.is_finite() || max_zoom < 0.0 {
            return Err(anyhow!("Max. zoom {max_zoom} is out of range"));
        }
        if !default_zoom.is_finite() || default_zoom < 0.0 || default_zoom > max_zoom {
            return Err(anyhow!("Default zoom {default_zoom} is out of range"));
        }
        let accuracy_radius = accuracy_radius.ok_or_else(|| anyhow!("Missing accuracy radius"))?;
        if !accuracy_radius.is_finite() || accuracy_radius <= 0.0 {
            return Err(anyhow!("Invalid accuracy radius {accuracy_radius}"));
        }
        let map = MapSettings {
            container_id: container_id.ok_or_else(|| anyhow!("Missing map container ID"))?,
            default_location,
            default_zoom,
            tile_url: tile_url.ok_or_else(|| anyhow!("Missing tile URL"))?,
            attribution: attribution.unwrap_or_default(),
            max_zoom,
            accuracy_radius,
        };

        let raw::Geolocation {
            high_accuracy,
            timeout,
            maximum_age,
        } = geolocation.map_or_else(raw::Geolocation::default, |g| {
            g.or(raw::Geolocation::default())
        });
        let geolocation = GeolocationOptions {
            high_accuracy: high_accuracy.unwrap_or(true),
            timeout: timeout.ok_or_else(|| anyhow!("Missing geolocation timeout"))?,
            maximum_age: maximum_age.unwrap_or_default(),
        };

        let raw::Search {
            url,
            debounce,
            max_results,
        } = search.map_or_else(raw::Search::default, |s| s.or(raw::Search::default()));
        let max_results = max_results.ok_or_else(|| anyhow!("Missing max. search results"))?;
        if max_results == 0 {
            return Err(anyhow!("At least one search result has to be shown"));
        }
        let search = SearchSettings {
            url: url.ok_or_else(|| anyhow!("Missing search URL"))?,
            debounce: debounce.ok_or_else(|| anyhow!("Missing search debounce delay"))?,
            max_results,
        };

        Ok(Self {
            map,
            geolocation,
            search,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_default_config() {
        let cfg = Config::try_load_from_str_or_default(None).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.map.default_location, Position::DEFAULT);
        assert_eq!(cfg.map.default_zoom, 13.0);
        assert_eq!(cfg.map.max_zoom, 19.0);
        assert_eq!(cfg.map.accuracy_radius, 500.0);
        assert_eq!(cfg.map.container_id, "map");
        assert!(cfg.geolocation.high_accuracy);
        assert_eq!(cfg.geolocation.timeout, Duration::from_secs(10));
        assert_eq!(cfg.geolocation.maximum_age, Duration::ZERO);
        assert_eq!(cfg.search.debounce, Duration::from_millis(500));
        assert_eq!(cfg.search.max_results, 5);
        assert_eq!(cfg.search.url, "https://nominatim.openstreetmap.org/search");
    }

    #[test]
    fn override_single_values() {
        let cfg = Config::try_load_from_str_or_default(Some(
            r#"
            [map]
            default-location = { lat = 52.52, lng = 13.405 }

            [geolocation]
            timeout = "3s"
            "#,
        ))
        .unwrap();
        assert_eq!(cfg.map.default_location, Position::new(52.52, 13.405));
        assert_eq!(cfg.map.default_zoom, 13.0);
        assert_eq!(cfg.geolocation.timeout, Duration::from_secs(3));
        assert!(cfg.geolocation.high_accuracy);
        assert_eq!(cfg.search, Config::default().search);
    }

    #[test]
    fn reject_invalid_values() {
        assert!(Config::try_load_from_str_or_default(Some(
            "[map]\ndefault-location = { lat = 91.0, lng = 0.0 }"
        ))
        .is_err());
        assert!(Config::try_load_from_str_or_default(Some("[search]\nmax-results = 0")).is_err());
        assert!(Config::try_load_from_str_or_default(Some("[map]\ndefault-zoom = 20.0")).is_err());
        assert!(Config::try_load_from_str_or_default(Some("not toml")).is_err());
    }

    #[test]
    fn reject_non_finite_map_values() {
        assert!(Config::try_load_from_str_or_default(Some("[map]\ndefault-zoom = nan")).is_err());
        assert!(Config::try_load_from_str_or_default(Some("[map]\nmax-zoom = inf")).is_err());
        assert!(Config::try_load_from_str_or_default(Some("[map]\naccuracy-radius = nan")).is_err());
        assert!(Config::try_load_from_str_or_default(Some("[map]\naccuracy-radius = 0.0")).is_err());
        assert!(Config::try_load_from_str_or_default(Some("[map]\naccuracy-radius = -5.0")).is_err());
        assert!(Config::try_load_from_str_or_default(Some("[map]\naccuracy-radius = 50.0")).is_ok());
    }
}
