use super::*;
use geotracker_entities as e;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("invalid coordinate '{0}'")]
    Coordinate(String),
    #[error("position out of range: {lat}, {lon}")]
    OutOfRange { lat: String, lon: String },
}

fn parse_coordinate(text: &str) -> Result<f64, ConversionError> {
    text.trim()
        .parse()
        .map_err(|_| ConversionError::Coordinate(text.to_string()))
}

impl TryFrom<NominatimPlace> for e::place::Place {
    type Error = ConversionError;
    fn try_from(from: NominatimPlace) -> Result<Self, Self::Error> {
        let NominatimPlace {
            display_name,
            lat,
            lon,
            ..
        } = from;
        let pos = e::geo::Position::new(parse_coordinate(&lat)?, parse_coordinate(&lon)?);
        if !pos.is_valid() {
            return Err(ConversionError::OutOfRange { lat, lon });
        }
        Ok(Self { display_name, pos })
    }
}
