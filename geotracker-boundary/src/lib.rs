use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[cfg(feature = "entity-conversions")]
pub use self::conv::ConversionError;

/// A single candidate of a Nominatim `format=json` search.
///
/// Nominatim sends the coordinates as decimal strings.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NominatimPlace {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id     : Option<u64>,
    pub display_name : String,
    pub lat          : String,
    pub lon          : String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class        : Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind         : Option<String>,
}

