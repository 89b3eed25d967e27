use thiserror::Error;

use geotracker_entities::geo::Position;

use crate::config::MapSettings;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("map container '{0}' not found")]
    ContainerNotFound(String),
    #[error("unable to create map: {0}")]
    Widget(String),
}

/// The capabilities of a map widget the page relies on.
pub trait MapWidget {
    fn set_view(&mut self, center: Position, zoom: f64);
    fn zoom(&self) -> f64;
    fn zoom_in(&mut self);
    fn zoom_out(&mut self);
    /// Draw the location marker and its accuracy circle.
    ///
    /// Implementations must not remove any previously drawn overlays,
    /// this is done by [`MapWidget::clear_location`].
    fn show_location(&mut self, pos: Position, accuracy_radius: f64);
    /// Remove the location marker and its accuracy circle (if any).
    fn clear_location(&mut self);
}

pub trait MapFactory {
    type Map: MapWidget;
    /// Create a map centered at `center` with the tile layer attached.
    fn create_map(&self, center: Position, settings: &MapSettings) -> Result<Self::Map, MapError>;
}
