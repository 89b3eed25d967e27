use std::time::Duration;

use js_sys::{Function, Promise, Reflect};
use leptos::window;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{GeolocationPosition, PositionOptions};

use geotracker_core::config::GeolocationOptions;
use geotracker_entities::{geo::Position, location::LocationError};

/// Request a single position fix from the browser.
///
/// The callback based geolocation API is wrapped into a promise that
/// resolves exactly once, either with the position or with the error.
pub async fn current_position(options: GeolocationOptions) -> Result<Position, LocationError> {
    let navigator = window().navigator();
    if !Reflect::has(&navigator, &JsValue::from_str("geolocation")).unwrap_or(false) {
        return Err(LocationError::Unsupported);
    }
    let geolocation = navigator
        .geolocation()
        .map_err(|_| LocationError::Unsupported)?;

    let position_options = PositionOptions::new();
    position_options.set_enable_high_accuracy(options.high_accuracy);
    position_options.set_timeout(millis(options.timeout));
    position_options.set_maximum_age(millis(options.maximum_age));

    let promise = Promise::new(&mut |resolve: Function, reject: Function| {
        if let Err(err) = geolocation.get_current_position_with_error_callback_and_options(
            &resolve,
            Some(&reject),
            &position_options,
        ) {
            if let Err(err) = reject.call1(&JsValue::NULL, &err) {
                log::error!("Unable to reject position request: {err:?}");
            }
        }
    });

    match JsFuture::from(promise).await {
        Ok(value) => {
            let coords = value.unchecked_into::<GeolocationPosition>().coords();
            Ok(Position::new(coords.latitude(), coords.longitude()))
        }
        Err(err) => Err(error_code(&err).map_or(LocationError::Unknown(0), LocationError::from_code)),
    }
}

fn error_code(err: &JsValue) -> Option<u16> {
    Reflect::get(err, &JsValue::from_str("code"))
        .ok()
        .and_then(|code| code.as_f64())
        .and_then(|code| u16::try_from(code as i64).ok())
}

fn millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}
