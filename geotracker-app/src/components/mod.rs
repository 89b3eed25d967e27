mod controls;
mod coordinates;
mod loading;
mod map;
mod search;

pub use self::{controls::*, coordinates::*, loading::*, map::*, search::*};
