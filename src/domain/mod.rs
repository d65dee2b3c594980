// Domain layer: sign table, request/response models, UI state and ports.

pub mod model;
pub mod ports;
pub mod ui_state;
pub mod zodiac;
