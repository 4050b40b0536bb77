/// UI layer: egui panels and plots over the session state.
pub mod panels;
pub mod plot;
pub mod views;
