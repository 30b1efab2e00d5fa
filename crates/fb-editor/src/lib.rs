pub mod canvas;
pub mod gesture;
pub mod input;
pub mod panel;
pub mod session;
pub mod shortcuts;
