pub mod control;
pub mod form;
pub mod hit;
