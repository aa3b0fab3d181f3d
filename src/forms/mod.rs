pub mod fields;
pub mod flow;
pub mod presenter;
pub mod validation;
