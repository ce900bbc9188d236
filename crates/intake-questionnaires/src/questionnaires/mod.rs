pub mod common;
pub mod erectile_dysfunction;
pub mod weight_loss;
