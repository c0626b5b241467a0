pub mod sensor;
pub mod speech;
