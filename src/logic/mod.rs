pub mod companion;
pub mod filter;
pub mod grid;
pub mod watering;
pub mod zone;
