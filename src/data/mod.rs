pub mod plants;
pub mod zones;
