mod decimal;
pub mod orders;
pub mod products;
