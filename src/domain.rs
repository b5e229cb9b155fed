pub mod conditions;
pub mod monthly;
pub mod weather;
