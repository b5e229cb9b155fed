pub mod chart;
pub mod footer;
pub mod forecast;
pub mod header;
pub mod login;
pub mod overview;
pub mod settings;
pub mod shared;
