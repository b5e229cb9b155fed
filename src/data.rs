pub mod archive;
pub mod forecast;
pub mod geocode;
