pub mod domains;
pub mod params;
pub mod queries;
pub mod schemas;
