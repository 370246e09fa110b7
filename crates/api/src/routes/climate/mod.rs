pub mod climate_routes;

pub use climate_routes::{precipitation, start_temp, stations, temp_range, tobs, WindowParams};
