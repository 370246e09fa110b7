pub mod home;

pub use home::{home_page, RouteDoc, ROUTE_DOCS};
