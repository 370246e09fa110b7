pub mod layouts;
pub mod pages;

pub use layouts::base;
pub use pages::{home_page, RouteDoc, ROUTE_DOCS};
