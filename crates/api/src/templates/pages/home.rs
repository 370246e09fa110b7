use maud::{html, Markup};

use crate::templates::layouts::base;

pub struct RouteDoc {
    pub path: &'static str,
    pub description: &'static str,
}

/// Routes listed on the welcome page, in display order
pub const ROUTE_DOCS: &[RouteDoc] = &[
    RouteDoc {
        path: "/api/v1.0/precipitation",
        description: "Precipitation by date over the last year of data",
    },
    RouteDoc {
        path: "/api/v1.0/stations",
        description: "Station codes and names",
    },
    RouteDoc {
        path: "/api/v1.0/tobs",
        description: "Temperature observations over the last year of data",
    },
    RouteDoc {
        path: "/api/v1.0/<start>",
        description: "Min, average and max temperature from a YYYY-MM-DD start date",
    },
    RouteDoc {
        path: "/api/v1.0/<start>/<end>",
        description: "Min, average and max temperature between two YYYY-MM-DD dates",
    },
];

/// Welcome page listing the available routes (GET /)
pub fn home_page(api_base: &str) -> Markup {
    let content = html! {
        h1 class="title" { "Welcome to Hawaii Climate API App!" }
        p class="subtitle" { "Available Routes:" }
        ul {
            @for route in ROUTE_DOCS {
                li {
                    code { (api_base) (route.path) }
                    " - " (route.description)
                }
            }
        }
        p {
            a href={ (api_base) "/docs" } { "API Docs" }
        }
    };
    base("Hawaii Climate API", content)
}
