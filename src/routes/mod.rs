pub mod auth_routes;
pub mod booking_routes;
pub mod catalog_routes;
pub mod loan_routes;
pub mod showroom_routes;
