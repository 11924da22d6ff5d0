pub mod flight_warning;
pub mod shared;
