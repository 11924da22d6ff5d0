pub mod flight_warning;
