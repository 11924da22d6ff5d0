pub mod parameters;
pub mod warnings;
