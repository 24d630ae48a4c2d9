pub mod bookings;
pub mod centers;
pub mod competitions;
pub mod matches;
pub mod teams;
