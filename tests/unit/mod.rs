pub mod centers;
pub mod competition;
pub mod draw;
pub mod matches;
pub mod team;
