pub mod centers_service;
pub mod competitions_service;
pub mod draw_service;
pub mod fixtures;
pub mod matches_service;
pub mod teams_service;

pub use centers_service::CentersService;
pub use competitions_service::CompetitionsService;
pub use draw_service::DrawService;
pub use matches_service::MatchesService;
pub use teams_service::TeamsService;
