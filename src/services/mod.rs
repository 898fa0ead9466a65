pub mod activities_api_service;
pub mod board_service;
