//! Typed async client for the football-data.org v1 REST API
//!
//! This library authenticates with an API key, issues GET requests against
//! the fixed set of v1 endpoints, and maps the JSON responses into typed
//! values: competitions, teams, fixtures, league tables and players.
//!
//! # Examples
//!
//! ```rust,no_run
//! use footdata::{ApiError, Football};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ApiError> {
//!     // Key from the FOOTDATA_API_KEY environment variable; one
//!     // validation request is sent before the client is handed back.
//!     let football = Football::from_env().await?;
//!
//!     let table = football.league_table(426).await?;
//!     println!("{} after matchday {}", table.name, table.matchday);
//!     for row in &table.standings {
//!         println!("{:>2}. {} ({} pts)", row.position, row.team_name, row.points);
//!     }
//!
//!     // Name lookup takes the first match and returns None for zero hits
//!     if let Some(team) = football.team_by_name("Manchester United").await? {
//!         println!("Found team #{}: {}", team.id, team.name);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod constants;
pub mod endpoints;
pub mod error;
pub mod models;

mod fetch;

// Re-export commonly used types for convenience
pub use client::Football;
pub use config::Config;
pub use error::ApiError;
pub use fetch::ResponseMeta;
pub use models::{
    Competition, Fixture, FixtureResult, HalfTime, LeagueTable, Odds, Player, Standing, Team,
    TeamMatch,
};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
