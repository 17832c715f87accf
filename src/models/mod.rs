//! Typed models for API responses.
//!
//! Each entity is projected once from its JSON payload and never mutated
//! afterwards. The v1 API references related entities through `_links`
//! hyperlinks rather than plain id fields, so numeric ids are extracted
//! from the tail of those hrefs during projection.

use serde::Deserialize;

use crate::error::ApiError;

pub mod competition;
pub mod fixture;
pub mod league_table;
pub mod player;
pub mod team;

pub use competition::Competition;
pub use fixture::{Fixture, FixtureResult, HalfTime, Odds};
pub use league_table::{LeagueTable, Standing};
pub use player::Player;
pub use team::{Team, TeamMatch};

pub(crate) use fixture::{FixtureDetailResponse, FixturesResponse};
pub(crate) use player::PlayersResponse;
pub(crate) use team::TeamsResponse;

/// A single hyperlink entry under a payload's `_links` key.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Link {
    pub href: String,
}

/// Extracts the numeric id from the last path segment of an API hyperlink,
/// e.g. `.../v1/teams/66` yields 66.
pub(crate) fn id_from_href(href: &str) -> Result<u32, ApiError> {
    href.trim_end_matches('/')
        .rsplit('/')
        .next()
        .and_then(|segment| segment.parse::<u32>().ok())
        .ok_or_else(|| {
            ApiError::api_unexpected_structure(
                "Hyperlink does not end in a numeric id",
                href,
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_href() {
        assert_eq!(
            id_from_href("http://api.football-data.org/v1/teams/66").unwrap(),
            66
        );
        assert_eq!(
            id_from_href("http://api.football-data.org/v1/competitions/426").unwrap(),
            426
        );
    }

    #[test]
    fn test_id_from_href_trailing_slash() {
        assert_eq!(
            id_from_href("http://api.football-data.org/v1/teams/66/").unwrap(),
            66
        );
    }

    #[test]
    fn test_id_from_href_non_numeric_tail() {
        let result = id_from_href("http://api.football-data.org/v1/teams/abc");
        assert!(matches!(
            result,
            Err(ApiError::ApiUnexpectedStructure { .. })
        ));
    }

    #[test]
    fn test_id_from_href_empty() {
        assert!(id_from_href("").is_err());
        assert!(id_from_href("/").is_err());
    }
}
