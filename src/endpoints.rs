//! URL building for the fixed set of API operations.
//!
//! Each function maps one logical operation to its URL under the configured
//! API domain. IDs are numeric path segments; team search uses a `name`
//! query parameter.

/// Builds the URL listing all competitions for the current season.
///
/// # Example
/// ```
/// use footdata::endpoints::competitions_url;
///
/// let url = competitions_url("https://api.example.com/v1");
/// assert_eq!(url, "https://api.example.com/v1/competitions/");
/// ```
pub fn competitions_url(api_domain: &str) -> String {
    format!("{api_domain}/competitions/")
}

/// Builds the URL for a single competition.
///
/// # Example
/// ```
/// use footdata::endpoints::competition_url;
///
/// let url = competition_url("https://api.example.com/v1", 426);
/// assert_eq!(url, "https://api.example.com/v1/competitions/426");
/// ```
pub fn competition_url(api_domain: &str, comp_id: u32) -> String {
    format!("{api_domain}/competitions/{comp_id}")
}

/// Builds the URL for the teams participating in a competition.
pub fn competition_teams_url(api_domain: &str, comp_id: u32) -> String {
    format!("{api_domain}/competitions/{comp_id}/teams")
}

/// Builds the URL for the fixtures of a competition.
pub fn competition_fixtures_url(api_domain: &str, comp_id: u32) -> String {
    format!("{api_domain}/competitions/{comp_id}/fixtures")
}

/// Builds the URL for the league table of a competition.
///
/// # Example
/// ```
/// use footdata::endpoints::league_table_url;
///
/// let url = league_table_url("https://api.example.com/v1", 426);
/// assert_eq!(url, "https://api.example.com/v1/competitions/426/leagueTable");
/// ```
pub fn league_table_url(api_domain: &str, comp_id: u32) -> String {
    format!("{api_domain}/competitions/{comp_id}/leagueTable")
}

/// Builds the URL listing fixtures across all competitions. The API applies
/// its default time frame (the next seven days) when none is given.
pub fn fixtures_url(api_domain: &str) -> String {
    format!("{api_domain}/fixtures/")
}

/// Builds the URL for a single fixture.
pub fn fixture_url(api_domain: &str, fixture_id: u32) -> String {
    format!("{api_domain}/fixtures/{fixture_id}")
}

/// Builds the URL for a single team.
pub fn team_url(api_domain: &str, team_id: u32) -> String {
    format!("{api_domain}/teams/{team_id}")
}

/// Builds the URL for the players of a team.
pub fn team_players_url(api_domain: &str, team_id: u32) -> String {
    format!("{api_domain}/teams/{team_id}/players")
}

/// Builds the URL for the fixtures of a team.
pub fn team_fixtures_url(api_domain: &str, team_id: u32) -> String {
    format!("{api_domain}/teams/{team_id}/fixtures")
}

/// Builds the team search URL for a name query. Spaces are percent-encoded;
/// the API accepts partial names.
///
/// # Example
/// ```
/// use footdata::endpoints::team_search_url;
///
/// let url = team_search_url("https://api.example.com/v1", "Manchester United");
/// assert_eq!(
///     url,
///     "https://api.example.com/v1/teams/?name=Manchester%20United"
/// );
/// ```
pub fn team_search_url(api_domain: &str, name: &str) -> String {
    let encoded = name.replace(' ', "%20");
    format!("{api_domain}/teams/?name={encoded}")
}
