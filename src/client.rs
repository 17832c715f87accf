//! The `Football` client: one query method per API operation.

use serde::de::DeserializeOwned;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use crate::config::Config;
use crate::constants::MIN_TEAM_NAME_QUERY_LEN;
use crate::endpoints;
use crate::error::ApiError;
use crate::fetch::{ResponseMeta, create_http_client, fetch};
use crate::models::league_table::LeagueTablePayload;
use crate::models::team::TeamPayload;
use crate::models::{
    Competition, Fixture, FixtureDetailResponse, FixturesResponse, LeagueTable, Player,
    PlayersResponse, Team, TeamMatch, TeamsResponse,
};

/// Client for the football-data.org v1 API.
///
/// Holds a pooled HTTP client with the API key installed as a default
/// header, plus a record of the most recent response. Each query method
/// performs one HTTP round trip (two for [`Football::team_by_name`]).
#[derive(Debug)]
pub struct Football {
    client: reqwest::Client,
    config: Config,
    last_response: RwLock<Option<ResponseMeta>>,
}

impl Football {
    /// Creates a client from an explicit configuration and verifies the
    /// credential with one request against the competition list, so a bad
    /// key fails construction instead of the first query.
    ///
    /// # Returns
    /// * `Ok(Football)` - Credential accepted by the API
    /// * `Err(ApiError)` - Invalid key (typically `ApiClientError` with
    ///   status 401/403) or a transport failure
    pub async fn new(config: Config) -> Result<Self, ApiError> {
        let client = create_http_client(&config.api_key, config.http_timeout_seconds)?;
        let football = Football {
            client,
            config,
            last_response: RwLock::new(None),
        };

        let url = endpoints::competitions_url(&football.config.api_domain);
        football.get::<Vec<Competition>>(&url).await?;
        Ok(football)
    }

    /// Creates a client with an explicit API key and default configuration.
    pub async fn with_api_key(api_key: &str) -> Result<Self, ApiError> {
        Self::new(Config::resolve(Some(api_key))?).await
    }

    /// Creates a client with the API key taken from the `FOOTDATA_API_KEY`
    /// environment variable.
    pub async fn from_env() -> Result<Self, ApiError> {
        Self::new(Config::from_env()?).await
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns metadata about the most recent response, including error
    /// responses. `None` until the first response arrives.
    pub async fn last_response(&self) -> Option<ResponseMeta> {
        self.last_response.read().await.clone()
    }

    // Single round trip: fetch, record metadata, surface the result.
    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let (result, meta) = fetch(&self.client, url).await;
        if let Some(meta) = meta {
            *self.last_response.write().await = Some(meta);
        }
        result
    }

    /// Returns the competition with the given ID.
    ///
    /// Sends one request.
    #[instrument(skip(self))]
    pub async fn competition(&self, comp_id: u32) -> Result<Competition, ApiError> {
        let url = endpoints::competition_url(&self.config.api_domain, comp_id);
        self.get(&url).await
    }

    /// Returns all competitions of the current season.
    ///
    /// Sends one request.
    #[instrument(skip(self))]
    pub async fn all_competitions(&self) -> Result<Vec<Competition>, ApiError> {
        let url = endpoints::competitions_url(&self.config.api_domain);
        self.get(&url).await
    }

    /// Returns the league table of the given competition.
    ///
    /// Sends one request.
    #[instrument(skip(self))]
    pub async fn league_table(&self, comp_id: u32) -> Result<LeagueTable, ApiError> {
        let url = endpoints::league_table_url(&self.config.api_domain, comp_id);
        let payload: LeagueTablePayload = self.get(&url).await?;
        LeagueTable::try_from(payload)
    }

    /// Returns the fixtures of the given competition.
    ///
    /// Sends one request.
    #[instrument(skip(self))]
    pub async fn competition_fixtures(&self, comp_id: u32) -> Result<Vec<Fixture>, ApiError> {
        let url = endpoints::competition_fixtures_url(&self.config.api_domain, comp_id);
        let response: FixturesResponse = self.get(&url).await?;
        response.fixtures.into_iter().map(Fixture::try_from).collect()
    }

    /// Returns the teams participating in the given competition.
    ///
    /// Sends one request.
    #[instrument(skip(self))]
    pub async fn competition_teams(&self, comp_id: u32) -> Result<Vec<Team>, ApiError> {
        let url = endpoints::competition_teams_url(&self.config.api_domain, comp_id);
        let response: TeamsResponse = self.get(&url).await?;
        debug!("Competition {} has {} teams", comp_id, response.count);
        response.teams.into_iter().map(Team::try_from).collect()
    }

    /// Returns the fixture with the given ID. The response's head-to-head
    /// block is not consumed.
    ///
    /// Sends one request.
    #[instrument(skip(self))]
    pub async fn fixture(&self, fixture_id: u32) -> Result<Fixture, ApiError> {
        let url = endpoints::fixture_url(&self.config.api_domain, fixture_id);
        let response: FixtureDetailResponse = self.get(&url).await?;
        Fixture::try_from(response.fixture)
    }

    /// Returns fixtures across all competitions within the API's default
    /// time frame (the next seven days).
    ///
    /// Sends one request.
    #[instrument(skip(self))]
    pub async fn all_fixtures(&self) -> Result<Vec<Fixture>, ApiError> {
        let url = endpoints::fixtures_url(&self.config.api_domain);
        let response: FixturesResponse = self.get(&url).await?;
        response.fixtures.into_iter().map(Fixture::try_from).collect()
    }

    /// Returns the team with the given ID.
    ///
    /// Sends one request.
    #[instrument(skip(self))]
    pub async fn team(&self, team_id: u32) -> Result<Team, ApiError> {
        let url = endpoints::team_url(&self.config.api_domain, team_id);
        let payload: TeamPayload = self.get(&url).await?;
        Team::try_from(payload)
    }

    /// Looks a team up by name: queries the search endpoint and fetches the
    /// first match by ID. Multiple matches are silently narrowed to the
    /// first; zero matches yield `Ok(None)`. Names under 3 characters are
    /// rejected.
    ///
    /// Sends two requests on a hit, one on a miss.
    #[instrument(skip(self))]
    pub async fn team_by_name(&self, team_name: &str) -> Result<Option<Team>, ApiError> {
        if team_name.chars().count() < MIN_TEAM_NAME_QUERY_LEN {
            return Err(ApiError::team_name_too_short(team_name));
        }

        let url = endpoints::team_search_url(&self.config.api_domain, team_name);
        let response: TeamsResponse = self.get(&url).await?;

        let Some(first) = response.teams.into_iter().next() else {
            debug!("No teams matched name {team_name:?}");
            return Ok(None);
        };

        let team_match = TeamMatch::try_from(first)?;
        self.team(team_match.id).await.map(Some)
    }

    /// Returns the players of the given team.
    ///
    /// Sends one request.
    #[instrument(skip(self))]
    pub async fn team_players(&self, team_id: u32) -> Result<Vec<Player>, ApiError> {
        let url = endpoints::team_players_url(&self.config.api_domain, team_id);
        let response: PlayersResponse = self.get(&url).await?;
        debug!("Team {} has {} players", team_id, response.count);
        Ok(response.players)
    }

    /// Returns the fixtures of the given team.
    ///
    /// Sends one request.
    #[instrument(skip(self))]
    pub async fn team_fixtures(&self, team_id: u32) -> Result<Vec<Fixture>, ApiError> {
        let url = endpoints::team_fixtures_url(&self.config.api_domain, team_id);
        let response: FixturesResponse = self.get(&url).await?;
        response.fixtures.into_iter().map(Fixture::try_from).collect()
    }

    /// Returns every team matching the given name as id/name pairs. An
    /// empty vec means no matches.
    ///
    /// Sends one request.
    #[instrument(skip(self))]
    pub async fn search_teams(&self, team_name: &str) -> Result<Vec<TeamMatch>, ApiError> {
        if team_name.chars().count() < MIN_TEAM_NAME_QUERY_LEN {
            return Err(ApiError::team_name_too_short(team_name));
        }

        let url = endpoints::team_search_url(&self.config.api_domain, team_name);
        let response: TeamsResponse = self.get(&url).await?;
        debug!(
            "Search for {team_name:?} returned {} match(es)",
            response.count
        );
        response.teams.into_iter().map(TeamMatch::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn mock_config(server: &MockServer) -> Config {
        Config {
            api_key: "test-key".to_string(),
            api_domain: server.uri(),
            http_timeout_seconds: crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS,
        }
    }

    async fn mount_competitions(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/competitions/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_new_sends_validation_request_with_auth_header() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/competitions/"))
            .and(header("X-Auth-Token", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let football = Football::new(mock_config(&mock_server)).await.unwrap();
        let meta = football.last_response().await.unwrap();
        assert_eq!(meta.status, 200);
        assert!(meta.endpoint.ends_with("/competitions/"));
    }

    #[tokio::test]
    async fn test_new_fails_on_rejected_key() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/competitions/"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let result = Football::new(mock_config(&mock_server)).await;
        match result {
            Err(ApiError::ApiClientError { status, .. }) => assert_eq!(status, 401),
            other => panic!("Expected ApiClientError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_team_by_name_rejects_short_queries_without_a_request() {
        let mock_server = MockServer::start().await;
        mount_competitions(&mock_server).await;

        let football = Football::new(mock_config(&mock_server)).await.unwrap();
        let result = football.team_by_name("FC").await;
        assert!(matches!(result, Err(ApiError::TeamNameTooShort { .. })));

        let result = football.search_teams("ab").await;
        assert!(matches!(result, Err(ApiError::TeamNameTooShort { .. })));
    }

    #[tokio::test]
    async fn test_last_response_tracks_most_recent_request() {
        let mock_server = MockServer::start().await;
        mount_competitions(&mock_server).await;

        Mock::given(method("GET"))
            .and(path("/competitions/426"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({
                        "id": 426,
                        "caption": "Premier League 2016/17",
                        "league": "PL",
                        "year": "2016",
                        "currentMatchday": 38,
                        "numberOfMatchdays": 38,
                        "numberOfTeams": 20,
                        "numberOfGames": 380,
                        "lastUpdated": "2017-05-21T16:53:59Z"
                    }))
                    .insert_header("X-Requests-Available-Minute", "42"),
            )
            .mount(&mock_server)
            .await;

        let football = Football::new(mock_config(&mock_server)).await.unwrap();
        football.competition(426).await.unwrap();

        let meta = football.last_response().await.unwrap();
        assert!(meta.endpoint.ends_with("/competitions/426"));
        assert_eq!(meta.status, 200);
        assert_eq!(meta.requests_available, Some(42));
    }

    #[tokio::test]
    async fn test_last_response_records_error_responses_too() {
        let mock_server = MockServer::start().await;
        mount_competitions(&mock_server).await;

        Mock::given(method("GET"))
            .and(path("/teams/9999"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let football = Football::new(mock_config(&mock_server)).await.unwrap();
        let result = football.team(9999).await;
        assert!(matches!(result, Err(ApiError::ApiNotFound { .. })));

        let meta = football.last_response().await.unwrap();
        assert_eq!(meta.status, 404);
        assert!(meta.endpoint.ends_with("/teams/9999"));
    }
}
