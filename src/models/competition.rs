use serde::{Deserialize, Serialize};

/// One competition (league or cup) in the current season.
///
/// Maps 1:1 from the API payload; the API's `caption` field is exposed as
/// `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competition {
    pub id: u32,
    #[serde(rename = "caption")]
    pub name: String,
    /// Short league code, e.g. "PL" or "BL1".
    pub league: String,
    /// Season start year as reported by the API, e.g. "2016".
    pub year: String,
    #[serde(rename = "currentMatchday")]
    pub current_matchday: u32,
    #[serde(rename = "numberOfMatchdays")]
    pub number_of_matchdays: u32,
    #[serde(rename = "numberOfTeams")]
    pub number_of_teams: u32,
    #[serde(rename = "numberOfGames")]
    pub number_of_games: u32,
    #[serde(rename = "lastUpdated")]
    pub last_updated: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_competition_deserializes_from_api_payload() {
        let json = r#"{
            "id": 426,
            "caption": "Premier League 2016/17",
            "league": "PL",
            "year": "2016",
            "currentMatchday": 38,
            "numberOfMatchdays": 38,
            "numberOfTeams": 20,
            "numberOfGames": 380,
            "lastUpdated": "2017-05-21T16:53:59Z"
        }"#;

        let competition: Competition = serde_json::from_str(json).unwrap();
        assert_eq!(competition.id, 426);
        assert_eq!(competition.name, "Premier League 2016/17");
        assert_eq!(competition.league, "PL");
        assert_eq!(competition.year, "2016");
        assert_eq!(competition.current_matchday, 38);
        assert_eq!(competition.number_of_matchdays, 38);
        assert_eq!(competition.number_of_teams, 20);
        assert_eq!(competition.number_of_games, 380);
        assert_eq!(competition.last_updated, "2017-05-21T16:53:59Z");
    }

    #[test]
    fn test_competition_missing_required_key_fails() {
        // No "caption"
        let json = r#"{
            "id": 426,
            "league": "PL",
            "year": "2016",
            "currentMatchday": 38,
            "numberOfMatchdays": 38,
            "numberOfTeams": 20,
            "numberOfGames": 380,
            "lastUpdated": "2017-05-21T16:53:59Z"
        }"#;

        assert!(serde_json::from_str::<Competition>(json).is_err());
    }
}
