use serde::{Deserialize, Serialize};

/// One squad member of a team. Maps 1:1 from the API payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub position: String,
    #[serde(rename = "jerseyNumber", default)]
    pub jersey_number: Option<u32>,
    #[serde(rename = "dateOfBirth")]
    pub date_of_birth: String,
    pub nationality: String,
    #[serde(rename = "contractUntil", default)]
    pub contract_until: Option<String>,
    /// Formatted currency string as reported by the API.
    #[serde(rename = "marketValue", default)]
    pub market_value: Option<String>,
}

/// Envelope for the team players endpoint.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PlayersResponse {
    #[serde(default)]
    pub count: u32,
    pub players: Vec<Player>,
}
