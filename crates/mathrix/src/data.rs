//! Data structures exchanged with the team-formation API.
//!
//! Every entity is owned by the backend; these are the client's ephemeral copies.
//! Fields the server may omit are `#[serde(default)]` so a sparse response still parses.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum number of members in a team.
pub const MAX_TEAM_SIZE: usize = 4;

/// A registered individual user of the event platform.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Participant {
    pub participant_id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub usn: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub year: Option<u32>,
    #[serde(default)]
    pub interest_cluster: Option<u32>,
    #[serde(default)]
    pub team_id: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl Participant {
    /// First letter of the name, uppercased, for avatars.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "?".to_string())
    }

    pub fn has_team(&self) -> bool {
        self.team_id.as_deref().is_some_and(|id| !id.is_empty())
    }

    /// `"{department} • Year {year}"`, skipping whichever part is unknown.
    pub fn academic_summary(&self) -> String {
        match (&self.department, self.year) {
            (Some(department), Some(year)) => format!("{department} • Year {year}"),
            (Some(department), None) => department.clone(),
            (None, Some(year)) => format!("Year {year}"),
            (None, None) => String::new(),
        }
    }
}

/// A group of up to [`MAX_TEAM_SIZE`] participants with one leader.
/// The `team_id` doubles as the invite code.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Team {
    pub team_id: String,
    pub team_name: String,
    #[serde(default)]
    pub leader_id: String,
    #[serde(default)]
    pub members: Vec<Participant>,
    #[serde(default)]
    pub member_count: Option<usize>,
}

impl Team {
    /// Member count as reported by the server, falling back to the member list.
    pub fn size(&self) -> usize {
        self.member_count.unwrap_or(self.members.len())
    }

    pub fn open_slots(&self) -> usize {
        MAX_TEAM_SIZE.saturating_sub(self.size())
    }

    pub fn is_full(&self) -> bool {
        self.open_slots() == 0
    }

    pub fn is_leader(&self, participant_id: &str) -> bool {
        self.leader_id == participant_id
    }

    /// `"Full"` or `"N spots left"`.
    pub fn capacity_label(&self) -> String {
        match self.open_slots() {
            0 => "Full".to_string(),
            1 => "1 spot left".to_string(),
            n => format!("{n} spots left"),
        }
    }
}

/// Lifecycle of a team request.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Pending,
    Accepted,
    Declined,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Accepted => "accepted",
            RequestStatus::Declined => "declined",
        }
    }

    /// Title shown for a notification in this state.
    pub fn headline(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "New Team Request",
            RequestStatus::Accepted => "Request Accepted",
            RequestStatus::Declined => "Request Declined",
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, RequestStatus::Pending)
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An invitation between a participant (or team) and another participant.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TeamRequest {
    pub request_id: String,
    #[serde(default)]
    pub from_participant: Option<Participant>,
    #[serde(default)]
    pub to_participant: Option<Participant>,
    #[serde(default)]
    pub team_id: Option<String>,
    #[serde(default)]
    pub status: RequestStatus,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Notifications are team requests addressed to the current participant.
pub type Notification = TeamRequest;

impl TeamRequest {
    /// The request's own message, or `"From: {sender}"`.
    pub fn summary(&self) -> String {
        match self.message.as_deref().filter(|m| !m.trim().is_empty()) {
            Some(message) => message.to_string(),
            None => format!(
                "From: {}",
                self.from_participant
                    .as_ref()
                    .map(|p| p.name.as_str())
                    .unwrap_or("Unknown")
            ),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LoginResponse {
    pub participant: Participant,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RegisterParticipant {
    pub name: String,
    pub usn: String,
    pub email: String,
    pub password: String,
    pub skills: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ExistsResponse {
    pub exists: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CreateTeamByEmail {
    pub team_name: String,
    pub leader_email: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CreatedTeam {
    pub team_id: String,
    #[serde(default)]
    pub team_name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SendTeamRequest {
    pub to_participant_id: String,
    pub team_id: Option<String>,
    pub message: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RespondToRequest {
    pub status: RequestStatus,
}

/// Team the responder ended up in after accepting a request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct JoinedTeam {
    pub team_id: String,
    #[serde(default)]
    pub team_name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct RespondResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub team: Option<JoinedTeam>,
}

/// Generic `{ "message": ... }` acknowledgement.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Acknowledgement {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TeammateMatch {
    pub participant: Participant,
    #[serde(default)]
    pub reasons: Vec<String>,
    #[serde(default)]
    pub compatibility_score: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TeamMatch {
    pub team: Team,
    #[serde(default)]
    pub open_slots: usize,
    #[serde(default)]
    pub reasons: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct DiscoveryResponse {
    #[serde(default)]
    pub potential_teammates: Vec<TeammateMatch>,
    #[serde(default)]
    pub available_teams: Vec<TeamMatch>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct RequestsResponse {
    #[serde(default)]
    pub incoming_requests: Vec<TeamRequest>,
    #[serde(default)]
    pub outgoing_requests: Vec<TeamRequest>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct NotificationsResponse {
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct UnreadCount {
    #[serde(default)]
    pub unread_count: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub participant: Participant,
    pub match_score: f64,
    #[serde(default)]
    pub reason: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct SuggestionsResponse {
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ParticipantStats {
    pub total: u32,
    #[serde(default)]
    pub assigned: u32,
    #[serde(default)]
    pub unassigned: u32,
    /// Cluster id (as a JSON object key) to participant count.
    #[serde(default)]
    pub cluster_distribution: BTreeMap<String, u32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct TeamStatistics {
    #[serde(default)]
    pub full_teams: u32,
    #[serde(default)]
    pub teams_with_members: u32,
    #[serde(default)]
    pub empty_teams: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct TeamStats {
    pub total: u32,
    #[serde(default)]
    pub statistics: TeamStatistics,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct AutoAssignment {
    #[serde(default)]
    pub total_participants: u32,
    #[serde(default)]
    pub optimal_teams: u32,
    #[serde(default)]
    pub remaining_participants: u32,
    #[serde(default)]
    pub recommendation: Option<String>,
}

/// Aggregate served by the admin system-overview endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct SystemOverview {
    pub participants: ParticipantStats,
    pub teams: TeamStats,
    #[serde(default)]
    pub auto_assignment: AutoAssignment,
}

impl SystemOverview {
    /// Cluster distribution as `(cluster_id, count)` sorted by cluster id.
    /// Keys that are not numeric are skipped.
    pub fn cluster_counts(&self) -> Vec<(u32, u32)> {
        let mut counts: Vec<(u32, u32)> = self
            .participants
            .cluster_distribution
            .iter()
            .filter_map(|(cluster, count)| cluster.parse().ok().map(|id| (id, *count)))
            .collect();
        counts.sort_unstable();
        counts
    }

    /// Share of participants already on a team, in percent.
    pub fn assignment_rate(&self) -> f64 {
        if self.participants.total == 0 {
            0.0
        } else {
            f64::from(self.participants.assigned) * 100.0 / f64::from(self.participants.total)
        }
    }
}

/// Filters of the teammate discovery browser.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DiscoveryFilters {
    pub interest_cluster: Option<u32>,
    pub department: Option<String>,
    pub year: Option<u32>,
    pub max_team_size: u32,
}

impl Default for DiscoveryFilters {
    fn default() -> Self {
        Self {
            interest_cluster: None,
            department: None,
            year: None,
            max_team_size: MAX_TEAM_SIZE as u32,
        }
    }
}

impl DiscoveryFilters {
    /// URL query string (without the leading `?`) containing only the set filters.
    pub fn to_query(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();
        if let Some(cluster) = self.interest_cluster {
            pairs.push(("interest_cluster", cluster.to_string()));
        }
        if let Some(department) = self.department.as_deref().filter(|d| !d.is_empty()) {
            pairs.push(("department", department.to_string()));
        }
        if let Some(year) = self.year {
            pairs.push(("year", year.to_string()));
        }
        if self.max_team_size > 0 {
            pairs.push(("max_team_size", self.max_team_size.to_string()));
        }

        pairs
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Longest optional message a team request may carry, in characters.
pub const MAX_REQUEST_MESSAGE_LEN: usize = 200;

/// Who a team request composed in the discovery browser is addressed to.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestTarget {
    Participant(Participant),
    /// A request to join an existing team is addressed to the team itself.
    Team(Team),
}

impl RequestTarget {
    pub fn display_name(&self) -> &str {
        match self {
            RequestTarget::Participant(participant) => &participant.name,
            RequestTarget::Team(team) => &team.team_name,
        }
    }

    /// Request body; a blank message is sent as `null` and a long one is cut
    /// to [`MAX_REQUEST_MESSAGE_LEN`] characters.
    pub fn to_request(&self, message: &str) -> SendTeamRequest {
        let message = message.trim();
        let message = (!message.is_empty())
            .then(|| message.chars().take(MAX_REQUEST_MESSAGE_LEN).collect());

        match self {
            RequestTarget::Participant(participant) => SendTeamRequest {
                to_participant_id: participant.participant_id.clone(),
                team_id: None,
                message,
            },
            RequestTarget::Team(team) => SendTeamRequest {
                to_participant_id: team.team_id.clone(),
                team_id: Some(team.team_id.clone()),
                message,
            },
        }
    }
}

/// Error body returned by the API on rejected requests.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorDetail {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: &str) -> Participant {
        Participant {
            participant_id: id.to_string(),
            name: format!("member {id}"),
            email: format!("{id}@example.com"),
            usn: None,
            department: None,
            year: None,
            interest_cluster: None,
            team_id: None,
            skills: Vec::new(),
        }
    }

    #[test]
    fn test_participant_from_sparse_json() {
        let participant: Participant =
            serde_json::from_str(r#"{"participant_id":"p1","name":"ada"}"#).unwrap();
        assert_eq!(participant.initial(), "A");
        assert!(!participant.has_team());
        assert!(participant.skills.is_empty());
        assert_eq!(participant.academic_summary(), "");
    }

    #[test]
    fn test_academic_summary() {
        let mut participant = member("p1");
        participant.department = Some("Computer Science".to_string());
        participant.year = Some(2);
        assert_eq!(participant.academic_summary(), "Computer Science • Year 2");
    }

    #[test]
    fn test_team_capacity() {
        let mut team = Team {
            team_id: "T1".to_string(),
            team_name: "Primes".to_string(),
            leader_id: "p1".to_string(),
            members: vec![member("p1"), member("p2")],
            member_count: None,
        };
        assert_eq!(team.open_slots(), 2);
        assert_eq!(team.capacity_label(), "2 spots left");
        assert!(team.is_leader("p1"));

        team.members.extend([member("p3"), member("p4")]);
        assert!(team.is_full());
        assert_eq!(team.capacity_label(), "Full");
    }

    #[test]
    fn test_request_status_wire_format() {
        let body = RespondToRequest {
            status: RequestStatus::Accepted,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"status":"accepted"}"#
        );
    }

    #[test]
    fn test_notification_summary_falls_back_to_sender() {
        let notification: Notification = serde_json::from_str(
            r#"{"request_id":"r1","status":"pending","from_participant":{"participant_id":"p2","name":"Grace"}}"#,
        )
        .unwrap();
        assert_eq!(notification.summary(), "From: Grace");
        assert!(notification.status.is_pending());
    }

    #[test]
    fn test_system_overview_cluster_counts() {
        let overview: SystemOverview = serde_json::from_str(
            r#"{
                "participants": {"total": 10, "assigned": 4, "unassigned": 6,
                                 "cluster_distribution": {"2": 3, "1": 7}},
                "teams": {"total": 3, "statistics": {"full_teams": 1, "teams_with_members": 2, "empty_teams": 0}}
            }"#,
        )
        .unwrap();
        assert_eq!(overview.cluster_counts(), vec![(1, 7), (2, 3)]);
        assert_eq!(overview.teams.statistics.full_teams, 1);
        assert!((overview.assignment_rate() - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_request_target_bodies() {
        let to_member = RequestTarget::Participant(member("p2"));
        assert_eq!(to_member.display_name(), "member p2");
        assert_eq!(
            to_member.to_request("   "),
            SendTeamRequest {
                to_participant_id: "p2".to_string(),
                team_id: None,
                message: None,
            }
        );

        let to_team = RequestTarget::Team(Team {
            team_id: "T9".to_string(),
            team_name: "Primes".to_string(),
            leader_id: "p1".to_string(),
            members: vec![member("p1")],
            member_count: Some(1),
        });
        let body = to_team.to_request(" let me in ");
        assert_eq!(body.to_participant_id, "T9");
        assert_eq!(body.team_id.as_deref(), Some("T9"));
        assert_eq!(body.message.as_deref(), Some("let me in"));
    }

    #[test]
    fn test_request_message_is_capped() {
        let long = "é".repeat(MAX_REQUEST_MESSAGE_LEN + 20);
        let body = RequestTarget::Participant(member("p2")).to_request(&long);
        assert_eq!(
            body.message.map(|m| m.chars().count()),
            Some(MAX_REQUEST_MESSAGE_LEN)
        );
    }
}
