//! Paths of the remote API, relative to [`crate::config::api_base_url`].
//!
//! Path segments that carry user input are percent-encoded.

use urlencoding::encode;

use crate::data::DiscoveryFilters;

pub const LOGIN: &str = "/api/auth/login";
pub const REGISTER: &str = "/api/participants/register";
pub const CREATE_TEAM: &str = "/api/teams/create-by-email";
pub const SYSTEM_OVERVIEW: &str = "/api/admin/system-overview";
pub const HEALTH: &str = "/health";

pub fn check_email(email: &str) -> String {
    format!("/api/participants/check-email/{}", encode(email))
}

pub fn check_usn(usn: &str) -> String {
    format!("/api/participants/check-usn/{}", encode(usn))
}

pub fn participant(participant_id: &str) -> String {
    format!("/api/participants/{}", encode(participant_id))
}

pub fn suggestions(participant_id: &str) -> String {
    format!("/api/participants/{}/suggestions", encode(participant_id))
}

pub fn team(team_id: &str) -> String {
    format!("/api/teams/{}", encode(team_id))
}

pub fn discover(participant_id: &str, filters: &DiscoveryFilters) -> String {
    let path = format!("/api/team-formation/discover/{}", encode(participant_id));
    let query = filters.to_query();
    if query.is_empty() {
        path
    } else {
        format!("{path}?{query}")
    }
}

pub fn requests(participant_id: &str) -> String {
    format!("/api/team-formation/requests/{}", encode(participant_id))
}

pub fn send_request(participant_id: &str) -> String {
    format!("/api/team-formation/send-request/{}", encode(participant_id))
}

pub fn respond_request(request_id: &str, participant_id: &str) -> String {
    format!(
        "/api/team-formation/respond-request/{}/{}",
        encode(request_id),
        encode(participant_id)
    )
}

pub fn notifications(participant_id: &str) -> String {
    format!("/api/team-formation/notifications/{}", encode(participant_id))
}

pub fn unread_count(participant_id: &str) -> String {
    format!("/api/team-formation/unread-count/{}", encode(participant_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_email_is_encoded() {
        assert_eq!(
            check_email("a+b@x.com"),
            "/api/participants/check-email/a%2Bb%40x.com"
        );
    }

    #[test]
    fn test_respond_request_path() {
        assert_eq!(
            respond_request("r1", "p9"),
            "/api/team-formation/respond-request/r1/p9"
        );
    }

    #[test]
    fn test_discover_includes_only_set_filters() {
        let filters = DiscoveryFilters {
            interest_cluster: Some(2),
            department: Some("Computer Science".to_string()),
            ..DiscoveryFilters::default()
        };
        assert_eq!(
            discover("p1", &filters),
            "/api/team-formation/discover/p1?interest_cluster=2&department=Computer%20Science&max_team_size=4"
        );
    }
}
