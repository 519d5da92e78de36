//! Client-side bookkeeping for team-request notifications.
//!
//! The list is loaded by its owner and patched optimistically after each
//! accept/decline until the next refresh.

use crate::data::{Notification, RequestStatus, RespondResponse};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationList {
    items: Vec<Notification>,
}

impl NotificationList {
    pub fn new(items: Vec<Notification>) -> Self {
        Self { items }
    }

    pub fn replace(&mut self, items: Vec<Notification>) {
        self.items = items;
    }

    /// Sets the status of `request_id` locally. Returns whether it was found.
    pub fn mark(&mut self, request_id: &str, status: RequestStatus) -> bool {
        match self.items.iter_mut().find(|n| n.request_id == request_id) {
            Some(notification) => {
                notification.status = status;
                true
            }
            None => false,
        }
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn pending_count(&self) -> usize {
        self.items.iter().filter(|n| n.status.is_pending()).count()
    }
}

/// Text of the unread badge: nothing at zero, `"9+"` past nine.
pub fn badge_label(unread: u32) -> Option<String> {
    match unread {
        0 => None,
        1..=9 => Some(unread.to_string()),
        _ => Some("9+".to_string()),
    }
}

/// Alert shown after a request was answered.
pub fn response_message(status: RequestStatus, response: &RespondResponse) -> String {
    match (status, &response.team) {
        (RequestStatus::Accepted, Some(team)) => format!(
            "Team request accepted successfully! You are now part of team: {}",
            team.team_name
        ),
        (RequestStatus::Accepted, None) => "Team request accepted successfully!".to_string(),
        _ => response
            .message
            .clone()
            .unwrap_or_else(|| "Team request declined.".to_string()),
    }
}

pub fn response_failure_message(status: RequestStatus) -> &'static str {
    match status {
        RequestStatus::Accepted => "Failed to accept request. Please try again.",
        _ => "Failed to decline request. Please try again.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending(id: &str) -> Notification {
        serde_json::from_value(serde_json::json!({
            "request_id": id,
            "status": "pending",
            "message": "Join us?"
        }))
        .unwrap()
    }

    #[test]
    fn test_mark_patches_only_the_target() {
        let mut list = NotificationList::new(vec![pending("r1"), pending("r2")]);
        assert!(list.mark("r2", RequestStatus::Declined));
        assert_eq!(list.items()[0].status, RequestStatus::Pending);
        assert_eq!(list.items()[1].status, RequestStatus::Declined);
        assert_eq!(list.pending_count(), 1);
    }

    #[test]
    fn test_mark_unknown_request() {
        let mut list = NotificationList::new(vec![pending("r1")]);
        assert!(!list.mark("nope", RequestStatus::Accepted));
        assert_eq!(list.pending_count(), 1);
    }

    #[test]
    fn test_accept_message_names_the_team() {
        let response: RespondResponse = serde_json::from_value(serde_json::json!({
            "message": "ok",
            "team": { "team_id": "t1", "team_name": "Primes" }
        }))
        .unwrap();
        assert_eq!(
            response_message(RequestStatus::Accepted, &response),
            "Team request accepted successfully! You are now part of team: Primes"
        );
        assert_eq!(
            response_message(RequestStatus::Accepted, &RespondResponse::default()),
            "Team request accepted successfully!"
        );
    }

    #[test]
    fn test_decline_message_prefers_server_text() {
        let response = RespondResponse {
            message: Some("Request declined".to_string()),
            team: None,
        };
        assert_eq!(
            response_message(RequestStatus::Declined, &response),
            "Request declined"
        );
        assert_eq!(
            response_message(RequestStatus::Declined, &RespondResponse::default()),
            "Team request declined."
        );
        assert_eq!(
            response_failure_message(RequestStatus::Declined),
            "Failed to decline request. Please try again."
        );
    }

    #[test]
    fn test_badge_label() {
        assert_eq!(badge_label(0), None);
        assert_eq!(badge_label(3).as_deref(), Some("3"));
        assert_eq!(badge_label(9).as_deref(), Some("9"));
        assert_eq!(badge_label(10).as_deref(), Some("9+"));
    }
}
