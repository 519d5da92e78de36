use mathrix::api::{ApiClient, ApiResult, HttpApiClient};
use mathrix::config;
use mathrix::data::{
    Acknowledgement, CreateTeamByEmail, CreatedTeam, DiscoveryFilters, DiscoveryResponse,
    ExistsResponse, LoginRequest, LoginResponse, Notification, NotificationsResponse,
    Participant, RegisterParticipant, RequestStatus, RequestsResponse, RespondResponse,
    RespondToRequest, SendTeamRequest, Suggestion, SuggestionsResponse, SystemOverview, Team,
    UnreadCount,
};
use mathrix::endpoints;
use mathrix::registration::RegistrationBackend;

/// Typed access to the team-formation API, one method per endpoint.
pub struct Api {
    client: HttpApiClient,
}

impl Api {
    pub fn new(base_url: &str) -> Self {
        Api {
            client: HttpApiClient::new(base_url),
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> ApiResult<Participant> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self.client.post(endpoints::LOGIN, &body).await?;
        Ok(response.participant)
    }

    pub async fn email_exists(&self, email: &str) -> ApiResult<bool> {
        let response: ExistsResponse = self.client.get(&endpoints::check_email(email)).await?;
        Ok(response.exists)
    }

    pub async fn usn_exists(&self, usn: &str) -> ApiResult<bool> {
        let response: ExistsResponse = self.client.get(&endpoints::check_usn(usn)).await?;
        Ok(response.exists)
    }

    pub async fn register(&self, body: &RegisterParticipant) -> ApiResult<Participant> {
        self.client.post(endpoints::REGISTER, body).await
    }

    pub async fn participant(&self, participant_id: &str) -> ApiResult<Participant> {
        self.client.get(&endpoints::participant(participant_id)).await
    }

    pub async fn suggestions(&self, participant_id: &str) -> ApiResult<Vec<Suggestion>> {
        let response: SuggestionsResponse = self
            .client
            .get(&endpoints::suggestions(participant_id))
            .await?;
        Ok(response.suggestions)
    }

    pub async fn create_team(&self, team_name: &str, leader_email: &str) -> ApiResult<CreatedTeam> {
        let body = CreateTeamByEmail {
            team_name: team_name.to_string(),
            leader_email: leader_email.to_string(),
        };
        self.client.post(endpoints::CREATE_TEAM, &body).await
    }

    pub async fn team(&self, team_id: &str) -> ApiResult<Team> {
        self.client.get(&endpoints::team(team_id)).await
    }

    pub async fn discover(
        &self,
        participant_id: &str,
        filters: &DiscoveryFilters,
    ) -> ApiResult<DiscoveryResponse> {
        self.client
            .get(&endpoints::discover(participant_id, filters))
            .await
    }

    pub async fn requests(&self, participant_id: &str) -> ApiResult<RequestsResponse> {
        self.client.get(&endpoints::requests(participant_id)).await
    }

    pub async fn send_request(
        &self,
        participant_id: &str,
        body: &SendTeamRequest,
    ) -> ApiResult<Acknowledgement> {
        self.client
            .post(&endpoints::send_request(participant_id), body)
            .await
    }

    pub async fn respond_request(
        &self,
        request_id: &str,
        participant_id: &str,
        status: RequestStatus,
    ) -> ApiResult<RespondResponse> {
        self.client
            .post(
                &endpoints::respond_request(request_id, participant_id),
                &RespondToRequest { status },
            )
            .await
    }

    pub async fn notifications(&self, participant_id: &str) -> ApiResult<Vec<Notification>> {
        let response: NotificationsResponse = self
            .client
            .get(&endpoints::notifications(participant_id))
            .await?;
        Ok(response.notifications)
    }

    pub async fn unread_count(&self, participant_id: &str) -> ApiResult<u32> {
        let response: UnreadCount = self
            .client
            .get(&endpoints::unread_count(participant_id))
            .await?;
        Ok(response.unread_count)
    }

    pub async fn system_overview(&self) -> ApiResult<SystemOverview> {
        self.client.get(endpoints::SYSTEM_OVERVIEW).await
    }

    pub async fn health(&self) -> ApiResult<Acknowledgement> {
        self.client.get(endpoints::HEALTH).await
    }
}

#[async_trait::async_trait(?Send)]
impl RegistrationBackend for Api {
    async fn email_exists(&self, email: &str) -> ApiResult<bool> {
        Api::email_exists(self, email).await
    }

    async fn usn_exists(&self, usn: &str) -> ApiResult<bool> {
        Api::usn_exists(self, usn).await
    }

    async fn register(&self, participant: &RegisterParticipant) -> ApiResult<Participant> {
        Api::register(self, participant).await
    }
}

/// Create a new instance of the API client against the configured base URL.
pub fn create() -> Api {
    Api::new(config::api_base_url())
}
