use crate::clients::{MemberClient, TeamClient};
use crate::lifecycle::SystemConfig;
use crate::model::{MemberSearch, MemberTeam};
use crate::query::{ActorStore, MemberQueryRepository, Page, PageParams, PageRequest, SearchError};
use tracing::{error, info, instrument};

/// The runtime orchestrator for the member/team tables and the search on top of them.
///
/// `MemberSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping both table actors
/// - **Dependency Wiring**: The member actor gets a `TeamClient` to check foreign keys
/// - **Query Wiring**: A [`MemberQueryRepository`] over an [`ActorStore`] reading both tables
///
/// # Example
///
/// ```ignore
/// let system = MemberSystem::new();
///
/// let team_id = system.team_client.create_team(TeamCreate::new("TeamA")).await?;
/// system.member_client.create_member(MemberCreate::new("MemberA", 20).in_team(team_id)).await?;
///
/// let page = system.repository.search(&MemberSearch::default(), 0, 20).await?;
///
/// system.shutdown().await?;
/// ```
pub struct MemberSystem {
    /// Client for the Team actor
    pub team_client: TeamClient,

    /// Client for the Member actor
    pub member_client: MemberClient,

    /// Paginated member search
    pub repository: MemberQueryRepository<ActorStore>,

    config: SystemConfig,

    /// Task handles for the running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl MemberSystem {
    /// Starts both actors with the default [`SystemConfig`].
    pub fn new() -> Self {
        Self::with_config(SystemConfig::default())
    }

    /// Starts both actors and wires the search repository.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn with_config(config: SystemConfig) -> Self {
        // 1. Create actors (no dependencies)
        let (team_actor, team_client) = crate::team_actor::new(config.channel_buffer);
        let (member_actor, member_client) = crate::member_actor::new(config.channel_buffer);

        // 2. Start actors with injected context
        let team_handle = tokio::spawn(team_actor.run(()));
        let member_handle = tokio::spawn(member_actor.run(team_client.clone()));

        let store = ActorStore::new(member_client.clone(), team_client.clone());
        let repository =
            MemberQueryRepository::new(store).with_max_page_size(config.max_page_size);

        info!(?config, "Member system started");
        Self {
            team_client,
            member_client,
            repository,
            config,
            handles: vec![team_handle, member_handle],
        }
    }

    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    /// Binds request-style paging parameters and runs the search.
    #[instrument(skip(self))]
    pub async fn search_with_params(
        &self,
        criteria: &MemberSearch,
        params: &PageParams,
    ) -> Result<Page<MemberTeam>, SearchError> {
        let request = PageRequest::from_params(params, self.config.default_page_size)?;
        self.repository.search_page_complex(criteria, &request).await
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping every client closes the actor channels. The member actor holds a
    /// `TeamClient` in its context, so the team actor stops only after the member
    /// actor has.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.repository);
        drop(self.member_client);
        drop(self.team_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for MemberSystem {
    fn default() -> Self {
        Self::new()
    }
}
