//! Shared helpers for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use raciboard::directory::adapters::memory::{
    InMemoryMembershipGateway, InMemoryRoleCatalogGateway,
};
use raciboard::directory::domain::{Member, UserId};
use raciboard::directory::services::{MembershipRoster, RoleCatalog};
use raciboard::grid::adapters::memory::{InMemoryAssignmentGateway, InMemoryDraftStore};
use raciboard::grid::services::{AssignmentGrid, GridConfig, MatrixBoard};
use raciboard::project::domain::ProjectId;
use raciboard::stage::adapters::memory::InMemoryStageGateway;
use raciboard::stage::domain::{NewStage, StageId, StageStatus};
use raciboard::stage::ports::StageGateway;
use raciboard::task::domain::{Priority, TaskId};
use raciboard::task::adapters::memory::InMemoryTaskGateway;
use raciboard::task::services::TaskRegistry;

/// Board type wired entirely to in-memory gateways.
pub type Board = MatrixBoard<
    InMemoryStageGateway,
    InMemoryTaskGateway,
    InMemoryAssignmentGateway,
    InMemoryMembershipGateway,
    InMemoryRoleCatalogGateway,
    InMemoryDraftStore,
    DefaultClock,
>;

/// A matrix board plus handles to the fakes behind it.
pub struct BoardEnv {
    pub stage_gw: Arc<InMemoryStageGateway>,
    pub assign_gw: Arc<InMemoryAssignmentGateway>,
    pub member_gw: Arc<InMemoryMembershipGateway>,
    pub drafts: Arc<InMemoryDraftStore>,
    pub board: Board,
}

/// The project every board test runs against.
pub const PROJECT: ProjectId = ProjectId::new(1);

/// Builds a member entry for the fake user directory.
pub fn member(id: u64, full_name: &str, username: &str) -> Member {
    Member::new(UserId::new(id), full_name, username).expect("valid member")
}

/// Builds a board over fresh fakes, with the standard RACI catalog and
/// the given users registered in the user directory.
pub fn board_env(users: &[Member]) -> BoardEnv {
    let stage_gw = Arc::new(InMemoryStageGateway::new());
    stage_gw.register_project(PROJECT);
    let task_gw = Arc::new(InMemoryTaskGateway::new());
    let assign_gw = Arc::new(InMemoryAssignmentGateway::new());
    let member_gw = Arc::new(InMemoryMembershipGateway::new());
    member_gw.register_project(PROJECT);
    for user in users {
        member_gw.register_user(user.clone());
    }
    let drafts = Arc::new(InMemoryDraftStore::new());
    let board = MatrixBoard::new(
        PROJECT,
        raciboard::stage::services::StageDirectory::new(Arc::clone(&stage_gw), PROJECT),
        TaskRegistry::new(Arc::clone(&task_gw)),
        AssignmentGrid::new(
            Arc::clone(&assign_gw),
            Arc::clone(&drafts),
            Arc::new(DefaultClock),
            GridConfig::default(),
        ),
        MembershipRoster::new(Arc::clone(&member_gw), PROJECT),
        RoleCatalog::new(Arc::new(InMemoryRoleCatalogGateway::seeded())),
    );
    BoardEnv {
        stage_gw,
        assign_gw,
        member_gw,
        drafts,
        board,
    }
}

/// Seeds a stage directly through the stage service fake.
pub async fn seed_stage(env: &BoardEnv, title: &str) -> StageId {
    let stage = env
        .stage_gw
        .create_stage(&NewStage {
            project_id: PROJECT,
            title: title.to_owned(),
            status: StageStatus::Planned,
            sequence: 0,
            deadline: None,
        })
        .await
        .expect("stage creation should succeed");
    stage.id()
}

/// Creates a task through the board and registers its assignment row,
/// as the real server does when a task is created.
pub async fn add_task(env: &mut BoardEnv, title: &str) -> TaskId {
    let task_id = env
        .board
        .create_task(title, None, Priority::Low, None)
        .await
        .expect("task creation should succeed");
    env.assign_gw.register_task(task_id);
    task_id
}
