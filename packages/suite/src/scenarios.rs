// ABOUTME: The seven ranked IdeaCenter scenarios run by the suite
// ABOUTME: Ranks 1-4 share the listed idea id; ranks 5-7 are independent negative paths

//! The seven IdeaCenter scenarios.
//!
//! Ranks 1-4 form the happy path (create, list, edit, delete) and share the
//! id captured by the list scenario. Ranks 5-7 are negative paths that stand
//! on their own.

use async_trait::async_trait;
use ideacenter_client::{ApiResponse, IdeaRequest, Session};
use reqwest::StatusCode;
use tracing::{info, warn};

use crate::context::SuiteContext;
use crate::error::{ScenarioError, ScenarioResult};
use crate::scenario::{expect_body_contains, expect_message, expect_status, Scenario};

pub const CREATED_MESSAGE: &str = "Successfully created!";
pub const EDITED_MESSAGE: &str = "Edited successfully";
pub const DELETED_MESSAGE: &str = "The idea is deleted!";
pub const NO_SUCH_IDEA_MESSAGE: &str = "There is no such idea!";

/// Id that the server never issues
pub const NON_EXISTENT_IDEA_ID: &str = "123";

/// All scenarios in declaration order
pub fn default_sequence() -> Vec<Box<dyn Scenario>> {
    vec![
        Box::new(CreateIdea),
        Box::new(ListIdeas),
        Box::new(EditLastCreatedIdea),
        Box::new(DeleteLastCreatedIdea),
        Box::new(CreateIdeaWithoutRequiredFields::default()),
        Box::new(EditNonExistentIdea),
        Box::new(DeleteNonExistentIdea),
    ]
}

pub struct CreateIdea;

#[async_trait]
impl Scenario for CreateIdea {
    fn rank(&self) -> u32 {
        1
    }

    fn name(&self) -> &'static str {
        "Create idea"
    }

    async fn run(&self, session: &Session, _ctx: &mut SuiteContext) -> ScenarioResult<()> {
        let idea = IdeaRequest::new("Test Idea", "This is a test idea for the API.");
        let reply = session.create_idea(&idea).await?;

        expect_status(&reply, StatusCode::OK)?;
        let response: ApiResponse = reply.json()?;
        expect_message(&response, CREATED_MESSAGE)
    }
}

pub struct ListIdeas;

#[async_trait]
impl Scenario for ListIdeas {
    fn rank(&self) -> u32 {
        2
    }

    fn name(&self) -> &'static str {
        "List ideas"
    }

    async fn run(&self, session: &Session, ctx: &mut SuiteContext) -> ScenarioResult<()> {
        let reply = session.list_ideas().await?;

        expect_status(&reply, StatusCode::OK)?;
        let ideas: Vec<ApiResponse> = reply.json()?;

        // The server appends new ideas, so the last entry is the one just created.
        // Leftovers from earlier runs or other clients can break that assumption.
        let last = ideas.last().ok_or(ScenarioError::EmptyList)?;
        let id = last.id.clone().ok_or(ScenarioError::MissingId)?;

        if ideas.len() > 1 {
            warn!(
                "{} ideas listed; assuming the last one ({}) is ours",
                ideas.len(),
                id
            );
        }
        info!("Captured idea id {} from {} listed ideas", id, ideas.len());
        ctx.set_last_created_idea_id(id);
        Ok(())
    }
}

pub struct EditLastCreatedIdea;

#[async_trait]
impl Scenario for EditLastCreatedIdea {
    fn rank(&self) -> u32 {
        3
    }

    fn name(&self) -> &'static str {
        "Edit last created idea"
    }

    async fn run(&self, session: &Session, ctx: &mut SuiteContext) -> ScenarioResult<()> {
        let idea_id = ctx.require_last_created_idea_id()?;
        let idea = IdeaRequest::new(
            "Updated Test Idea",
            "This is an updated test idea for the API.",
        );
        let reply = session.edit_idea(idea_id, &idea).await?;

        expect_status(&reply, StatusCode::OK)?;
        let response: ApiResponse = reply.json()?;
        expect_message(&response, EDITED_MESSAGE)
    }
}

pub struct DeleteLastCreatedIdea;

#[async_trait]
impl Scenario for DeleteLastCreatedIdea {
    fn rank(&self) -> u32 {
        4
    }

    fn name(&self) -> &'static str {
        "Delete last created idea"
    }

    async fn run(&self, session: &Session, ctx: &mut SuiteContext) -> ScenarioResult<()> {
        let idea_id = ctx.require_last_created_idea_id()?;
        let reply = session.delete_idea(idea_id).await?;

        expect_status(&reply, StatusCode::OK)?;
        expect_body_contains(&reply, DELETED_MESSAGE)
    }
}

/// Sends `null` title and description; the server must reject it whatever the url holds
#[derive(Debug, Default)]
pub struct CreateIdeaWithoutRequiredFields {
    url: Option<String>,
}

impl CreateIdeaWithoutRequiredFields {
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
        }
    }
}

#[async_trait]
impl Scenario for CreateIdeaWithoutRequiredFields {
    fn rank(&self) -> u32 {
        5
    }

    fn name(&self) -> &'static str {
        "Create idea without required fields"
    }

    async fn run(&self, session: &Session, _ctx: &mut SuiteContext) -> ScenarioResult<()> {
        let mut idea = IdeaRequest::without_required_fields();
        if let Some(url) = &self.url {
            idea = idea.with_url(url.as_str());
        }
        let reply = session.create_idea(&idea).await?;

        expect_status(&reply, StatusCode::BAD_REQUEST)
    }
}

pub struct EditNonExistentIdea;

#[async_trait]
impl Scenario for EditNonExistentIdea {
    fn rank(&self) -> u32 {
        6
    }

    fn name(&self) -> &'static str {
        "Edit non-existent idea"
    }

    async fn run(&self, session: &Session, _ctx: &mut SuiteContext) -> ScenarioResult<()> {
        let idea = IdeaRequest::new("Non-existent Idea", "This idea does not exist.");
        let reply = session.edit_idea(NON_EXISTENT_IDEA_ID, &idea).await?;

        expect_status(&reply, StatusCode::BAD_REQUEST)?;
        expect_body_contains(&reply, NO_SUCH_IDEA_MESSAGE)
    }
}

pub struct DeleteNonExistentIdea;

#[async_trait]
impl Scenario for DeleteNonExistentIdea {
    fn rank(&self) -> u32 {
        7
    }

    fn name(&self) -> &'static str {
        "Delete non-existent idea"
    }

    async fn run(&self, session: &Session, _ctx: &mut SuiteContext) -> ScenarioResult<()> {
        let reply = session.delete_idea(NON_EXISTENT_IDEA_ID).await?;

        expect_status(&reply, StatusCode::BAD_REQUEST)?;
        expect_body_contains(&reply, NO_SUCH_IDEA_MESSAGE)
    }
}
