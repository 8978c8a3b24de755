// ABOUTME: Typed calls for the create, list, edit, and delete idea endpoints
// ABOUTME: Edit and delete address an idea through the ideaId query parameter

//! Idea endpoints of the IdeaCenter API.
//!
//! Every call returns the raw [`ApiReply`] so callers can assert on the status
//! code before deciding how to interpret the body.

use reqwest::Method;
use tracing::info;

use crate::{
    error::ClientResult,
    models::IdeaRequest,
    session::{ApiReply, Session},
};

pub const CREATE_PATH: &str = "/api/Idea/Create";
pub const LIST_PATH: &str = "/api/Idea/All";
pub const EDIT_PATH: &str = "/api/Idea/Edit";
pub const DELETE_PATH: &str = "/api/Idea/Delete";

/// Query parameter naming the target idea for edit and delete
pub const IDEA_ID_PARAM: &str = "ideaId";

impl Session {
    /// `POST /api/Idea/Create`
    pub async fn create_idea(&self, idea: &IdeaRequest) -> ClientResult<ApiReply> {
        info!("POST {}", CREATE_PATH);
        let request = self.request(Method::POST, CREATE_PATH).json(idea);
        self.execute(request).await
    }

    /// `GET /api/Idea/All`
    pub async fn list_ideas(&self) -> ClientResult<ApiReply> {
        info!("GET {}", LIST_PATH);
        let request = self.request(Method::GET, LIST_PATH);
        self.execute(request).await
    }

    /// `PUT /api/Idea/Edit?ideaId=<id>`
    pub async fn edit_idea(&self, idea_id: &str, idea: &IdeaRequest) -> ClientResult<ApiReply> {
        info!("PUT {}?{}={}", EDIT_PATH, IDEA_ID_PARAM, idea_id);
        let request = self
            .request(Method::PUT, EDIT_PATH)
            .query(&[(IDEA_ID_PARAM, idea_id)])
            .json(idea);
        self.execute(request).await
    }

    /// `DELETE /api/Idea/Delete?ideaId=<id>`
    pub async fn delete_idea(&self, idea_id: &str) -> ClientResult<ApiReply> {
        info!("DELETE {}?{}={}", DELETE_PATH, IDEA_ID_PARAM, idea_id);
        let request = self
            .request(Method::DELETE, DELETE_PATH)
            .query(&[(IDEA_ID_PARAM, idea_id)]);
        self.execute(request).await
    }
}
