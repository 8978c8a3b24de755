// ABOUTME: Scenario trait and the assertion helpers shared by every scenario
// ABOUTME: A scenario sends one request through a fresh session and checks the reply

use async_trait::async_trait;
use ideacenter_client::{ApiReply, ApiResponse, Session};
use reqwest::StatusCode;

use crate::context::SuiteContext;
use crate::error::{ScenarioError, ScenarioResult};

/// One ordered test case exercising a single API operation
#[async_trait]
pub trait Scenario: Send + Sync {
    /// Position in the run; lower ranks execute first
    fn rank(&self) -> u32;

    fn name(&self) -> &'static str;

    async fn run(&self, session: &Session, ctx: &mut SuiteContext) -> ScenarioResult<()>;
}

pub fn expect_status(reply: &ApiReply, expected: StatusCode) -> ScenarioResult<()> {
    if reply.status == expected {
        Ok(())
    } else {
        Err(ScenarioError::UnexpectedStatus {
            expected,
            actual: reply.status,
            body: reply.body.clone(),
        })
    }
}

pub fn expect_message(response: &ApiResponse, expected: &str) -> ScenarioResult<()> {
    match response.msg.as_deref() {
        Some(msg) if msg == expected => Ok(()),
        other => Err(ScenarioError::UnexpectedMessage {
            expected: expected.to_string(),
            actual: other.map(str::to_string),
        }),
    }
}

pub fn expect_body_contains(reply: &ApiReply, expected: &str) -> ScenarioResult<()> {
    if reply.contains(expected) {
        Ok(())
    } else {
        Err(ScenarioError::BodyMismatch {
            expected: expected.to_string(),
            body: reply.body.clone(),
        })
    }
}
