//! Shared wiremock fixtures for suite integration tests

#![allow(dead_code)]

use ideacenter_client::{
    credentials::AUTH_PATH,
    ideas::{CREATE_PATH, DELETE_PATH, EDIT_PATH, LIST_PATH},
    SessionFactory,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use url::Url;
use wiremock::matchers::{body_json, body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

pub const TOKEN: &str = "suite-token";
pub const LAST_ID: &str = "f3b9c1d2-last";

pub fn factory_for(server: &MockServer) -> SessionFactory {
    SessionFactory::new(Url::parse(&server.uri()).unwrap(), TOKEN)
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Mount every endpoint of a well-behaved Idea service.
///
/// The list returns two ideas with `LAST_ID` last; edit and delete succeed only
/// for `LAST_ID` and answer "There is no such idea!" for id 123.
pub async fn mount_idea_service(server: &MockServer, token: &str) {
    let auth = bearer(token);

    Mock::given(method("POST"))
        .and(path(CREATE_PATH))
        .and(header("authorization", auth.as_str()))
        .and(body_json(json!({
            "title": "Test Idea",
            "description": "This is a test idea for the API.",
            "url": ""
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"msg": "Successfully created!", "id": LAST_ID})),
        )
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path(CREATE_PATH))
        .and(header("authorization", auth.as_str()))
        .and(body_partial_json(json!({"title": null, "description": null})))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "errors": {"Title": ["The Title field is required."]}
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(LIST_PATH))
        .and(header("authorization", auth.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "older-idea", "title": "Left over"},
            {"id": LAST_ID, "title": "Test Idea"}
        ])))
        .mount(server)
        .await;

    Mock::given(method("PUT"))
        .and(path(EDIT_PATH))
        .and(query_param("ideaId", LAST_ID))
        .and(header("authorization", auth.as_str()))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"msg": "Edited successfully"})),
        )
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("PUT"))
        .and(path(EDIT_PATH))
        .and(query_param("ideaId", "123"))
        .respond_with(ResponseTemplate::new(400).set_body_string("There is no such idea!"))
        .mount(server)
        .await;

    Mock::given(method("DELETE"))
        .and(path(DELETE_PATH))
        .and(query_param("ideaId", LAST_ID))
        .and(header("authorization", auth.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_string("\"The idea is deleted!\""))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("DELETE"))
        .and(path(DELETE_PATH))
        .and(query_param("ideaId", "123"))
        .respond_with(ResponseTemplate::new(400).set_body_string("\"There is no such idea!\""))
        .mount(server)
        .await;
}

/// Idea service backed by an in-memory list that survives across requests.
///
/// Create appends a new id, list returns ids in insertion order, edit and
/// delete answer 400 "There is no such idea!" for ids that are not stored.
#[derive(Clone, Default)]
pub struct IdeaStore {
    ideas: Arc<Mutex<Vec<String>>>,
    next_id: Arc<AtomicUsize>,
}

#[derive(Clone, Copy)]
enum IdeaOp {
    Create,
    List,
    Edit,
    Delete,
}

struct StoreResponder {
    store: IdeaStore,
    op: IdeaOp,
}

impl IdeaStore {
    pub fn seeded(ids: &[&str]) -> Self {
        let store = Self::default();
        store
            .ideas
            .lock()
            .unwrap()
            .extend(ids.iter().map(|id| id.to_string()));
        store
    }

    pub fn ids(&self) -> Vec<String> {
        self.ideas.lock().unwrap().clone()
    }

    pub async fn mount(&self, server: &MockServer) {
        let routes = [
            ("POST", CREATE_PATH, IdeaOp::Create),
            ("GET", LIST_PATH, IdeaOp::List),
            ("PUT", EDIT_PATH, IdeaOp::Edit),
            ("DELETE", DELETE_PATH, IdeaOp::Delete),
        ];
        for (verb, route, op) in routes {
            Mock::given(method(verb))
                .and(path(route))
                .respond_with(StoreResponder {
                    store: self.clone(),
                    op,
                })
                .mount(server)
                .await;
        }
    }
}

fn no_such_idea() -> ResponseTemplate {
    ResponseTemplate::new(400).set_body_string("\"There is no such idea!\"")
}

impl Respond for StoreResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let mut ideas = self.store.ideas.lock().unwrap();
        let idea_id = request
            .url
            .query_pairs()
            .find(|(key, _)| key == "ideaId")
            .map(|(_, value)| value.into_owned());

        match self.op {
            IdeaOp::Create => {
                let body: Value = serde_json::from_slice(&request.body).unwrap_or(Value::Null);
                if body["title"].is_null() || body["description"].is_null() {
                    return ResponseTemplate::new(400).set_body_json(json!({
                        "errors": {"Title": ["The Title field is required."]}
                    }));
                }
                let id = format!("idea-{}", self.store.next_id.fetch_add(1, Ordering::SeqCst));
                ideas.push(id.clone());
                ResponseTemplate::new(200)
                    .set_body_json(json!({"msg": "Successfully created!", "id": id}))
            }
            IdeaOp::List => {
                let listed: Vec<Value> = ideas.iter().map(|id| json!({"id": id})).collect();
                ResponseTemplate::new(200).set_body_json(listed)
            }
            IdeaOp::Edit => match idea_id {
                Some(id) if ideas.contains(&id) => ResponseTemplate::new(200)
                    .set_body_json(json!({"msg": "Edited successfully"})),
                _ => no_such_idea(),
            },
            IdeaOp::Delete => match idea_id.and_then(|id| ideas.iter().position(|i| *i == id)) {
                Some(index) => {
                    ideas.remove(index);
                    ResponseTemplate::new(200).set_body_string("\"The idea is deleted!\"")
                }
                None => no_such_idea(),
            },
        }
    }
}

/// Auth endpoint that hands out `token` and must be hit `times` times
pub async fn mount_login(server: &MockServer, token: &str, times: u64) {
    Mock::given(method("POST"))
        .and(path(AUTH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"accesstoken": token})))
        .expect(times)
        .mount(server)
        .await;
}

/// Method and path+query of every request the server saw, in arrival order
pub async fn request_log(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|r| {
            let query = r.url.query().map(|q| format!("?{}", q)).unwrap_or_default();
            format!("{} {}{}", r.method, r.url.path(), query)
        })
        .collect()
}
