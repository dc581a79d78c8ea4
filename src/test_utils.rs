// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking Kubernetes API responses.

use http::{Request, Response};
use http_body_util::BodyExt;
use kube::client::Body;
use kube::Client;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

#[derive(Clone)]
enum Canned {
    Fixed(u16, String),
    /// Reply with the request body, as the API server does on create
    Echo(u16),
}

/// A request seen by the mock, for asserting on paths and query strings
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
}

/// A mock HTTP service that returns predefined responses based on request paths.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<(String, String), Canned>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a response for GET requests matching the exact path
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.insert("GET", path, Canned::Fixed(status, body.to_string()))
    }

    /// Add a response for POST requests matching the exact path
    pub fn on_post(self, path: &str, status: u16, body: &str) -> Self {
        self.insert("POST", path, Canned::Fixed(status, body.to_string()))
    }

    /// Answer POST requests on the path with the submitted object
    pub fn on_post_echo(self, path: &str, status: u16) -> Self {
        self.insert("POST", path, Canned::Echo(status))
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }

    /// All requests received so far, oldest first
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn insert(self, method: &str, path: &str, canned: Canned) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert((method.to_string(), path.to_string()), canned);
        self
    }

    fn find_response(&self, method: &str, path: &str) -> Option<Canned> {
        let responses = self.responses.lock().unwrap();

        if let Some(resp) = responses.get(&(method.to_string(), path.to_string())) {
            return Some(resp.clone());
        }

        // Prefix match for paths like /api/v1/namespaces/foo/pods/bar
        for ((m, p), resp) in responses.iter() {
            if m == method && path.starts_with(p) {
                return Some(resp.clone());
            }
        }

        None
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

fn json_response(status: u16, body: Vec<u8>) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let method = req.method().to_string();
        let path = req.uri().path().to_string();

        self.requests.lock().unwrap().push(RecordedRequest {
            method: method.clone(),
            path: path.clone(),
            query: req.uri().query().map(str::to_string),
        });

        let response = self.find_response(&method, &path);
        let body = req.into_body();

        Box::pin(async move {
            match response {
                Some(Canned::Fixed(status, body)) => Ok(json_response(status, body.into_bytes())),
                Some(Canned::Echo(status)) => {
                    let submitted = body.collect().await.map_err(tower::BoxError::from)?;
                    Ok(json_response(status, submitted.to_bytes().to_vec()))
                }
                None => {
                    // Default 404 for unmatched requests
                    let body = r#"{"kind":"Status","apiVersion":"v1","status":"Failure","message":"not found","reason":"NotFound","code":404}"#;
                    Ok(json_response(404, body.as_bytes().to_vec()))
                }
            }
        })
    }
}

/// Create a mock Pod JSON object carrying the primary instance labels
pub fn primary_pod_json(name: &str, namespace: &str, cluster: &str) -> serde_json::Value {
    serde_json::json!({
        "apiVersion": "v1",
        "kind": "Pod",
        "metadata": {
            "name": name,
            "namespace": namespace,
            "labels": {
                "postgres-operator.crunchydata.com/cluster": cluster,
                "postgres-operator.crunchydata.com/data": "postgres",
                "postgres-operator.crunchydata.com/role": "master"
            }
        }
    })
}

/// Create a mock PodList JSON response
pub fn pod_list_json(pods: Vec<serde_json::Value>) -> String {
    serde_json::json!({
        "apiVersion": "v1",
        "kind": "PodList",
        "metadata": { "resourceVersion": "1" },
        "items": pods
    })
    .to_string()
}

/// Create an API error Status response
pub fn status_json(code: u16, reason: &str, message: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": message,
        "reason": reason,
        "code": code
    })
    .to_string()
}
