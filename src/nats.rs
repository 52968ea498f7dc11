// Copyright (c) 2025 - Cowboy AI, Inc.
//! NATS request/reply transport for the subnet service
//!
//! Requests arrive as JSON on `{root}.subnet.{operation}` and are answered on
//! the message's reply subject with a JSON [`SubnetResponse`]. Every request
//! with a reply subject gets an answer; undecodable payloads and unknown
//! operations are answered with [`SubnetResponse::InvalidRequest`].

use async_nats::{Client, ConnectOptions, Subscriber};
use futures::StreamExt;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::config::NatsConfig;
use crate::domain::Subnet;
use crate::errors::{ErrorKind, InfrastructureError, InfrastructureResult, SubnetResult};
use crate::service::SubnetService;
use crate::subjects::{parse_operation, SubjectBuilder, SubnetOperation};

/// NATS client wrapper
#[derive(Clone)]
pub struct NatsClient {
    client: Client,
}

impl NatsClient {
    /// Connect with the given configuration
    pub async fn new(config: &NatsConfig) -> InfrastructureResult<Self> {
        let connect_options = ConnectOptions::new()
            .name(&config.name)
            .connection_timeout(config.connect_timeout)
            .request_timeout(Some(config.request_timeout));

        let client = async_nats::connect_with_options(config.servers.join(","), connect_options)
            .await
            .map_err(|e| InfrastructureError::NatsConnection(e.to_string()))?;

        info!("Connected to NATS at {:?}", config.servers);

        Ok(Self { client })
    }

    /// Publish a JSON message to a subject
    pub async fn publish<T>(&self, subject: &str, message: &T) -> InfrastructureResult<()>
    where
        T: Serialize,
    {
        let payload = serde_json::to_vec(message)?;

        self.client
            .publish(subject.to_string(), payload.into())
            .await
            .map_err(|e| InfrastructureError::NatsPublish(e.to_string()))?;

        debug!("Published message to subject: {}", subject);
        Ok(())
    }

    /// Subscribe to a subject
    pub async fn subscribe(&self, subject: &str) -> InfrastructureResult<Subscriber> {
        let subscriber = self
            .client
            .subscribe(subject.to_string())
            .await
            .map_err(|e| InfrastructureError::NatsSubscribe(e.to_string()))?;

        info!("Subscribed to subject: {}", subject);
        Ok(subscriber)
    }

    /// Send a request and decode the JSON reply
    pub async fn request<T, R>(&self, subject: &str, request: &T) -> InfrastructureResult<R>
    where
        T: Serialize,
        R: DeserializeOwned,
    {
        let payload = serde_json::to_vec(request)?;

        let response = self
            .client
            .request(subject.to_string(), payload.into())
            .await
            .map_err(|e| InfrastructureError::NatsPublish(e.to_string()))?;

        serde_json::from_slice(&response.payload)
            .map_err(|e| InfrastructureError::Deserialization(e.to_string()))
    }
}

/// Reply sent back for every subnet request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum SubnetResponse {
    /// Create, get and update succeeded
    Subnet { subnet: Subnet },
    /// Delete succeeded
    Empty,
    /// The service rejected the request
    Error { kind: ErrorKind, message: String },
    /// The request could not be routed or decoded
    InvalidRequest { message: String },
}

impl From<SubnetResult<Subnet>> for SubnetResponse {
    fn from(result: SubnetResult<Subnet>) -> Self {
        match result {
            Ok(subnet) => SubnetResponse::Subnet { subnet },
            Err(err) => SubnetResponse::Error {
                kind: err.kind(),
                message: err.to_string(),
            },
        }
    }
}

impl From<SubnetResult<()>> for SubnetResponse {
    fn from(result: SubnetResult<()>) -> Self {
        match result {
            Ok(()) => SubnetResponse::Empty,
            Err(err) => SubnetResponse::Error {
                kind: err.kind(),
                message: err.to_string(),
            },
        }
    }
}

/// Routes raw NATS requests to a [`SubnetService`]
pub struct SubnetRequestHandler {
    service: Arc<dyn SubnetService>,
    root: String,
}

impl SubnetRequestHandler {
    pub fn new(service: Arc<dyn SubnetService>, root: impl Into<String>) -> Self {
        Self {
            service,
            root: root.into(),
        }
    }

    /// Subject this handler subscribes to
    pub fn subscription(&self) -> String {
        SubjectBuilder::new(self.root.as_str()).build_wildcard()
    }

    /// Answer a request received on `subject`
    pub async fn handle_subject(&self, subject: &str, payload: &[u8]) -> SubnetResponse {
        match parse_operation(&self.root, subject) {
            Ok(operation) => self.handle(operation, payload).await,
            Err(message) => {
                warn!("Unroutable subnet request: {}", message);
                SubnetResponse::InvalidRequest { message }
            }
        }
    }

    /// Answer a request for a known operation
    pub async fn handle(&self, operation: SubnetOperation, payload: &[u8]) -> SubnetResponse {
        match self.dispatch(operation, payload).await {
            Ok(response) => response,
            Err(err) => {
                warn!(%operation, "Undecodable subnet request: {}", err);
                SubnetResponse::InvalidRequest {
                    message: err.to_string(),
                }
            }
        }
    }

    async fn dispatch(
        &self,
        operation: SubnetOperation,
        payload: &[u8],
    ) -> InfrastructureResult<SubnetResponse> {
        let response: SubnetResponse = match operation {
            SubnetOperation::Create => self.service.create_subnet(decode(payload)?).await.into(),
            SubnetOperation::Get => self.service.get_subnet(decode(payload)?).await.into(),
            SubnetOperation::Update => self.service.update_subnet(decode(payload)?).await.into(),
            SubnetOperation::Delete => self.service.delete_subnet(decode(payload)?).await.into(),
        };
        Ok(response)
    }
}

fn decode<T: DeserializeOwned>(payload: &[u8]) -> InfrastructureResult<T> {
    serde_json::from_slice(payload)
        .map_err(|e| InfrastructureError::Deserialization(e.to_string()))
}

/// Serve subnet requests until the subscription ends
///
/// Each request is handled on its own task; ordering between requests for
/// one name is decided by the service's per-name guards.
pub async fn serve(
    client: NatsClient,
    handler: Arc<SubnetRequestHandler>,
) -> InfrastructureResult<()> {
    let mut subscriber = client.subscribe(&handler.subscription()).await?;

    while let Some(message) = subscriber.next().await {
        let subject = message.subject.to_string();
        let Some(reply) = message.reply.as_ref().map(|r| r.to_string()) else {
            warn!("Dropping subnet request on {} without reply subject", subject);
            continue;
        };

        let handler = Arc::clone(&handler);
        let client = client.clone();
        tokio::spawn(async move {
            let response = handler.handle_subject(&subject, &message.payload).await;
            if let Err(e) = client.publish(&reply, &response).await {
                error!("Failed to reply to subnet request on {}: {}", subject, e);
            }
        });
    }

    info!("Subnet subscription closed");
    Ok(())
}
