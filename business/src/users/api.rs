//! Access layer for the users REST API.
//!
//! Four operations, each forwarding directly to its endpoint and returning a
//! [`Subscription`] that resolves to the server's answer or a single failure
//! value. No retries, no recovery, no local validation: transport failures
//! and non-success statuses both come back as [`UsersApiError`] and it is the
//! caller's problem what to do with them.
//!
//! The completion callback runs off the UI thread; it publishes the typed
//! result and requests a repaint so the owning view notices it on the next
//! frame. Once the subscription is cancelled the callback publishes nothing.

use std::any::TypeId;

use serde::de::DeserializeOwned;

use roster_states::Subscription;

use super::model::UserRecord;
use crate::BusinessConfig;

/// Failure of one access-layer call. Transport errors and server-reported
/// errors are not distinguished at this layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct UsersApiError {
    pub message: String,
}

impl UsersApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A typed API result.
pub type ApiResult<T> = Result<T, UsersApiError>;

// Owner markers for the task ids of the four calls.
struct ListCall;
struct CreateCall;
struct UpdateCall;
struct DeleteCall;

fn http_status_error(status: u16) -> UsersApiError {
    UsersApiError::new(format!("API returned status: {status}"))
}

fn json_request(method: &str, url: String, body: Vec<u8>) -> ehttp::Request {
    ehttp::Request {
        method: method.to_owned(),
        url,
        body,
        headers: ehttp::Headers::new(&[("Content-Type", "application/json")]),
    }
}

fn decode<T: DeserializeOwned>(response: &ehttp::Response) -> ApiResult<T> {
    if !(200..300).contains(&response.status) {
        return Err(http_status_error(response.status));
    }
    serde_json::from_slice(&response.bytes)
        .map_err(|err| UsersApiError::new(format!("failed to decode response: {err}")))
}

/// Issue `request` and decode a JSON body of type `T`.
fn fetch_json<T, Owner>(
    request: ehttp::Request,
    egui_ctx: &egui::Context,
) -> Subscription<ApiResult<T>>
where
    T: DeserializeOwned + Send + 'static,
    Owner: 'static,
{
    let (publisher, subscription) = Subscription::channel(TypeId::of::<Owner>());
    let ctx = egui_ctx.clone();

    ehttp::fetch(request, move |result| {
        let outcome = result
            .map_err(UsersApiError::new)
            .and_then(|response| decode::<T>(&response));
        if let Err(err) = &outcome {
            log::debug!("users API call failed: {err}");
        }
        if publisher.publish(outcome) {
            ctx.request_repaint();
        }
    });

    subscription
}

/// A subscription that already failed, for errors detected before any
/// request leaves the process.
fn failed<T, Owner: 'static>(error: UsersApiError) -> Subscription<ApiResult<T>> {
    let (publisher, subscription) = Subscription::channel(TypeId::of::<Owner>());
    let _ = publisher.publish(Err(error));
    subscription
}

/// GET `/api/v1/users`: every record currently stored server-side.
pub fn list_all(
    config: &BusinessConfig,
    egui_ctx: &egui::Context,
) -> Subscription<ApiResult<Vec<UserRecord>>> {
    let request = json_request("GET", config.users_url(), Vec::new());
    fetch_json::<Vec<UserRecord>, ListCall>(request, egui_ctx)
}

/// POST `/api/v1/users`: persist a record without an identifier; resolves
/// to the created record including its newly assigned identifier.
pub fn create(
    config: &BusinessConfig,
    record: &UserRecord,
    egui_ctx: &egui::Context,
) -> Subscription<ApiResult<UserRecord>> {
    match serde_json::to_vec(record) {
        Ok(body) => fetch_json::<UserRecord, CreateCall>(
            json_request("POST", config.users_url(), body),
            egui_ctx,
        ),
        Err(err) => failed::<UserRecord, CreateCall>(UsersApiError::new(format!(
            "failed to encode request: {err}"
        ))),
    }
}

/// PUT `/api/v1/users/{id}`: persist an updated record; resolves to the
/// record after the update.
pub fn update(
    config: &BusinessConfig,
    record: &UserRecord,
    egui_ctx: &egui::Context,
) -> Subscription<ApiResult<UserRecord>> {
    let Some(id) = record.user_id else {
        return failed::<UserRecord, UpdateCall>(UsersApiError::new(
            "update requires a record with an identifier",
        ));
    };

    match serde_json::to_vec(record) {
        Ok(body) => fetch_json::<UserRecord, UpdateCall>(
            json_request("PUT", config.user_url(id), body),
            egui_ctx,
        ),
        Err(err) => failed::<UserRecord, UpdateCall>(UsersApiError::new(format!(
            "failed to encode request: {err}"
        ))),
    }
}

/// DELETE `/api/v1/users/{id}`: resolves to a unit confirmation on any
/// success status (the server answers 204 with no body).
pub fn delete_by_id(
    config: &BusinessConfig,
    id: i64,
    egui_ctx: &egui::Context,
) -> Subscription<ApiResult<()>> {
    let (publisher, subscription) = Subscription::channel(TypeId::of::<DeleteCall>());
    let ctx = egui_ctx.clone();
    let request = json_request("DELETE", config.user_url(id), Vec::new());

    ehttp::fetch(request, move |result| {
        let outcome = result.map_err(UsersApiError::new).and_then(|response| {
            if (200..300).contains(&response.status) {
                Ok(())
            } else {
                Err(http_status_error(response.status))
            }
        });
        if let Err(err) = &outcome {
            log::debug!("users API call failed: {err}");
        }
        if publisher.publish(outcome) {
            ctx.request_repaint();
        }
    });

    subscription
}
