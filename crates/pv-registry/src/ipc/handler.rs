//! IPC Handler for the registry.
//!
//! ## Call categories
//!
//! - `call_read_only`: `get-admin`, `is-property-verified`, `get-property`,
//!   `get-verification-request`. No sender.
//! - `call_public`: `set-admin`, `submit-property`, `verify-property`.
//!   Sender required.
//!
//! A name outside the category (or unknown altogether) answers `err(404)`.
//! The service sits behind a mutex, so calls are applied one at a time and
//! each sees the state left by the previous one.

use super::errors::IpcError;
use super::methods::{ArgumentLimits, Args, Method};
use super::payloads::{CallRequest, CallResponse, CallResult};
use crate::adapters::{BlockHeightClock, InMemoryEventLog, InMemoryStateStore};
use crate::config::{ConfigError, RegistryConfig};
use crate::domain::{codes, Principal, RegistryError};
use crate::ports::inbound::RegistryApi;
use crate::ports::outbound::{EventSink, LogicalClock, StateStore};
use crate::service::{InMemoryRegistry, RegistryService};
use parking_lot::Mutex;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Entry point for hosts that speak the JSON calling convention.
pub struct RegistryHandler<S: StateStore, C: LogicalClock, E: EventSink> {
    service: Mutex<RegistryService<S, C, E>>,
    limits: ArgumentLimits,
}

/// Handler over the in-memory adapters.
pub type InMemoryHandler =
    RegistryHandler<InMemoryStateStore, Arc<BlockHeightClock>, Arc<InMemoryEventLog>>;

impl InMemoryHandler {
    /// Deploy an in-memory registry and wrap it.
    pub fn in_memory(config: &RegistryConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(InMemoryRegistry::in_memory(config)?, config))
    }
}

impl<S: StateStore, C: LogicalClock, E: EventSink> RegistryHandler<S, C, E> {
    pub fn new(service: RegistryService<S, C, E>, config: &RegistryConfig) -> Self {
        Self {
            service: Mutex::new(service),
            limits: ArgumentLimits {
                max_address_len: config.max_address_len,
                max_documents_hash_len: config.max_documents_hash_len,
            },
        }
    }

    /// Run `f` against the service while holding the call lock.
    pub fn with_service<R>(&self, f: impl FnOnce(&RegistryService<S, C, E>) -> R) -> R {
        let service = self.service.lock();
        f(&*service)
    }

    /// Handle a read-only call.
    pub fn call_read_only(&self, request: CallRequest) -> Result<CallResponse, IpcError> {
        let result = match resolve(&request.method) {
            Ok(method) => self.dispatch_read_only(method, &request.args)?,
            Err(code) => CallResult::Err(code),
        };
        Ok(CallResponse {
            correlation_id: request.correlation_id,
            result,
        })
    }

    /// Handle a state-mutating call.
    pub fn call_public(&self, request: CallRequest) -> Result<CallResponse, IpcError> {
        let result = match resolve(&request.method) {
            Ok(method) => self.dispatch_public(method, &request.args, request.sender.as_ref())?,
            Err(code) => CallResult::Err(code),
        };
        Ok(CallResponse {
            correlation_id: request.correlation_id,
            result,
        })
    }

    fn args<'a>(&self, method: Method, values: &'a [Value]) -> Result<Args<'a>, IpcError> {
        Args::new(method, values, self.limits)
    }

    /// Sender and decoded arguments of a mutating call.
    fn public_args<'a, 'p>(
        &self,
        method: Method,
        values: &'a [Value],
        sender: Option<&'p Principal>,
    ) -> Result<(&'p Principal, Args<'a>), IpcError> {
        let sender = sender.ok_or(IpcError::MissingSender {
            method: method.as_str(),
        })?;
        debug!(%method, %sender, "Dispatching public call");
        Ok((sender, self.args(method, values)?))
    }

    fn dispatch_read_only(&self, method: Method, values: &[Value]) -> Result<CallResult, IpcError> {
        let result = match method {
            Method::GetAdmin => {
                self.args(method, values)?;
                CallResult::Ok(encode(&self.service.lock().get_admin())?)
            }
            Method::IsPropertyVerified => {
                let property_id = self.args(method, values)?.property_id(0)?;
                let verified = self.service.lock().is_property_verified(property_id);
                CallResult::Ok(Value::Bool(verified))
            }
            Method::GetProperty => {
                let property_id = self.args(method, values)?.property_id(0)?;
                optional(self.service.lock().get_property(property_id))?
            }
            Method::GetVerificationRequest => {
                let property_id = self.args(method, values)?.property_id(0)?;
                optional(self.service.lock().get_verification_request(property_id))?
            }
            Method::SetAdmin | Method::SubmitProperty | Method::VerifyProperty => {
                return Ok(wrong_entry_point(method, true));
            }
        };
        debug!(%method, "Read-only call served");
        Ok(result)
    }

    fn dispatch_public(
        &self,
        method: Method,
        values: &[Value],
        sender: Option<&Principal>,
    ) -> Result<CallResult, IpcError> {
        // Decode everything before taking the lock; a bad argument must not
        // reach the workflow.
        let outcome = match method {
            Method::SetAdmin => {
                let (sender, args) = self.public_args(method, values, sender)?;
                let new_admin = args.principal(0)?;
                self.service.lock().set_admin(sender, new_admin)
            }
            Method::SubmitProperty => {
                let (sender, args) = self.public_args(method, values, sender)?;
                let property_id = args.property_id(0)?;
                let address = args.address(1)?;
                let documents_hash = args.documents_hash(2)?;
                self.service
                    .lock()
                    .submit_property(sender, property_id, address, documents_hash)
            }
            Method::VerifyProperty => {
                let (sender, args) = self.public_args(method, values, sender)?;
                let property_id = args.property_id(0)?;
                let value = args.value(1)?;
                let approve = args.boolean(2)?;
                self.service
                    .lock()
                    .verify_property(sender, property_id, value, approve)
            }
            Method::GetAdmin
            | Method::IsPropertyVerified
            | Method::GetProperty
            | Method::GetVerificationRequest => return Ok(wrong_entry_point(method, false)),
        };
        Ok(to_call_result(outcome))
    }
}

/// Map a method name to a `Method`, or to the `404` code.
fn resolve(name: &str) -> Result<Method, u32> {
    name.parse::<Method>().map_err(|err| {
        warn!(error = %err, "Unknown registry method");
        err.code().unwrap_or(codes::METHOD_NOT_FOUND)
    })
}

fn wrong_entry_point(method: Method, read_only: bool) -> CallResult {
    warn!(%method, read_only, "Method called through the wrong entry point");
    CallResult::Err(codes::METHOD_NOT_FOUND)
}

fn encode<T: Serialize>(value: &T) -> Result<Value, IpcError> {
    Ok(serde_json::to_value(value)?)
}

fn optional<T: Serialize>(record: Option<T>) -> Result<CallResult, IpcError> {
    match record {
        Some(record) => Ok(CallResult::Some(encode(&record)?)),
        None => Ok(CallResult::None),
    }
}

fn to_call_result(outcome: Result<bool, RegistryError>) -> CallResult {
    match outcome {
        Ok(flag) => CallResult::Ok(Value::Bool(flag)),
        Err(err) => CallResult::Err(err.code()),
    }
}
