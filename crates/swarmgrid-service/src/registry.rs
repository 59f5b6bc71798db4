//! Named status handlers.
//!
//! A handler binds a register field to a name once, at registration.
//! Callers then address it by name with a coordinate-only
//! [`HandlerRequest`]. Registration order is preserved for listing.

use indexmap::IndexMap;
use swarmgrid_core::StatusField;
use tracing::{debug, warn};

use crate::accessor::StatusAccessor;
use crate::error::ServiceError;
use crate::request::{
    FieldRequest, FlagRequest, HandlerRequest, HandlerResponse, WriteRequest,
};

/// What a named handler does when invoked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Binding {
    /// Answers [`HandlerRequest::Get`] with [`HandlerResponse::Flag`].
    FlagGetter {
        /// Register index.
        stride: u8,
        /// Bits to test.
        mask: u8,
    },
    /// Answers [`HandlerRequest::Get`] with [`HandlerResponse::Field`].
    FieldGetter(StatusField),
    /// Answers [`HandlerRequest::Set`] with [`HandlerResponse::Ack`].
    Setter(StatusField),
}

impl Binding {
    /// Request kind this binding accepts.
    pub fn accepts(&self) -> &'static str {
        match self {
            Self::FlagGetter { .. } | Self::FieldGetter(_) => "get",
            Self::Setter(_) => "set",
        }
    }
}

/// Name-to-binding table with dispatch.
#[derive(Clone, Debug, Default)]
pub struct HandlerRegistry {
    handlers: IndexMap<String, Binding>,
}

impl HandlerRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a binding under `name`.
    ///
    /// Returns [`ServiceError::DuplicateHandler`] if the name is taken.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        binding: Binding,
    ) -> Result<(), ServiceError> {
        let name = name.into();
        if self.handlers.contains_key(&name) {
            return Err(ServiceError::DuplicateHandler { name });
        }
        debug!(handler = %name, ?binding, "registered status handler");
        self.handlers.insert(name, binding);
        Ok(())
    }

    /// Register a flag getter.
    pub fn register_flag_getter(
        &mut self,
        name: impl Into<String>,
        stride: u8,
        mask: u8,
    ) -> Result<(), ServiceError> {
        self.register(name, Binding::FlagGetter { stride, mask })
    }

    /// Register a field getter.
    pub fn register_field_getter(
        &mut self,
        name: impl Into<String>,
        stride: u8,
        offset: u8,
        mask: u8,
    ) -> Result<(), ServiceError> {
        self.register(
            name,
            Binding::FieldGetter(StatusField::new(stride, offset, mask)),
        )
    }

    /// Register a setter.
    pub fn register_setter(
        &mut self,
        name: impl Into<String>,
        stride: u8,
        offset: u8,
        mask: u8,
    ) -> Result<(), ServiceError> {
        self.register(name, Binding::Setter(StatusField::new(stride, offset, mask)))
    }

    /// Look up a binding.
    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.handlers.get(name)
    }

    /// Handler names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Run the handler `name` against `accessor`.
    pub fn dispatch(
        &self,
        accessor: &mut StatusAccessor,
        name: &str,
        request: HandlerRequest,
    ) -> Result<HandlerResponse, ServiceError> {
        let binding = self
            .handlers
            .get(name)
            .ok_or_else(|| ServiceError::UnknownHandler {
                name: name.to_string(),
            })?;

        let response = match (*binding, request) {
            (Binding::FlagGetter { stride, mask }, HandlerRequest::Get { x, y }) => {
                let resp = accessor.read_flag(&FlagRequest { x, y, stride, mask })?;
                HandlerResponse::Flag(resp.data)
            }
            (Binding::FieldGetter(field), HandlerRequest::Get { x, y }) => {
                let resp = accessor.read_field(&FieldRequest {
                    x,
                    y,
                    stride: field.stride,
                    offset: field.offset,
                    mask: field.mask,
                })?;
                HandlerResponse::Field(resp.data)
            }
            (Binding::Setter(field), HandlerRequest::Set { x, y, data }) => {
                let resp = accessor.write(&WriteRequest {
                    x,
                    y,
                    stride: field.stride,
                    offset: field.offset,
                    mask: field.mask,
                    data,
                })?;
                HandlerResponse::Ack(resp.success)
            }
            (binding, request) => {
                warn!(
                    handler = name,
                    accepts = binding.accepts(),
                    received = request.kind(),
                    "request kind does not match handler"
                );
                return Err(ServiceError::HandlerMismatch {
                    name: name.to_string(),
                    accepts: binding.accepts(),
                    received: request.kind(),
                });
            }
        };
        Ok(response)
    }
}
