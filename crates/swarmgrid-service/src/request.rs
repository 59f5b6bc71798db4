//! Request and response types.
//!
//! The full forms ([`FlagRequest`], [`FieldRequest`], [`WriteRequest`])
//! carry the register descriptor with every call. Named handlers bind the
//! descriptor once at registration and accept the coordinate-only
//! [`HandlerRequest`].

use swarmgrid_core::{GridCoord, StatusField};

/// Read a status flag: `(register[stride] & mask) != 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlagRequest {
    /// Origin-relative column.
    pub x: i8,
    /// Origin-relative row.
    pub y: i8,
    /// Register index.
    pub stride: u8,
    /// Bits to test.
    pub mask: u8,
}

/// Answer to a [`FlagRequest`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlagResponse {
    /// Whether any masked bit is set.
    pub data: bool,
}

/// Read a bit field: `(register[stride] & mask) >> offset`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldRequest {
    /// Origin-relative column.
    pub x: i8,
    /// Origin-relative row.
    pub y: i8,
    /// Register index.
    pub stride: u8,
    /// Bit position of the field.
    pub offset: u8,
    /// Bits belonging to the field.
    pub mask: u8,
}

/// Answer to a [`FieldRequest`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldResponse {
    /// The extracted field value.
    pub data: u8,
}

/// Write a bit field (single-bit toggle semantics).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WriteRequest {
    /// Origin-relative column.
    pub x: i8,
    /// Origin-relative row.
    pub y: i8,
    /// Register index.
    pub stride: u8,
    /// Bit position of the field.
    pub offset: u8,
    /// Bits belonging to the field.
    pub mask: u8,
    /// Requested field value.
    pub data: u8,
}

/// Acknowledgement of a [`WriteRequest`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WriteResponse {
    /// Whether the write was applied.
    pub success: bool,
}

impl FlagRequest {
    /// The addressed coordinate.
    pub fn coord(&self) -> GridCoord {
        GridCoord::new(self.x, self.y)
    }
}

impl FieldRequest {
    /// The addressed coordinate.
    pub fn coord(&self) -> GridCoord {
        GridCoord::new(self.x, self.y)
    }

    /// The addressed register field.
    pub fn field(&self) -> StatusField {
        StatusField::new(self.stride, self.offset, self.mask)
    }
}

impl WriteRequest {
    /// The addressed coordinate.
    pub fn coord(&self) -> GridCoord {
        GridCoord::new(self.x, self.y)
    }

    /// The addressed register field.
    pub fn field(&self) -> StatusField {
        StatusField::new(self.stride, self.offset, self.mask)
    }
}

/// A coordinate-only request for a named handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandlerRequest {
    /// Read through a getter handler.
    Get {
        /// Origin-relative column.
        x: i8,
        /// Origin-relative row.
        y: i8,
    },
    /// Write through a setter handler.
    Set {
        /// Origin-relative column.
        x: i8,
        /// Origin-relative row.
        y: i8,
        /// Requested field value.
        data: u8,
    },
}

impl HandlerRequest {
    /// The addressed coordinate.
    pub fn coord(&self) -> GridCoord {
        match *self {
            Self::Get { x, y } | Self::Set { x, y, .. } => GridCoord::new(x, y),
        }
    }

    /// Short name of the request kind, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Get { .. } => "get",
            Self::Set { .. } => "set",
        }
    }
}

/// The answer from a named handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandlerResponse {
    /// From a flag getter.
    Flag(bool),
    /// From a field getter.
    Field(u8),
    /// From a setter.
    Ack(bool),
}

impl HandlerResponse {
    /// The response as an integer, the way a wire format would carry it.
    pub fn data(&self) -> u8 {
        match *self {
            Self::Flag(b) | Self::Ack(b) => b as u8,
            Self::Field(v) => v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_request_field() {
        let req = WriteRequest {
            x: 1,
            y: -1,
            stride: 2,
            offset: 3,
            mask: 0x08,
            data: 1,
        };
        assert_eq!(req.coord(), GridCoord::new(1, -1));
        assert_eq!(req.field(), StatusField::new(2, 3, 0x08));
    }

    #[test]
    fn handler_request_coord_and_kind() {
        let get = HandlerRequest::Get { x: -4, y: 5 };
        let set = HandlerRequest::Set { x: 0, y: 1, data: 1 };
        assert_eq!(get.coord(), GridCoord::new(-4, 5));
        assert_eq!(set.coord(), GridCoord::new(0, 1));
        assert_eq!(get.kind(), "get");
        assert_eq!(set.kind(), "set");
    }

    #[test]
    fn response_data_as_integer() {
        assert_eq!(HandlerResponse::Flag(true).data(), 1);
        assert_eq!(HandlerResponse::Ack(false).data(), 0);
        assert_eq!(HandlerResponse::Field(6).data(), 6);
    }
}
