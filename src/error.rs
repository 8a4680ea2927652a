use thiserror::Error;

use crate::warehouse::CellAddress;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WarehouseError {
    #[error("malformed cell address {address:?}, expected the form A-1-1-1")]
    MalformedAddress { address: String },

    #[error("no such cell {address}")]
    NoSuchCell { address: CellAddress },

    #[error("quantity must be positive")]
    ZeroQuantity,

    #[error("cell {address} already holds a different product: {product}")]
    OccupiedByOther { address: CellAddress, product: String },

    #[error("cell capacity exceeded (max {capacity}), currently stored: {stored}")]
    CapacityExceeded { capacity: u32, stored: u32 },

    #[error("cell {address} is empty")]
    EmptyCell { address: CellAddress },

    #[error("not enough stock in cell: available {available}, requested {requested}")]
    InsufficientStock { available: u32, requested: u32 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("no enrolled student with number {0}")]
    UnknownStudent(u32),
}
