use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use itertools::iproduct;

use crate::error::WarehouseError;

pub const RACKS: u8 = 10;
pub const SECTIONS: u8 = 7;
pub const SHELVES: u8 = 4;
pub const CELL_CAPACITY: u32 = 10;

/// Address of one storage cell, written `A-1-1-1`.
///
/// Parsing only checks the shape; whether the components fall inside the
/// warehouse geometry is a separate check so the two failures surface as
/// distinct errors.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CellAddress {
    pub zone: char,
    pub rack: u8,
    pub section: u8,
    pub shelf: u8,
}

impl CellAddress {
    /// Only zone A exists; racks, sections and shelves are numbered from 1.
    pub fn in_bounds(&self) -> bool {
        self.zone == 'A'
            && (1..=RACKS).contains(&self.rack)
            && (1..=SECTIONS).contains(&self.section)
            && (1..=SHELVES).contains(&self.shelf)
    }

    /// Every valid address in scan order.
    pub fn all() -> impl Iterator<Item = CellAddress> {
        iproduct!(1..=RACKS, 1..=SECTIONS, 1..=SHELVES).map(|(rack, section, shelf)| {
            CellAddress {
                zone: 'A',
                rack,
                section,
                shelf,
            }
        })
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}",
            self.zone, self.rack, self.section, self.shelf
        )
    }
}

impl FromStr for CellAddress {
    type Err = WarehouseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || WarehouseError::MalformedAddress {
            address: s.to_string(),
        };

        let parts: Vec<&str> = s.split('-').collect();
        let [zone, rack, section, shelf] = parts.as_slice() else {
            return Err(malformed());
        };

        let mut zone_chars = zone.chars();
        let zone = match (zone_chars.next(), zone_chars.next()) {
            (Some(letter), None) if letter.is_ascii_uppercase() => letter,
            _ => return Err(malformed()),
        };

        Ok(CellAddress {
            zone,
            rack: rack.parse().map_err(|_| malformed())?,
            section: section.parse().map_err(|_| malformed())?,
            shelf: shelf.parse().map_err(|_| malformed())?,
        })
    }
}

/// Contents of an occupied cell. A cell holds a single product kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub product: String,
    pub quantity: u32,
}

#[derive(Debug, Default)]
pub struct Warehouse {
    cells: BTreeMap<CellAddress, Slot>,
}

impl Warehouse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts `quantity` units of `product` into the cell, creating it or
    /// topping it up. Fails without touching state when the cell is out of
    /// bounds, holds another product, or would exceed [`CELL_CAPACITY`].
    pub fn store(
        &mut self,
        product: &str,
        quantity: u32,
        address: CellAddress,
    ) -> Result<(), WarehouseError> {
        if !address.in_bounds() {
            return Err(WarehouseError::NoSuchCell { address });
        }
        if quantity == 0 {
            return Err(WarehouseError::ZeroQuantity);
        }

        match self.cells.get_mut(&address) {
            Some(slot) if slot.product != product => Err(WarehouseError::OccupiedByOther {
                product: slot.product.clone(),
                address,
            }),
            Some(slot) => {
                // slot.quantity never exceeds CELL_CAPACITY
                if quantity > CELL_CAPACITY - slot.quantity {
                    return Err(WarehouseError::CapacityExceeded {
                        capacity: CELL_CAPACITY,
                        stored: slot.quantity,
                    });
                }
                slot.quantity += quantity;
                Ok(())
            }
            None => {
                if quantity > CELL_CAPACITY {
                    return Err(WarehouseError::CapacityExceeded {
                        capacity: CELL_CAPACITY,
                        stored: 0,
                    });
                }
                tracing::debug!(%address, product, quantity, "new cell occupied");
                self.cells.insert(
                    address,
                    Slot {
                        product: product.to_string(),
                        quantity,
                    },
                );
                Ok(())
            }
        }
    }

    /// Takes `quantity` units of `product` out of the cell; the cell record
    /// disappears once it reaches zero.
    pub fn take(
        &mut self,
        product: &str,
        quantity: u32,
        address: CellAddress,
    ) -> Result<(), WarehouseError> {
        if !address.in_bounds() {
            return Err(WarehouseError::NoSuchCell { address });
        }
        if quantity == 0 {
            return Err(WarehouseError::ZeroQuantity);
        }

        let Some(slot) = self.cells.get_mut(&address) else {
            return Err(WarehouseError::EmptyCell { address });
        };
        if slot.product != product {
            return Err(WarehouseError::OccupiedByOther {
                product: slot.product.clone(),
                address,
            });
        }
        if slot.quantity < quantity {
            return Err(WarehouseError::InsufficientStock {
                available: slot.quantity,
                requested: quantity,
            });
        }

        slot.quantity -= quantity;
        if slot.quantity == 0 {
            self.cells.remove(&address);
        }
        Ok(())
    }

    pub fn slot(&self, address: &CellAddress) -> Option<&Slot> {
        self.cells.get(address)
    }

    /// Full scan of the warehouse in address order.
    pub fn report(&self) -> WarehouseReport {
        let mut report = WarehouseReport {
            total_cells: u32::from(RACKS) * u32::from(SECTIONS) * u32::from(SHELVES),
            total_units: 0,
            occupied: Vec::new(),
            empty: Vec::new(),
        };

        for address in CellAddress::all() {
            match self.cells.get(&address) {
                Some(slot) => {
                    report.total_units += slot.quantity;
                    report.occupied.push((address, slot.clone()));
                }
                None => report.empty.push(address),
            }
        }

        report
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarehouseReport {
    pub total_cells: u32,
    pub total_units: u32,
    pub occupied: Vec<(CellAddress, Slot)>,
    pub empty: Vec<CellAddress>,
}

impl WarehouseReport {
    pub fn used_cells(&self) -> u32 {
        self.occupied.len() as u32
    }

    pub fn fill_percent(&self) -> f64 {
        f64::from(self.used_cells()) * 100.0 / f64::from(self.total_cells)
    }
}
