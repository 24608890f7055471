//! The ships placed on one grid and the remaining-ship count derived from them.

use alloc::vec::Vec;

use crate::bitboard::CoordSet;
use crate::config::{fleet_lengths, NUM_SHIPS, SHIPS};
use crate::coord::Coord;
use crate::ship::{Ship, ShipType};

/// Ordered collection of ships, in placement order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fleet {
    ships: Vec<Ship>,
    footprint: CoordSet,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Union of every ship's cells.
    pub fn footprint(&self) -> CoordSet {
        self.footprint
    }

    pub(crate) fn push(&mut self, ship: Ship) {
        self.footprint |= ship.mask();
        self.ships.push(ship);
    }

    /// Ship covering `at`, if any.
    pub fn ship_at(&self, at: Coord) -> Option<&Ship> {
        self.ships.iter().find(|s| s.contains(at))
    }

    /// Type for the next ship of `length`: the first standard ship of that
    /// length not yet in the fleet, or an unnamed type for other lengths.
    pub fn next_type(&self, length: usize) -> ShipType {
        SHIPS
            .iter()
            .filter(|def| def.length() == length)
            .find(|def| !self.ships.iter().any(|s| s.ship_type() == **def))
            .copied()
            .unwrap_or(ShipType::new("Ship", length))
    }

    /// Lengths still missing from the standard fleet, in configuration order.
    pub fn missing_lengths(&self) -> Vec<usize> {
        let mut placed: Vec<usize> = self.ships.iter().map(Ship::length).collect();
        let mut missing = Vec::new();
        for len in fleet_lengths() {
            match placed.iter().position(|&l| l == len) {
                Some(i) => {
                    placed.swap_remove(i);
                }
                None => missing.push(len),
            }
        }
        missing
    }

    /// Whether the fleet is exactly the standard five ships.
    pub fn is_standard(&self) -> bool {
        self.ships.len() == NUM_SHIPS && self.missing_lengths().is_empty()
    }

    /// Number of ships with at least one segment not in `hits`.
    pub fn remaining(&self, hits: &CoordSet) -> usize {
        self.ships
            .iter()
            .filter(|s| !s.mask().is_subset(hits))
            .count()
    }

    /// Whether the ship covering `at` has every segment in `hits`.
    pub fn is_sunk_at(&self, at: Coord, hits: &CoordSet) -> bool {
        self.ship_at(at)
            .map(|s| s.mask().is_subset(hits))
            .unwrap_or(false)
    }
}
