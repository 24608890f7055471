use crate::ship::ShipType;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Destroyer", 2),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Battleship", 4),
    ShipType::new("Carrier", 5),
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 2 + 3 + 3 + 4 + 5;

/// Lengths of the standard fleet, in placement order.
pub fn fleet_lengths() -> [usize; NUM_SHIPS] {
    core::array::from_fn(|i| SHIPS[i].length())
}
