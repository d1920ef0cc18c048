use crate::ship::ShipType;

/// Width and height of each player's board.
pub const BOARD_SIZE: usize = 8;
pub const NUM_SHIPS: usize = 5;

/// Fleet in placement order.
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Convert a ship name string to the canonical static name used in the
/// configuration. Matching ignores ASCII case. Returns `None` if the name does
/// not match any defined ship.
pub fn ship_name_static(name: &str) -> Option<&'static str> {
    SHIPS
        .iter()
        .find(|def| def.name().eq_ignore_ascii_case(name))
        .map(|def| def.name())
}
