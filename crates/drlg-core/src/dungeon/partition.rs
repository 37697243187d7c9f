//! Room partitioner
//!
//! Grows a branching tree of small rectangular rooms outward from a seed
//! chamber, recording every room in the occupancy mask.

use drlg_rng::DiabloRng;
use log::trace;

use crate::consts::ROOM_SIZE_TRIES;
use crate::geometry::{Displacement, Point, Rectangle, Size};
use crate::grid::{CellFlags, Grid};

use super::GenerationAttempt;

/// A room still waiting to sprout children
#[derive(Debug, Clone, Copy)]
struct PendingRoom {
    area: Rectangle,
    vertical: bool,
}

/// Check that a rectangle is on the map and entirely unoccupied
pub fn check_room(occupancy: &Grid<bool>, room: Rectangle) -> bool {
    room.points().all(|p| occupancy.get(p) == Some(false))
}

/// Mark every cell of a room as occupied
pub fn map_room(occupancy: &mut Grid<bool>, room: Rectangle) {
    for p in room.points() {
        occupancy.set(p, true);
    }
}

/// Replace the occupancy mask with a fresh layout.
///
/// Picks a random seed chamber and grows rooms from it. The chamber itself
/// is only flagged CHAMBER, never written to the occupancy mask, so rooms
/// may later be placed over it.
pub fn first_room(attempt: &mut GenerationAttempt, rng: &mut DiabloRng) {
    attempt.reset_partition();

    let x = rng.gen_rnd(28) + 1;
    let y = rng.gen_rnd(28) + 1;
    let width = rng.gen_rnd(7) + 3;
    let height = rng.gen_rnd(7) + 3;
    let chamber = Rectangle::new(Point::new(x, y), Size::new(width, height));

    for p in chamber.points() {
        attempt.flags.insert(p, CellFlags::CHAMBER);
    }

    let vertical = rng.flip_coin(2);
    generate_rooms(&mut attempt.occupancy, rng, chamber, vertical);
}

/// Grow rooms from `area` until no branch has space left.
///
/// Each step tries to attach one room before the area and mirrors it after
/// the area on the same axis, then continues from both new rooms with the
/// axis flipped. The pending list is a LIFO stack so rooms are expanded in
/// depth-first order (first room's whole subtree, then the second's), which
/// keeps the random stream identical to a recursive walk. Every placed room
/// covers at least four cells, so the stack never holds more than a quarter
/// of the map.
pub fn generate_rooms(occupancy: &mut Grid<bool>, rng: &mut DiabloRng, area: Rectangle, vertical: bool) {
    let mut pending = vec![PendingRoom { area, vertical }];

    while let Some(PendingRoom { area, vertical }) = pending.pop() {
        let rotate = rng.flip_coin(4);
        let vertical = vertical != rotate;

        let mut room1 = Rectangle::default();
        let mut place_room1 = false;

        for _ in 0..ROOM_SIZE_TRIES {
            let width = (rng.gen_rnd(5) + 2) & !1;
            let height = (rng.gen_rnd(5) + 2) & !1;
            room1.size = Size::new(width, height);
            room1.position = area.position;
            if vertical {
                room1.position = room1.position
                    + Displacement::new(-width, area.size.height / 2 - height / 2);
                place_room1 = check_room(
                    occupancy,
                    Rectangle::new(room1.position - Displacement::new(1, 1), Size::new(width + 1, height + 2)),
                );
            } else {
                room1.position = room1.position
                    + Displacement::new(area.size.width / 2 - width / 2, -height);
                place_room1 = check_room(
                    occupancy,
                    Rectangle::new(room1.position - Displacement::new(1, 1), Size::new(width + 2, height + 1)),
                );
            }
            if place_room1 {
                break;
            }
        }

        if place_room1 {
            map_room(occupancy, room1);
        }

        let mut room2 = room1;
        let place_room2 = if vertical {
            room2.position.x = area.position.x + area.size.width;
            check_room(
                occupancy,
                Rectangle::new(
                    room2.position - Displacement::new(0, 1),
                    Size::new(room2.size.width + 1, room2.size.height + 2),
                ),
            )
        } else {
            room2.position.y = area.position.y + area.size.height;
            check_room(
                occupancy,
                Rectangle::new(
                    room2.position - Displacement::new(1, 0),
                    Size::new(room2.size.width + 2, room2.size.height + 1),
                ),
            )
        };

        if place_room2 {
            map_room(occupancy, room2);
        }

        trace!(
            "partition {:?} vertical={} room1={} room2={}",
            area, vertical, place_room1, place_room2
        );

        // Pushed in reverse so room1's subtree is expanded first.
        if place_room2 {
            pending.push(PendingRoom { area: room2, vertical: !vertical });
        }
        if place_room1 {
            pending.push(PendingRoom { area: room1, vertical: !vertical });
        }
    }
}
