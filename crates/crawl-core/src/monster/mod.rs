//! Monsters
//!
//! Monsters are fixed map tiles. The turn queue only rotates through them to
//! produce ambient messages; no monster ever leaves its tile.

mod queue;

pub use queue::MonsterQueue;
