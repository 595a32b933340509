//! Typed indices for racers and checkpoints.
//!
//! Both wrap a small integer that doubles as a `Vec` index: racers are
//! stored in id order, checkpoints in track order.

use std::fmt;

macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// A race participant, numbered in registration order.  Lower ids win
    /// same-tick finishes.
    pub struct VehicleId(u32);
}

typed_id! {
    /// Position in a track's checkpoint list (not the centerline index it
    /// points at).  Checkpoint 0 is the start/finish line.
    pub struct CheckpointId(u16);
}
