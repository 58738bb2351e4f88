mod seed;
mod snapshot;

pub use seed::{seed, seed_as_of};
pub use snapshot::Snapshot;
