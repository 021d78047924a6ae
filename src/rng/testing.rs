use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::rng::SyncRng;

pub fn seeded_rng() -> SyncRng<StdRng> {
    SyncRng::new(StdRng::seed_from_u64(0x5eed))
}
