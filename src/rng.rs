#[cfg(test)] pub mod testing;

mod sync_rng;

use rand::Rng;
use time::OffsetDateTime;
use uuid::{Uuid, Variant, Version};

use crate::lib_constants::{GUEST_ID_PREFIX, GUEST_ID_SUFFIX_LEN};
use crate::user_id::UserId;

pub use sync_rng::SyncRng;

const GUEST_ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub fn make_uuid<R: Rng>(rng: &mut R) -> Uuid {
    uuid::Builder::from_random_bytes(rng.random())
        .with_variant(Variant::RFC4122)
        .with_version(Version::Random)
        .into_uuid()
}

pub fn make_guest_id<R: Rng>(rng: &mut R) -> UserId {
    let suffix: String = (0..GUEST_ID_SUFFIX_LEN)
        .map(|_| {
            GUEST_ID_ALPHABET[rng.random_range(0..GUEST_ID_ALPHABET.len())]
                as char
        })
        .collect();
    UserId::from_valid(format!("{GUEST_ID_PREFIX}{suffix}"))
}

// not globally unique, but good enough for a single device: the odds of
// two notes created in the same millisecond drawing the same suffix are
// negligible
pub fn make_note_id<R: Rng>(rng: &mut R) -> String {
    let millis =
        OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    format!("{}-{}", millis, rng.random::<u32>())
}
