pub const IDENTITY_KEY: &str = "local_user";
pub const GUEST_NAME: &str = "Guest";
pub const GUEST_ID_PREFIX: &str = "guest-";
pub const GUEST_ID_SUFFIX_LEN: usize = 10;

pub const NOTES_KEY_PREFIX: &str = "notes-";
pub const KEY_FILLER: char = '_';

pub const TMP_FILENAME_INFIX: &str = ".tmp.";
