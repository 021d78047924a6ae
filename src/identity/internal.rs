use std::sync::Arc;

use rand::rngs::StdRng;

use crate::backend::Backend;
use crate::data::User;
use crate::identity::IdentityError;
use crate::lib_constants::{GUEST_NAME, IDENTITY_KEY};
use crate::rng::{SyncRng, make_guest_id};


pub struct IdentityProvider {
    backend: Arc<dyn Backend>,
    rng: SyncRng<StdRng>,
}

impl IdentityProvider {
    pub fn new(
        backend: Arc<dyn Backend>,
        rng: SyncRng<StdRng>,
    ) -> IdentityProvider {
        IdentityProvider { backend, rng }
    }

    // a failed or unparseable read is a cold start, not an error; only
    // failing to persist a fresh identity is surfaced
    pub async fn current_user(&self) -> Result<User, IdentityError> {
        match self.backend.read(IDENTITY_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => return Ok(user),
                Err(e) => log::warn!(
                    "stored identity is unparseable, starting over: {e}"
                ),
            },
            Ok(None) => (),
            Err(e) => log::error!(
                "failed to read stored identity, treating as first \
                 launch: {e}"
            ),
        }
        self.new_guest().await
    }

    // discards the current identity outright; notes saved under it stay
    // behind under the old partition key
    pub async fn logout(&self) -> Result<User, IdentityError> {
        self.new_guest().await
    }

    async fn new_guest(&self) -> Result<User, IdentityError> {
        let user = User {
            id: make_guest_id(&mut *self.rng.get_rng()),
            name: GUEST_NAME.to_owned(),
        };
        let raw = serde_json::to_string(&user)?;
        self.backend.write(IDENTITY_KEY, &raw).await?;
        Ok(user)
    }
}
