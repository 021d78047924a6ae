use std::sync::{Arc, Mutex, MutexGuard};

use rand::Rng;

pub struct SyncRng<R: Rng + Send> {
    rng: Arc<Mutex<R>>,
}

impl<R: Rng + Send> SyncRng<R> {
    pub fn new(rng: R) -> Self {
        SyncRng {
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    pub fn get_rng(&self) -> MutexGuard<'_, R> {
        self.rng.lock().unwrap()
    }
}

impl<R: Rng + Send> Clone for SyncRng<R> {
    fn clone(&self) -> Self {
        SyncRng {
            rng: self.rng.clone(),
        }
    }
}
