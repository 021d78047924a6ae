use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::io;

use crate::backend::{Backend, BackendError};

// in-memory stand-in for a selected backend; reads and writes can be
// switched to fail
pub struct MockBackend {
    values: Mutex<BTreeMap<String, String>>,
    writes: Mutex<Vec<(String, String)>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MockBackend {
    pub fn new() -> Self {
        MockBackend {
            values: Mutex::new(BTreeMap::new()),
            writes: Mutex::new(Vec::new()),
            fail_reads: AtomicBool::new(false),
            fail_writes: AtomicBool::new(false),
        }
    }

    pub fn insert(&self, key: &str, value: &str) {
        self.values.lock().unwrap()
            .insert(key.to_owned(), value.to_owned());
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes.lock().unwrap().clone()
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::Relaxed);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::Relaxed);
    }
}

#[async_trait]
impl Backend for MockBackend {
    async fn read(
        &self,
        key: &str,
    ) -> Result<Option<String>, BackendError> {
        if self.fail_reads.load(Ordering::Relaxed) {
            return Err(
                BackendError::Io(io::Error::other("injected read failure"))
            );
        }
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    async fn write(
        &self,
        key: &str,
        value: &str,
    ) -> Result<(), BackendError> {
        self.writes.lock().unwrap()
            .push((key.to_owned(), value.to_owned()));
        if self.fail_writes.load(Ordering::Relaxed) {
            return Err(
                BackendError::Io(io::Error::other("injected write failure"))
            );
        }
        self.values.lock().unwrap()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
