//! Thread-local pool of fixed-size read scratch buffers.

use std::cell::RefCell;

/// Size of the scratch buffer handed to each `Read::read` call.
pub(crate) const READ_BUF_SIZE: usize = 8 * 1024;

/// Maximum number of buffers to keep per thread.
const MAX_POOL_SIZE: usize = 4;

/// A reusable read scratch buffer of exactly [`READ_BUF_SIZE`] bytes.
pub(crate) struct Buffer {
    data: Vec<u8>,
}

impl Buffer {
    /// Takes a buffer from the thread-local pool or creates a new one.
    pub fn take() -> Self {
        THREAD_BUFFER_POOL.with(|pool| {
            let mut pool = pool.borrow_mut();
            let data = pool.pop().unwrap_or_else(|| vec![0u8; READ_BUF_SIZE]);
            Self { data }
        })
    }

    /// The writable scratch slice for a read call.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// The readable scratch slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        THREAD_BUFFER_POOL.with(|pool| {
            let mut pool = pool.borrow_mut();
            if pool.len() < MAX_POOL_SIZE {
                pool.push(std::mem::take(&mut self.data));
            }
        });
    }
}

// Thread-local buffer pool
thread_local! {
    static THREAD_BUFFER_POOL: RefCell<Vec<Vec<u8>>> = const { RefCell::new(Vec::new()) };
}
