use std::io;

use tokio::runtime::{Builder, Handle, Runtime};

/// The thread pool calls run on, independent of whatever executor awaits them.
pub(crate) struct ManagedRuntime {
    runtime: Option<Runtime>,
    handle: Handle,
}

impl ManagedRuntime {
    pub(crate) fn new() -> io::Result<Self> {
        let runtime = Builder::new_multi_thread()
            .thread_name("call-await-reqwest")
            .worker_threads(1)
            .enable_all()
            .build()?;
        let handle = runtime.handle().clone();
        Ok(Self {
            runtime: Some(runtime),
            handle,
        })
    }

    pub(crate) fn handle(&self) -> &Handle {
        &self.handle
    }
}

impl Drop for ManagedRuntime {
    fn drop(&mut self) {
        // May run on an async thread or on one of our own workers, so never block here.
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}
