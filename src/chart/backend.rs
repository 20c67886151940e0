use crate::error::VizResult;

use super::spec::ChartSpec;

/// Contract implemented by any chart rendering host.
///
/// `create` materializes a live chart on the named mount and returns an opaque
/// handle; `destroy` releases it. The caller (not the backend) enforces the
/// one-live-handle-per-slot discipline.
pub trait ChartBackend {
    type Handle;

    fn create(&mut self, mount_id: &str, spec: ChartSpec) -> VizResult<Self::Handle>;

    fn destroy(&mut self, handle: Self::Handle);
}

/// No-op backend used by tests and headless usage.
///
/// It validates every spec it receives and records lifecycle activity so tests
/// can count create/destroy pairs and inspect the last materialized spec.
#[derive(Debug, Default)]
pub struct NullBackend {
    next_handle: u64,
    live: Vec<u64>,
    pub created: usize,
    pub destroyed: usize,
    pub last_mount: Option<String>,
    pub last_spec: Option<ChartSpec>,
}

impl NullBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}

impl ChartBackend for NullBackend {
    type Handle = u64;

    fn create(&mut self, mount_id: &str, spec: ChartSpec) -> VizResult<u64> {
        spec.validate()?;
        self.next_handle += 1;
        self.created += 1;
        self.live.push(self.next_handle);
        self.last_mount = Some(mount_id.to_owned());
        self.last_spec = Some(spec);
        Ok(self.next_handle)
    }

    fn destroy(&mut self, handle: u64) {
        self.destroyed += 1;
        self.live.retain(|live| *live != handle);
    }
}
