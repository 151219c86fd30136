#![forbid(unsafe_code)]

/// Lifecycle of one detail fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// State for one asynchronous detail view (dependencies or access).
///
/// A loader tracks a single target id at a time. Opening a new target while
/// a fetch is in flight supersedes it: the previous fetch is not cancelled,
/// but its eventual result fails the target comparison in [`resolve`] /
/// [`fail`] and is discarded. Out-of-order completions therefore never
/// overwrite newer state.
///
/// [`resolve`]: DetailLoader::resolve
/// [`fail`]: DetailLoader::fail
#[derive(Debug)]
pub struct DetailLoader<T> {
    phase: LoadPhase,
    open: bool,
    target: Option<String>,
    data: Option<T>,
}

impl<T> Default for DetailLoader<T> {
    fn default() -> Self {
        Self {
            phase: LoadPhase::Idle,
            open: false,
            target: None,
            data: None,
        }
    }
}

impl<T> DetailLoader<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin loading `target`: previous data is dropped, the modal flag goes
    /// up, and any in-flight fetch for an earlier target is implicitly
    /// invalidated.
    pub fn open(&mut self, target: impl Into<String>) {
        self.target = Some(target.into());
        self.data = None;
        self.phase = LoadPhase::Loading;
        self.open = true;
    }

    /// Whether a completion for `target` is still welcome.
    fn is_current(&self, target: &str) -> bool {
        self.phase == LoadPhase::Loading && self.target.as_deref() == Some(target)
    }

    /// Apply a successful fetch. Returns false (and changes nothing) when the
    /// result is stale, i.e. the loader has moved on to another target or was
    /// closed in the meantime.
    pub fn resolve(&mut self, target: &str, data: Option<T>) -> bool {
        if !self.is_current(target) {
            return false;
        }
        self.data = data;
        self.phase = LoadPhase::Loaded;
        true
    }

    /// Apply a failed fetch: data stays empty and the view renders the
    /// generic empty state. Stale failures are discarded like stale results.
    pub fn fail(&mut self, target: &str) -> bool {
        if !self.is_current(target) {
            return false;
        }
        self.data = None;
        self.phase = LoadPhase::Failed;
        true
    }

    /// Dismiss the view: back to idle, nothing retained.
    pub fn close(&mut self) {
        *self = Self::default();
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }
}
