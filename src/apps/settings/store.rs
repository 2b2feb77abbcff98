// Settings store: the live Settings plus a persistence backend.
//
// Values are read and written through closures so the same store can
// sit behind a critical-section mutex and be shared by the logic and
// display tasks.  save() snapshots the values and hands the copy to
// the backend; the backend never sees a half-updated struct.

use core::cell::RefCell;
use core::fmt;

use embassy_sync::blocking_mutex::Mutex as BlockingMutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

use super::model::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// Backend write failed.
    Io(&'static str),
    /// Backend already in use by another save.
    Busy,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(what) => write!(f, "write failed: {}", what),
            Self::Busy => f.write_str("store busy"),
        }
    }
}

pub trait SettingsStore {
    fn read<R>(&self, f: impl FnOnce(&Settings) -> R) -> R;
    fn write<R>(&self, f: impl FnOnce(&mut Settings) -> R) -> R;
    fn save(&self) -> Result<(), StoreError>;

    fn snapshot(&self) -> Settings {
        self.read(|s| *s)
    }
}

/// Where saved settings end up (flash, SD file, test recorder).
pub trait Persist {
    fn persist(&mut self, settings: &Settings) -> Result<(), StoreError>;
}

/// Backend that keeps nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct Volatile;

impl Persist for Volatile {
    fn persist(&mut self, _settings: &Settings) -> Result<(), StoreError> {
        Ok(())
    }
}

pub struct SettingsCell<P: Persist> {
    settings: BlockingMutex<CriticalSectionRawMutex, RefCell<Settings>>,
    backend: BlockingMutex<CriticalSectionRawMutex, RefCell<P>>,
}

impl<P: Persist> SettingsCell<P> {
    /// Store starting from factory defaults.
    pub const fn new(backend: P) -> Self {
        Self {
            settings: BlockingMutex::new(RefCell::new(Settings::defaults())),
            backend: BlockingMutex::new(RefCell::new(backend)),
        }
    }

    /// Store starting from previously loaded values, pulled back into
    /// range first.
    pub fn with_loaded(mut settings: Settings, backend: P) -> Self {
        settings.sanitize();
        Self {
            settings: BlockingMutex::new(RefCell::new(settings)),
            backend: BlockingMutex::new(RefCell::new(backend)),
        }
    }

    /// Read access to the persistence backend (write counters, last
    /// error) for the firmware's diagnostics.
    pub fn backend<R>(&self, f: impl FnOnce(&P) -> R) -> R {
        self.backend.lock(|b| f(&b.borrow()))
    }
}

impl<P: Persist> SettingsStore for SettingsCell<P> {
    fn read<R>(&self, f: impl FnOnce(&Settings) -> R) -> R {
        self.settings.lock(|s| f(&s.borrow()))
    }

    fn write<R>(&self, f: impl FnOnce(&mut Settings) -> R) -> R {
        self.settings.lock(|s| f(&mut s.borrow_mut()))
    }

    fn save(&self) -> Result<(), StoreError> {
        let snapshot = self.snapshot();
        self.backend.lock(|b| {
            let mut backend = b.try_borrow_mut().map_err(|_| StoreError::Busy)?;
            backend.persist(&snapshot)
        })?;
        log::info!("settings: saved");
        Ok(())
    }
}
