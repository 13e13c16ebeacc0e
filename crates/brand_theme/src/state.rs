//! Global theme state singleton
//!
//! The pure derivation in [`crate::theme`] stays independently testable;
//! `ThemeState` is a thin cache over it plus the single external mutation
//! point: pushing derived variables into a live rendering context through
//! [`StyleSink`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, OnceLock, RwLock};

use crate::settings::{BrandingDefaults, ThemeSettings};
use crate::theme::{derive_theme, ThemeVars};

/// Global theme state instance
static THEME_STATE: OnceLock<ThemeState> = OnceLock::new();

/// Global restyle callback - set by the app layer to trigger style updates
static RESTYLE_CALLBACK: Mutex<Option<fn()>> = Mutex::new(None);

/// Set the restyle callback function
///
/// This should be called by the app layer to register a function that
/// re-applies styles when branding settings change.
pub fn set_restyle_callback(callback: fn()) {
    *RESTYLE_CALLBACK.lock().unwrap() = Some(callback);
}

/// Trigger a restyle via the registered callback
fn trigger_restyle() {
    if let Some(callback) = *RESTYLE_CALLBACK.lock().unwrap() {
        callback();
    }
}

/// Destination for derived theme variables.
///
/// Implemented by the rendering layer (a document root style adapter, a
/// server-side CSS emitter, a test recorder). The only side-effecting seam
/// in the theme pipeline.
pub trait StyleSink {
    fn set_property(&mut self, name: &str, value: &str);
}

/// Global theme state - holds the current settings and their derived
/// variables.
pub struct ThemeState {
    /// Immutable defaults fixed at init.
    defaults: BrandingDefaults,

    /// Current persisted branding settings.
    settings: RwLock<ThemeSettings>,

    /// Variables derived from the current settings.
    vars: RwLock<ThemeVars>,

    /// Flag indicating derived variables changed since the last apply.
    needs_restyle: AtomicBool,
}

impl ThemeState {
    /// Initialize the global theme state (call once at app startup).
    pub fn init(defaults: BrandingDefaults) {
        let settings = ThemeSettings::default();
        let vars = derive_theme(&settings, &defaults);

        let state = ThemeState {
            defaults,
            settings: RwLock::new(settings),
            vars: RwLock::new(vars),
            needs_restyle: AtomicBool::new(true),
        };

        let _ = THEME_STATE.set(state);
    }

    /// Initialize with the built-in default colors.
    pub fn init_default() {
        Self::init(BrandingDefaults::default());
    }

    /// Get the global theme state instance
    pub fn get() -> &'static ThemeState {
        THEME_STATE
            .get()
            .expect("ThemeState not initialized. Call ThemeState::init() at app startup.")
    }

    /// Try to get the global theme state (returns None if not initialized)
    pub fn try_get() -> Option<&'static ThemeState> {
        THEME_STATE.get()
    }

    /// The defaults this state was initialized with.
    pub fn defaults(&self) -> &BrandingDefaults {
        &self.defaults
    }

    /// Get the current branding settings
    pub fn settings(&self) -> ThemeSettings {
        self.settings.read().unwrap().clone()
    }

    /// Replace the branding settings and recompute derived variables.
    ///
    /// Fires the registered restyle callback when the derived output
    /// actually changes.
    pub fn set_settings(&self, settings: ThemeSettings) {
        let new_vars = derive_theme(&settings, &self.defaults);
        *self.settings.write().unwrap() = settings;

        let mut vars = self.vars.write().unwrap();
        if *vars != new_vars {
            tracing::debug!("ThemeState::set_settings - theme variables changed, restyling");
            *vars = new_vars;
            drop(vars);

            self.needs_restyle.store(true, Ordering::SeqCst);
            trigger_restyle();
        }
    }

    /// Get all derived theme variables
    pub fn vars(&self) -> ThemeVars {
        self.vars.read().unwrap().clone()
    }

    /// Look up a single derived variable by name.
    pub fn var(&self, name: &str) -> Option<String> {
        self.vars.read().unwrap().get(name).map(str::to_owned)
    }

    /// Push every derived variable into the given sink and clear the
    /// restyle flag.
    pub fn apply_to(&self, sink: &mut dyn StyleSink) {
        let vars = self.vars.read().unwrap();
        for (name, value) in vars.iter() {
            sink.set_property(name, value);
        }
        self.needs_restyle.store(false, Ordering::SeqCst);
    }

    /// Check if settings changed since the last apply
    pub fn needs_restyle(&self) -> bool {
        self.needs_restyle.load(Ordering::SeqCst)
    }
}
