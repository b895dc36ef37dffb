//! Page-level theme-mode state.
//!
//! One process-wide holder tracks the current [`ThemeMode`] and mirrors it
//! into the root element's class list: the `dark` class is present exactly
//! when the mode is dark, which is the single flag the token stylesheet
//! keys off. All mutation happens synchronously inside UI callbacks, so
//! the lock is uncontended in practice.

use std::sync::{LazyLock, PoisonError, RwLock};

pub use quartz_theme::{DARK_CLASS, ThemeMode};

use crate::ClassList;

/// Callback observing every mode change, e.g. to store the preference.
pub type PersistenceFn = Box<dyn Fn(ThemeMode) + Send + Sync>;

struct ThemeStore {
    mode: ThemeMode,
    root_classes: ClassList,
    persistence: Option<PersistenceFn>,
}

impl ThemeStore {
    fn new() -> Self {
        Self {
            mode: ThemeMode::Light,
            root_classes: ClassList::new(),
            persistence: None,
        }
    }

    /// Sets the mode and synchronously updates the root-element flag.
    fn apply(&mut self, mode: ThemeMode) {
        self.mode = mode;

        if mode.is_dark() {
            self.root_classes.push(DARK_CLASS);
        } else {
            self.root_classes.remove(DARK_CLASS);
        }

        if let Some(persist) = &self.persistence {
            persist(mode);
        }
    }
}

static STORE: LazyLock<RwLock<ThemeStore>> = LazyLock::new(|| RwLock::new(ThemeStore::new()));

fn read() -> std::sync::RwLockReadGuard<'static, ThemeStore> {
    STORE.read().unwrap_or_else(PoisonError::into_inner)
}

fn write() -> std::sync::RwLockWriteGuard<'static, ThemeStore> {
    STORE.write().unwrap_or_else(PoisonError::into_inner)
}

/// Initializes the theme holder.
///
/// `initial` lets a detection collaborator (stored preference, system
/// setting) choose the starting mode; `None` starts light. When a
/// persistence callback is supplied it observes the initial mode and every
/// change after it. Whether a preference survives reloads is entirely up
/// to the caller's configuration; nothing is persisted by default.
pub fn init_theme(initial: Option<ThemeMode>, persistence: Option<PersistenceFn>) {
    let mut store = write();
    store.persistence = persistence;
    store.apply(initial.unwrap_or_default());
}

/// The current theme mode.
pub fn theme_mode() -> ThemeMode {
    read().mode
}

/// Whether the dark flag is currently present on the root element.
pub fn dark_flag() -> bool {
    read().root_classes.contains(DARK_CLASS)
}

/// The root element's class attribute value.
pub fn root_class_attr() -> String {
    read().root_classes.to_string()
}

/// Sets the mode directly (idempotent).
pub fn set_theme_mode(mode: ThemeMode) {
    write().apply(mode);
}

/// Flips between light and dark, returning the new mode.
pub fn toggle_theme() -> ThemeMode {
    let mut store = write();
    let next = store.mode.toggled();
    store.apply(next);
    next
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;

    // The holder is process-wide state, so tests touching it serialize.
    static LOCK: Mutex<()> = Mutex::new(());

    fn serial() -> std::sync::MutexGuard<'static, ()> {
        LOCK.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[test]
    fn test_initial_state_is_light() {
        let _guard = serial();
        init_theme(None, None);

        assert_eq!(theme_mode(), ThemeMode::Light);
        assert!(!dark_flag(), "Light mode must not set the dark flag");
        assert_eq!(root_class_attr(), "");
    }

    #[test]
    fn test_toggle_sets_and_clears_dark_flag() {
        let _guard = serial();
        init_theme(None, None);

        assert_eq!(toggle_theme(), ThemeMode::Dark);
        assert!(dark_flag(), "First toggle from light must raise the dark flag");
        assert_eq!(root_class_attr(), DARK_CLASS);

        assert_eq!(toggle_theme(), ThemeMode::Light);
        assert!(!dark_flag(), "Second toggle must clear the dark flag");
    }

    #[test]
    fn test_double_toggle_round_trips() {
        let _guard = serial();
        init_theme(Some(ThemeMode::Dark), None);
        let before = (theme_mode(), dark_flag());

        toggle_theme();
        toggle_theme();

        assert_eq!((theme_mode(), dark_flag()), before, "Two toggles must restore the state");
    }

    #[test]
    fn test_init_with_external_preference() {
        let _guard = serial();
        init_theme(Some(ThemeMode::Dark), None);

        assert_eq!(theme_mode(), ThemeMode::Dark);
        assert!(dark_flag());
    }

    #[test]
    fn test_set_theme_mode_is_idempotent() {
        let _guard = serial();
        init_theme(None, None);

        set_theme_mode(ThemeMode::Dark);
        set_theme_mode(ThemeMode::Dark);

        assert_eq!(theme_mode(), ThemeMode::Dark);
        assert_eq!(root_class_attr(), DARK_CLASS, "Repeated sets must not duplicate the flag");
    }

    #[test]
    fn test_persistence_callback_observes_changes() {
        let _guard = serial();
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        CALLS.store(0, Ordering::SeqCst);

        init_theme(
            None,
            Some(Box::new(|_mode| {
                CALLS.fetch_add(1, Ordering::SeqCst);
            })),
        );
        assert_eq!(CALLS.load(Ordering::SeqCst), 1, "Init applies the initial mode");

        toggle_theme();
        set_theme_mode(ThemeMode::Light);
        assert_eq!(CALLS.load(Ordering::SeqCst), 3);

        // Later tests must not inherit this callback.
        init_theme(None, None);
    }
}
