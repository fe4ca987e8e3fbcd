//! Light/dark theme as an injected, observable capability
//!
//! Renderers receive a [`ThemeSource`] handle and read [`ThemeSource::current`]
//! instead of probing the environment themselves. Observers registered with
//! [`ThemeSource::subscribe`] stay registered exactly as long as the returned
//! [`Subscription`] is alive.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Auto,
    Light,
    Dark,
}

impl FromStr for ThemePreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(ThemePreference::Auto),
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            other => Err(format!("Unknown theme: {other}")),
        }
    }
}

/// Resolve a preference to a concrete theme
///
/// `colorfgbg` is the terminal's `COLORFGBG` value (`"fg;bg"`). Background
/// colours 7 and 15 are light; anything else, or no hint at all, is dark.
pub fn detect(preference: ThemePreference, colorfgbg: Option<&str>) -> Theme {
    match preference {
        ThemePreference::Light => Theme::Light,
        ThemePreference::Dark => Theme::Dark,
        ThemePreference::Auto => {
            let background = colorfgbg
                .and_then(|value| value.rsplit(';').next())
                .and_then(|bg| bg.trim().parse::<u8>().ok());
            match background {
                Some(7) | Some(15) => Theme::Light,
                _ => Theme::Dark,
            }
        }
    }
}

type Observer = Arc<dyn Fn(Theme) + Send + Sync>;

#[derive(Default)]
struct Inner {
    theme: Theme,
    next_id: u64,
    observers: BTreeMap<u64, Observer>,
}

/// Process-wide theme holder; clones share state
#[derive(Clone, Default)]
pub struct ThemeSource {
    inner: Arc<Mutex<Inner>>,
}

impl std::fmt::Debug for ThemeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.lock();
        f.debug_struct("ThemeSource")
            .field("theme", &inner.theme)
            .field("observers", &inner.observers.len())
            .finish()
    }
}

impl ThemeSource {
    pub fn new(theme: Theme) -> Self {
        let source = Self::default();
        source.lock().theme = theme;
        source
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Observers cannot leave Inner half-updated, so a poisoned lock is still usable
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn current(&self) -> Theme {
        self.lock().theme
    }

    /// Change the theme, notifying observers only when it actually changes
    ///
    /// Observers run after the lock is released, so they may read or change
    /// the source themselves.
    pub fn set(&self, theme: Theme) {
        let observers: Vec<Observer> = {
            let mut inner = self.lock();
            if inner.theme == theme {
                return;
            }
            inner.theme = theme;
            inner.observers.values().cloned().collect()
        };
        for observer in observers {
            observer(theme);
        }
    }

    pub fn subscribe(&self, observer: impl Fn(Theme) + Send + Sync + 'static) -> Subscription {
        let mut inner = self.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.observers.insert(id, Arc::new(observer));
        Subscription {
            source: self.clone(),
            id,
        }
    }

    pub fn observer_count(&self) -> usize {
        self.lock().observers.len()
    }
}

/// Registration handle; dropping it unsubscribes the observer
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    source: ThemeSource,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.source.lock().observers.remove(&self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_detect_explicit_preference_wins() {
        assert_eq!(detect(ThemePreference::Light, Some("15;0")), Theme::Light);
        assert_eq!(detect(ThemePreference::Dark, Some("0;15")), Theme::Dark);
    }

    #[test]
    fn test_detect_auto_from_colorfgbg() {
        assert_eq!(detect(ThemePreference::Auto, Some("0;15")), Theme::Light);
        assert_eq!(detect(ThemePreference::Auto, Some("0;default;7")), Theme::Light);
        assert_eq!(detect(ThemePreference::Auto, Some("15;0")), Theme::Dark);
        assert_eq!(detect(ThemePreference::Auto, None), Theme::Dark);
        assert_eq!(detect(ThemePreference::Auto, Some("garbage")), Theme::Dark);
    }

    #[test]
    fn test_observers_notified_on_change_only() {
        let source = ThemeSource::new(Theme::Dark);
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let _subscription = source.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        source.set(Theme::Dark);
        source.set(Theme::Light);
        source.set(Theme::Light);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(source.current(), Theme::Light);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let source = ThemeSource::new(Theme::Dark);
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let subscription = source.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(source.observer_count(), 1);

        drop(subscription);
        assert_eq!(source.observer_count(), 0);

        source.set(Theme::Light);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_observer_may_read_and_unsubscribe_during_notify() {
        let source = ThemeSource::new(Theme::Dark);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let slot: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));

        let (reader, log, own) = (source.clone(), Arc::clone(&seen), Arc::clone(&slot));
        let subscription = source.subscribe(move |_| {
            log.lock().unwrap().push(reader.current());
            own.lock().unwrap().take();
        });
        *slot.lock().unwrap() = Some(subscription);

        source.set(Theme::Light);
        assert_eq!(*seen.lock().unwrap(), vec![Theme::Light]);
        assert_eq!(source.observer_count(), 0);
    }

    #[test]
    fn test_clones_share_state() {
        let source = ThemeSource::new(Theme::Dark);
        let handle = source.clone();
        handle.set(Theme::Light);
        assert_eq!(source.current(), Theme::Light);
    }

    #[test]
    fn test_preference_from_str() {
        assert_eq!("AUTO".parse::<ThemePreference>().unwrap(), ThemePreference::Auto);
        assert!("blue".parse::<ThemePreference>().is_err());
    }
}
