//! Explicit-content visibility filter.
//!
//! A single boolean decides whether records flagged as explicit appear in
//! listings. It is a content preference, not a security control: any client
//! may flip it. The value travels as an explicit [`Visibility`] argument into
//! every listing call rather than being read ad hoc from global state, and
//! [`VisibilityToggle`] is the durable, observable container behind the
//! settings surface.

use std::fs;
use std::io;
use std::path::PathBuf;

use tokio::sync::watch;

/// File name the toggle is persisted under, inside the configured data
/// directory. The stored payload is the string `"true"` or `"false"`.
pub const STORAGE_KEY: &str = "explicitMode";

/// Whether explicit-flagged records are included in listings.
///
/// `HideExplicit` excludes records whose explicit flag is true;
/// `IncludeExplicit` includes every record regardless of flag. There is no
/// partial or graduated filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    HideExplicit,
    IncludeExplicit,
}

impl Visibility {
    /// Build from the wire-level `include_explicit` flag.
    pub fn from_flag(include_explicit: bool) -> Self {
        if include_explicit {
            Visibility::IncludeExplicit
        } else {
            Visibility::HideExplicit
        }
    }

    /// True when explicit-flagged records should be returned.
    pub fn includes_explicit(self) -> bool {
        matches!(self, Visibility::IncludeExplicit)
    }

    /// Parse a persisted value. Anything other than the exact string
    /// `"true"` (absent, empty, garbage) means hide -- the safe default.
    pub fn parse_stored(raw: Option<&str>) -> Self {
        match raw {
            Some(s) if s.trim() == "true" => Visibility::IncludeExplicit,
            _ => Visibility::HideExplicit,
        }
    }
}

/// Implemented by records carrying an explicit-content flag.
pub trait ExplicitFlagged {
    fn is_explicit(&self) -> bool;
}

/// Apply the visibility filter after retrieval.
///
/// Used on paths where the exclusion is not part of the store query
/// (film-scoped frame listings, which order by display position).
pub fn retain_visible<T: ExplicitFlagged>(items: Vec<T>, visibility: Visibility) -> Vec<T> {
    if visibility.includes_explicit() {
        return items;
    }
    items.into_iter().filter(|item| !item.is_explicit()).collect()
}

/// Durable, observable holder for the visibility flag.
///
/// The current value is persisted under [`STORAGE_KEY`] in the configured
/// data directory and broadcast through a [`watch`] channel, so every
/// subscriber observes a change as soon as [`set`](Self::set) commits it --
/// no polling, no process-global event names.
#[derive(Debug)]
pub struct VisibilityToggle {
    path: PathBuf,
    tx: watch::Sender<Visibility>,
}

impl VisibilityToggle {
    /// Load the toggle from `data_dir`, defaulting to hide when the file is
    /// missing or unreadable.
    pub fn load(data_dir: impl Into<PathBuf>) -> Self {
        let path = data_dir.into().join(STORAGE_KEY);
        let stored = fs::read_to_string(&path).ok();
        let initial = Visibility::parse_stored(stored.as_deref());
        let (tx, _) = watch::channel(initial);
        Self { path, tx }
    }

    /// Current value.
    pub fn read(&self) -> Visibility {
        *self.tx.borrow()
    }

    /// Persist a new value, then notify every subscriber.
    ///
    /// The write happens before the broadcast so a subscriber that re-reads
    /// storage observes the committed value.
    pub fn set(&self, value: Visibility) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let payload = if value.includes_explicit() { "true" } else { "false" };
        fs::write(&self.path, payload)?;
        tracing::debug!(explicit_mode = payload, "Visibility toggle persisted");
        // send_replace never fails; subscribers may come and go freely.
        self.tx.send_replace(value);
        Ok(())
    }

    /// Subscribe to changes. The receiver immediately holds the current
    /// value and is marked changed on every subsequent [`set`](Self::set).
    pub fn subscribe(&self) -> watch::Receiver<Visibility> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Flagged(bool);

    impl ExplicitFlagged for Flagged {
        fn is_explicit(&self) -> bool {
            self.0
        }
    }

    #[test]
    fn hide_excludes_flagged_items_only() {
        let items = vec![Flagged(false), Flagged(true), Flagged(false)];
        let visible = retain_visible(items, Visibility::HideExplicit);
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|f| !f.is_explicit()));
    }

    #[test]
    fn include_keeps_everything() {
        let items = vec![Flagged(false), Flagged(true)];
        let visible = retain_visible(items, Visibility::IncludeExplicit);
        assert_eq!(visible.len(), 2);
    }

    #[test]
    fn parse_stored_defaults_to_hide() {
        assert_eq!(Visibility::parse_stored(None), Visibility::HideExplicit);
        assert_eq!(Visibility::parse_stored(Some("")), Visibility::HideExplicit);
        assert_eq!(
            Visibility::parse_stored(Some("garbage")),
            Visibility::HideExplicit
        );
        assert_eq!(
            Visibility::parse_stored(Some("true")),
            Visibility::IncludeExplicit
        );
        assert_eq!(
            Visibility::parse_stored(Some("true\n")),
            Visibility::IncludeExplicit
        );
    }

    #[test]
    fn toggle_defaults_to_hide_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let toggle = VisibilityToggle::load(dir.path());
        assert_eq!(toggle.read(), Visibility::HideExplicit);
    }

    #[test]
    fn set_persists_across_reload() {
        let dir = tempfile::tempdir().unwrap();

        let toggle = VisibilityToggle::load(dir.path());
        toggle.set(Visibility::IncludeExplicit).unwrap();
        assert_eq!(toggle.read(), Visibility::IncludeExplicit);

        let reloaded = VisibilityToggle::load(dir.path());
        assert_eq!(reloaded.read(), Visibility::IncludeExplicit);
    }

    #[test]
    fn unparsable_stored_value_falls_back_to_hide() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(STORAGE_KEY), "not-a-bool").unwrap();

        let toggle = VisibilityToggle::load(dir.path());
        assert_eq!(toggle.read(), Visibility::HideExplicit);
    }

    #[tokio::test]
    async fn subscribers_observe_changes() {
        let dir = tempfile::tempdir().unwrap();
        let toggle = VisibilityToggle::load(dir.path());

        let mut rx = toggle.subscribe();
        assert_eq!(*rx.borrow(), Visibility::HideExplicit);

        toggle.set(Visibility::IncludeExplicit).unwrap();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), Visibility::IncludeExplicit);
    }
}
