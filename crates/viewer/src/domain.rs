use std::fmt;
use std::str::FromStr;

use crate::error::ViewerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    BubbleChart,
    ScatterPlot,
    Heatmap,
}

impl ViewKind {
    pub const ALL: [Self; 3] = [Self::BubbleChart, Self::ScatterPlot, Self::Heatmap];

    /// Identifier used in the catalog and in configuration.
    pub const fn id(self) -> &'static str {
        match self {
            Self::BubbleChart => "bubbleChart",
            Self::ScatterPlot => "scatterPlot",
            Self::Heatmap => "heatmap",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::BubbleChart => "Bubble Chart",
            Self::ScatterPlot => "Scatter Plot",
            Self::Heatmap => "Heatmap",
        }
    }
}

impl FromStr for ViewKind {
    type Err = ViewerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                tracing::error!(identifier = wanted, "unknown view kind");
                ViewerError::UnknownViewKind(wanted.to_string())
            })
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fixed, ordered list of views. The order is the navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewCatalog {
    views: [ViewKind; 3],
}

impl ViewCatalog {
    pub const fn new() -> Self {
        Self {
            views: ViewKind::ALL,
        }
    }

    pub const fn len(&self) -> usize {
        self.views.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<ViewKind> {
        self.views.get(index).copied()
    }

    pub fn position(&self, kind: ViewKind) -> Option<usize> {
        self.views.iter().position(|view| *view == kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = ViewKind> + '_ {
        self.views.iter().copied()
    }
}

impl Default for ViewCatalog {
    fn default() -> Self {
        Self::new()
    }
}

pub const fn wrap_decrement(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    if index == 0 {
        len - 1
    } else {
        index - 1
    }
}

pub const fn wrap_increment(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    (index + 1) % len
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tracing::span::{Attributes, Id, Record};
    use tracing::{Event, Level, Metadata};

    /// Counts error-level events emitted while it is the default subscriber.
    struct ErrorCounter(Arc<AtomicUsize>);

    impl tracing::Subscriber for ErrorCounter {
        fn enabled(&self, _: &Metadata<'_>) -> bool {
            true
        }

        fn new_span(&self, _: &Attributes<'_>) -> Id {
            Id::from_u64(1)
        }

        fn record(&self, _: &Id, _: &Record<'_>) {}

        fn record_follows_from(&self, _: &Id, _: &Id) {}

        fn event(&self, event: &Event<'_>) {
            if *event.metadata().level() == Level::ERROR {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }

        fn enter(&self, _: &Id) {}

        fn exit(&self, _: &Id) {}
    }

    fn count_errors(f: impl FnOnce()) -> usize {
        let errors = Arc::new(AtomicUsize::new(0));
        tracing::subscriber::with_default(ErrorCounter(Arc::clone(&errors)), f);
        errors.load(Ordering::SeqCst)
    }

    #[test]
    fn labels_cover_every_kind() {
        let labels: Vec<_> = ViewKind::ALL.iter().map(|kind| kind.label()).collect();
        assert_eq!(labels, ["Bubble Chart", "Scatter Plot", "Heatmap"]);
    }

    #[test]
    fn catalog_order_matches_identifiers() {
        let catalog = ViewCatalog::new();
        let ids: Vec<_> = catalog.iter().map(ViewKind::id).collect();
        assert_eq!(ids, ["bubbleChart", "scatterPlot", "heatmap"]);
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get(3), None);
        assert_eq!(catalog.position(ViewKind::Heatmap), Some(2));
    }

    #[test]
    fn parse_accepts_identifiers_case_insensitively() {
        assert_eq!("scatterPlot".parse::<ViewKind>(), Ok(ViewKind::ScatterPlot));
        assert_eq!("  HEATMAP ".parse::<ViewKind>(), Ok(ViewKind::Heatmap));
        assert_eq!("bubblechart".parse::<ViewKind>(), Ok(ViewKind::BubbleChart));
    }

    #[test]
    fn parse_rejects_unknown_identifiers() {
        assert_eq!(
            "pieChart".parse::<ViewKind>(),
            Err(ViewerError::UnknownViewKind("pieChart".to_string()))
        );
        // Labels are not identifiers.
        assert!("Bubble Chart".parse::<ViewKind>().is_err());
    }

    #[test]
    fn unknown_identifier_is_logged_at_error_level() {
        let errors = count_errors(|| {
            assert!("pieChart".parse::<ViewKind>().is_err());
        });
        assert_eq!(errors, 1);
    }

    #[test]
    fn known_identifier_logs_nothing() {
        let errors = count_errors(|| {
            assert_eq!("heatmap".parse::<ViewKind>(), Ok(ViewKind::Heatmap));
        });
        assert_eq!(errors, 0);
    }

    #[test]
    fn wrap_helpers_cycle_in_both_directions() {
        assert_eq!(wrap_increment(0, 3), 1);
        assert_eq!(wrap_increment(2, 3), 0);
        assert_eq!(wrap_decrement(0, 3), 2);
        assert_eq!(wrap_decrement(2, 3), 1);
    }

    #[test]
    fn wrap_helpers_handle_empty_lists() {
        assert_eq!(wrap_increment(0, 0), 0);
        assert_eq!(wrap_decrement(0, 0), 0);
    }
}
