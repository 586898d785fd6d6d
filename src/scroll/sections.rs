//! Descriptors binding the engine to page layout without owning any of it.
//!
//! The engine only ever sees closures that yield a fresh layout box on
//! demand. A provider returning `None` means the node is not rendered; every
//! consumer treats that as "skip this frame".

use super::geom::{PageMetrics, Rect};

/// Lazily-evaluated layout box for one page region.
pub type BoundsProvider = Box<dyn Fn() -> Option<Rect>>;

/// A content section the engine observes: an anchor id plus a read-only
/// bounds provider.
pub struct SectionDescriptor {
    id: String,
    bounds: BoundsProvider,
}

impl SectionDescriptor {
    pub fn new(id: impl Into<String>, bounds: BoundsProvider) -> Self {
        Self {
            id: id.into(),
            bounds,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn bounds(&self) -> Option<Rect> {
        (self.bounds)()
    }
}

/// Two-level stacking order for adjacent bands, so neighbours overlap
/// predictably while cross-fading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZParity {
    Even,
    Odd,
}

impl ZParity {
    pub fn from_index(index: usize) -> Self {
        if index % 2 == 0 {
            ZParity::Even
        } else {
            ZParity::Odd
        }
    }

    /// Stacking layer within the band plane: odd bands sit one level above
    /// even ones.
    pub fn layer(&self) -> u8 {
        match self {
            ZParity::Even => 0,
            ZParity::Odd => 1,
        }
    }
}

/// Per-section decorative band. `opacity` is the smoothed value owned by the
/// frame loop; the whole set is discarded and rebuilt on viewport resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandDescriptor {
    /// Index into [`PageModel::sections`].
    pub section: usize,
    pub opacity: f64,
    pub z_parity: ZParity,
}

impl BandDescriptor {
    pub fn new(section: usize) -> Self {
        Self {
            section,
            opacity: 0.0,
            z_parity: ZParity::from_index(section),
        }
    }
}

/// Everything the controller needs to resolve layout, captured once at
/// construction and re-captured wholesale on rebuild.
pub struct PageModel {
    /// Fresh page measurements (viewport height changes on resize).
    pub metrics: Box<dyn Fn() -> PageMetrics>,
    /// Index of the hero section within `sections`, if the page has one.
    /// The hero is parallax-driven and excluded from the band set.
    pub hero: Option<usize>,
    /// Every anchor section in document order (hero included, so the nav
    /// link tracker sees the whole page).
    pub sections: Vec<SectionDescriptor>,
}

impl PageModel {
    pub fn metrics(&self) -> PageMetrics {
        (self.metrics)()
    }

    pub fn hero_section(&self) -> Option<&SectionDescriptor> {
        self.hero.and_then(|index| self.sections.get(index))
    }

    /// The content region immediately after the hero, the one that
    /// "catches" it during the overlay hand-off.
    pub fn following_section(&self) -> Option<&SectionDescriptor> {
        self.hero.and_then(|index| self.sections.get(index + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn z_parity_alternates_by_index() {
        assert_eq!(ZParity::from_index(0), ZParity::Even);
        assert_eq!(ZParity::from_index(1), ZParity::Odd);
        assert_eq!(ZParity::from_index(2), ZParity::Even);
        assert!(ZParity::from_index(1).layer() > ZParity::from_index(2).layer());
    }

    #[test]
    fn band_starts_transparent() {
        let band = BandDescriptor::new(3);
        assert_eq!(band.opacity, 0.0);
        assert_eq!(band.z_parity, ZParity::Odd);
    }

    #[test]
    fn absent_bounds_read_as_none() {
        let section = SectionDescriptor::new("about", Box::new(|| None));
        assert_eq!(section.id(), "about");
        assert!(section.bounds().is_none());
    }

    #[test]
    fn hero_and_follower_resolve_by_index() {
        let model = PageModel {
            metrics: Box::new(|| PageMetrics {
                viewport_height: 800.0,
                nav_height: 64.0,
                scroll_height: 2000.0,
            }),
            hero: Some(0),
            sections: vec![
                SectionDescriptor::new("home", Box::new(|| None)),
                SectionDescriptor::new("about", Box::new(|| None)),
            ],
        };
        assert_eq!(model.hero_section().map(SectionDescriptor::id), Some("home"));
        assert_eq!(
            model.following_section().map(SectionDescriptor::id),
            Some("about")
        );
    }

    #[test]
    fn no_hero_means_no_follower() {
        let model = PageModel {
            metrics: Box::new(|| PageMetrics {
                viewport_height: 800.0,
                nav_height: 64.0,
                scroll_height: 2000.0,
            }),
            hero: None,
            sections: vec![SectionDescriptor::new("about", Box::new(|| None))],
        };
        assert!(model.hero_section().is_none());
        assert!(model.following_section().is_none());
    }
}
