//! Section geometry.
//!
//! A page is divided into an ordered list of [`Section`]s, each with a top
//! offset and a height in logical pixels. The scroll controller never
//! changes sections; it only asks which one sits under a given point.

/// One snap unit of a page.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Heading text (empty for an untitled leading section)
    pub title: String,
    /// Anchor slug that in-page links use to target this section
    pub anchor: String,
    /// Distance from the top of the page
    pub top: f64,
    /// Vertical extent
    pub height: f64,
}

impl Section {
    pub fn new(title: impl Into<String>, anchor: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            title: title.into(),
            anchor: anchor.into(),
            top,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Half-open containment: `top <= y < bottom`.
    pub fn contains(&self, y: f64) -> bool {
        self.top <= y && y < self.bottom()
    }
}

/// Index of the section containing `y`.
///
/// Every section is checked in document order and the last match wins, so
/// overlapping sections resolve to the later one. Returns `None` when `y`
/// falls in a gap or outside the page.
pub fn section_at(sections: &[Section], y: f64) -> Option<usize> {
    sections
        .iter()
        .enumerate()
        .filter(|(_, section)| section.contains(y))
        .map(|(index, _)| index)
        .last()
}

/// Vertical midpoint of the viewport in page coordinates.
pub fn viewport_midpoint(scroll_offset: f64, viewport_height: f64) -> f64 {
    scroll_offset + viewport_height / 2.0
}

/// Stack sections of the given heights from the top of the page.
pub fn stacked(heights: &[f64]) -> Vec<Section> {
    let mut top = 0.0;
    heights
        .iter()
        .enumerate()
        .map(|(index, &height)| {
            let section = Section::new(
                format!("Section {}", index + 1),
                format!("section-{}", index + 1),
                top,
                height,
            );
            top += height;
            section
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_half_open() {
        let section = Section::new("About", "about", 100.0, 50.0);
        assert!(section.contains(100.0));
        assert!(section.contains(149.9));
        assert!(!section.contains(150.0));
        assert!(!section.contains(99.9));
    }

    #[test]
    fn test_section_at_finds_containing_section() {
        let sections = stacked(&[800.0, 800.0, 800.0]);
        assert_eq!(section_at(&sections, 0.0), Some(0));
        assert_eq!(section_at(&sections, 799.0), Some(0));
        assert_eq!(section_at(&sections, 800.0), Some(1));
        assert_eq!(section_at(&sections, 2399.0), Some(2));
    }

    #[test]
    fn test_section_at_outside_page_is_none() {
        let sections = stacked(&[800.0, 800.0]);
        assert_eq!(section_at(&sections, 1600.0), None);
        assert_eq!(section_at(&sections, -1.0), None);
    }

    #[test]
    fn test_section_at_gap_is_none() {
        let sections = vec![
            Section::new("a", "a", 0.0, 100.0),
            Section::new("b", "b", 200.0, 100.0),
        ];
        assert_eq!(section_at(&sections, 150.0), None);
    }

    #[test]
    fn test_section_at_overlap_last_wins() {
        let sections = vec![
            Section::new("a", "a", 0.0, 300.0),
            Section::new("b", "b", 200.0, 300.0),
        ];
        assert_eq!(section_at(&sections, 250.0), Some(1));
    }

    #[test]
    fn test_stacked_sections_are_contiguous() {
        let sections = stacked(&[100.0, 250.0, 50.0]);
        assert_eq!(sections[1].top, 100.0);
        assert_eq!(sections[2].top, 350.0);
        assert_eq!(sections[2].bottom(), 400.0);
        assert_eq!(sections[0].anchor, "section-1");
    }

    #[test]
    fn test_viewport_midpoint() {
        assert_eq!(viewport_midpoint(1000.0, 800.0), 1400.0);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn stacked_lookup_matches_linear_scan(
                heights in proptest::collection::vec(1.0..2000.0f64, 1..12),
                fraction in 0.0..0.999f64,
            ) {
                let sections = stacked(&heights);
                let bottom = sections.last().map_or(0.0, Section::bottom);
                let y = fraction * bottom;
                let found = section_at(&sections, y);
                prop_assert!(found.is_some());
                let index = found.unwrap_or_default();
                prop_assert!(sections[index].top <= y && y < sections[index].bottom());
            }

        }
    }
}
