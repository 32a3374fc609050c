//! Scroll geometry and navigation state derivation.
//!
//! The page renders as one long virtual document measured in terminal rows.
//! Each section occupies a contiguous band of rows; the scroll offset is the
//! document row aligned with the top of the viewport. All navigation flags
//! (solid nav bar, scroll-to-top affordance, active section) are pure
//! functions of the scroll offset and the section extents.

use crate::api::{Project, Service};

use super::state::Section;

/// Scroll depth past which the nav bar renders with a solid background
pub const NAV_SOLID_OFFSET: i32 = 50;
/// Scroll depth past which the scroll-to-top affordance appears
pub const SCROLL_TOP_OFFSET: i32 = 500;
/// The probe row, measured from the top of the viewport, used to decide
/// which section is active
pub const SECTION_PROBE_LINE: i32 = 100;

/// Rows occupied by a rendered project card, including spacing
const PROJECT_CARD_ROWS: i32 = 18;
/// Rows occupied by a rendered service card, including spacing
const SERVICE_CARD_ROWS: i32 = 14;

/// One section's band of document rows. `top` is inclusive, `bottom`
/// exclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionExtent {
    pub section: Section,
    pub top: i32,
    pub bottom: i32,
}

/// Row heights for every section of the document, in display order.
///
/// Projects and Services grow with their collection sizes; the fixed
/// sections hold enough rows for their static content at any reasonable
/// terminal width.
#[derive(Debug, Clone, PartialEq)]
pub struct PageGeometry {
    heights: [i32; 5],
}

impl PageGeometry {
    pub fn new(projects: &[Project], services: &[Service]) -> Self {
        let project_rows = 28 + PROJECT_CARD_ROWS * projects.len().max(1) as i32;
        let service_rows = 22 + SERVICE_CARD_ROWS * services.len().max(1) as i32;
        Self {
            heights: [120, 140, project_rows, service_rows, 130],
        }
    }

    pub fn section_height(&self, section: Section) -> i32 {
        let index = Section::ALL.iter().position(|s| *s == section).unwrap_or(0);
        self.heights[index]
    }

    /// First document row of the given section
    pub fn section_top(&self, section: Section) -> i32 {
        Section::ALL
            .iter()
            .take_while(|s| **s != section)
            .map(|s| self.section_height(*s))
            .sum()
    }

    pub fn document_height(&self) -> i32 {
        self.heights.iter().sum()
    }

    /// Largest useful scroll offset for the given viewport height
    pub fn max_scroll(&self, viewport_height: i32) -> i32 {
        (self.document_height() - viewport_height).max(0)
    }

    /// Section bands relative to the viewport at the given scroll offset
    pub fn extents(&self, scroll_y: i32) -> Vec<SectionExtent> {
        let mut top = -scroll_y;
        Section::ALL
            .iter()
            .map(|section| {
                let height = self.section_height(*section);
                let extent = SectionExtent {
                    section: *section,
                    top,
                    bottom: top + height,
                };
                top += height;
                extent
            })
            .collect()
    }
}

/// True once the document has scrolled past the solid-nav threshold
pub fn is_scrolled(scroll_y: i32) -> bool {
    scroll_y > NAV_SOLID_OFFSET
}

/// True once the document has scrolled far enough to offer a jump back up
pub fn show_scroll_to_top(scroll_y: i32) -> bool {
    scroll_y > SCROLL_TOP_OFFSET
}

/// The section whose band straddles the probe row, scanning in display
/// order and taking the first match. When no section straddles the probe
/// (mid-fling overshoot past the document edge) the previous answer is
/// retained.
pub fn active_section(extents: &[SectionExtent], previous: Section) -> Section {
    extents
        .iter()
        .find(|e| e.top <= SECTION_PROBE_LINE && e.bottom >= SECTION_PROBE_LINE)
        .map(|e| e.section)
        .unwrap_or(previous)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> PageGeometry {
        PageGeometry::new(&[], &[])
    }

    #[test]
    fn test_scroll_thresholds() {
        assert!(!is_scrolled(0));
        assert!(!is_scrolled(50));
        assert!(is_scrolled(51));

        assert!(!show_scroll_to_top(500));
        assert!(show_scroll_to_top(501));
    }

    #[test]
    fn test_section_tops_are_cumulative() {
        let g = geometry();
        assert_eq!(g.section_top(Section::Home), 0);
        assert_eq!(g.section_top(Section::About), g.section_height(Section::Home));
        assert_eq!(
            g.section_top(Section::Contact),
            g.document_height() - g.section_height(Section::Contact)
        );
    }

    #[test]
    fn test_active_section_at_top_is_home() {
        let g = geometry();
        assert_eq!(active_section(&g.extents(0), Section::Contact), Section::Home);
    }

    #[test]
    fn test_active_section_tracks_scroll() {
        let g = geometry();
        let about_top = g.section_top(Section::About);
        // Scroll so that About's band straddles the probe row
        let extents = g.extents(about_top);
        assert_eq!(active_section(&extents, Section::Home), Section::About);
    }

    #[test]
    fn test_active_section_boundary_prefers_earlier() {
        let g = geometry();
        // Place Home's bottom edge exactly on the probe row; both Home and
        // About then straddle it and the scan must pick Home.
        let scroll = g.section_height(Section::Home) - SECTION_PROBE_LINE;
        let extents = g.extents(scroll);
        assert_eq!(active_section(&extents, Section::Contact), Section::Home);
    }

    #[test]
    fn test_active_section_retains_previous_when_no_match() {
        let extents = vec![SectionExtent {
            section: Section::Home,
            top: -5000,
            bottom: -4000,
        }];
        assert_eq!(active_section(&extents, Section::Services), Section::Services);
    }

    #[test]
    fn test_max_scroll_never_negative() {
        let g = geometry();
        assert_eq!(g.max_scroll(100_000), 0);
        assert!(g.max_scroll(40) > 0);
    }

    #[test]
    fn test_geometry_grows_with_collections() {
        let project = crate::api::Project {
            id: "p".to_string(),
            title: "T".to_string(),
            description: String::new(),
            long_description: String::new(),
            tech: vec![],
            features: vec![],
            highlights: vec![],
            live_link: None,
            github_link: None,
            year: None,
            status: "Active".to_string(),
            category: "Project".to_string(),
            icon: None,
            featured: false,
        };
        let small = PageGeometry::new(&[], &[]);
        let large = PageGeometry::new(&[project.clone(), project.clone(), project], &[]);
        assert!(large.document_height() > small.document_height());
    }
}
