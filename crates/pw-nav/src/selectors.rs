/// Selectors the navigation controllers query at attach time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavSelectors {
    /// Header landmark; clicks inside it never close the menu.
    pub header: String,
    /// Control that opens and closes the panel.
    pub toggle: String,
    /// Collapsible panel.
    pub panel: String,
    /// Links inside the panel that close the menu when selected.
    pub nav_link: String,
    /// Sections tracked by the scroll spy.
    pub sections: String,
    /// Links highlighted by the scroll spy.
    pub spy_links: String,
    /// Anchors handled by smooth scrolling.
    pub anchors: String,
}

impl Default for NavSelectors {
    fn default() -> Self {
        Self {
            header: ".navbar".to_string(),
            toggle: ".navbar-toggler".to_string(),
            panel: "#navbarNav".to_string(),
            nav_link: ".nav-link".to_string(),
            sections: r#"[id^="section-"]"#.to_string(),
            spy_links: r##".nav-link[href^="#section-"]"##.to_string(),
            anchors: r##"a[href^="#"]"##.to_string(),
        }
    }
}
