use std::rc::Rc;

use yew::functional::Reducible;

/// A content section the navbar can mark as active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectedPage {
    #[default]
    Home,
    Benefits,
    OurClasses,
    ContactUs,
}

impl SelectedPage {
    /// Navbar order.
    pub const ALL: [SelectedPage; 4] = [
        SelectedPage::Home,
        SelectedPage::Benefits,
        SelectedPage::OurClasses,
        SelectedPage::ContactUs,
    ];

    /// Element id of the section, also used as the `#fragment` of nav links.
    pub fn anchor_id(self) -> &'static str {
        match self {
            SelectedPage::Home => "home",
            SelectedPage::Benefits => "benefits",
            SelectedPage::OurClasses => "ourclasses",
            SelectedPage::ContactUs => "contactus",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SelectedPage::Home => "Home",
            SelectedPage::Benefits => "Benefits",
            SelectedPage::OurClasses => "Our Classes",
            SelectedPage::ContactUs => "Contact Us",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor_id())
    }
}

/// UI state owned by the root container and handed to the sections as props.
#[derive(Clone, Debug, PartialEq)]
pub struct PageState {
    pub selected_page: SelectedPage,
    pub is_top_of_page: bool,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            selected_page: SelectedPage::Home,
            is_top_of_page: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PageAction {
    /// Vertical scroll offset reported by the viewport, in pixels.
    Scrolled(f64),
    /// A navigation link or a section asked to become the active page.
    Select(SelectedPage),
}

impl PageState {
    pub fn apply(&self, action: PageAction) -> PageState {
        match action {
            PageAction::Scrolled(offset) if offset == 0.0 => PageState {
                selected_page: SelectedPage::Home,
                is_top_of_page: true,
            },
            PageAction::Scrolled(_) => PageState {
                selected_page: self.selected_page,
                is_top_of_page: false,
            },
            PageAction::Select(page) => PageState {
                selected_page: page,
                is_top_of_page: self.is_top_of_page,
            },
        }
    }
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(selected_page: SelectedPage, is_top_of_page: bool) -> PageState {
        PageState {
            selected_page,
            is_top_of_page,
        }
    }

    #[test]
    fn starts_at_home_on_top() {
        assert_eq!(PageState::default(), state(SelectedPage::Home, true));
    }

    #[test]
    fn zero_offset_resets_to_home() {
        for page in SelectedPage::ALL {
            for top in [true, false] {
                let next = state(page, top).apply(PageAction::Scrolled(0.0));
                assert_eq!(next, state(SelectedPage::Home, true));
            }
        }
    }

    #[test]
    fn positive_offset_keeps_selected_page() {
        for page in SelectedPage::ALL {
            for offset in [0.5, 1.0, 250.0, 10_000.0] {
                let next = state(page, true).apply(PageAction::Scrolled(offset));
                assert_eq!(next, state(page, false));
            }
        }
    }

    #[test]
    fn select_leaves_top_flag_alone() {
        let next = state(SelectedPage::Home, true).apply(PageAction::Select(SelectedPage::OurClasses));
        assert_eq!(next, state(SelectedPage::OurClasses, true));

        let next = state(SelectedPage::Benefits, false).apply(PageAction::Select(SelectedPage::ContactUs));
        assert_eq!(next, state(SelectedPage::ContactUs, false));
    }

    #[test]
    fn scroll_down_then_back_to_top() {
        let initial = Rc::new(PageState::default());

        let scrolled = initial.reduce(PageAction::Scrolled(250.0));
        assert_eq!(*scrolled, state(SelectedPage::Home, false));

        let back = scrolled.reduce(PageAction::Scrolled(0.0));
        assert_eq!(*back, state(SelectedPage::Home, true));
    }

    #[test]
    fn scrolling_back_up_clears_selection() {
        let current = Rc::new(state(SelectedPage::Benefits, false));
        let next = current.reduce(PageAction::Scrolled(0.0));
        assert_eq!(*next, state(SelectedPage::Home, true));
    }

    #[test]
    fn unchanged_state_is_not_reallocated() {
        let current = Rc::new(state(SelectedPage::Benefits, false));
        let next = Rc::clone(&current).reduce(PageAction::Scrolled(480.0));
        assert!(Rc::ptr_eq(&current, &next));
    }

    #[test]
    fn anchors_match_nav_order() {
        let hrefs: Vec<String> = SelectedPage::ALL.iter().map(|p| p.href()).collect();
        assert_eq!(hrefs, ["#home", "#benefits", "#ourclasses", "#contactus"]);
    }
}
