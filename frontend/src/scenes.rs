use yew::prelude::*;

use crate::page::SelectedPage;

pub mod benefits;
pub mod contact_us;
pub mod footer;
pub mod home;
pub mod navbar;
pub mod our_classes;

/// Props shared by the content sections: they can only ask the root to change
/// the active page.
#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub on_select: Callback<SelectedPage>,
}

/// Callback that marks `page` as active, for `use_viewport_enter`.
pub fn select_on_enter(on_select: &Callback<SelectedPage>, page: SelectedPage) -> Callback<()> {
    on_select.reform(move |_| page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn entering_a_section_selects_it() {
        let seen = Rc::new(Cell::new(None));
        let sink = Rc::clone(&seen);
        let on_select = Callback::from(move |page: SelectedPage| sink.set(Some(page)));

        for page in SelectedPage::ALL {
            select_on_enter(&on_select, page).emit(());
            assert_eq!(seen.get(), Some(page));
        }
    }
}
