use yew::prelude::*;

use crate::page::SelectedPage;

#[derive(Properties, PartialEq)]
pub struct NavLinkProps {
    pub page: SelectedPage,
    pub selected_page: SelectedPage,
    pub on_select: Callback<SelectedPage>,
    #[prop_or_default]
    pub on_navigate: Callback<()>,
}

#[function_component(NavLink)]
pub fn nav_link(props: &NavLinkProps) -> Html {
    let page = props.page;
    let onclick = {
        let on_select = props.on_select.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| {
            on_select.emit(page);
            on_navigate.emit(());
        })
    };

    html! {
        <a
            class={classes!("nav-link", (props.selected_page == page).then(|| "active"))}
            href={page.href()}
            {onclick}
        >
            {page.label()}
        </a>
    }
}
