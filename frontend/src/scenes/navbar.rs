use yew::prelude::*;

use crate::components::action_button::ActionButton;
use crate::components::nav_link::NavLink;
use crate::page::SelectedPage;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub selected_page: SelectedPage,
    pub is_top_of_page: bool,
    pub on_select: Callback<SelectedPage>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let NavbarProps {
        selected_page,
        is_top_of_page,
        on_select,
    } = props;
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(false))
    };

    let links = SelectedPage::ALL.iter().map(|page| {
        html! {
            <NavLink
                page={*page}
                selected_page={*selected_page}
                on_select={on_select.clone()}
                on_navigate={close_menu.clone()}
            />
        }
    });

    html! {
        <nav class={classes!("navbar", (!*is_top_of_page).then(|| "navbar-scrolled"))}>
            <div class="nav-content">
                <a class="nav-logo" href={SelectedPage::Home.href()}>{"EVOGYM"}</a>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={classes!("nav-right", (*menu_open).then(|| "mobile-menu-open"))}>
                    <div class="nav-links">
                        { for links }
                    </div>
                    <div class="nav-actions">
                        <span class="nav-sign-in">{"Sign In"}</span>
                        <ActionButton on_select={on_select.clone()}>
                            {"Become a Member"}
                        </ActionButton>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .navbar {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 30;
                    padding: 1.5rem 0;
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }
                .navbar-scrolled {
                    background: #FFE1E0;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.12);
                }
                .nav-content {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    width: 83%;
                    margin: 0 auto;
                }
                .nav-logo {
                    font-weight: 700;
                    font-size: 1.5rem;
                    color: #5E0000;
                    text-decoration: none;
                }
                .nav-right {
                    display: flex;
                    flex: 1;
                    justify-content: space-between;
                    margin-left: 4rem;
                }
                .nav-links, .nav-actions {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }
                .nav-link {
                    color: #5E0000;
                    text-decoration: none;
                    transition: color 0.5s;
                }
                .nav-link:hover, .nav-link.active {
                    color: #FF6B66;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: #FF616A;
                    border: none;
                    border-radius: 9999px;
                    padding: 0.6rem;
                    cursor: pointer;
                }
                .burger-menu span {
                    display: block;
                    width: 18px;
                    height: 2px;
                    background: #fff;
                }
                @media (max-width: 1060px) {
                    .burger-menu {
                        display: flex;
                        position: relative;
                        z-index: 40;
                    }
                    .nav-right {
                        display: none;
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: fixed;
                        right: 0;
                        top: 0;
                        bottom: 0;
                        width: 300px;
                        margin: 0;
                        padding: 6rem 2rem 2rem;
                        background: #FFC132;
                        box-shadow: -8px 0 24px rgba(0, 0, 0, 0.2);
                        gap: 2rem;
                    }
                    .nav-right.mobile-menu-open .nav-links,
                    .nav-right.mobile-menu-open .nav-actions {
                        flex-direction: column;
                        align-items: flex-start;
                    }
                }
                "#}
            </style>
        </nav>
    }
}
