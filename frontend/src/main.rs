use log::{info, Level};
use yew::prelude::*;

mod components;
mod config;
mod contact;
mod page;
mod scenes;
mod scroll;
mod visibility;

use page::{PageAction, SelectedPage};
use scenes::{
    benefits::Benefits, contact_us::ContactUs, footer::Footer, home::Home, navbar::Navbar,
    our_classes::OurClasses,
};
use scroll::use_page_state;

#[function_component]
fn App() -> Html {
    let state = use_page_state();

    // Stable across renders so section observers are not reconnected.
    let on_select = {
        let dispatcher = state.dispatcher();
        use_callback(
            move |page: SelectedPage, _| dispatcher.dispatch(PageAction::Select(page)),
            (),
        )
    };

    html! {
        <div class="app">
            <Navbar
                selected_page={state.selected_page}
                is_top_of_page={state.is_top_of_page}
                on_select={on_select.clone()}
            />
            <Home on_select={on_select.clone()} />
            <Benefits on_select={on_select.clone()} />
            <OurClasses on_select={on_select.clone()} />
            <ContactUs on_select={on_select} />
            <Footer />
            <style>
                {r#"
                .app {
                    background: #F8F4EB;
                }
                .section-heading {
                    font-family: "Montserrat", sans-serif;
                    font-size: 1.875rem;
                    font-weight: 700;
                }
                .action-button {
                    display: inline-block;
                    border-radius: 0.375rem;
                    background: #FFC132;
                    padding: 0.5rem 2.5rem;
                    color: #5E0000;
                    text-decoration: none;
                    transition: background 0.3s;
                }
                .action-button:hover {
                    background: #FF616A;
                    color: #fff;
                }
                "#}
            </style>
        </div>
    }
}

fn main() {
    // Panics show up in the browser console
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
