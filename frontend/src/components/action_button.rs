use yew::prelude::*;

use crate::page::SelectedPage;

#[derive(Properties, PartialEq)]
pub struct ActionButtonProps {
    pub on_select: Callback<SelectedPage>,
    pub children: Children,
}

/// Call-to-action that jumps to the contact section.
#[function_component(ActionButton)]
pub fn action_button(props: &ActionButtonProps) -> Html {
    let onclick = {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(SelectedPage::ContactUs))
    };

    html! {
        <a class="action-button" href={SelectedPage::ContactUs.href()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}
