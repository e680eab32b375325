use yew::prelude::*;

use crate::components::action_button::ActionButton;
use crate::page::SelectedPage;
use crate::scenes::{select_on_enter, SectionProps};
use crate::visibility::use_viewport_enter;

const SPONSORS: [(&str, &str); 3] = [
    ("/assets/SponsorRedBull.png", "Red Bull"),
    ("/assets/SponsorForbes.png", "Forbes"),
    ("/assets/SponsorFortune.png", "Fortune"),
];

#[function_component(Home)]
pub fn home(props: &SectionProps) -> Html {
    let node = use_node_ref();
    let on_enter = use_memo(
        |on_select| select_on_enter(on_select, SelectedPage::Home),
        props.on_select.clone(),
    );
    use_viewport_enter(node.clone(), (*on_enter).clone());

    let learn_more = {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(SelectedPage::ContactUs))
    };

    html! {
        <section id={SelectedPage::Home.anchor_id()} class="home" ref={node}>
            <div class="home-hero">
                <div class="home-copy">
                    <h1 class="home-title">{"EVOGYM"}</h1>
                    <p class="home-tagline">{"Evolutionary Fitness."}</p>
                    <p>
                        {"Unrivaled Gym. Unparalleled Training Fitness Classes. World Class Studios to get the Body Shapes That you Dream of. Get Your Dream Body Now."}
                    </p>
                    <div class="home-actions">
                        <ActionButton on_select={props.on_select.clone()}>{"Join Now"}</ActionButton>
                        <a class="learn-more" href={SelectedPage::ContactUs.href()} onclick={learn_more}>
                            {"Learn More"}
                        </a>
                    </div>
                </div>
                <div class="home-graphic">
                    <img src="/assets/HomePageGraphic.png" alt="home-pageGraphic" />
                </div>
            </div>
            <div class="sponsors">
                { for SPONSORS.iter().map(|(src, alt)| html! { <img src={*src} alt={*alt} /> }) }
            </div>
            <style>
                {r#"
                .home {
                    min-height: 100vh;
                    padding-top: 10rem;
                    background: #F8F4EB;
                }
                .home-hero {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 4rem;
                    width: 83%;
                    margin: 0 auto;
                }
                .home-copy {
                    flex-basis: 45%;
                }
                .home-title {
                    font-size: 5rem;
                    margin: 0;
                }
                .home-tagline {
                    font-weight: 700;
                    letter-spacing: 0.3em;
                }
                .home-actions {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                    margin-top: 2rem;
                }
                .learn-more {
                    color: #FF616A;
                    font-weight: 700;
                    text-decoration: underline;
                }
                .home-graphic img {
                    max-width: 100%;
                }
                .sponsors {
                    display: flex;
                    gap: 3rem;
                    padding: 2.5rem 8.5%;
                    margin-top: 4rem;
                    background: #FFE1E0;
                }
                @media (max-width: 1060px) {
                    .home-hero {
                        flex-direction: column;
                    }
                    .sponsors {
                        display: none;
                    }
                }
                "#}
            </style>
        </section>
    }
}
