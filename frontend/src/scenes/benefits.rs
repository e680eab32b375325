use yew::prelude::*;

use crate::components::action_button::ActionButton;
use crate::components::section_heading::SectionHeading;
use crate::page::SelectedPage;
use crate::scenes::{select_on_enter, SectionProps};
use crate::visibility::use_viewport_enter;

struct Benefit {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const BENEFITS: [Benefit; 3] = [
    Benefit {
        icon: "🏠",
        title: "State of the Art Facilities",
        description: "Neque adipiscing amet amet enim. Feugiat dolor enim fermentum in a in lectus pellentesque. Ullamcorper et.",
    },
    Benefit {
        icon: "👥",
        title: "100's of Diverse Classes",
        description: "Eu ipsum id egestas risus tempus enim semper felis quis. Nec consectetur ac venenatis facilisi est. Eget ac turpis id.",
    },
    Benefit {
        icon: "🎓",
        title: "Expert and Pro Trainers",
        description: "Fusce vestibulum aliquam ut cras. Nisl lectus egestas sapien nisl. Lacus at mi sit pellentesque. Congue parturient.",
    },
];

#[function_component(Benefits)]
pub fn benefits(props: &SectionProps) -> Html {
    let node = use_node_ref();
    let on_enter = use_memo(
        |on_select| select_on_enter(on_select, SelectedPage::Benefits),
        props.on_select.clone(),
    );
    use_viewport_enter(node.clone(), (*on_enter).clone());

    let cards = BENEFITS.iter().map(|benefit| {
        let onclick = {
            let on_select = props.on_select.clone();
            Callback::from(move |_: MouseEvent| on_select.emit(SelectedPage::ContactUs))
        };
        html! {
            <div class="benefit-card">
                <div class="benefit-icon">{benefit.icon}</div>
                <h4>{benefit.title}</h4>
                <p>{benefit.description}</p>
                <a class="learn-more" href={SelectedPage::ContactUs.href()} {onclick}>
                    {"Learn More"}
                </a>
            </div>
        }
    });

    html! {
        <section id={SelectedPage::Benefits.anchor_id()} class="benefits" ref={node}>
            <div class="benefits-intro">
                <SectionHeading>{"MORE THAN JUST A GYM."}</SectionHeading>
                <p>
                    {"We provide world class fitness equipment, trainers and classes to get you to your ultimate fitness goals with ease. We provide true care into each and every member."}
                </p>
            </div>
            <div class="benefit-cards">
                { for cards }
            </div>
            <div class="benefits-cta">
                <div class="benefits-graphic">
                    <img src="/assets/BenefitsPageGraphic.png" alt="benefits-page-graphic" />
                </div>
                <div class="benefits-cta-copy">
                    <SectionHeading>
                        {"MILLIONS OF HAPPY MEMBERS GETTING "}<span class="highlight">{"FIT"}</span>
                    </SectionHeading>
                    <p>
                        {"Nascetur aenean massa auctor tincidunt. Iaculis potenti amet egestas ultrices consectetur adipiscing ultricies enim. Pulvinar fames vitae vitae quis. Quis amet vulputate tincidunt at in nulla nec."}
                    </p>
                    <ActionButton on_select={props.on_select.clone()}>{"Join Now"}</ActionButton>
                </div>
            </div>
            <style>
                {r#"
                .benefits {
                    width: 83%;
                    min-height: 100%;
                    margin: 0 auto;
                    padding: 5rem 0;
                }
                .benefits-intro {
                    max-width: 60%;
                }
                .benefit-cards {
                    display: flex;
                    gap: 2rem;
                    margin-top: 3rem;
                }
                .benefit-card {
                    flex: 1;
                    text-align: center;
                    border: 2px solid #DFCCCC;
                    border-radius: 0.375rem;
                    padding: 4rem 1.25rem;
                }
                .benefit-icon {
                    display: inline-block;
                    font-size: 1.5rem;
                    border: 2px solid #DFCCCC;
                    border-radius: 9999px;
                    background: #FFE1E0;
                    padding: 1rem;
                }
                .benefits-cta {
                    display: flex;
                    align-items: center;
                    gap: 5rem;
                    margin-top: 7rem;
                }
                .benefits-graphic img {
                    max-width: 100%;
                }
                .highlight {
                    color: #FF616A;
                }
                @media (max-width: 1060px) {
                    .benefits-intro {
                        max-width: 100%;
                    }
                    .benefit-cards, .benefits-cta {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </section>
    }
}
