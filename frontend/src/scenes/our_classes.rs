use yew::prelude::*;

use crate::components::section_heading::SectionHeading;
use crate::page::SelectedPage;
use crate::scenes::{select_on_enter, SectionProps};
use crate::visibility::use_viewport_enter;

struct GymClass {
    name: &'static str,
    description: Option<&'static str>,
    image: &'static str,
}

const CLASSES: [GymClass; 6] = [
    GymClass {
        name: "Weight Training Classes",
        description: Some("Lorem ipsum dolor sit amet consectetur adipisicing elit. Fugit, quae."),
        image: "/assets/image1.png",
    },
    GymClass {
        name: "Yoga Classes",
        description: None,
        image: "/assets/image2.png",
    },
    GymClass {
        name: "Ab Core Classes",
        description: Some("Lorem ipsum dolor sit amet consectetur adipisicing elit. Fugit, quae."),
        image: "/assets/image3.png",
    },
    GymClass {
        name: "Adventure Classes",
        description: Some("Lorem ipsum dolor sit amet consectetur adipisicing elit. Fugit, quae."),
        image: "/assets/image4.png",
    },
    GymClass {
        name: "Fitness Classes",
        description: None,
        image: "/assets/image5.png",
    },
    GymClass {
        name: "Training Classes",
        description: Some("Lorem ipsum dolor sit amet consectetur adipisicing elit. Fugit, quae."),
        image: "/assets/image6.png",
    },
];

#[function_component(OurClasses)]
pub fn our_classes(props: &SectionProps) -> Html {
    let node = use_node_ref();
    let on_enter = use_memo(
        |on_select| select_on_enter(on_select, SelectedPage::OurClasses),
        props.on_select.clone(),
    );
    use_viewport_enter(node.clone(), (*on_enter).clone());

    html! {
        <section id={SelectedPage::OurClasses.anchor_id()} class="our-classes" ref={node}>
            <div class="our-classes-intro">
                <SectionHeading>{"OUR CLASSES"}</SectionHeading>
                <p>
                    {"Fringilla a sed at suspendisse ut enim volutpat. Rhoncus vel est tellus quam porttitor. Mauris velit euismod elementum arcu neque facilisi. Amet semper tortor facilisis metus nibh. Rhoncus sit enim mattis odio in risus nunc."}
                </p>
            </div>
            <div class="class-list">
                <ul>
                    { for CLASSES.iter().map(|class| html! {
                        <li class="class-item">
                            <div class="class-overlay">
                                <p class="class-name">{class.name}</p>
                                {
                                    if let Some(description) = class.description {
                                        html! { <p class="class-description">{description}</p> }
                                    } else {
                                        html! {}
                                    }
                                }
                            </div>
                            <img src={class.image} alt={class.name} />
                        </li>
                    }) }
                </ul>
            </div>
            <style>
                {r#"
                .our-classes {
                    width: 100%;
                    padding: 10rem 0;
                    background: #FFA6A3;
                }
                .our-classes-intro {
                    width: 83%;
                    margin: 0 auto;
                }
                .our-classes-intro p {
                    max-width: 60%;
                }
                .class-list {
                    margin-top: 2.5rem;
                    height: 353px;
                    width: 100%;
                    overflow-x: auto;
                    overflow-y: hidden;
                }
                .class-list ul {
                    display: flex;
                    width: 2800px;
                    margin: 0;
                    padding: 0;
                    list-style: none;
                }
                .class-item {
                    position: relative;
                    margin: 0 1.25rem;
                    height: 380px;
                    width: 450px;
                }
                .class-overlay {
                    position: absolute;
                    inset: 0;
                    z-index: 1;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    padding: 1.25rem;
                    text-align: center;
                    color: #fff;
                    background: #FF616A;
                    opacity: 0;
                    transition: opacity 0.5s;
                }
                .class-item:hover .class-overlay {
                    opacity: 0.9;
                }
                .class-name {
                    font-size: 1.5rem;
                }
                "#}
            </style>
        </section>
    }
}
