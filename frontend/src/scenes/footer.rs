use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <p class="footer-logo">{"EVOGYM"}</p>
                    <p>
                        {"Lorem vitae ac tincidunt et fermentum. Posuere leo pellentesque eget felis consequat. Libero id pharetra sit quam."}
                    </p>
                    <p>{"© Evogym All Rights Reserved."}</p>
                </div>
                <div class="footer-column">
                    <h4>{"Links"}</h4>
                    <p>{"Massa orci senectus"}</p>
                    <p>{"Et gravida id et etiam"}</p>
                    <p>{"Ullamcorper vivamus"}</p>
                </div>
                <div class="footer-column">
                    <h4>{"Contact Us"}</h4>
                    <p>{"Tempus metus mattis risus volutpat egestas."}</p>
                    <p>{"(333)425-6825"}</p>
                </div>
            </div>
            <style>
                {r#"
                .footer {
                    background: #FFE1E0;
                    padding: 4rem 0;
                }
                .footer-content {
                    display: flex;
                    gap: 4rem;
                    width: 83%;
                    margin: 0 auto;
                }
                .footer-brand {
                    flex-basis: 50%;
                }
                .footer-logo {
                    font-weight: 700;
                    font-size: 1.5rem;
                }
                @media (max-width: 1060px) {
                    .footer-content {
                        flex-direction: column;
                        gap: 2rem;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
