use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-content">
            <style>
            {r#".legal-content {
                min-height: 100vh;
                background: #0b0f0c;
                padding: 6rem 2rem 4rem;
                color: #fff;
                display: flex;
                flex-direction: column;
                align-items: center;
            }
            .legal-content > div {
                background: rgba(30, 30, 30, 0.7);
                border: 1px solid rgba(74, 222, 128, 0.15);
                border-radius: 16px;
                padding: 3rem;
                max-width: 800px;
                box-shadow: 0 8px 32px rgba(0, 0, 0, 0.3);
            }
            .legal-content h1 {
                font-size: 2rem;
                text-align: center;
                background: linear-gradient(45deg, #fff, #4ade80);
                -webkit-background-clip: text;
                -webkit-text-fill-color: transparent;
                margin-bottom: 2.5rem;
            }
            .legal-content section {
                background: rgba(0, 0, 0, 0.2);
                border-radius: 12px;
                padding: 2rem;
                margin: 1.5rem 0;
            }
            .legal-content h2 {
                color: #86efac;
                font-size: 1.25rem;
                margin-bottom: 1rem;
            }
            .legal-content p, .legal-content li {
                color: #d1d5db;
                line-height: 1.6;
            }
            .legal-content a {
                color: #4ade80;
            }"#}
            </style>
            <div>
                <h1>{"Privacy Policy"}</h1>

                <section>
                    <h2>{"1. Information We Collect"}</h2>
                    <p>{"When you sign up through this site we collect your email address, your first name and, if you provide them, your last name and trading interests."}</p>
                </section>

                <section>
                    <h2>{"2. How We Use It"}</h2>
                    <ul>
                        <li>{"To send you trial, beta or launch access details"}</li>
                        <li>{"To send product updates and marketing communications you can unsubscribe from at any time"}</li>
                        <li>{"To understand which parts of this page are useful, through Google Analytics"}</li>
                    </ul>
                </section>

                <section>
                    <h2>{"3. Analytics"}</h2>
                    <p>{"This site records anonymous usage events such as button clicks, scroll depth, time on page and page performance. These events never include the contents of the signup form."}</p>
                </section>

                <section>
                    <h2>{"4. Sharing"}</h2>
                    <p>{"We never sell or share your personal information with third parties. All data is transmitted over 256-bit SSL encryption."}</p>
                </section>

                <section>
                    <h2>{"5. Your Rights"}</h2>
                    <p>{"You can request access to, correction of or deletion of your data at any time by contacting AskROI, the company behind Only Bulls."}</p>
                </section>

                <Link<Route> to={Route::Home}>{"Back to Only Bulls"}</Link<Route>>
            </div>
        </div>
    }
}
