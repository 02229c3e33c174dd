use std::rc::Rc;

use yew::prelude::*;
use web_sys::HtmlInputElement;

use onlybulls_landing::analytics;
use onlybulls_landing::lead::{
    Field, FormStatus, LeadFormController, LeadSubmitter, SignupMode, SimulatedSubmitter,
    SubmitError, SubmitRejected,
};

use super::cta_button::{CtaButton, CtaSize, CtaVariant};

pub struct ModeContent {
    pub headline: &'static str,
    pub subheadline: &'static str,
    pub cta_text: &'static str,
    pub value_props: [&'static str; 4],
    pub trust_signal: &'static str,
    pub confirmation: &'static str,
}

pub fn mode_content(mode: SignupMode) -> ModeContent {
    match mode {
        SignupMode::BetaAccess => ModeContent {
            headline: "Get Early Access to Only Bulls",
            subheadline: "Join our exclusive beta program and be among the first to experience AI-powered trading.",
            cta_text: "Request Beta Access",
            value_props: [
                "Exclusive early access to all features",
                "Direct feedback channel to our development team",
                "Special beta user pricing when we launch",
                "Priority support and onboarding",
            ],
            trust_signal: "Join 500+ beta testers already improving their trading",
            confirmation: "You're now on our beta access list. We'll be in touch soon!",
        },
        SignupMode::Waitlist => ModeContent {
            headline: "Join the Only Bulls Waitlist",
            subheadline: "Be the first to know when Only Bulls launches and secure your spot.",
            cta_text: "Join Waitlist",
            value_props: [
                "First access when we launch",
                "Exclusive launch pricing",
                "Weekly market insights while you wait",
                "No commitment required",
            ],
            trust_signal: "Over 2,000 traders already on the waitlist",
            confirmation: "You're on the list! We'll notify you as soon as Only Bulls launches.",
        },
        SignupMode::FreeTrial => ModeContent {
            headline: "Start Your Free Trial Today",
            subheadline: "Experience the power of AI-driven trading with no risk and no commitment.",
            cta_text: "Start Free Trial",
            value_props: [
                "14-day free trial, no credit card required",
                "Full access to all AI trading features",
                "Personal onboarding and setup assistance",
                "Cancel anytime, keep your insights",
            ],
            trust_signal: "Join 1,000+ traders already using AI to improve performance",
            confirmation: "We'll send you your trial access details shortly.",
        },
    }
}

pub enum PricingCtaMsg {
    SetField(Field, String),
    Submit,
    Settled(Result<(), SubmitError>),
}

#[derive(Properties, Clone)]
pub struct PricingCtaProps {
    #[prop_or_default]
    pub mode: SignupMode,
    /// Defaults to the simulated submitter.
    #[prop_or_default]
    pub submitter: Option<Rc<dyn LeadSubmitter>>,
    #[prop_or_default]
    pub class: Classes,
}

impl PartialEq for PricingCtaProps {
    fn eq(&self, other: &Self) -> bool {
        let same_submitter = match (&self.submitter, &other.submitter) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        self.mode == other.mode && same_submitter && self.class == other.class
    }
}

pub struct PricingCta {
    controller: LeadFormController,
}

impl PricingCta {
    fn input_callback(ctx: &Context<Self>, field: Field) -> Callback<InputEvent> {
        ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            PricingCtaMsg::SetField(field, input.value())
        })
    }

    fn field_error(&self, field: Field) -> Html {
        match self.controller.errors().get(field) {
            Some(message) => html! { <p class="field-error">{message}</p> },
            None => html! {},
        }
    }

    fn view_confirmation(&self, ctx: &Context<Self>) -> Html {
        let content = mode_content(self.controller.mode());
        html! {
            <section id="signup-form" class={classes!("pricing-cta", ctx.props().class.clone())}>
                <div class="pricing-confirmation">
                    <div class="confirmation-check">{"✓"}</div>
                    <h2>{"Thank You!"}</h2>
                    <p class="confirmation-text">{content.confirmation}</p>
                    <p class="confirmation-note">{"Check your email for next steps and important updates."}</p>
                </div>
            </section>
        }
    }
}

impl Component for PricingCta {
    type Message = PricingCtaMsg;
    type Properties = PricingCtaProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            controller: LeadFormController::new(ctx.props().mode, analytics::tracker()),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            PricingCtaMsg::SetField(field, value) => {
                self.controller.set_field(field, value);
                true
            }
            PricingCtaMsg::Submit => match self.controller.begin_submit() {
                Ok(lead) => {
                    let submission = match &ctx.props().submitter {
                        Some(submitter) => submitter.submit(lead),
                        None => SimulatedSubmitter::default().submit(lead),
                    };
                    ctx.link()
                        .send_future(async move { PricingCtaMsg::Settled(submission.await) });
                    true
                }
                Err(SubmitRejected::Invalid) => true,
                Err(SubmitRejected::Busy) => false,
            },
            PricingCtaMsg::Settled(result) => {
                self.controller.finish_submit(result);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.controller.status() == FormStatus::Submitted {
            return self.view_confirmation(ctx);
        }

        let content = mode_content(self.controller.mode());
        let form = self.controller.form();
        let submitting = self.controller.status() == FormStatus::Submitting;
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            PricingCtaMsg::Submit
        });

        html! {
            <section id="signup-form" class={classes!("pricing-cta", ctx.props().class.clone())}>
                <style>
                {r#".pricing-cta {
                    padding: 5rem 1.5rem;
                    background: #0b0f0c;
                }
                .pricing-cta h2 {
                    font-size: 2.5rem;
                    text-align: center;
                    background: linear-gradient(90deg, #4ade80, #10b981, #84cc16);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .pricing-card-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    max-width: 960px;
                    margin: 3rem auto 0;
                    border-radius: 16px;
                    overflow: hidden;
                    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.3);
                }
                .pricing-value {
                    background: linear-gradient(135deg, #16a34a, #047857);
                    padding: 3rem;
                    color: #f0fdf4;
                }
                .pricing-form {
                    background: #fff;
                    padding: 3rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .pricing-form label {
                    color: #374151;
                    font-size: 0.9rem;
                    font-weight: 500;
                }
                .pricing-form input {
                    width: 100%;
                    padding: 0.75rem 1rem;
                    border: 1px solid #d1d5db;
                    border-radius: 8px;
                }
                .field-error {
                    color: #dc2626;
                    font-size: 0.85rem;
                    margin-top: 0.25rem;
                }
                .privacy-note {
                    color: #6b7280;
                    font-size: 0.75rem;
                    text-align: center;
                }
                @media (max-width: 768px) {
                    .pricing-card-grid {
                        grid-template-columns: 1fr;
                    }
                }"#}
                </style>
                <h2>{content.headline}</h2>
                <p class="pricing-subheadline">{content.subheadline}</p>

                <div class="pricing-card-grid">
                    <div class="pricing-value">
                        <h3>{"What You Get"}</h3>
                        <ul class="value-props">
                            { for content.value_props.iter().map(|prop| html! { <li>{"✓ "}{*prop}</li> }) }
                        </ul>
                        <div class="trust-signals">
                            <p>{content.trust_signal}</p>
                            <p>{"Your data is secure and never shared with third parties"}</p>
                        </div>
                    </div>

                    <form class="pricing-form" {onsubmit} novalidate=true>
                        <div>
                            <label for="email">{"Email Address *"}</label>
                            <input
                                type="email"
                                id="email"
                                placeholder="your.email@example.com"
                                value={form.email.clone()}
                                oninput={Self::input_callback(ctx, Field::Email)}
                            />
                            { self.field_error(Field::Email) }
                        </div>
                        <div>
                            <label for="firstName">{"First Name *"}</label>
                            <input
                                type="text"
                                id="firstName"
                                placeholder="John"
                                value={form.first_name.clone()}
                                oninput={Self::input_callback(ctx, Field::FirstName)}
                            />
                            { self.field_error(Field::FirstName) }
                        </div>
                        <div>
                            <label for="lastName">{"Last Name"}</label>
                            <input
                                type="text"
                                id="lastName"
                                placeholder="Doe"
                                value={form.last_name.clone()}
                                oninput={Self::input_callback(ctx, Field::LastName)}
                            />
                        </div>

                        <CtaButton
                            button_type="submit"
                            variant={CtaVariant::Primary}
                            size={CtaSize::Lg}
                            full_width=true
                            loading={submitting}
                            analytics_label={content.cta_text}
                            analytics_location="pricing-form"
                        >
                            {content.cta_text}
                        </CtaButton>

                        <p class="privacy-note">
                            {"By submitting this form, you agree to receive marketing communications from Only Bulls. We respect your privacy and will never share your information with third parties. You can unsubscribe at any time. "}
                            <a href="/privacy">{"Privacy Policy"}</a>
                        </p>
                    </form>
                </div>
            </section>
        }
    }
}
