use yew::prelude::*;
use web_sys::MouseEvent;

pub struct FaqEntry {
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: [FaqEntry; 5] = [
    FaqEntry {
        id: "data-sources",
        question: "What data sources does OnlyBulls use?",
        answer: "OnlyBulls aggregates data from multiple premium sources including real-time market feeds, financial news APIs, social sentiment analysis, and technical indicators from major exchanges. Our AI processes over 10,000 data points per second to identify trading opportunities.",
    },
    FaqEntry {
        id: "security",
        question: "How secure is my financial information?",
        answer: "We use bank-level security with 256-bit SSL encryption for all data transmission. Your personal information is stored in secure, encrypted databases and never shared with third parties. We are SOC 2 compliant and follow strict data protection protocols.",
    },
    FaqEntry {
        id: "pricing",
        question: "How much does OnlyBulls cost?",
        answer: "OnlyBulls offers flexible pricing plans starting with a free tier that includes basic market alerts. Premium plans start at $29/month with advanced AI recommendations, real-time alerts, and portfolio optimization features.",
    },
    FaqEntry {
        id: "download",
        question: "Where can I download OnlyBulls?",
        answer: "OnlyBulls is available on both iOS and Android platforms. You can download it from the App Store or Google Play Store. We also offer a web-based dashboard for desktop users.",
    },
    FaqEntry {
        id: "brokerage-integration",
        question: "Does OnlyBulls integrate with my brokerage?",
        answer: "Yes, OnlyBulls integrates with major brokerages including TD Ameritrade, E*TRADE, Robinhood, Interactive Brokers, and more. We use secure API connections that never store your login credentials.",
    },
];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    id: AttrValue,
    question: AttrValue,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    let answer_id = format!("faq-answer-{}", props.id);

    html! {
        <div class={classes!("faq-item", (*is_open).then(|| "open"))}>
            <button
                class="faq-question"
                onclick={toggle}
                aria-expanded={(*is_open).to_string()}
                aria-controls={answer_id.clone()}
            >
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div id={answer_id} class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <section class="faq-section">
            <style>
            {r#".faq-section {
                padding: 5rem 1.5rem;
                background: #000;
                color: #fff;
            }
            .faq-section h2 {
                font-size: 2.75rem;
                text-align: center;
                background: linear-gradient(90deg, #22d3ee, #3b82f6, #9333ea);
                -webkit-background-clip: text;
                -webkit-text-fill-color: transparent;
            }
            .faq-intro {
                color: #d1d5db;
                max-width: 640px;
                margin: 1rem auto 3rem;
                text-align: center;
            }
            .faq-list {
                max-width: 56rem;
                margin: 0 auto;
            }
            .faq-item {
                border: 1px solid rgba(255, 255, 255, 0.1);
                border-radius: 12px;
                margin-bottom: 1rem;
                background: rgba(30, 30, 30, 0.7);
                overflow: hidden;
            }
            .faq-question {
                width: 100%;
                display: flex;
                justify-content: space-between;
                align-items: center;
                padding: 1.5rem;
                background: none;
                border: none;
                color: #fff;
                font-size: 1.1rem;
                text-align: left;
                cursor: pointer;
            }
            .faq-answer {
                max-height: 0;
                padding: 0 1.5rem;
                color: #d1d5db;
                transition: max-height 0.3s ease, padding 0.3s ease;
            }
            .faq-item.open .faq-answer {
                max-height: 500px;
                padding: 0 1.5rem 1.5rem;
            }"#}
            </style>
            <h2>{"Frequently Asked Questions"}</h2>
            <p class="faq-intro">
                {"Get answers to the most common questions about OnlyBulls and how our AI-powered trading platform works."}
            </p>
            <div class="faq-list">
                { for FAQS.iter().map(|entry| html! {
                    <FaqItem key={entry.id} id={entry.id} question={entry.question}>
                        <p>{entry.answer}</p>
                    </FaqItem>
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faq_ids_are_unique() {
        let mut ids: Vec<_> = FAQS.iter().map(|entry| entry.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), FAQS.len());
    }
}
