use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;
use web_sys::MouseEvent;

use onlybulls_landing::config;

use crate::components::cta_button::{CtaButton, CtaSize, CtaVariant};
use crate::components::lazy_section::LazySection;
use crate::components::pricing_cta::PricingCta;
use crate::pages::faq::Faq;
use crate::Route;

const TESTIMONIAL_ROTATE_MS: u32 = 5000;

fn open_in_new_tab(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.open_with_url_and_target(url, "_blank") {
            log::warn!("Failed to open {}: {:?}", url, e);
        }
    }
}

fn loading_fallback(text: &'static str) -> Html {
    html! {
        <div class="section-loading">
            <div class="loading-pulse">{text}</div>
        </div>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let open_ios = Callback::from(|_: MouseEvent| open_in_new_tab(config::APP_STORE_URL));
    let open_android = Callback::from(|_: MouseEvent| open_in_new_tab(config::PLAY_STORE_URL));

    html! {
        <section class="hero">
            <div class="hero-glow hero-glow-right"></div>
            <div class="hero-glow hero-glow-left"></div>
            <div class="hero-content">
                <h1>{"Transform Your Trading Experience"}</h1>
                <p class="hero-subtitle">
                    {"24/7 AI Market Agent That Helps You "}
                    <span class="accent">{"Spot Opportunities"}</span>
                    {" & "}
                    <span class="accent-soft">{"Execute Trades Smarter"}</span>
                </p>
                <div class="hero-signals">
                    <span><i class="signal-dot pulsing"></i>{"24/7 Market Monitoring"}</span>
                    <span><i class="signal-dot"></i>{"AI-Powered Insights"}</span>
                    <span><i class="signal-dot"></i>{"Smart Trade Execution"}</span>
                </div>
                <div class="hero-buttons">
                    <CtaButton
                        variant={CtaVariant::Primary}
                        size={CtaSize::Lg}
                        analytics_label="Download iOS App"
                        analytics_location="hero"
                        onclick={open_ios}
                    >
                        {"Download for iOS"}
                    </CtaButton>
                    <CtaButton
                        variant={CtaVariant::Outline}
                        size={CtaSize::Lg}
                        analytics_label="Download Android App"
                        analytics_location="hero"
                        onclick={open_android}
                    >
                        {"Download for Android"}
                    </CtaButton>
                </div>
                <p class="hero-trust">{"Join 1,000+ traders already using AI to improve their performance"}</p>
            </div>
        </section>
    }
}

const BENEFITS: [(&str, &str); 4] = [
    (
        "Always-on market scanning",
        "Our AI continuously monitors market conditions, price movements, and trading opportunities across multiple assets, so you never miss a potential trade.",
    ),
    (
        "Contextualized alerts + recommendations",
        "Receive intelligent notifications with actionable insights tailored to your portfolio, risk tolerance, and trading strategy.",
    ),
    (
        "Personalized risk profiles and signal refinement",
        "AI learns from your trading patterns and preferences to provide increasingly personalized recommendations and risk management.",
    ),
    (
        "Automated trade execution",
        "Let AI execute trades based on your predefined strategies and risk parameters, removing emotion from your trading decisions.",
    ),
];

#[function_component(Benefits)]
fn benefits() -> Html {
    html! {
        <section class="benefits">
            <h2>{"Four Key Benefits That Transform Your Trading"}</h2>
            <p class="section-lead">
                {"Experience the power of AI-driven market intelligence with features designed to give you an edge."}
            </p>
            <div class="card-grid">
                { for BENEFITS.iter().map(|(title, description)| html! {
                    <div class="card">
                        <h3>{*title}</h3>
                        <p>{*description}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

const DECISION_FLOW: [(&str, &str); 4] = [
    ("Market Scan", "AI continuously monitors market conditions and identifies opportunities"),
    ("Analysis", "Deep analysis of technical indicators, sentiment, and risk factors"),
    ("Recommendation", "Personalized trading recommendations based on your risk profile"),
    ("Execution", "Optional automated execution or manual confirmation based on your preference"),
];

#[function_component(VisualDemo)]
fn visual_demo() -> Html {
    html! {
        <section class="demo">
            <h2>{"See Only Bulls in Action"}</h2>
            <p class="section-lead">
                {"Experience the clean, intuitive interface that makes complex market data easy to act on."}
            </p>
            <div class="demo-panels">
                <div class="card">
                    <h3>{"Clean Market Data Interface"}</h3>
                    <p>{"Professional-grade market analysis made simple and accessible"}</p>
                </div>
                <div class="card">
                    <h3>{"Smart Mobile Alerts"}</h3>
                    <p>{"Get contextual notifications with actionable insights wherever you are"}</p>
                </div>
            </div>
            <h3 class="flow-title">{"AI-Powered Decision Flow"}</h3>
            <ol class="decision-flow">
                { for DECISION_FLOW.iter().enumerate().map(|(i, (title, description))| html! {
                    <li class="flow-step">
                        <span class="flow-number">{(i + 1).to_string()}</span>
                        <h4>{*title}</h4>
                        <p>{*description}</p>
                    </li>
                }) }
            </ol>
        </section>
    }
}

struct Testimonial {
    quote: &'static str,
    author: &'static str,
    title: &'static str,
    company: Option<&'static str>,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "Only Bulls has completely transformed how I approach trading. The AI insights are incredibly accurate, and I've seen a 40% improvement in my portfolio performance since I started using it.",
        author: "Sarah Chen",
        title: "Day Trader",
        company: Some("Independent"),
    },
    Testimonial {
        quote: "As someone who was constantly stressed about missing opportunities, the 24/7 monitoring gives me peace of mind. The alerts are spot-on and have helped me catch several profitable trades I would have missed.",
        author: "Michael Rodriguez",
        title: "Portfolio Manager",
        company: Some("Hedge Fund"),
    },
    Testimonial {
        quote: "The personalized risk management is a game-changer. The AI learned my trading style quickly and now provides recommendations that perfectly match my risk tolerance. Highly recommended!",
        author: "Jennifer Park",
        title: "Retail Investor",
        company: None,
    },
];

const USER_STATS: [(&str, &str, &str); 3] = [
    ("1,200+", "Active Users", "Traders using AI insights daily"),
    ("35%", "Avg. Performance Boost", "Improvement in portfolio returns"),
    ("50K+", "Trades Analyzed", "Market opportunities identified"),
];

const SECURITY_BADGES: [(&str, &str); 3] = [
    ("SSL Encrypted", "256-bit SSL encryption"),
    ("SOC 2 Compliant", "Enterprise security standards"),
    ("GDPR Compliant", "Privacy protection guaranteed"),
];

fn rotate(current: usize, step: isize, len: usize) -> usize {
    (current as isize + step).rem_euclid(len as isize) as usize
}

#[function_component(SocialProof)]
fn social_proof() -> Html {
    let current = use_state(|| 0usize);

    {
        let current = current.clone();
        use_interval(
            move || current.set(rotate(*current, 1, TESTIMONIALS.len())),
            TESTIMONIAL_ROTATE_MS,
        );
    }

    let step = |delta: isize| {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| current.set(rotate(*current, delta, TESTIMONIALS.len())))
    };

    let testimonial = &TESTIMONIALS[*current];
    let attribution = match testimonial.company {
        Some(company) => format!("{}, {}", testimonial.title, company),
        None => testimonial.title.to_string(),
    };

    html! {
        <section class="social-proof">
            <h2>{"Trusted by Traders Worldwide"}</h2>
            <p class="section-lead">
                {"Join thousands of traders who have transformed their trading with AI-powered insights."}
            </p>
            <div class="stats-row">
                { for USER_STATS.iter().map(|(value, label, description)| html! {
                    <div class="stat">
                        <div class="stat-value">{*value}</div>
                        <div class="stat-label">{*label}</div>
                        <p>{*description}</p>
                    </div>
                }) }
            </div>

            <h3>{"What Our Users Say"}</h3>
            <div class="testimonial">
                <button class="testimonial-nav" aria-label="Previous testimonial" onclick={step(-1)}>{"‹"}</button>
                <blockquote>
                    <div class="stars">{"★★★★★"}</div>
                    <p>{format!("\"{}\"", testimonial.quote)}</p>
                    <footer>
                        <strong>{testimonial.author}</strong>
                        <span>{attribution}</span>
                    </footer>
                </blockquote>
                <button class="testimonial-nav" aria-label="Next testimonial" onclick={step(1)}>{"›"}</button>
            </div>

            <div class="badge-row">
                { for SECURITY_BADGES.iter().map(|(name, description)| html! {
                    <div class="badge">
                        <strong>{*name}</strong>
                        <span>{*description}</span>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(AppDownload)]
fn app_download() -> Html {
    html! {
        <section class="app-download">
            <h2>{"Get Only Bulls on Your Mobile Device"}</h2>
            <p class="section-lead">
                {"Take your AI-powered trading assistant with you wherever you go. Available now on iOS and Android."}
            </p>
            <div class="store-links">
                <a class="store-badge" href={config::APP_STORE_URL} target="_blank" rel="noopener noreferrer">
                    <small>{"Download on the"}</small>
                    <strong>{"App Store"}</strong>
                </a>
                <a class="store-badge" href={config::PLAY_STORE_URL} target="_blank" rel="noopener noreferrer">
                    <small>{"Get it on"}</small>
                    <strong>{"Google Play"}</strong>
                </a>
            </div>
            <div class="download-features">
                <span>{"Available on iOS & Android"}</span>
                <span>{"Secure & Encrypted"}</span>
                <span>{"AI-Powered Trading"}</span>
            </div>
            <div class="partners">
                <span>{"Powered by "}<a href={config::AULT_NODES_URL} target="_blank" rel="noopener noreferrer">{"Ault Nodes"}</a></span>
                <span>{"A product by "}<a href={config::ASK_ROI_URL} target="_blank" rel="noopener noreferrer">{"AskROI.com"}</a></span>
            </div>
        </section>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="landing-page">
            <style>
            {r#".landing-page {
                min-height: 100vh;
                background: #000;
                color: #fff;
                padding-top: 4rem;
            }
            .hero {
                position: relative;
                min-height: 100vh;
                display: flex;
                align-items: center;
                justify-content: center;
                text-align: center;
                padding: 5rem 1.5rem;
                overflow: hidden;
                background: linear-gradient(135deg, #000, #111827, #000);
            }
            .hero-glow {
                position: absolute;
                width: 20rem;
                height: 20rem;
                border-radius: 50%;
                filter: blur(64px);
                background: rgba(34, 197, 94, 0.1);
            }
            .hero-glow-right { top: -10rem; right: -10rem; }
            .hero-glow-left { bottom: -10rem; left: -10rem; }
            .hero-content {
                position: relative;
                max-width: 80rem;
            }
            .hero h1 {
                font-size: 4rem;
                font-weight: 700;
                line-height: 1.1;
                margin-bottom: 1.5rem;
            }
            .hero-subtitle {
                font-size: 1.5rem;
                color: #d1d5db;
                max-width: 56rem;
                margin: 0 auto 2rem;
            }
            .accent { color: #4ade80; }
            .accent-soft { color: #86efac; }
            .hero-signals, .hero-buttons, .stats-row, .badge-row, .store-links, .download-features, .partners {
                display: flex;
                flex-wrap: wrap;
                justify-content: center;
                gap: 1.5rem;
                margin-bottom: 2rem;
            }
            .hero-signals { color: #9ca3af; font-size: 0.9rem; }
            .signal-dot {
                display: inline-block;
                width: 0.5rem;
                height: 0.5rem;
                margin-right: 0.5rem;
                border-radius: 50%;
                background: #4ade80;
            }
            .signal-dot.pulsing { animation: pulse 2s infinite; }
            .hero-trust { color: #6b7280; font-size: 0.9rem; }
            .benefits, .demo, .social-proof, .app-download {
                padding: 5rem 1.5rem;
                text-align: center;
            }
            .benefits h2, .demo h2, .social-proof h2, .app-download h2 {
                font-size: 2.5rem;
                margin-bottom: 1rem;
            }
            .section-lead {
                color: #d1d5db;
                max-width: 48rem;
                margin: 0 auto 3rem;
            }
            .card-grid, .demo-panels {
                display: grid;
                grid-template-columns: repeat(2, 1fr);
                gap: 2rem;
                max-width: 72rem;
                margin: 0 auto;
            }
            .card, .flow-step, .stat, .badge, .store-badge {
                background: rgba(30, 30, 30, 0.7);
                border: 1px solid rgba(74, 222, 128, 0.2);
                border-radius: 16px;
                padding: 2rem;
                text-align: left;
            }
            .decision-flow {
                display: grid;
                grid-template-columns: repeat(4, 1fr);
                gap: 1.5rem;
                list-style: none;
                max-width: 72rem;
                margin: 2rem auto 0;
                padding: 0;
            }
            .flow-number, .stat-value {
                color: #4ade80;
                font-size: 2rem;
                font-weight: 700;
            }
            .testimonial {
                display: flex;
                align-items: center;
                justify-content: center;
                gap: 1rem;
                max-width: 56rem;
                margin: 2rem auto;
            }
            .testimonial blockquote { flex: 1; }
            .testimonial footer { display: flex; flex-direction: column; margin-top: 1rem; }
            .testimonial-nav {
                background: none;
                border: 1px solid rgba(255, 255, 255, 0.2);
                border-radius: 50%;
                color: #fff;
                width: 2.5rem;
                height: 2.5rem;
                cursor: pointer;
            }
            .stars { color: #facc15; }
            .store-badge { color: #fff; text-decoration: none; display: flex; flex-direction: column; }
            .partners a { color: #4ade80; }
            .section-loading {
                min-height: 100vh;
                display: flex;
                align-items: center;
                justify-content: center;
            }
            .loading-pulse {
                color: #6b7280;
                animation: pulse 2s infinite;
            }
            @keyframes pulse {
                0%, 100% { opacity: 1; }
                50% { opacity: 0.5; }
            }
            @media (max-width: 768px) {
                .hero h1 { font-size: 2.5rem; }
                .hero-subtitle { font-size: 1.1rem; }
                .card-grid, .demo-panels, .decision-flow {
                    grid-template-columns: 1fr;
                }
            }"#}
            </style>

            <Hero />

            <LazySection id="benefits" fallback={loading_fallback("Loading benefits...")}>
                <Benefits />
            </LazySection>

            <LazySection id="demo" fallback={loading_fallback("Loading demo...")}>
                <VisualDemo />
            </LazySection>

            <LazySection fallback={loading_fallback("Loading testimonials...")}>
                <SocialProof />
            </LazySection>

            <LazySection id="pricing" fallback={loading_fallback("Loading signup...")}>
                <PricingCta mode={config::signup_mode()} />
            </LazySection>

            <LazySection id="app-download" fallback={loading_fallback("Loading app downloads...")}>
                <AppDownload />
            </LazySection>

            <LazySection id="faq" fallback={loading_fallback("Loading FAQ...")}>
                <Faq />
            </LazySection>

            <footer class="landing-footer">
                <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
            </footer>
        </div>
    }
}
