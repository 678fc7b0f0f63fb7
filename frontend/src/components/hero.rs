use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config;
use crate::content::SiteContent;
use crate::controllers::count_up::{decimal_value, CountUp};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub content: Rc<SiteContent>,
}

/// Eased progress of the hero counters, from 0.0 to 1.0 over the count-up
/// duration after mount.
#[hook]
fn use_count_up() -> f64 {
    let progress = use_state(|| 0.0_f64);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |_| {
                let mut count = CountUp::new(config::COUNT_UP_FRAMES);
                let frame_ms = count.frame_interval_ms(config::COUNT_UP_DURATION_MS);

                let interval_handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
                let interval_handle_clone = interval_handle.clone();

                let interval = Interval::new(frame_ms, move || {
                    progress.set(count.advance());
                    if count.is_done() {
                        interval_handle_clone.borrow_mut().take();
                    }
                });
                *interval_handle.borrow_mut() = Some(interval);

                move || {
                    interval_handle.borrow_mut().take();
                }
            },
            (),
        );
    }

    *progress
}

#[function_component(HeroSection)]
pub fn hero_section(props: &HeroProps) -> Html {
    let hero = &props.content.hero;
    let progress = use_count_up();

    html! {
        <section class="hero">
            <div class="hero-grid-bg"></div>
            <div class="hero-content">
                <div class="hero-copy">
                    <h1 class="hero-name">{&hero.name}</h1>
                    <p class="hero-headline">{&hero.headline}</p>
                    <blockquote class="hero-philosophy">{&hero.philosophy}</blockquote>
                    <div class="hero-cta-group">
                        <a href="#case-studies" class="hero-cta">{"View Case Studies →"}</a>
                        <a href={hero.resume_href.clone()} download="" class="hero-secondary">
                            {"Download Resume"}
                        </a>
                    </div>
                </div>

                <div class="hero-module">
                    <div class="snapshot">
                        <div class="snapshot-header">
                            <h3>{"Live Performance Snapshot"}</h3>
                            <span class="snapshot-live"><span class="pulse-dot"></span>{"Live Data"}</span>
                        </div>
                        <div class="snapshot-bars">
                            { for hero.snapshot_bars.iter().enumerate().map(|(i, height)| html! {
                                <div
                                    class="snapshot-bar"
                                    style={format!("height: {}%; animation-delay: {}ms;", height.min(&100), 500 + i * 50)}
                                ></div>
                            }) }
                        </div>
                    </div>
                    <div class="hero-stats">
                        { for hero.stats.iter().map(|stat| {
                            let value = decimal_value(stat.value, progress, stat.decimals);
                            html! {
                                <div class="hero-stat">
                                    <div class="hero-stat-value">
                                        {format!("{:.*}{}", stat.decimals as usize, value, stat.suffix)}
                                    </div>
                                    <div class="hero-stat-label">{&stat.label}</div>
                                </div>
                            }
                        }) }
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                        padding: 6rem 2rem 4rem;
                    }
                    .hero-grid-bg {
                        position: absolute;
                        inset: 0;
                        opacity: 0.3;
                        background-image: linear-gradient(rgba(255,255,255,0.03) 1px, transparent 1px),
                            linear-gradient(to right, rgba(255,255,255,0.03) 1px, transparent 1px);
                        background-size: 2rem 2rem;
                    }
                    .hero-content {
                        position: relative;
                        max-width: 1200px;
                        width: 100%;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                        align-items: center;
                        animation: heroFadeUp 0.6s ease-out both;
                    }
                    .hero-name {
                        font-size: 3.5rem;
                        font-weight: 800;
                        background: linear-gradient(90deg, #60a5fa, #34d399);
                        -webkit-background-clip: text;
                        color: transparent;
                        margin: 0 0 1rem;
                    }
                    .hero-headline {
                        font-size: 1.3rem;
                        color: #d1d5db;
                    }
                    .hero-philosophy {
                        border-left: 3px solid #3b82f6;
                        margin: 2rem 0;
                        padding-left: 1rem;
                        color: #e5e7eb;
                        font-style: italic;
                    }
                    .hero-cta-group {
                        display: flex;
                        gap: 1rem;
                        flex-wrap: wrap;
                    }
                    .hero-cta, .hero-secondary {
                        padding: 0.9rem 1.6rem;
                        border-radius: 0.6rem;
                        text-decoration: none;
                        font-weight: 600;
                    }
                    .hero-cta {
                        background: #3b82f6;
                        color: #fff;
                    }
                    .hero-secondary {
                        border: 1px solid #4b5563;
                        color: #e5e7eb;
                    }
                    .snapshot {
                        background: rgba(255,255,255,0.04);
                        border: 1px solid rgba(255,255,255,0.1);
                        border-radius: 1rem;
                        padding: 1.5rem;
                    }
                    .snapshot-header {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .snapshot-live {
                        color: #34d399;
                        font-size: 0.85rem;
                        display: flex;
                        align-items: center;
                        gap: 0.4rem;
                    }
                    .pulse-dot {
                        width: 8px;
                        height: 8px;
                        border-radius: 50%;
                        background: #34d399;
                        animation: pulse 1.5s infinite;
                    }
                    .snapshot-bars {
                        height: 160px;
                        display: flex;
                        align-items: flex-end;
                        gap: 6px;
                        margin-top: 1rem;
                    }
                    .snapshot-bar {
                        flex: 1;
                        background: linear-gradient(to top, #2563eb, #60a5fa);
                        border-radius: 4px 4px 0 0;
                        transform-origin: bottom;
                        animation: barGrow 1s ease-out both;
                    }
                    .hero-stats {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1rem;
                        margin-top: 1.5rem;
                    }
                    .hero-stat {
                        text-align: center;
                        background: rgba(255,255,255,0.03);
                        border-radius: 0.75rem;
                        padding: 1rem;
                    }
                    .hero-stat-value {
                        font-size: 2rem;
                        font-weight: 700;
                        color: #fff;
                    }
                    .hero-stat-label {
                        color: #9ca3af;
                        font-size: 0.85rem;
                    }
                    @keyframes barGrow {
                        from { transform: scaleY(0); }
                        to { transform: scaleY(1); }
                    }
                    @keyframes heroFadeUp {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @keyframes pulse {
                        0%, 100% { opacity: 1; }
                        50% { opacity: 0.3; }
                    }
                    @media (max-width: 900px) {
                        .hero-content {
                            grid-template-columns: 1fr;
                        }
                        .hero-name {
                            font-size: 2.5rem;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
