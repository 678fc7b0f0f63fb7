use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::debug;
use web_sys::Element;
use yew::prelude::*;

use crate::config;
use crate::content::SiteContent;
use crate::controllers::count_up::whole_value;
use crate::controllers::{BrowserViewport, CountUp, Intersection, Reveal, RevealOptions};

const SECTION_KEY: &str = "services";

pub fn proficiency(percent: u32) -> &'static str {
    if percent >= 90 {
        "Expert Level"
    } else if percent >= 85 {
        "Advanced"
    } else {
        "Proficient"
    }
}

/// The bars animate once per mount, and only after the section has been seen.
fn claim_animation(revealed: bool, count: &mut CountUp) -> bool {
    revealed && count.begin()
}

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub content: Rc<SiteContent>,
}

pub enum Msg {
    Intersect(Intersection),
    Frame,
}

/// Skill bars fill once, the first time the section scrolls into view.
pub struct ServicesSection {
    section_ref: NodeRef,
    reveal: Reveal<BrowserViewport>,
    count: CountUp,
    progress: f64,
    animation: Option<Interval>,
}

impl ServicesSection {
    fn begin_count_up(&mut self, ctx: &Context<Self>) {
        if !claim_animation(self.reveal.is_revealed(SECTION_KEY), &mut self.count) {
            return;
        }
        debug!("Animating skill bars");
        let link = ctx.link().clone();
        let frame_ms = self.count.frame_interval_ms(config::COUNT_UP_DURATION_MS);
        self.animation = Some(Interval::new(frame_ms, move || {
            link.send_message(Msg::Frame);
        }));
    }
}

impl Component for ServicesSection {
    type Message = Msg;
    type Properties = ServicesProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            section_ref: NodeRef::default(),
            reveal: Reveal::new(BrowserViewport),
            count: CountUp::new(config::COUNT_UP_FRAMES),
            progress: 0.0,
            animation: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Intersect(event) => {
                if self.reveal.on_intersection(event) {
                    self.begin_count_up(ctx);
                    true
                } else {
                    false
                }
            }
            Msg::Frame => {
                self.progress = self.count.advance();
                if self.count.is_done() {
                    self.animation = None;
                }
                true
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        if let Some(section) = self.section_ref.cast::<Element>() {
            let notify = ctx.link().callback(Msg::Intersect);
            self.reveal.watch(
                SECTION_KEY,
                &section,
                RevealOptions::new(config::SERVICES_REVEAL_THRESHOLD, 0),
                move |event| notify.emit(event),
            );
        }
        // Sections revealed synchronously never get an intersection message
        self.begin_count_up(ctx);
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.reveal.unwatch_all();
        self.animation = None;
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let services = &ctx.props().content.services;
        let visible = self.reveal.is_revealed(SECTION_KEY);

        html! {
            <section id="services" class="services-section" ref={self.section_ref.clone()}>
                <div class="section-inner">
                    <div class="section-heading">
                        <h2>{"Core "}<span class="text-accent-blue">{"Expertise"}</span></h2>
                        <p>{&services.intro}</p>
                    </div>

                    <div class="skills-grid">
                        { for services.skills.iter().map(|skill| {
                            let shown = whole_value(skill.percentage, self.progress);
                            html! {
                                <div class={classes!("skill-card", skill.accent.class())}>
                                    <div class="skill-header">
                                        <h3>{&skill.name}</h3>
                                        <span class="skill-value">{format!("{}%", shown)}</span>
                                    </div>
                                    <div class="skill-track">
                                        <div class="skill-fill" style={format!("width: {}%;", shown)}></div>
                                        <div
                                            class="skill-glow"
                                            style={format!(
                                                "left: {}%; opacity: {};",
                                                shown.saturating_sub(5),
                                                if visible { 0.7 } else { 0.0 }
                                            )}
                                        ></div>
                                    </div>
                                    <div class="skill-level">{proficiency(shown)}</div>
                                </div>
                            }
                        }) }
                    </div>

                    <div class="highlight-grid">
                        { for services.highlights.iter().map(|highlight| html! {
                            <div class={classes!("highlight-card", highlight.accent.class())}>
                                <div class="highlight-value">{&highlight.value}</div>
                                <div class="highlight-label">{&highlight.label}</div>
                            </div>
                        }) }
                    </div>

                    <div class="platform-panel">
                        <h3>{"Google Marketing Platform Expertise"}</h3>
                        <div class="platform-grid">
                            { for services.platforms.iter().map(|platform| html! {
                                <div class={classes!("platform", platform.accent.class())}>
                                    <div class="platform-name">{&platform.name}</div>
                                    <div class="platform-note">{&platform.note}</div>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
                <style>
                    {r#"
                        .services-section {
                            padding: 5rem 2rem;
                            background: rgba(17, 24, 39, 0.5);
                        }
                        .skills-grid {
                            display: grid;
                            grid-template-columns: repeat(2, 1fr);
                            gap: 2rem;
                        }
                        .skill-card {
                            background: rgba(31, 41, 55, 0.3);
                            border: 1px solid #374151;
                            border-radius: 0.75rem;
                            padding: 1.5rem;
                            transition: transform 0.3s ease, border-color 0.3s ease;
                        }
                        .skill-card:hover {
                            transform: scale(1.03);
                            border-color: #4b5563;
                        }
                        .skill-header {
                            display: flex;
                            justify-content: space-between;
                            align-items: center;
                            margin-bottom: 1rem;
                        }
                        .skill-header h3 {
                            margin: 0;
                            font-size: 1.1rem;
                        }
                        .skill-value {
                            font-size: 1.5rem;
                            font-weight: 700;
                        }
                        .skill-track {
                            position: relative;
                            height: 12px;
                            background: #374151;
                            border-radius: 999px;
                            overflow: hidden;
                        }
                        .skill-fill {
                            height: 100%;
                            border-radius: 999px;
                            background: var(--accent);
                        }
                        .skill-glow {
                            position: absolute;
                            top: 0;
                            width: 24px;
                            height: 12px;
                            filter: blur(4px);
                            background: var(--accent);
                        }
                        .skill-level {
                            margin-top: 0.75rem;
                            color: #9ca3af;
                            font-size: 0.85rem;
                        }
                        .highlight-grid {
                            margin-top: 5rem;
                            display: grid;
                            grid-template-columns: repeat(4, 1fr);
                            gap: 1.5rem;
                        }
                        .highlight-card {
                            text-align: center;
                            background: rgba(31, 41, 55, 0.3);
                            border: 1px solid #374151;
                            border-radius: 0.75rem;
                            padding: 1.5rem;
                        }
                        .highlight-value {
                            font-size: 2rem;
                            font-weight: 700;
                            color: var(--accent);
                        }
                        .highlight-label {
                            color: #9ca3af;
                            font-size: 0.85rem;
                        }
                        .platform-panel {
                            margin-top: 4rem;
                            text-align: center;
                            border: 1px solid rgba(55, 65, 81, 0.5);
                            border-radius: 1rem;
                            padding: 2rem;
                            background: linear-gradient(90deg, rgba(59,130,246,0.1), rgba(16,185,129,0.1));
                        }
                        .platform-grid {
                            display: grid;
                            grid-template-columns: repeat(4, 1fr);
                            gap: 1rem;
                        }
                        .platform-name {
                            font-weight: 600;
                            color: var(--accent);
                        }
                        .platform-note {
                            color: #9ca3af;
                            font-size: 0.85rem;
                        }
                        @media (max-width: 900px) {
                            .skills-grid {
                                grid-template-columns: 1fr;
                            }
                            .highlight-grid, .platform-grid {
                                grid-template-columns: repeat(2, 1fr);
                            }
                        }
                    "#}
                </style>
            </section>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proficiency_bands() {
        assert_eq!(proficiency(94), "Expert Level");
        assert_eq!(proficiency(90), "Expert Level");
        assert_eq!(proficiency(89), "Advanced");
        assert_eq!(proficiency(85), "Advanced");
        assert_eq!(proficiency(84), "Proficient");
        assert_eq!(proficiency(0), "Proficient");
    }

    #[test]
    fn bars_wait_for_the_section_then_animate_once() {
        let mut count = CountUp::new(config::COUNT_UP_FRAMES);
        assert!(!claim_animation(false, &mut count));
        assert!(claim_animation(true, &mut count));
        assert!(!claim_animation(true, &mut count));

        while !count.is_done() {
            count.advance();
        }
        assert!(!claim_animation(true, &mut count));
    }
}
