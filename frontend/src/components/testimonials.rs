use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{info, warn};
use yew::prelude::*;

use crate::config;
use crate::content::SiteContent;
use crate::controllers::{BrowserScheduler, Rotation, RotationTick};

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub content: Rc<SiteContent>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    Tick(RotationTick),
    Select(usize),
    Next,
    Previous,
    Settle,
}

/// Auto-rotating testimonial carousel. The first manual pick stops rotation
/// for the rest of the section's lifetime.
pub struct TestimonialsSection {
    rotation: Option<Rotation>,
    shown: usize,
    fading: bool,
    fade: Option<Timeout>,
}

/// Applies a carousel message to the rotation. Returns whether the active
/// testimonial changed. Picking the testimonial already on screen is a no-op
/// and keeps auto-advance running.
fn steer(rotation: &mut Rotation, msg: Msg) -> bool {
    match msg {
        Msg::Tick(tick) => rotation.tick(tick),
        Msg::Select(index) => {
            if index == rotation.active() {
                return false;
            }
            match rotation.select(index) {
                Ok(()) => {
                    info!("Testimonial {} picked, auto-advance off", index);
                    true
                }
                Err(e) => {
                    warn!("Testimonial selection ignored: {}", e);
                    false
                }
            }
        }
        Msg::Next => {
            rotation.next();
            true
        }
        Msg::Previous => {
            rotation.previous();
            true
        }
        Msg::Settle => false,
    }
}

impl TestimonialsSection {
    fn begin_fade(&mut self, ctx: &Context<Self>) -> bool {
        let link = ctx.link().clone();
        self.fading = true;
        self.fade = Some(Timeout::new(config::TESTIMONIAL_FADE_MS, move || {
            link.send_message(Msg::Settle);
        }));
        true
    }
}

impl Component for TestimonialsSection {
    type Message = Msg;
    type Properties = TestimonialsProps;

    fn create(ctx: &Context<Self>) -> Self {
        let len = ctx.props().content.testimonials.len();
        let rotation = match Rotation::new(len, Rc::new(BrowserScheduler)) {
            Ok(mut rotation) => {
                let notify = ctx.link().callback(Msg::Tick);
                rotation.start(config::TESTIMONIAL_INTERVAL_MS, move |tick| notify.emit(tick));
                Some(rotation)
            }
            Err(e) => {
                warn!("Testimonials carousel disabled: {}", e);
                None
            }
        };

        Self {
            rotation,
            shown: 0,
            fading: false,
            fade: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let Some(rotation) = self.rotation.as_mut() else {
            return false;
        };

        match msg {
            Msg::Settle => {
                self.shown = rotation.active();
                self.fading = false;
                self.fade = None;
                true
            }
            msg => {
                if steer(rotation, msg) {
                    self.begin_fade(ctx)
                } else {
                    false
                }
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(rotation) = self.rotation.as_mut() {
            rotation.stop();
        }
        self.fade = None;
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let testimonials = &ctx.props().content.testimonials;
        let (Some(rotation), Some(current)) = (self.rotation.as_ref(), testimonials.get(self.shown)) else {
            return html! {};
        };
        let link = ctx.link();

        html! {
            <section id="testimonials" class="testimonials-section">
                <div class="testimonials-glow"></div>
                <div class="section-inner">
                    <div class="section-heading">
                        <h2>{"What Clients & Teammates Say"}</h2>
                        <p>{"Real feedback from leaders, colleagues, and partners I've had the pleasure to work with."}</p>
                    </div>

                    <div class="testimonials-layout">
                        <div class="testimonial-selectors">
                            { for testimonials.iter().enumerate().map(|(i, t)| html! {
                                <button
                                    class={classes!("testimonial-selector", (rotation.active() == i).then(|| "active"))}
                                    onclick={link.callback(move |_| Msg::Select(i))}
                                >
                                    <div class="selector-name">{&t.name}</div>
                                    <div class="selector-role">{format!("{}, {}", t.role, t.company)}</div>
                                    <div class="selector-bar"></div>
                                </button>
                            }) }
                        </div>

                        <div class="testimonial-card">
                            <div class="testimonial-quote-mark">{"❝"}</div>
                            <div class={classes!("testimonial-body", self.fading.then(|| "fading"))}>
                                <blockquote>{format!("“{}”", current.quote)}</blockquote>
                                <div class="testimonial-author">
                                    <p class="author-name">{&current.name}</p>
                                    <p class="author-role">{format!("{}, {}", current.role, current.company)}</p>
                                </div>
                            </div>
                            <div class="testimonial-controls">
                                <button class="carousel-arrow" onclick={link.callback(|_| Msg::Previous)}>{"←"}</button>
                                <span class="carousel-position">{format!("{} / {}", rotation.active() + 1, rotation.len())}</span>
                                <button class="carousel-arrow" onclick={link.callback(|_| Msg::Next)}>{"→"}</button>
                            </div>
                        </div>
                    </div>
                </div>
                <style>
                    {r#"
                        .testimonials-section {
                            position: relative;
                            padding: 6rem 2rem;
                            overflow: hidden;
                        }
                        .testimonials-glow {
                            position: absolute;
                            inset: 0;
                            background: radial-gradient(ellipse at center, rgba(17, 24, 39, 0.4), #000 70%);
                            opacity: 0.7;
                        }
                        .testimonials-layout {
                            position: relative;
                            display: flex;
                            gap: 4rem;
                            max-width: 1100px;
                            margin: 0 auto;
                        }
                        .testimonial-selectors {
                            flex: 1;
                            display: flex;
                            flex-direction: column;
                            gap: 0.75rem;
                        }
                        .testimonial-selector {
                            position: relative;
                            overflow: hidden;
                            text-align: left;
                            padding: 1rem;
                            border-radius: 0.5rem;
                            border: 2px solid transparent;
                            background: rgba(31, 41, 55, 0.2);
                            color: inherit;
                            cursor: pointer;
                            transition: all 0.3s ease-in-out;
                        }
                        .testimonial-selector:hover {
                            background: rgba(31, 41, 55, 0.5);
                        }
                        .testimonial-selector.active {
                            border-color: #3b82f6;
                            background: rgba(59, 130, 246, 0.1);
                            box-shadow: 0 10px 25px rgba(59, 130, 246, 0.2);
                        }
                        .selector-name {
                            font-weight: 700;
                            font-size: 1.1rem;
                        }
                        .selector-role {
                            color: #9ca3af;
                            font-size: 0.85rem;
                        }
                        .selector-bar {
                            position: absolute;
                            left: 0;
                            top: 0;
                            height: 100%;
                            width: 4px;
                            background: #3b82f6;
                            transform: scaleY(0);
                            transition: transform 0.3s ease-in-out;
                        }
                        .testimonial-selector.active .selector-bar,
                        .testimonial-selector:hover .selector-bar {
                            transform: scaleY(1);
                        }
                        .testimonial-card {
                            flex: 2;
                            position: relative;
                            min-height: 300px;
                            display: flex;
                            flex-direction: column;
                            justify-content: center;
                            padding: 3rem;
                            border-radius: 1rem;
                            background: rgba(255, 255, 255, 0.05);
                            border: 1px solid rgba(255, 255, 255, 0.1);
                            backdrop-filter: blur(16px);
                        }
                        .testimonial-quote-mark {
                            position: absolute;
                            top: 1.5rem;
                            right: 2rem;
                            font-size: 6rem;
                            color: rgba(255, 255, 255, 0.05);
                        }
                        .testimonial-body {
                            transition: opacity 0.2s ease-in-out;
                        }
                        .testimonial-body.fading {
                            opacity: 0;
                        }
                        .testimonial-body blockquote {
                            margin: 0 0 2rem;
                            font-size: 1.4rem;
                            line-height: 1.6;
                            color: #e5e7eb;
                        }
                        .testimonial-author {
                            text-align: right;
                        }
                        .author-name {
                            font-weight: 700;
                            font-size: 1.2rem;
                            margin: 0;
                        }
                        .author-role {
                            color: #9ca3af;
                            margin: 0;
                        }
                        .testimonial-controls {
                            display: flex;
                            justify-content: center;
                            align-items: center;
                            gap: 1rem;
                            margin-top: 2rem;
                        }
                        .carousel-arrow {
                            background: rgba(255, 255, 255, 0.08);
                            border: 1px solid rgba(255, 255, 255, 0.15);
                            color: #fff;
                            width: 2.5rem;
                            height: 2.5rem;
                            border-radius: 50%;
                            cursor: pointer;
                        }
                        .carousel-position {
                            color: #9ca3af;
                            font-size: 0.85rem;
                        }
                        @media (max-width: 1024px) {
                            .testimonials-layout {
                                flex-direction: column;
                                gap: 2.5rem;
                            }
                        }
                    "#}
                </style>
            </section>
        }
    }
}
