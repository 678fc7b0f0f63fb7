use std::rc::Rc;

use web_sys::Element;
use yew::prelude::*;

use crate::config;
use crate::content::SiteContent;
use crate::controllers::{BrowserViewport, Intersection, Reveal, RevealOptions};

#[derive(Properties, PartialEq)]
pub struct FrameworkProps {
    pub content: Rc<SiteContent>,
}

pub enum Msg {
    Intersect(Intersection),
    Refresh,
}

fn step_key(index: usize) -> String {
    format!("step-{}", index)
}

/// PURE explainer. Header, step cards and callouts each fade up the first
/// time they scroll into view.
pub struct FrameworkSection {
    reveal: Reveal<BrowserViewport>,
    header_ref: NodeRef,
    step_refs: Vec<NodeRef>,
    result_ref: NodeRef,
    bonus_ref: NodeRef,
}

impl FrameworkSection {
    fn targets(&self) -> Vec<(String, &NodeRef)> {
        let mut targets = vec![("header".to_string(), &self.header_ref)];
        targets.extend(
            self.step_refs
                .iter()
                .enumerate()
                .map(|(i, node)| (step_key(i), node)),
        );
        targets.push(("result".to_string(), &self.result_ref));
        targets.push(("bonus".to_string(), &self.bonus_ref));
        targets
    }

    fn reveal_class(&self, key: &str) -> &'static str {
        if self.reveal.is_revealed(key) {
            "reveal is-visible"
        } else {
            "reveal"
        }
    }
}

impl Component for FrameworkSection {
    type Message = Msg;
    type Properties = FrameworkProps;

    fn create(ctx: &Context<Self>) -> Self {
        let steps = ctx.props().content.framework.steps.len();
        Self {
            reveal: Reveal::new(BrowserViewport),
            header_ref: NodeRef::default(),
            step_refs: (0..steps).map(|_| NodeRef::default()).collect(),
            result_ref: NodeRef::default(),
            bonus_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Intersect(event) => self.reveal.on_intersection(event),
            Msg::Refresh => true,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        let options = RevealOptions::new(
            config::FRAMEWORK_REVEAL_THRESHOLD,
            config::FRAMEWORK_REVEAL_MARGIN_PX,
        );
        let watched: Vec<(String, Element)> = self
            .targets()
            .into_iter()
            .filter_map(|(key, node)| node.cast::<Element>().map(|el| (key, el)))
            .collect();

        let mut revealed_now = false;
        for (key, element) in watched {
            let notify = ctx.link().callback(Msg::Intersect);
            self.reveal
                .watch(key.clone(), &element, options, move |event| notify.emit(event));
            revealed_now |= self.reveal.is_revealed(&key);
        }
        // Without an observer everything is revealed synchronously above.
        if revealed_now {
            ctx.link().send_message(Msg::Refresh);
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.reveal.unwatch_all();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let framework = &ctx.props().content.framework;

        html! {
            <section id="framework" class="framework-section">
                <div class="section-inner">
                    <div ref={self.header_ref.clone()} class={classes!("section-heading", self.reveal_class("header"))}>
                        <h2 aria-label={framework.title.clone()}>
                            {"The "}
                            <span class="text-accent-blue">{"P"}</span>
                            <span class="text-accent-yellow">{"U"}</span>
                            <span class="text-accent-green">{"R"}</span>
                            <span class="text-accent-red">{"E"}</span>
                            {" Framework"}
                        </h2>
                        <p class="framework-subtitle">{&framework.subtitle}</p>
                        <p>{&framework.intro}</p>
                    </div>

                    <div class="framework-grid">
                        { for framework.steps.iter().zip(self.step_refs.iter()).enumerate().map(|(i, (step, node))| html! {
                            <div
                                ref={node.clone()}
                                class={classes!("framework-step", step.accent.class(), self.reveal_class(&step_key(i)))}
                                style={format!("transition-delay: {}ms;", i * 150)}
                            >
                                <div class="framework-step-top">
                                    <span class="framework-letter">{&step.letter}</span>
                                </div>
                                <h3>{&step.title}</h3>
                                <p>{&step.description}</p>
                            </div>
                        }) }
                    </div>

                    <div class="framework-callouts">
                        <div ref={self.result_ref.clone()} class={classes!("callout", "accent-green", self.reveal_class("result"))}>
                            <div class="callout-icon">{"📈"}</div>
                            <div>
                                <h4>{&framework.result.title}</h4>
                                <p>{&framework.result.body}</p>
                            </div>
                        </div>
                        <div
                            ref={self.bonus_ref.clone()}
                            class={classes!("callout", "accent-yellow", self.reveal_class("bonus"))}
                            style="transition-delay: 200ms;"
                        >
                            <div class="callout-icon">{"💡"}</div>
                            <div>
                                <h4>{&framework.bonus.title}</h4>
                                <p>{&framework.bonus.body}</p>
                            </div>
                        </div>
                    </div>
                </div>
                <style>
                    {r#"
                        .framework-section {
                            padding: 6rem 2rem;
                        }
                        .reveal {
                            opacity: 0;
                            transform: translateY(2.5rem);
                            transition: opacity 0.7s ease-out, transform 0.7s ease-out;
                        }
                        .reveal.is-visible {
                            opacity: 1;
                            transform: translateY(0);
                        }
                        .framework-subtitle {
                            font-size: 1.25rem;
                            color: #d1d5db;
                        }
                        .framework-grid {
                            display: grid;
                            grid-template-columns: repeat(2, 1fr);
                            gap: 2rem;
                            max-width: 960px;
                            margin: 0 auto;
                        }
                        .framework-step {
                            padding: 2rem;
                            border-radius: 1rem;
                            border: 1px solid var(--accent);
                            background: rgba(255, 255, 255, 0.02);
                        }
                        .framework-step-top {
                            display: flex;
                            justify-content: flex-end;
                        }
                        .framework-letter {
                            font-size: 3.5rem;
                            font-weight: 800;
                            color: var(--accent);
                            opacity: 0.7;
                        }
                        .framework-callouts {
                            max-width: 960px;
                            margin: 5rem auto 0;
                            display: flex;
                            flex-direction: column;
                            gap: 2.5rem;
                        }
                        .callout {
                            display: flex;
                            gap: 2rem;
                            align-items: center;
                            padding: 2.5rem;
                            border-radius: 1rem;
                            border: 1px solid var(--accent);
                            transition-duration: 1s;
                        }
                        .callout-icon {
                            font-size: 2.5rem;
                        }
                        @media (max-width: 768px) {
                            .framework-grid {
                                grid-template-columns: 1fr;
                            }
                            .callout {
                                flex-direction: column;
                                text-align: center;
                            }
                        }
                    "#}
                </style>
            </section>
        }
    }
}
