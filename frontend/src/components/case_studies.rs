use std::rc::Rc;

use log::{error, warn};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::{CaseStudy, SiteContent};
use crate::controllers::Disclosure;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct CaseStudiesProps {
    pub content: Rc<SiteContent>,
    #[prop_or_default]
    pub initially_expanded: Option<String>,
}

/// Key for the section under a given deep link. `/` and each
/// `/case-studies/:id` reuse the same page component, so the section is keyed
/// per route to rebuild its disclosure on history navigation.
pub fn section_key(initially_expanded: Option<&str>) -> String {
    match initially_expanded {
        Some(id) => format!("case-studies:{}", id),
        None => "case-studies".to_string(),
    }
}

fn initial_disclosure(props: &CaseStudiesProps) -> Disclosure<String> {
    let ids = props.content.case_study_ids();
    match props.initially_expanded.clone() {
        Some(id) => Disclosure::with_expanded(ids.clone(), id).unwrap_or_else(|e| {
            warn!("Not pre-expanding case study: {}", e);
            Disclosure::new(ids)
        }),
        None => Disclosure::new(ids),
    }
}

#[function_component(CaseStudiesSection)]
pub fn case_studies_section(props: &CaseStudiesProps) -> Html {
    let disclosure = use_state(|| initial_disclosure(props));

    // Bring a deep-linked case study into view once on mount
    {
        let expanded = disclosure.expanded().cloned();
        use_effect_with_deps(
            move |_| {
                if let Some(id) = expanded {
                    if let Some(card) = web_sys::window()
                        .and_then(|w| w.document())
                        .and_then(|d| d.get_element_by_id(&card_anchor(&id)))
                    {
                        card.scroll_into_view();
                    }
                }
                || ()
            },
            (),
        );
    }

    let on_toggle = {
        let disclosure = disclosure.clone();
        Callback::from(move |id: String| {
            let mut next = (*disclosure).clone();
            match next.toggle(&id) {
                Ok(()) => disclosure.set(next),
                Err(e) => error!("Case study toggle failed: {}", e),
            }
        })
    };

    html! {
        <section id="case-studies" class="case-studies-section">
            <div class="section-inner">
                <div class="section-heading">
                    <h2>{"Case "}<span class="text-accent-green">{"Studies"}</span></h2>
                    <p>{"Multi-year growth stories, phase by phase."}</p>
                </div>
                <div class="case-list">
                    { for props.content.case_studies.iter().map(|study| html! {
                        <CaseCard
                            study={study.clone()}
                            expanded={disclosure.is_expanded(&study.id)}
                            on_toggle={on_toggle.clone()}
                        />
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .case-studies-section {
                        padding: 5rem 2rem;
                    }
                    .case-list {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                        max-width: 960px;
                        margin: 0 auto;
                    }
                    .case-card {
                        border: 1px solid #374151;
                        border-radius: 1rem;
                        background: rgba(31, 41, 55, 0.3);
                        overflow: hidden;
                        transition: border-color 0.3s ease;
                        scroll-margin-top: 6rem;
                    }
                    .case-card.open {
                        border-color: #3b82f6;
                    }
                    .case-toggle {
                        width: 100%;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        gap: 1rem;
                        padding: 1.5rem 2rem;
                        background: none;
                        border: none;
                        color: inherit;
                        text-align: left;
                        cursor: pointer;
                    }
                    .case-company {
                        font-size: 1.4rem;
                        font-weight: 700;
                    }
                    .case-period {
                        color: #9ca3af;
                        font-size: 0.85rem;
                    }
                    .case-headline {
                        color: #d1d5db;
                        margin-top: 0.5rem;
                    }
                    .case-chevron {
                        font-size: 1.5rem;
                        transition: transform 0.3s ease;
                    }
                    .case-card.open .case-chevron {
                        transform: rotate(180deg);
                    }
                    .case-body {
                        padding: 0 2rem 2rem;
                        color: #d1d5db;
                        line-height: 1.6;
                    }
                    .case-meta {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1rem;
                    }
                    .case-phase {
                        border-left: 3px solid #3b82f6;
                        padding-left: 1rem;
                        margin: 1.5rem 0;
                    }
                    .case-phase h4 {
                        margin: 0 0 0.25rem;
                        color: #fff;
                    }
                    .case-insight {
                        font-style: italic;
                        background: rgba(234, 179, 8, 0.08);
                        border: 1px solid rgba(234, 179, 8, 0.3);
                        border-radius: 0.75rem;
                        padding: 1rem 1.25rem;
                    }
                    .case-permalink {
                        color: #60a5fa;
                        font-size: 0.85rem;
                    }
                "#}
            </style>
        </section>
    }
}

pub fn card_anchor(id: &str) -> String {
    format!("case-{}", id)
}

#[derive(Properties, PartialEq)]
struct CaseCardProps {
    study: CaseStudy,
    expanded: bool,
    on_toggle: Callback<String>,
}

#[function_component(CaseCard)]
fn case_card(props: &CaseCardProps) -> Html {
    let study = &props.study;
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        let id = study.id.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(id.clone());
        })
    };

    html! {
        <article id={card_anchor(&study.id)} class={classes!("case-card", props.expanded.then(|| "open"))}>
            <button class="case-toggle" onclick={onclick} aria-expanded={props.expanded.to_string()}>
                <div>
                    <div class="case-company">{&study.company}</div>
                    <div class="case-period">{&study.period}</div>
                    <div class="case-headline">{&study.headline}</div>
                </div>
                <span class="case-chevron">{"⌄"}</span>
            </button>
            if props.expanded {
                <div class="case-body">
                    <div class="case-meta">
                        <div><strong>{"Client: "}</strong>{&study.client}</div>
                        <div><strong>{"Industry: "}</strong>{&study.industry}</div>
                    </div>
                    <h4>{"Strategic Overview"}</h4>
                    <p>{&study.overview}</p>
                    <h4>{"Objective"}</h4>
                    <p>{&study.objective}</p>
                    { for study.phases.iter().enumerate().map(|(i, phase)| html! {
                        <div class="case-phase">
                            <h4>
                                {format!("Phase {}: {}", i + 1, phase.title)}
                                if let Some(period) = &phase.period {
                                    <span class="case-period">{format!(" ({})", period)}</span>
                                }
                            </h4>
                            <p><strong>{"Challenge: "}</strong>{&phase.challenge}</p>
                            <ul>
                                { for phase.actions.iter().map(|action| html! { <li>{action}</li> }) }
                            </ul>
                            <p><strong>{"Result: "}</strong>{&phase.result}</p>
                        </div>
                    }) }
                    if let Some(insight) = &study.insight {
                        <p class="case-insight">{format!("“{}”", insight)}</p>
                    }
                    <h4>{"Outcome"}</h4>
                    <ul>
                        { for study.outcome.iter().map(|line| html! { <li>{line}</li> }) }
                    </ul>
                    <Link<Route> to={Route::CaseStudy { id: study.id.clone() }} classes="case-permalink">
                        {"Link to this case study"}
                    </Link<Route>>
                </div>
            }
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(initially_expanded: Option<&str>) -> CaseStudiesProps {
        CaseStudiesProps {
            content: Rc::new(SiteContent::load().unwrap()),
            initially_expanded: initially_expanded.map(str::to_string),
        }
    }

    #[test]
    fn starts_collapsed_without_deep_link() {
        assert_eq!(initial_disclosure(&props(None)).expanded(), None);
    }

    #[test]
    fn deep_link_pre_expands_the_case() {
        let d = initial_disclosure(&props(Some("shiv-naresh")));
        assert!(d.is_expanded(&"shiv-naresh".to_string()));
    }

    #[test]
    fn unknown_deep_link_falls_back_to_collapsed() {
        let d = initial_disclosure(&props(Some("does-not-exist")));
        assert_eq!(d.expanded(), None);
    }

    #[test]
    fn each_deep_link_gets_its_own_section_key() {
        let home = section_key(None);
        let matrix = section_key(Some("matrix-esim"));
        let shiv = section_key(Some("shiv-naresh"));
        assert_ne!(home, matrix);
        assert_ne!(matrix, shiv);
        assert_eq!(matrix, section_key(Some("matrix-esim")));
    }

    #[test]
    fn returning_to_a_deep_link_restores_its_case() {
        let mut visited = initial_disclosure(&props(Some("matrix-esim")));
        visited.toggle(&"shiv-naresh".to_string()).unwrap();
        assert!(visited.is_expanded(&"shiv-naresh".to_string()));

        // A new key remounts the section, which starts from the route again
        let rebuilt = initial_disclosure(&props(Some("matrix-esim")));
        assert!(rebuilt.is_expanded(&"matrix-esim".to_string()));
        assert!(!rebuilt.is_expanded(&"shiv-naresh".to_string()));
    }

    #[test]
    fn anchors_are_prefixed() {
        assert_eq!(card_anchor("matrix-esim"), "case-matrix-esim");
    }
}
