use std::rc::Rc;

use chrono::Datelike;
use log::{debug, error};
use yew::prelude::*;

use crate::components::{
    case_studies::{section_key, CaseStudiesSection},
    contact::ContactSection,
    framework::FrameworkSection,
    gallery::GallerySection,
    hero::HeroSection,
    services::ServicesSection,
    testimonials::TestimonialsSection,
};
use crate::content::SiteContent;

#[derive(Properties, PartialEq)]
pub struct PortfolioProps {
    #[prop_or_default]
    pub expanded_case: Option<String>,
}

#[function_component(Portfolio)]
pub fn portfolio(props: &PortfolioProps) -> Html {
    let content = use_state(|| {
        SiteContent::load()
            .map(Rc::new)
            .map_err(|e| e.to_string())
    });

    let content = match &*content {
        Ok(content) => content.clone(),
        Err(e) => {
            error!("Failed to load site content: {}", e);
            return html! {
                <div class="content-error">
                    <h1>{"Something went wrong"}</h1>
                    <p>{"The portfolio content could not be loaded. Please try again later."}</p>
                </div>
            };
        }
    };
    debug!("Portfolio rendering with {} case studies", content.case_studies.len());

    let year = chrono::Local::now().year();

    html! {
        <div class="portfolio">
            <HeroSection content={content.clone()} />
            <ServicesSection content={content.clone()} />
            // Only keyed child of its wrapper, so the sibling list stays unkeyed
            <div class="case-studies-slot">
                <CaseStudiesSection
                    key={section_key(props.expanded_case.as_deref())}
                    content={content.clone()}
                    initially_expanded={props.expanded_case.clone()}
                />
            </div>
            <FrameworkSection content={content.clone()} />
            <TestimonialsSection content={content.clone()} />
            <GallerySection content={content.clone()} />
            <ContactSection content={content.clone()} />
            <footer class="site-footer">
                <p>{format!("© {} {}. All rights reserved.", year, content.hero.name)}</p>
            </footer>
            <style>
                {r#"
                    body {
                        margin: 0;
                        background: #000;
                        color: #fff;
                        font-family: 'Inter', system-ui, -apple-system, sans-serif;
                        scroll-behavior: smooth;
                    }
                    .portfolio section[id] {
                        scroll-margin-top: 5rem;
                    }
                    .section-inner {
                        position: relative;
                        max-width: 1280px;
                        margin: 0 auto;
                    }
                    .section-heading {
                        text-align: center;
                        max-width: 48rem;
                        margin: 0 auto 4rem;
                    }
                    .section-heading h2 {
                        font-size: 2.75rem;
                        font-weight: 800;
                        margin: 0 0 1.5rem;
                    }
                    .section-heading p {
                        color: #9ca3af;
                        font-size: 1.15rem;
                        line-height: 1.6;
                    }
                    .accent-blue { --accent: #3b82f6; }
                    .accent-yellow { --accent: #eab308; }
                    .accent-green { --accent: #10b981; }
                    .accent-red { --accent: #ef4444; }
                    .accent-purple { --accent: #8b5cf6; }
                    .accent-teal { --accent: #14b8a6; }
                    .accent-pink { --accent: #ec4899; }
                    .text-accent-blue { color: #3b82f6; }
                    .text-accent-yellow { color: #eab308; }
                    .text-accent-green { color: #10b981; }
                    .text-accent-red { color: #ef4444; }
                    .site-footer {
                        text-align: center;
                        padding: 2rem;
                        color: #6b7280;
                        border-top: 1px solid #1f2937;
                    }
                    .content-error {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        padding: 2rem;
                    }
                "#}
            </style>
        </div>
    }
}
