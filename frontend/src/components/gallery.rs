use std::rc::Rc;

use log::error;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::content::{Gallery, GalleryItem, SiteContent, ALL_CATEGORIES};
use crate::controllers::Disclosure;

const CARD_TAG_LIMIT: usize = 3;

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub content: Rc<SiteContent>,
}

/// Picks the filter to start with: the `?category=` search param when it
/// names a known category, otherwise "All".
pub fn initial_category(gallery: &Gallery, requested: Option<String>) -> String {
    requested
        .filter(|category| gallery.has_category(category))
        .unwrap_or_else(|| ALL_CATEGORIES.to_string())
}

#[function_component(GallerySection)]
pub fn gallery_section(props: &GalleryProps) -> Html {
    let gallery = &props.content.gallery;
    let requested = use_search_param("category".to_string());
    let category = use_state(|| initial_category(gallery, requested));
    let lightbox = use_state(|| Disclosure::new(gallery.items.iter().map(|item| item.id.clone())));

    let select_category = {
        let category = category.clone();
        Callback::from(move |name: String| category.set(name))
    };

    let open = {
        let lightbox = lightbox.clone();
        Callback::from(move |id: String| {
            if lightbox.is_expanded(&id) {
                return;
            }
            let mut next = (*lightbox).clone();
            match next.toggle(&id) {
                Ok(()) => lightbox.set(next),
                Err(e) => error!("Could not open screenshot: {}", e),
            }
        })
    };

    let close = {
        let lightbox = lightbox.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*lightbox).clone();
            next.collapse();
            lightbox.set(next);
        })
    };

    let selected: Option<&GalleryItem> = lightbox
        .expanded()
        .and_then(|id| gallery.items.iter().find(|item| &item.id == id));

    html! {
        <section id="gallery" class="gallery-section">
            <div class="section-inner">
                <div class="section-heading">
                    <h2>{"Campaign "}<span class="text-accent-blue">{"Screenshots"}</span></h2>
                    <p>{"Real campaign dashboards and performance screenshots from live Google Ads accounts and analytics platforms."}</p>
                </div>

                <div class="gallery-filters">
                    { for gallery.categories.iter().map(|name| {
                        let onclick = {
                            let select_category = select_category.clone();
                            let name = name.clone();
                            Callback::from(move |_: MouseEvent| select_category.emit(name.clone()))
                        };
                        html! {
                            <button
                                class={classes!("gallery-filter", (*category == *name).then(|| "active"))}
                                {onclick}
                            >
                                {name}
                            </button>
                        }
                    }) }
                </div>

                <div class="gallery-grid">
                    { for gallery.filtered(&category).map(|item| {
                        let onclick = {
                            let open = open.clone();
                            let id = item.id.clone();
                            Callback::from(move |_: MouseEvent| open.emit(id.clone()))
                        };
                        html! {
                            <div class="gallery-card" key={item.id.clone()}>
                                <div class="gallery-image">
                                    <img src={item.image.clone()} alt={item.title.clone()} loading="lazy" />
                                    <div class="gallery-overlay">
                                        <button class="gallery-zoom" {onclick}>{"🔍"}</button>
                                    </div>
                                    <span class="gallery-badge">{&item.category}</span>
                                </div>
                                <div class="gallery-body">
                                    <div class="gallery-date">{format!("📅 {}", item.date)}</div>
                                    <h3>{&item.title}</h3>
                                    <p>{&item.description}</p>
                                    <div class="gallery-tags">
                                        { for item.tags.iter().take(CARD_TAG_LIMIT).map(|tag| html! {
                                            <span class="gallery-tag">{tag}</span>
                                        }) }
                                    </div>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            </div>

            if let Some(item) = selected {
                <div class="lightbox">
                    <div class="lightbox-panel">
                        <div class="lightbox-header">
                            <div class="lightbox-title">
                                <h3>{&item.title}</h3>
                                <span class="lightbox-category">{&item.category}</span>
                            </div>
                            <button class="lightbox-close" onclick={close}>{"✕"}</button>
                        </div>
                        <div class="lightbox-content">
                            <img src={item.image.clone()} alt={item.title.clone()} />
                            <div class="gallery-date">{format!("📅 {}", item.date)}</div>
                            <p>{&item.description}</p>
                            <h4>{"🏷 Tags:"}</h4>
                            <div class="gallery-tags">
                                { for item.tags.iter().map(|tag| html! {
                                    <span class="lightbox-tag">{tag}</span>
                                }) }
                            </div>
                        </div>
                    </div>
                </div>
            }

            <style>
                {r#"
                    .gallery-section {
                        padding: 5rem 2rem;
                        background: rgba(17, 24, 39, 0.5);
                    }
                    .gallery-filters {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 1rem;
                        margin-bottom: 3rem;
                    }
                    .gallery-filter {
                        padding: 0.75rem 1.5rem;
                        border-radius: 999px;
                        border: 1px solid #4b5563;
                        background: #1f2937;
                        color: #d1d5db;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }
                    .gallery-filter.active {
                        background: #3b82f6;
                        border-color: #3b82f6;
                        color: #fff;
                        transform: scale(1.05);
                    }
                    .gallery-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                        max-width: 1280px;
                        margin: 0 auto;
                    }
                    .gallery-card {
                        border: 1px solid #374151;
                        border-radius: 0.75rem;
                        overflow: hidden;
                        background: rgba(31, 41, 55, 0.4);
                        transition: transform 0.3s ease;
                    }
                    .gallery-card:hover {
                        transform: scale(1.03);
                    }
                    .gallery-image {
                        position: relative;
                        overflow: hidden;
                    }
                    .gallery-image img {
                        width: 100%;
                        height: 12rem;
                        object-fit: cover;
                        display: block;
                    }
                    .gallery-overlay {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(0, 0, 0, 0.6);
                        opacity: 0;
                        transition: opacity 0.3s ease;
                    }
                    .gallery-card:hover .gallery-overlay {
                        opacity: 1;
                    }
                    .gallery-zoom {
                        font-size: 1.5rem;
                        background: rgba(255, 255, 255, 0.2);
                        border: none;
                        border-radius: 50%;
                        padding: 0.75rem;
                        cursor: pointer;
                    }
                    .gallery-badge {
                        position: absolute;
                        top: 1rem;
                        left: 1rem;
                        font-size: 0.75rem;
                        padding: 0.25rem 0.75rem;
                        border-radius: 999px;
                        background: rgba(59, 130, 246, 0.9);
                    }
                    .gallery-body {
                        padding: 1.5rem;
                    }
                    .gallery-date {
                        color: #9ca3af;
                        font-size: 0.85rem;
                    }
                    .gallery-tags {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                    }
                    .gallery-tag {
                        font-size: 0.75rem;
                        padding: 0.25rem 0.5rem;
                        border-radius: 0.375rem;
                        border: 1px solid rgba(75, 85, 99, 0.5);
                        background: rgba(55, 65, 81, 0.5);
                    }
                    .lightbox {
                        position: fixed;
                        inset: 0;
                        z-index: 50;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                        background: rgba(0, 0, 0, 0.9);
                        backdrop-filter: blur(4px);
                    }
                    .lightbox-panel {
                        max-width: 56rem;
                        width: 100%;
                        max-height: 90vh;
                        overflow-y: auto;
                        background: #1f2937;
                        border-radius: 1rem;
                    }
                    .lightbox-header {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 1.5rem;
                        border-bottom: 1px solid #374151;
                    }
                    .lightbox-title {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                    }
                    .lightbox-category, .lightbox-tag {
                        font-size: 0.85rem;
                        padding: 0.25rem 0.75rem;
                        border-radius: 999px;
                        background: rgba(59, 130, 246, 0.2);
                        color: #60a5fa;
                    }
                    .lightbox-close {
                        background: none;
                        border: none;
                        color: #9ca3af;
                        font-size: 1.5rem;
                        cursor: pointer;
                    }
                    .lightbox-content {
                        padding: 1.5rem;
                    }
                    .lightbox-content img {
                        width: 100%;
                        max-height: 24rem;
                        object-fit: contain;
                        border-radius: 0.5rem;
                        background: #111827;
                    }
                    @media (max-width: 1024px) {
                        .gallery-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                    @media (max-width: 640px) {
                        .gallery-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery() -> Gallery {
        SiteContent::load().unwrap().gallery
    }

    #[test]
    fn known_search_param_selects_category() {
        assert_eq!(initial_category(&gallery(), Some("Video Ads".into())), "Video Ads");
    }

    #[test]
    fn missing_or_unknown_search_param_falls_back_to_all() {
        assert_eq!(initial_category(&gallery(), None), ALL_CATEGORIES);
        assert_eq!(initial_category(&gallery(), Some("Billboards".into())), ALL_CATEGORIES);
    }

    #[test]
    fn lightbox_opens_one_screenshot_at_a_time() {
        let g = gallery();
        let mut lightbox = Disclosure::new(g.items.iter().map(|i| i.id.clone()));
        lightbox.toggle(&"2".to_string()).unwrap();
        lightbox.toggle(&"5".to_string()).unwrap();
        assert_eq!(lightbox.expanded().map(String::as_str), Some("5"));
        lightbox.collapse();
        assert_eq!(lightbox.expanded(), None);
    }
}
