//! The single portfolio page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Composes every section from the embedded `content` document and installs
//! the page-wide scroll watcher. Widgets never talk to each other: the
//! watcher writes `NavState`, the navbar reads it.
//!
//! TRADE-OFFS
//! ==========
//! Scroll and resize ticks are not throttled. Each tick re-reads every
//! section box, which is cheap for a handful of sections.

use leptos::prelude::*;

use crate::components::anchor_link::AnchorLink;
use crate::components::contact_form::ContactForm;
use crate::components::fade_in::FadeIn;
use crate::components::navbar::Navbar;
use crate::components::resume_button::ResumeButton;
use crate::components::skills::SkillsSection;
use crate::content::{self, ContactInfo, Owner, PortfolioContent, Project};
use crate::state::nav::NavState;

#[component]
pub fn HomePage() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    install_scroll_watcher(nav);

    match content::load() {
        Ok(content) => render_page(content).into_any(),
        Err(e) => {
            leptos::logging::warn!("portfolio content failed to load: {e}");
            view! {
                <main class="content-error" role="alert">
                    <h1>"This page could not be rendered"</h1>
                    <p>{e.to_string()}</p>
                </main>
            }
            .into_any()
        }
    }
}

fn render_page(content: PortfolioContent) -> impl IntoView {
    let PortfolioContent { owner, sections, skills, projects, contact } = content;
    let brand = owner.name.clone();
    let footer_name = owner.name.clone();
    let about = owner.about.clone();

    view! {
        <Navbar brand=brand sections=sections/>
        <main>
            <Hero owner=owner/>
            <About paragraphs=about/>
            <SkillsSection skills=skills/>
            <Projects projects=projects/>
            <Contact contact=contact/>
        </main>
        <footer class="footer">
            <div class="container">
                <p>{format!("\u{a9} {footer_name}")}</p>
            </div>
        </footer>
    }
}

#[component]
fn Hero(owner: Owner) -> impl IntoView {
    let Owner { name, title, tagline, resume_href, .. } = owner;

    view! {
        <section id="home" class="hero">
            <div class="container hero__inner">
                <h1 class="hero__title">{name}</h1>
                <p class="hero__subtitle">{title}</p>
                <p class="hero__tagline">{tagline}</p>
                <div class="hero__actions">
                    <AnchorLink href="#contact" class="btn btn-primary">
                        "Get in Touch"
                    </AnchorLink>
                    <ResumeButton href=resume_href.unwrap_or_default()/>
                </div>
            </div>
        </section>
    }
}

#[component]
fn About(paragraphs: Vec<String>) -> impl IntoView {
    view! {
        <section id="about" class="section">
            <div class="container">
                <FadeIn>
                    <h2 class="section-title">"About Me"</h2>
                    {paragraphs.into_iter().map(|text| view! { <p>{text}</p> }).collect_view()}
                </FadeIn>
            </div>
        </section>
    }
}

#[component]
fn Projects(projects: Vec<Project>) -> impl IntoView {
    view! {
        <section id="projects" class="section">
            <div class="container">
                <h2 class="section-title">"Projects"</h2>
                <div class="project-grid">
                    {projects.into_iter().map(|project| view! { <ProjectCard project=project/> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let Project { title, summary, tags, href } = project;
    let link = href.map(|href| {
        view! {
            <a class="project-card__link" href=href target="_blank" rel="noopener noreferrer">
                "View project"
            </a>
        }
    });

    view! {
        <FadeIn class="project-card">
            <h3 class="project-card__title">{title}</h3>
            <p class="project-card__summary">{summary}</p>
            <ul class="project-card__tags">
                {tags.into_iter().map(|tag| view! { <li class="tag">{tag}</li> }).collect_view()}
            </ul>
            {link}
        </FadeIn>
    }
}

#[component]
fn Contact(contact: ContactInfo) -> impl IntoView {
    let ContactInfo { email, location } = contact;
    let mailto = format!("mailto:{email}");

    view! {
        <section id="contact" class="section section--alt">
            <div class="container">
                <h2 class="section-title">"Contact"</h2>
                <FadeIn class="contact-details">
                    <p>
                        <i class="fas fa-envelope"></i>
                        " "
                        <a href=mailto>{email}</a>
                    </p>
                    {location.map(|place| view! {
                        <p>
                            <i class="fas fa-location-dot"></i>
                            " "
                            {place}
                        </p>
                    })}
                </FadeIn>
                <ContactForm/>
            </div>
        </section>
    }
}

/// Keep `NavState` in step with the viewport: once after mount, then on
/// every scroll and resize.
fn install_scroll_watcher(nav: RwSignal<NavState>) {
    #[cfg(feature = "hydrate")]
    {
        use leptos::ev;

        Effect::new(move || refresh_nav(nav));

        let on_scroll = window_event_listener(ev::scroll, move |_| refresh_nav(nav));
        let on_resize = window_event_listener(ev::resize, move |_| refresh_nav(nav));
        on_cleanup(move || {
            on_scroll.remove();
            on_resize.remove();
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = nav;
    }
}

#[cfg(feature = "hydrate")]
fn refresh_nav(nav: RwSignal<NavState>) {
    use crate::util::dom;

    let tick = || -> Result<(), crate::error::DomError> {
        let scroll_y = dom::scroll_y()?;
        let navbar_height = dom::navbar_height()?;
        let sections = dom::section_bounds()?;
        nav.update(|n| n.apply_scroll(scroll_y, navbar_height, &sections));
        Ok(())
    };
    if let Err(e) = tick() {
        leptos::logging::warn!("scroll watcher: {e}");
    }
}
