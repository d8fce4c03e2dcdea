//! Skills section with progress bars that fill once on first view.
//!
//! SYSTEM CONTEXT
//! ==============
//! The whole `#skills` container is observed (30% visible). On first entry
//! the bars drop to 0% and, after a short delay, grow to the level declared
//! in each bar's `aria-valuenow`, letting the CSS width transition animate.

use leptos::prelude::*;

use crate::content::Skill;
use crate::state::reveal::{ProgressBarState, ProgressGroupState};

pub const SKILLS_SECTION_ID: &str = "skills";

#[component]
pub fn SkillsSection(skills: Vec<Skill>) -> impl IntoView {
    let bars = skills
        .iter()
        .map(|skill| ProgressBarState::new(skill.name.clone(), u8::try_from(skill.level).unwrap_or(100)))
        .collect::<Vec<_>>();
    let group = RwSignal::new(ProgressGroupState::new(bars.clone()));
    let container = NodeRef::<leptos::html::Section>::new();

    #[cfg(feature = "hydrate")]
    {
        use gloo_timers::callback::Timeout;

        use crate::state::reveal::{PROGRESS, PROGRESS_FILL_DELAY_MS};
        use crate::util::observer::observe_once;

        let installed = RwSignal::new(false);
        Effect::new(move || {
            if installed.get_untracked() {
                return;
            }
            let Some(element) = container.get() else {
                return;
            };
            installed.set(true);
            let start = move || {
                if group.try_update(ProgressGroupState::begin_fill).unwrap_or(false) {
                    Timeout::new(PROGRESS_FILL_DELAY_MS, move || group.update(ProgressGroupState::complete_fill))
                        .forget();
                }
            };
            if let Err(e) = observe_once(&element, PROGRESS, start) {
                leptos::logging::warn!("skills observer not installed: {e}");
            }
        });
    }

    view! {
        <section id=SKILLS_SECTION_ID class="section section--alt" node_ref=container>
            <div class="container">
                <h2 class="section-title">"Skills"</h2>
                <div class="skills-grid">
                    {bars
                        .into_iter()
                        .enumerate()
                        .map(|(index, bar)| {
                            let width = move || {
                                group.with(|g| g.bars.get(index).map(ProgressBarState::width_css).unwrap_or_default())
                            };
                            view! {
                                <div class="skill">
                                    <div class="skill__header">
                                        <span class="skill__name">{bar.label.clone()}</span>
                                        <span class="skill__level">{format!("{}%", bar.target)}</span>
                                    </div>
                                    <div class="progress">
                                        <div
                                            class="progress-bar"
                                            role="progressbar"
                                            aria-valuenow=bar.target.to_string()
                                            aria-valuemin="0"
                                            aria-valuemax="100"
                                            style:width=width
                                        ></div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
