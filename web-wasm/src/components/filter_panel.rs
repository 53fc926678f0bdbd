//! フィルタパネル（診察方法・診療科・並び替え）

use doctor_finder_common::{
    specialty_test_id, ConsultationType, FilterPatch, FilterState, SortKey, SORT_OPTIONS,
};
use leptos::prelude::*;

#[component]
pub fn FilterPanel<F>(
    filters: Memo<FilterState>,
    specialties: Memo<Vec<String>>,
    on_filter_change: F,
) -> impl IntoView
where
    F: Fn(FilterPatch) + Clone + Send + Sync + 'static,
{
    let consultation_options = ConsultationType::ALL
        .into_iter()
        .map(|consultation| {
            let on_filter_change = on_filter_change.clone();
            let test_id = match consultation {
                ConsultationType::Video => "filter-video-consult",
                ConsultationType::Clinic => "filter-in-clinic",
            };
            view! {
                <label class="filter-option">
                    <input
                        type="radio"
                        name="consultation"
                        data-testid=test_id
                        prop:checked=move || {
                            filters.with(|f| f.consultation_type == Some(consultation))
                        }
                        on:click=move |_| {
                            let patch = filters.with_untracked(|f| f.toggle_consultation(consultation));
                            on_filter_change(patch);
                        }
                    />
                    <span>{consultation.label()}</span>
                </label>
            }
        })
        .collect_view();

    let sort_options = SORT_OPTIONS
        .iter()
        .map(|option| {
            let on_filter_change = on_filter_change.clone();
            let key = SortKey::from_token(option.value);
            view! {
                <label class="filter-option">
                    <input
                        type="radio"
                        name="sort"
                        data-testid=format!("sort-{}", option.value.replace('_', "-"))
                        prop:checked=move || filters.with(|f| key.is_some() && f.sort_by == key)
                        on:change=move |_| on_filter_change(FilterPatch::sort_by(key))
                    />
                    <span>{option.label}</span>
                </label>
            }
        })
        .collect_view();

    let on_specialty_change = on_filter_change;

    view! {
        <div class="filter-panel">
            <div class="filter-section">
                <h3 class="filter-header" data-testid="filter-header-sort">"Sort by"</h3>
                {sort_options}
            </div>

            <div class="filter-section">
                <h3 class="filter-header" data-testid="filter-header-moc">"Mode of consultation"</h3>
                {consultation_options}
            </div>

            <div class="filter-section">
                <h3 class="filter-header" data-testid="filter-header-speciality">"Specialities"</h3>
                <div class="specialty-list">
                    <For
                        each=move || specialties.get()
                        key=|specialty| specialty.clone()
                        children=move |specialty: String| {
                            let on_filter_change = on_specialty_change.clone();
                            let test_id = format!("filter-specialty-{}", specialty_test_id(&specialty));
                            let checked_name = specialty.clone();
                            let toggled_name = specialty.clone();
                            view! {
                                <label class="filter-option">
                                    <input
                                        type="checkbox"
                                        data-testid=test_id
                                        prop:checked=move || filters.with(|f| f.has_specialty(&checked_name))
                                        on:change=move |_| {
                                            let patch = filters.with_untracked(|f| f.toggle_specialty(&toggled_name));
                                            on_filter_change(patch);
                                        }
                                    />
                                    <span>{specialty}</span>
                                </label>
                            }
                        }
                    />
                </div>
            </div>
        </div>
    }
}
