//! 医師一覧（読み込み中・0件の表示を含む）

use crate::components::doctor_card::DoctorCard;
use doctor_finder_common::Doctor;
use leptos::prelude::*;

#[component]
pub fn DoctorList(doctors: Memo<Vec<Doctor>>, loading: Memo<bool>) -> impl IntoView {
    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! {
                <div class="loading" data-testid="loading">
                    <div class="spinner"></div>
                </div>
            }
        >
            <Show
                when=move || !doctors.with(Vec::is_empty)
                fallback=|| view! {
                    <div class="empty-state" data-testid="no-results">
                        <p>"No doctors found matching your criteria."</p>
                    </div>
                }
            >
                <div class="doctor-list">
                    <For
                        each=move || doctors.get()
                        key=|doctor| doctor.id.clone()
                        children=move |doctor: Doctor| view! { <DoctorCard doctor=doctor /> }
                    />
                </div>
            </Show>
        </Show>
    }
}
