//! 医師詳細モーダル
//!
//! 背景クリックまたは閉じるボタンで閉じる。

use crate::components::doctor_card::DoctorAvatar;
use doctor_finder_common::Doctor;
use leptos::prelude::*;

#[component]
pub fn DoctorModal<F>(doctor: Doctor, on_close: F) -> impl IntoView
where
    F: Fn() + Clone + Send + Sync + 'static,
{
    let on_backdrop = on_close.clone();
    let on_button = on_close;

    let specialties = doctor.speciality_names();
    let languages = (!doctor.languages.is_empty()).then(|| doctor.languages.join(", "));
    let modes = doctor
        .consultation_types()
        .iter()
        .map(|c| c.label())
        .collect::<Vec<_>>()
        .join(", ");
    let introduction = doctor.introduction().map(str::to_string);
    let clinic = doctor.clinic.clone();
    let address = doctor.clinic_address_line();

    view! {
        <div class="modal-backdrop" on:click=move |_| on_backdrop()>
            <div
                class="modal"
                data-testid="doctor-modal"
                on:click=|ev| ev.stop_propagation()
            >
                <button class="modal-close" aria-label="Close" on:click=move |_| on_button()>
                    "×"
                </button>

                <div class="modal-header">
                    <DoctorAvatar doctor=doctor.clone() size="lg" />
                    <div>
                        <h2>{doctor.name.clone()}</h2>
                        <p class="doctor-specialty">{specialties}</p>
                        <p class="doctor-experience">{doctor.experience.clone()}</p>
                    </div>
                </div>

                {introduction.map(|text| view! {
                    <section class="modal-section">
                        <h3>"About"</h3>
                        <p>{text}</p>
                    </section>
                })}

                <section class="modal-section">
                    <h3>"Consultation"</h3>
                    <p>"Fee: " {doctor.fees.clone()}</p>
                    <p>{if modes.is_empty() { "-".to_string() } else { modes }}</p>
                </section>

                {languages.map(|text| view! {
                    <section class="modal-section">
                        <h3>"Languages"</h3>
                        <p>{text}</p>
                    </section>
                })}

                {clinic.map(|clinic| view! {
                    <section class="modal-section">
                        <h3>"Clinic"</h3>
                        <p class="doctor-clinic">{clinic.name}</p>
                        {address.map(|line| view! { <p>{line}</p> })}
                        <p>{clinic.address.city}</p>
                    </section>
                })}
            </div>
        </div>
    }
}
